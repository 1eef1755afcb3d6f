// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Suggested values for the admin shirt form.
//!
//! These seed the form's dropdowns. Values already in the catalog are merged
//! in by the server, so nothing here restricts what can be stored.

pub const DEFAULT_BRANDS: &[&str] = &[
	"Nike",
	"Adidas",
	"Puma",
	"Kappa",
	"Macron",
	"Joma",
	"Umbro",
	"New Balance",
	"Mizuno",
	"Castore",
	"Lotto",
	"Diadora",
];

pub const DEFAULT_LEAGUES: &[&str] = &[
	"Serie A",
	"Premier League",
	"La Liga",
	"Bundesliga",
	"Ligue 1",
	"Eredivisie",
	"Primeira Liga",
	"MLS",
	"Saudi Pro League",
	"Champions League",
	"Europa League",
	"Nazionali",
];

pub const DEFAULT_COLORS: &[&str] = &[
	"Black", "White", "Red", "Blue", "Yellow", "Green", "Purple", "Orange", "Grey", "Gold",
	"Silver", "Navy", "Burgundy",
];

pub const GARMENT_TYPES: &[&str] = &[
	"Shirt",
	"Training Top",
	"Polo Shirt",
	"T-Shirt",
	"Sweatshirt",
	"Hoodie",
	"Coat",
	"1/4 Zip",
	"Track Jacket",
	"Tracksuit",
	"Bottoms",
	"Shorts",
	"Gilet",
	"Vest",
	"Accessories",
];

pub const KIT_VARIANTS: &[&str] = &["Home", "Away", "Third", "Fourth", "Goalkeeper"];

pub const SLEEVE_CODES: &[&str] = &["L/S", "S/S"];

/// Merges catalog values into a default list: defaults first in their own
/// order, then unseen values sorted. Comparison ignores case.
pub fn merge_options(defaults: &[&str], existing: &[String]) -> Vec<String> {
	let mut out: Vec<String> = defaults.iter().map(|s| s.to_string()).collect();
	let mut extra: Vec<String> = existing
		.iter()
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.filter(|s| !out.iter().any(|d| d.eq_ignore_ascii_case(s)))
		.map(str::to_string)
		.collect();
	extra.sort_by_key(|s| s.to_lowercase());
	extra.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
	out.extend(extra);
	out
}
