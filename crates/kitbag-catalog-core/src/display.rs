// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localized display strings and product slugs.
//!
//! Every function here is pure: the same shirt and locale always produce
//! the same string. Slugs are part of public URLs, so changes to
//! [`build_shirt_slug`] change every product link.

use std::borrow::Cow;

use kitbag_common_i18n::{
	color_label, feature_label, national_team_it, sleeve_label, slugify, type_label_or_shirt,
	Locale,
};
use serde::Serialize;

use crate::shirt::Shirt;

/// League names that mean "national teams" regardless of the flag.
const NATIONAL_LEAGUE_KEYS: &[&str] = &["nazionali", "nazionale", "national teams", "national team"];

/// The English spellings that Italian renders as `Nazionali`.
const ENGLISH_NATIONAL_KEYS: &[&str] = &["national teams", "national team"];

/// Team name for display. Italian shows national teams by their Italian name.
pub fn team_name_localized(shirt: &Shirt, locale: Locale) -> Cow<'_, str> {
	if locale.is_italian() && shirt.national_team {
		national_team_it(&shirt.team)
	} else {
		Cow::Borrowed(shirt.team.as_str())
	}
}

/// Competition (league) label for display.
///
/// National-team shirts read `National Team` in English. In Italian only the
/// English spellings are rewritten to `Nazionali`; club leagues never change.
pub fn competition_label_localized(shirt: &Shirt, locale: Locale) -> Cow<'_, str> {
	let key = shirt.league.trim().to_lowercase();
	let is_national = shirt.national_team || NATIONAL_LEAGUE_KEYS.contains(&key.as_str());

	match locale {
		Locale::En if is_national => Cow::Borrowed("National Team"),
		Locale::It if ENGLISH_NATIONAL_KEYS.contains(&key.as_str()) => Cow::Borrowed("Nazionali"),
		_ => Cow::Borrowed(shirt.league.as_str()),
	}
}

/// URL slug for a shirt in a locale.
///
/// Parts, in order, skipping empty ones: player name, sleeve label, team,
/// brand, raw kit variant, garment type (defaulting to shirt), competition,
/// colour, size, season, and `Player Issue` for player-issued shirts. If
/// nothing survives slugification the shirt id is used.
pub fn build_shirt_slug(shirt: &Shirt, locale: Locale) -> String {
	let mut parts: Vec<Cow<'_, str>> = Vec::with_capacity(11);

	if let Some(player) = &shirt.player_name {
		parts.push(Cow::Borrowed(player.as_str()));
	}
	if let Some(sleeves) = &shirt.sleeves {
		parts.push(sleeve_label(sleeves, locale));
	}
	parts.push(team_name_localized(shirt, locale));
	parts.push(Cow::Borrowed(shirt.brand.as_str()));
	if let Some(variant) = &shirt.variant {
		parts.push(Cow::Borrowed(variant.as_str()));
	}
	parts.push(type_label_or_shirt(shirt.garment_type.as_deref(), locale));
	parts.push(competition_label_localized(shirt, locale));
	parts.push(color_label(&shirt.color, locale));
	parts.push(Cow::Borrowed(shirt.size.as_str()));
	parts.push(Cow::Borrowed(shirt.season.as_str()));
	if shirt.player_issued {
		parts.push(Cow::Borrowed("Player Issue"));
	}

	let joined = parts
		.iter()
		.filter(|p| !p.is_empty())
		.map(|p| &**p)
		.collect::<Vec<_>>()
		.join(" ");

	let slug = slugify(&joined);
	if slug.is_empty() {
		shirt.id.to_string()
	} else {
		slug
	}
}

/// Card and page title: player, team, kit variant, garment type, season.
pub fn display_title(shirt: &Shirt, locale: Locale) -> String {
	let mut parts: Vec<Cow<'_, str>> = Vec::with_capacity(5);
	if let Some(player) = &shirt.player_name {
		parts.push(Cow::Borrowed(player.as_str()));
	}
	parts.push(team_name_localized(shirt, locale));
	if let Some(variant) = &shirt.variant {
		parts.push(feature_label(variant, locale));
	}
	parts.push(type_label_or_shirt(shirt.garment_type.as_deref(), locale));
	parts.push(Cow::Borrowed(shirt.season.as_str()));

	parts
		.iter()
		.map(|p| p.trim())
		.filter(|p| !p.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}

/// Description in the requested locale. Italian falls back to English when
/// no translation is stored.
pub fn localized_description(shirt: &Shirt, locale: Locale) -> Option<&str> {
	let english = shirt.description.as_deref().filter(|d| !d.trim().is_empty());
	if locale.is_italian() {
		if let Some(it) = shirt.description_it.as_deref().filter(|d| !d.trim().is_empty()) {
			return Some(it);
		}
	}
	english
}

/// All per-attribute labels a product card or page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShirtLabels {
	pub team: String,
	pub competition: String,
	pub variant: Option<String>,
	pub garment_type: String,
	pub sleeves: Option<String>,
	pub color: String,
}

impl ShirtLabels {
	pub fn for_shirt(shirt: &Shirt, locale: Locale) -> Self {
		Self {
			team: team_name_localized(shirt, locale).into_owned(),
			competition: competition_label_localized(shirt, locale).into_owned(),
			variant: shirt
				.variant
				.as_deref()
				.map(|v| feature_label(v, locale).into_owned()),
			garment_type: type_label_or_shirt(shirt.garment_type.as_deref(), locale).into_owned(),
			sleeves: shirt
				.sleeves
				.as_deref()
				.map(|s| sleeve_label(s, locale).into_owned()),
			color: color_label(&shirt.color, locale).into_owned(),
		}
	}
}
