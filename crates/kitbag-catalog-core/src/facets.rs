// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dashboard facet totals.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::season::season_sort_key;

/// Value to number of shirts carrying it.
pub type FacetCounts = BTreeMap<String, i64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetTotal {
	pub value: String,
	pub count: i64,
}

fn totals(counts: &FacetCounts) -> Vec<FacetTotal> {
	counts
		.iter()
		.map(|(value, count)| FacetTotal {
			value: value.clone(),
			count: *count,
		})
		.collect()
}

/// Most common first; ties broken by case-insensitive name.
pub fn facet_totals(counts: &FacetCounts) -> Vec<FacetTotal> {
	let mut out = totals(counts);
	out.sort_by(|a, b| {
		b.count
			.cmp(&a.count)
			.then_with(|| a.value.to_lowercase().cmp(&b.value.to_lowercase()))
	});
	out
}

/// Seasons in chronological order.
pub fn season_totals(counts: &FacetCounts) -> Vec<FacetTotal> {
	let mut out = totals(counts);
	out.sort_by_cached_key(|t| season_sort_key(&t.value));
	out
}

/// Option list for a filter dropdown: the values, sorted.
pub fn facet_values(counts: &FacetCounts) -> Vec<String> {
	// BTreeMap keys are already in byte order.
	counts.keys().cloned().collect()
}
