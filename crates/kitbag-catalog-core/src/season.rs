// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Chronological ordering of free-text seasons.
//!
//! Seasons are typed by hand: `1998/99`, `1998-99`, `1998/1999`, `98/99` and
//! single years like `2003` all occur. [`season_sort_key`] turns any of them
//! into a key that sorts by starting year, then ending year. Anything that
//! does not look like a season sorts after every real season.

use std::cmp::Ordering;

/// Sort key for a season string. Compare keys, never the raw strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeasonKey {
	Years { start: i32, end: i32 },
	Unparsed(String),
}

impl Ord for SeasonKey {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(
				SeasonKey::Years { start: a, end: b },
				SeasonKey::Years { start: c, end: d },
			) => (a, b).cmp(&(c, d)),
			(SeasonKey::Years { .. }, SeasonKey::Unparsed(_)) => Ordering::Less,
			(SeasonKey::Unparsed(_), SeasonKey::Years { .. }) => Ordering::Greater,
			(SeasonKey::Unparsed(a), SeasonKey::Unparsed(b)) => a.cmp(b),
		}
	}
}

impl PartialOrd for SeasonKey {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Two-digit years from 50 up are 19xx, the rest 20xx.
fn expand_two_digit(yy: i32) -> i32 {
	if yy >= 50 {
		1900 + yy
	} else {
		2000 + yy
	}
}

fn parse_start(group: &str) -> Option<i32> {
	let n: i32 = group.parse().ok()?;
	match group.len() {
		4 => Some(n),
		2 => Some(expand_two_digit(n)),
		_ => None,
	}
}

/// End year relative to the start: `1999/00` ends in 2000.
fn parse_end(group: &str, start: i32) -> Option<i32> {
	let n: i32 = group.parse().ok()?;
	match group.len() {
		4 => Some(n),
		2 => {
			let mut end = start - start.rem_euclid(100) + n;
			if end < start {
				end += 100;
			}
			Some(end)
		}
		_ => None,
	}
}

pub fn season_sort_key(season: &str) -> SeasonKey {
	let trimmed = season.trim();
	let mut groups = trimmed
		.split(|c: char| !c.is_ascii_digit())
		.filter(|g| !g.is_empty());

	let parsed = groups.next().and_then(parse_start).map(|start| {
		let end = groups
			.next()
			.and_then(|g| parse_end(g, start))
			.unwrap_or(start);
		SeasonKey::Years { start, end }
	});

	parsed.unwrap_or_else(|| SeasonKey::Unparsed(trimmed.to_lowercase()))
}
