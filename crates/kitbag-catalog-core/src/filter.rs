// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog filters and sort orders.
//!
//! [`CatalogFilter`] is shared by the storefront and the dashboard; the
//! storage layer turns it into SQL. The sort enums parse leniently because
//! they come straight from query strings.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::season::season_sort_key;
use crate::shirt::Shirt;

/// Filter criteria. Blank strings count as "not filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
	/// Case-insensitive substring over team, brand, league and description.
	pub q: Option<String>,
	pub brand: Option<String>,
	/// Case-insensitive substring match.
	pub team: Option<String>,
	pub league: Option<String>,
	pub color: Option<String>,
	pub season: Option<String>,
	/// Dashboard only.
	pub garment_type: Option<String>,
}

fn clean(value: &Option<String>) -> Option<&str> {
	value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl CatalogFilter {
	pub fn q(&self) -> Option<&str> {
		clean(&self.q)
	}

	pub fn brand(&self) -> Option<&str> {
		clean(&self.brand)
	}

	pub fn team(&self) -> Option<&str> {
		clean(&self.team)
	}

	pub fn league(&self) -> Option<&str> {
		clean(&self.league)
	}

	pub fn color(&self) -> Option<&str> {
		clean(&self.color)
	}

	pub fn season(&self) -> Option<&str> {
		clean(&self.season)
	}

	pub fn garment_type(&self) -> Option<&str> {
		clean(&self.garment_type)
	}

	/// The same filter without the dashboard-only garment type.
	pub fn for_storefront(&self) -> Self {
		Self {
			garment_type: None,
			..self.clone()
		}
	}

	pub fn is_empty(&self) -> bool {
		self.q().is_none()
			&& self.brand().is_none()
			&& self.team().is_none()
			&& self.league().is_none()
			&& self.color().is_none()
			&& self.season().is_none()
			&& self.garment_type().is_none()
	}
}

/// Storefront ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicSort {
	#[default]
	Newest,
	Oldest,
	/// Any unrecognized value: insertion order.
	Unordered,
}

impl PublicSort {
	/// Missing means newest; any other value, including an empty one, means
	/// unordered.
	pub fn parse(value: Option<&str>) -> Self {
		match value {
			None | Some("newest") => Self::Newest,
			Some("oldest") => Self::Oldest,
			Some(_) => Self::Unordered,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Newest => "newest",
			Self::Oldest => "oldest",
			Self::Unordered => "unordered",
		}
	}
}

/// Dashboard ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminSort {
	/// Most recently added first.
	Newest,
	/// By season, then by date added. `oldest` is an alias.
	#[default]
	Chronological,
	ReverseChronological,
}

impl AdminSort {
	pub fn parse(value: Option<&str>) -> Self {
		match value.map(str::trim) {
			Some("newest") => Self::Newest,
			Some("reverse_chronological") => Self::ReverseChronological,
			_ => Self::Chronological,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Newest => "newest",
			Self::Chronological => "chronological",
			Self::ReverseChronological => "reverse_chronological",
		}
	}
}

fn created_or_min(created_at: Option<DateTime<Utc>>) -> DateTime<Utc> {
	created_at.unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn chronological(a: &Shirt, b: &Shirt) -> Ordering {
	season_sort_key(&a.season)
		.cmp(&season_sort_key(&b.season))
		.then_with(|| created_or_min(a.created_at).cmp(&created_or_min(b.created_at)))
}

/// Orders dashboard rows in place.
///
/// `ReverseChronological` is the exact reverse of `Chronological`, ties
/// included.
pub fn sort_for_dashboard(shirts: &mut [Shirt], sort: AdminSort) {
	match sort {
		AdminSort::Newest => {
			shirts.sort_by(|a, b| created_or_min(b.created_at).cmp(&created_or_min(a.created_at)))
		}
		AdminSort::Chronological => shirts.sort_by(chronological),
		AdminSort::ReverseChronological => {
			shirts.sort_by(chronological);
			shirts.reverse();
		}
	}
}
