// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Back-office payloads.

use kitbag_catalog_core::{AdminSort, CatalogFilter, FacetCounts, FacetTotal, Shirt};
use serde::{Deserialize, Serialize};

use crate::catalog::ImageResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
	pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
	pub ok: bool,
}

/// Query string of the dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
	pub q: Option<String>,
	pub brand: Option<String>,
	pub team: Option<String>,
	pub league: Option<String>,
	pub color: Option<String>,
	pub season: Option<String>,
	/// Garment type.
	#[serde(rename = "type")]
	pub garment_type: Option<String>,
	/// `chronological` (default), `reverse_chronological` or `newest`.
	pub sort: Option<String>,
}

impl DashboardQuery {
	pub fn filter(&self) -> CatalogFilter {
		CatalogFilter {
			q: self.q.clone(),
			brand: self.brand.clone(),
			team: self.team.clone(),
			league: self.league.clone(),
			color: self.color.clone(),
			season: self.season.clone(),
			garment_type: self.garment_type.clone(),
		}
	}

	pub fn sort(&self) -> AdminSort {
		AdminSort::parse(self.sort.as_deref())
	}
}

/// A shirt as the back-office sees it: raw fields plus images.
#[derive(Debug, Clone, Serialize)]
pub struct AdminShirtResponse {
	#[serde(flatten)]
	pub shirt: Shirt,
	/// English slug and public URL, for "view in shop" links.
	pub slug: String,
	pub url: String,
	pub cover_image_url: Option<String>,
	pub images: Vec<ImageResponse>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardOptions {
	pub brands: Vec<String>,
	pub leagues: Vec<String>,
	pub colors: Vec<String>,
	pub types: Vec<String>,
	/// Chronological.
	pub seasons: Vec<String>,
	pub teams: Vec<String>,
}

/// Shirt counts per value, over the whole inventory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardCounts {
	pub brands: FacetCounts,
	pub leagues: FacetCounts,
	pub colors: FacetCounts,
	pub types: FacetCounts,
	pub seasons: FacetCounts,
	pub teams: FacetCounts,
}

/// The same counts as sorted lists: most common first, seasons
/// chronologically.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardTotals {
	pub brands: Vec<FacetTotal>,
	pub leagues: Vec<FacetTotal>,
	pub colors: Vec<FacetTotal>,
	pub types: Vec<FacetTotal>,
	pub seasons: Vec<FacetTotal>,
	pub teams: Vec<FacetTotal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
	pub sort: AdminSort,
	pub filter: CatalogFilter,
	pub shirts: Vec<AdminShirtResponse>,
	pub options: DashboardOptions,
	pub counts: DashboardCounts,
	pub totals: DashboardTotals,
}

/// Choices for the add/edit form: defaults merged with what the catalog
/// already uses.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormOptionsResponse {
	pub brands: Vec<String>,
	pub leagues: Vec<String>,
	pub colors: Vec<String>,
	pub types: Vec<String>,
	pub variants: Vec<String>,
	pub sleeves: Vec<String>,
	pub national_teams: Vec<String>,
	pub statuses: Vec<String>,
}

/// Result of creating or editing a shirt.
#[derive(Debug, Clone, Serialize)]
pub struct ShirtSavedResponse {
	pub shirt: AdminShirtResponse,
	/// Set when an Italian description was wanted but could not be produced.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub translation_warning: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteImageResponse {
	pub ok: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}
