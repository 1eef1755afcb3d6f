// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Storefront payloads.
//!
//! Everything a page needs is already localized: titles, labels and
//! descriptions are in the request's language.

use kitbag_catalog_core::{CatalogFilter, PublicSort, ShirtId, ShirtImageId, ShirtLabels};
use kitbag_common_i18n::Locale;
use serde::{Deserialize, Serialize};

/// Query string of `GET /catalog`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
	pub q: Option<String>,
	pub brand: Option<String>,
	pub team: Option<String>,
	pub league: Option<String>,
	pub color: Option<String>,
	pub season: Option<String>,
	/// `newest` (default) or `oldest`.
	pub sort: Option<String>,
	/// Language switch, handled by the locale middleware.
	pub lang: Option<String>,
}

impl CatalogQuery {
	pub fn filter(&self) -> CatalogFilter {
		CatalogFilter {
			q: self.q.clone(),
			brand: self.brand.clone(),
			team: self.team.clone(),
			league: self.league.clone(),
			color: self.color.clone(),
			season: self.season.clone(),
			garment_type: None,
		}
	}

	pub fn sort(&self) -> PublicSort {
		PublicSort::parse(self.sort.as_deref())
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
	pub id: ShirtImageId,
	pub url: String,
	pub is_cover: bool,
}

/// A shirt on a catalog grid.
#[derive(Debug, Clone, Serialize)]
pub struct ShirtCard {
	pub id: ShirtId,
	pub product_code: i64,
	pub slug: String,
	/// Canonical product page path.
	pub url: String,
	pub title: String,
	pub labels: ShirtLabels,
	pub player_name: Option<String>,
	pub brand: String,
	pub season: String,
	pub size: String,
	pub cover_image_url: Option<String>,
}

/// Storefront dropdown contents. Computed over the whole catalog, not the
/// current result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
	pub brands: Vec<String>,
	pub leagues: Vec<String>,
	pub colors: Vec<String>,
	pub seasons: Vec<String>,
}

/// Shop contact channels shown in the footer and on product pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
	pub whatsapp_number: Option<String>,
	pub instagram_handle: Option<String>,
	pub official_email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
	pub locale: Locale,
	pub sort: PublicSort,
	pub filter: CatalogFilter,
	pub shirts: Vec<ShirtCard>,
	pub options: FilterOptions,
	pub contact: ContactInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShirtDetailResponse {
	pub locale: Locale,
	#[serde(flatten)]
	pub card: ShirtCard,
	pub player_issued: bool,
	pub national_team: bool,
	/// In the request's language, falling back to English.
	pub description: Option<String>,
	pub images: Vec<ImageResponse>,
	pub contact: ContactInfo,
}
