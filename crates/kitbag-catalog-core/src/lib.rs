// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Kitbag shirt catalog.
//!
//! This crate holds everything about the catalog that does not need a
//! database or an HTTP stack:
//! - the [`Shirt`] and [`ShirtImage`] records and the admin [`ShirtDraft`]
//! - localized display strings and product slugs ([`display`])
//! - storefront and dashboard filters and sort orders ([`filter`])
//! - chronological season ordering ([`season_sort_key`])
//! - facet totals for the dashboard ([`facets`])
//! - where uploaded images live on disk ([`layout`])

pub mod defaults;
pub mod display;
pub mod error;
pub mod facets;
pub mod filter;
pub mod layout;
pub mod season;
pub mod shirt;

pub use display::{
	build_shirt_slug, competition_label_localized, display_title, localized_description,
	team_name_localized, ShirtLabels,
};
pub use error::{CatalogError, Result};
pub use facets::{facet_totals, facet_values, season_totals, FacetCounts, FacetTotal};
pub use filter::{sort_for_dashboard, AdminSort, CatalogFilter, PublicSort};
pub use layout::{image_file_name, next_image_index, secure_filename, shirt_dir};
pub use season::{season_sort_key, SeasonKey};
pub use shirt::{
	cover_image, normalize_description_it, Shirt, ShirtDraft, ShirtId, ShirtImage, ShirtImageId,
	ShirtStatus,
};

pub use kitbag_common_i18n::Locale;
