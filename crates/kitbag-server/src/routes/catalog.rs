// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Storefront handlers.

use axum::{
	extract::{Path, Query, State},
	response::{IntoResponse, Redirect, Response},
	Json,
};
use kitbag_catalog_core::{build_shirt_slug, season_sort_key, Shirt, ShirtId, ShirtImage};
use kitbag_server_api::{CatalogQuery, CatalogResponse, FilterOptions, ShirtDetailResponse};
use kitbag_server_db::FacetColumn;
use tracing::instrument;

use crate::api::AppState;
use crate::error::ServerError;
use crate::locale::RequestLocale;
use crate::views;

async fn filter_options(state: &AppState) -> Result<FilterOptions, ServerError> {
	let mut seasons = state.shirts.distinct_values(FacetColumn::Season).await?;
	seasons.sort_by_cached_key(|s| season_sort_key(s));

	Ok(FilterOptions {
		brands: state.shirts.distinct_values(FacetColumn::Brand).await?,
		leagues: state.shirts.distinct_values(FacetColumn::League).await?,
		colors: state.shirts.distinct_values(FacetColumn::Color).await?,
		seasons,
	})
}

/// GET / and GET /catalog
#[instrument(skip(state, query))]
pub async fn catalog(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	Query(query): Query<CatalogQuery>,
) -> Result<Json<CatalogResponse>, ServerError> {
	let filter = query.filter().for_storefront();
	let sort = query.sort();
	let shirts = state.shirts.list_public(&filter, sort).await?;

	let ids: Vec<ShirtId> = shirts.iter().map(|s| s.id).collect();
	let images = state.images.list_for_shirts(&ids).await?;
	let cards: Vec<_> = shirts
		.iter()
		.map(|shirt| {
			let own = images.get(&shirt.id).map(Vec::as_slice).unwrap_or_default();
			views::shirt_card(shirt, own, locale)
		})
		.collect();

	tracing::debug!(count = cards.len(), %locale, "catalog served");

	Ok(Json(CatalogResponse {
		locale,
		sort,
		filter,
		shirts: cards,
		options: filter_options(&state).await?,
		contact: state.contact.clone(),
	}))
}

/// A shirt and its images. Sold and reserved shirts keep their pages.
async fn load_shirt(
	state: &AppState,
	id: ShirtId,
) -> Result<(Shirt, Vec<ShirtImage>), ServerError> {
	let shirt = state
		.shirts
		.get_shirt(id)
		.await?
		.ok_or_else(|| ServerError::NotFound(format!("shirt {id}")))?;
	let images = state.images.list_for_shirt(id).await?;
	Ok((shirt, images))
}

/// GET /shirt/{id}
#[instrument(skip(state))]
pub async fn shirt_detail(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	Path(id): Path<ShirtId>,
) -> Result<Json<ShirtDetailResponse>, ServerError> {
	let (shirt, images) = load_shirt(&state, id).await?;
	Ok(Json(views::shirt_detail(
		&shirt,
		&images,
		locale,
		state.contact.clone(),
	)))
}

/// GET /shirt/{id}/{slug}
///
/// Any slug other than the canonical one for the request's language
/// permanently redirects to the canonical URL.
#[instrument(skip(state))]
pub async fn shirt_detail_with_slug(
	State(state): State<AppState>,
	RequestLocale(locale): RequestLocale,
	Path((id, slug)): Path<(ShirtId, String)>,
) -> Result<Response, ServerError> {
	let (shirt, images) = load_shirt(&state, id).await?;

	let canonical = build_shirt_slug(&shirt, locale);
	if slug != canonical {
		tracing::debug!(requested = %slug, %canonical, "redirecting to canonical slug");
		return Ok(Redirect::permanent(&format!("/shirt/{id}/{canonical}")).into_response());
	}

	Ok(Json(views::shirt_detail(&shirt, &images, locale, state.contact.clone())).into_response())
}
