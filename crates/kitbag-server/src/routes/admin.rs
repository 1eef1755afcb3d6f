// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Back-office handlers.

use axum::{
	extract::{Multipart, Path, Query, State},
	http::{header, HeaderMap, HeaderValue, StatusCode},
	response::{IntoResponse, Redirect, Response},
	Json,
};
use chrono::Utc;
use kitbag_catalog_core::{
	defaults::{
		merge_options, DEFAULT_BRANDS, DEFAULT_COLORS, DEFAULT_LEAGUES, GARMENT_TYPES, KIT_VARIANTS,
		SLEEVE_CODES,
	},
	facet_totals, facet_values, image_file_name, next_image_index, season_totals, shirt_dir,
	sort_for_dashboard, Shirt, ShirtId, ShirtImageId, ShirtStatus,
};
use kitbag_common_i18n::NATIONAL_TEAMS;
use kitbag_server_api::{
	AdminShirtResponse, DashboardCounts, DashboardOptions, DashboardQuery, DashboardResponse,
	DashboardTotals, DeleteImageResponse, FormOptionsResponse, LoginRequest, ShirtSavedResponse,
	SuccessResponse,
};
use kitbag_server_auth::{
	check_admin_password, clear_cookie, extract_cookie, generate_session_token, hash_token,
	session_cookie, session_expiry, session_max_age_secs, AuthError,
};
use kitbag_server_db::FacetColumn;
use tracing::{info, instrument, warn};

use crate::admin_auth::RequireAdmin;
use crate::api::AppState;
use crate::error::ServerError;
use crate::shirt_form::{ShirtForm, UploadedFile};
use crate::translation::get_or_translate_description;
use crate::uploads;
use crate::views;

fn with_cookie(mut response: Response, cookie: &str) -> Result<Response, ServerError> {
	let value = HeaderValue::from_str(cookie)
		.map_err(|e| ServerError::Internal(format!("invalid cookie header: {e}")))?;
	response.headers_mut().append(header::SET_COOKIE, value);
	Ok(response)
}

/// POST /{prefix}/login
#[instrument(skip(state, payload))]
pub async fn login(
	State(state): State<AppState>,
	Json(payload): Json<LoginRequest>,
) -> Result<Response, ServerError> {
	match check_admin_password(&payload.password, state.auth.admin_password_hash.as_ref()) {
		Ok(()) => {}
		Err(AuthError::NotConfigured) => {
			warn!("admin login attempted but no password hash is configured");
			return Err(ServerError::Unauthorized("Invalid password".to_string()));
		}
		Err(e) => {
			warn!(error = %e, "admin login failed");
			return Err(ServerError::Unauthorized("Invalid password".to_string()));
		}
	}

	let token = generate_session_token();
	let session = state
		.sessions
		.create_session(&hash_token(&token), session_expiry(Utc::now()))
		.await?;
	info!(session_id = %session.id, "admin logged in");

	let cookie = session_cookie(
		&state.auth.session_cookie_name,
		&token,
		session_max_age_secs(),
		state.auth.secure_cookies,
	);
	with_cookie(Json(SuccessResponse { ok: true }).into_response(), &cookie)
}

/// GET|POST /{prefix}/logout
#[instrument(skip(state, headers))]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ServerError> {
	if let Some(token) = extract_cookie(&headers, &state.auth.session_cookie_name) {
		if state.sessions.delete_by_token_hash(&hash_token(&token)).await? {
			info!("admin logged out");
		}
	}

	with_cookie(
		Redirect::to("/catalog").into_response(),
		&clear_cookie(&state.auth.session_cookie_name),
	)
}

async fn admin_view(state: &AppState, shirt: Shirt) -> Result<AdminShirtResponse, ServerError> {
	let images = state.images.list_for_shirt(shirt.id).await?;
	Ok(views::admin_shirt(shirt, &images))
}

async fn load_shirt(state: &AppState, id: ShirtId) -> Result<Shirt, ServerError> {
	state
		.shirts
		.get_shirt(id)
		.await?
		.ok_or_else(|| ServerError::NotFound(format!("shirt {id}")))
}

/// GET /{prefix}/ and /{prefix}/dashboard
#[instrument(skip(state, _admin, query))]
pub async fn dashboard(
	State(state): State<AppState>,
	_admin: RequireAdmin,
	Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ServerError> {
	let filter = query.filter();
	let sort = query.sort();

	let mut shirts = state.shirts.list_admin(&filter).await?;
	sort_for_dashboard(&mut shirts, sort);

	let ids: Vec<ShirtId> = shirts.iter().map(|s| s.id).collect();
	let mut images = state.images.list_for_shirts(&ids).await?;
	let rows: Vec<_> = shirts
		.into_iter()
		.map(|shirt| {
			let own = images.remove(&shirt.id).unwrap_or_default();
			views::admin_shirt(shirt, &own)
		})
		.collect();

	let counts = DashboardCounts {
		brands: state.shirts.facet_counts(FacetColumn::Brand).await?,
		leagues: state.shirts.facet_counts(FacetColumn::League).await?,
		colors: state.shirts.facet_counts(FacetColumn::Color).await?,
		types: state.shirts.facet_counts(FacetColumn::GarmentType).await?,
		seasons: state.shirts.facet_counts(FacetColumn::Season).await?,
		teams: state.shirts.facet_counts(FacetColumn::Team).await?,
	};

	let totals = DashboardTotals {
		brands: facet_totals(&counts.brands),
		leagues: facet_totals(&counts.leagues),
		colors: facet_totals(&counts.colors),
		types: facet_totals(&counts.types),
		seasons: season_totals(&counts.seasons),
		teams: facet_totals(&counts.teams),
	};

	let options = DashboardOptions {
		brands: facet_values(&counts.brands),
		leagues: facet_values(&counts.leagues),
		colors: facet_values(&counts.colors),
		types: facet_values(&counts.types),
		seasons: totals.seasons.iter().map(|t| t.value.clone()).collect(),
		teams: facet_values(&counts.teams),
	};

	tracing::debug!(count = rows.len(), sort = sort.as_str(), "dashboard served");

	Ok(Json(DashboardResponse {
		sort,
		filter,
		shirts: rows,
		options,
		counts,
		totals,
	}))
}

/// GET /{prefix}/form-options
pub async fn form_options(
	State(state): State<AppState>,
	_admin: RequireAdmin,
) -> Result<Json<FormOptionsResponse>, ServerError> {
	let brands = state.shirts.distinct_values(FacetColumn::Brand).await?;
	let leagues = state.shirts.distinct_values(FacetColumn::League).await?;
	let colors = state.shirts.distinct_values(FacetColumn::Color).await?;
	let types = state.shirts.distinct_values(FacetColumn::GarmentType).await?;

	Ok(Json(FormOptionsResponse {
		brands: merge_options(DEFAULT_BRANDS, &brands),
		leagues: merge_options(DEFAULT_LEAGUES, &leagues),
		colors: merge_options(DEFAULT_COLORS, &colors),
		types: merge_options(GARMENT_TYPES, &types),
		variants: KIT_VARIANTS.iter().map(|s| s.to_string()).collect(),
		sleeves: SLEEVE_CODES.iter().map(|s| s.to_string()).collect(),
		national_teams: NATIONAL_TEAMS.iter().map(|s| s.to_string()).collect(),
		statuses: ShirtStatus::all().iter().map(|s| s.as_str().to_string()).collect(),
	}))
}

/// Store uploaded images in the shirt's folder. Each file is numbered
/// `first_index` plus its position in the form.
async fn save_images(
	state: &AppState,
	shirt: &Shirt,
	files: &[UploadedFile],
	first_index: u32,
	cover_index: Option<usize>,
) -> Result<(), ServerError> {
	let dir = shirt_dir(shirt);
	for file in files {
		let number = u32::try_from(file.index)
			.ok()
			.and_then(|i| first_index.checked_add(i))
			.ok_or_else(|| ServerError::BadRequest("Too many images".to_string()))?;
		let name = image_file_name(number, &file.file_name);
		let path = state.uploads.write(&dir, &name, &file.bytes).await?;
		state
			.images
			.add_image(shirt.id, &path, cover_index == Some(file.index))
			.await?;
	}
	if !files.is_empty() {
		info!(shirt_id = shirt.id, count = files.len(), dir = %dir, "images saved");
	}
	Ok(())
}

/// POST /{prefix}/new
#[instrument(skip(state, _admin, multipart))]
pub async fn create_shirt(
	State(state): State<AppState>,
	_admin: RequireAdmin,
	multipart: Multipart,
) -> Result<(StatusCode, Json<ShirtSavedResponse>), ServerError> {
	let form = ShirtForm::from_multipart(multipart).await?;
	let draft = form.draft()?;
	let cover_index = form.cover_index()?;

	let mut shirt = state.shirts.create_shirt(&draft).await?;
	info!(shirt_id = shirt.id, product_code = shirt.product_code, "shirt created");

	let translation = get_or_translate_description(&state, &mut shirt).await?;
	save_images(&state, &shirt, &form.files, 1, Some(cover_index)).await?;

	let response = ShirtSavedResponse {
		translation_warning: translation.warning(),
		shirt: admin_view(&state, shirt).await?,
	};
	Ok((StatusCode::CREATED, Json(response)))
}

/// GET /{prefix}/edit/{id}
pub async fn get_shirt(
	State(state): State<AppState>,
	_admin: RequireAdmin,
	Path(id): Path<ShirtId>,
) -> Result<Json<AdminShirtResponse>, ServerError> {
	let shirt = load_shirt(&state, id).await?;
	Ok(Json(admin_view(&state, shirt).await?))
}

/// POST /{prefix}/edit/{id}
///
/// The submitted Italian text replaces the stored one. When it is left empty
/// and there is an English description, a fresh translation is requested.
/// A change of league, brand, team or size moves the image folder.
#[instrument(skip(state, _admin, multipart))]
pub async fn update_shirt(
	State(state): State<AppState>,
	_admin: RequireAdmin,
	Path(id): Path<ShirtId>,
	multipart: Multipart,
) -> Result<Json<ShirtSavedResponse>, ServerError> {
	let form = ShirtForm::from_multipart(multipart).await?;
	let draft = form.draft()?;

	let old = load_shirt(&state, id).await?;
	let old_dir = shirt_dir(&old);

	let mut shirt = state.shirts.update_shirt(id, &draft).await?;
	info!(shirt_id = id, "shirt updated");

	let translation = get_or_translate_description(&state, &mut shirt).await?;

	let new_dir = shirt_dir(&shirt);
	if old_dir != new_dir && state.uploads.move_dir(&old_dir, &new_dir).await? {
		let rewritten = state.images.rewrite_paths(id, &new_dir).await?;
		info!(shirt_id = id, from = %old_dir, to = %new_dir, rewritten, "image folder moved");
	}

	if !form.files.is_empty() {
		let existing = state.uploads.file_names(&new_dir).await?;
		let next = next_image_index(existing.iter().map(String::as_str));
		save_images(&state, &shirt, &form.files, next, None).await?;
	}

	Ok(Json(ShirtSavedResponse {
		translation_warning: translation.warning(),
		shirt: admin_view(&state, shirt).await?,
	}))
}

/// POST /{prefix}/delete/{id}
#[instrument(skip(state, _admin))]
pub async fn delete_shirt(
	State(state): State<AppState>,
	_admin: RequireAdmin,
	Path(id): Path<ShirtId>,
) -> Result<Json<SuccessResponse>, ServerError> {
	let shirt = load_shirt(&state, id).await?;
	let images = state.images.list_for_shirt(id).await?;

	// All of a shirt's images share one folder.
	let folder = images
		.first()
		.and_then(|i| uploads::parent(&i.file_path))
		.map(str::to_string)
		.unwrap_or_else(|| shirt_dir(&shirt));
	state.uploads.remove_dir(&folder).await?;

	state.shirts.delete_shirt(id).await?;
	info!(shirt_id = id, folder = %folder, "shirt deleted");

	Ok(Json(SuccessResponse { ok: true }))
}

/// POST /{prefix}/delete_image/{id}
#[instrument(skip(state, _admin))]
pub async fn delete_image(
	State(state): State<AppState>,
	_admin: RequireAdmin,
	Path(id): Path<ShirtImageId>,
) -> Response {
	let failure = |status: StatusCode, error: String| {
		(status, Json(DeleteImageResponse { ok: false, error: Some(error) })).into_response()
	};

	let image = match state.images.get_image(id).await {
		Ok(Some(image)) => image,
		Ok(None) => return failure(StatusCode::NOT_FOUND, format!("Image {id} not found")),
		Err(e) => {
			tracing::error!(error = %e, image_id = id, "failed to load image");
			return failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
		}
	};

	if let Err(e) = state.uploads.remove_file(&image.file_path).await {
		tracing::error!(error = %e, image_id = id, "failed to delete image file");
		return failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
	}
	if let Err(e) = state.images.delete_image(id).await {
		tracing::error!(error = %e, image_id = id, "failed to delete image row");
		return failure(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
	}

	info!(image_id = id, shirt_id = image.shirt_id, "image deleted");
	Json(DeleteImageResponse { ok: true, error: None }).into_response()
}

/// POST /{prefix}/images/{id}/cover
#[instrument(skip(state, _admin))]
pub async fn set_cover(
	State(state): State<AppState>,
	_admin: RequireAdmin,
	Path(id): Path<ShirtImageId>,
) -> Result<Json<SuccessResponse>, ServerError> {
	let image = state.images.set_cover(id).await?;
	info!(image_id = id, shirt_id = image.shirt_id, "cover image changed");
	Ok(Json(SuccessResponse { ok: true }))
}
