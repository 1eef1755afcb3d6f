// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router.

use std::sync::Arc;

use axum::{
	extract::DefaultBodyLimit,
	middleware,
	routing::{get, post},
	Router,
};
use kitbag_server_api::ContactInfo;
use kitbag_server_config::{AuthConfig, ServerConfig, TranslationConfig};
use kitbag_server_db::{AdminSessionRepository, ImageRepository, ShirtRepository};
use kitbag_server_translate::{OpenRouterClient, OpenRouterConfig, TranslationError, Translator};
use sqlx::sqlite::SqlitePool;
use tower_http::services::ServeDir;

use crate::locale::locale_middleware;
use crate::routes;
use crate::uploads::UploadStorage;

/// Paths that bounce obvious admin-panel probes back to the catalog.
pub const HONEYPOT_PATHS: &[&str] = &["/admin", "/login", "/wp-admin", "/administrator", "/manager"];

#[derive(Clone)]
pub struct AppState {
	pub pool: SqlitePool,
	pub shirts: Arc<ShirtRepository>,
	pub images: Arc<ImageRepository>,
	pub sessions: Arc<AdminSessionRepository>,
	pub uploads: Arc<UploadStorage>,
	/// `None` when no OpenRouter key and model are configured.
	pub translator: Option<Arc<dyn Translator>>,
	pub auth: AuthConfig,
	pub contact: ContactInfo,
}

/// Build the OpenRouter client from configuration.
///
/// # Errors
/// `NotConfigured` without both a key and a model.
pub fn build_translator(config: &TranslationConfig) -> Result<OpenRouterClient, TranslationError> {
	let mut client_config =
		OpenRouterConfig::from_parts(config.api_key.clone(), config.model.clone())?;
	client_config.site_url = config.site_url.clone();
	client_config.site_name = config.site_name.clone();
	client_config.base_url = config.base_url.clone();
	OpenRouterClient::new(client_config)
}

pub fn create_app_state(pool: SqlitePool, config: &ServerConfig) -> AppState {
	let translator: Option<Arc<dyn Translator>> = match build_translator(&config.translation) {
		Ok(client) => Some(Arc::new(client)),
		Err(TranslationError::NotConfigured(what)) => {
			tracing::warn!(missing = what, "translation disabled: Italian descriptions will not be generated");
			None
		}
		Err(e) => {
			tracing::error!(error = %e, "failed to build translation client");
			None
		}
	};

	AppState {
		shirts: Arc::new(ShirtRepository::new(pool.clone())),
		images: Arc::new(ImageRepository::new(pool.clone())),
		sessions: Arc::new(AdminSessionRepository::new(pool.clone())),
		pool,
		uploads: Arc::new(UploadStorage::new(config.uploads.dir.clone())),
		translator,
		auth: config.auth.clone(),
		contact: ContactInfo {
			whatsapp_number: config.contact.whatsapp_number.clone(),
			instagram_handle: config.contact.instagram_handle.clone(),
			official_email: config.contact.official_email.clone(),
		},
	}
}

fn admin_router() -> Router<AppState> {
	Router::new()
		.route("/login", post(routes::admin::login))
		.route("/logout", get(routes::admin::logout).post(routes::admin::logout))
		.route("/", get(routes::admin::dashboard))
		.route("/dashboard", get(routes::admin::dashboard))
		.route("/form-options", get(routes::admin::form_options))
		.route("/new", post(routes::admin::create_shirt))
		.route(
			"/edit/{id}",
			get(routes::admin::get_shirt).post(routes::admin::update_shirt),
		)
		.route("/delete/{id}", post(routes::admin::delete_shirt))
		.route("/delete_image/{id}", post(routes::admin::delete_image))
		.route("/images/{id}/cover", post(routes::admin::set_cover))
}

pub fn create_router(state: AppState, max_request_bytes: usize) -> Router {
	let admin_base = format!("/{}", state.auth.admin_prefix);

	let mut public = Router::new()
		.route("/", get(routes::catalog::catalog))
		.route("/catalog", get(routes::catalog::catalog))
		.route("/shirt/{id}", get(routes::catalog::shirt_detail))
		.route("/shirt/{id}/{slug}", get(routes::catalog::shirt_detail_with_slug))
		.route("/health", get(routes::health::health_check));

	for path in HONEYPOT_PATHS {
		// The real back-office wins when it lives at one of these paths.
		if *path != admin_base {
			public = public.route(path, get(routes::honeypot::redirect_to_catalog));
		}
	}

	let uploads = ServeDir::new(state.uploads.root());

	public
		.nest(&admin_base, admin_router())
		.nest_service("/uploads", uploads)
		.layer(middleware::from_fn_with_state(state.clone(), locale_middleware))
		.layer(DefaultBodyLimit::max(max_request_bytes))
		.with_state(state)
}
