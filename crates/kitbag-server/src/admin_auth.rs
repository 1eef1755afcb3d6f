// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Admin session extractor.

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::Utc;
use kitbag_server_auth::{extract_cookie, hash_token};
use kitbag_server_db::AdminSession;
use tracing::instrument;

use crate::api::AppState;
use crate::error::ServerError;

/// Extractor for back-office handlers: succeeds only with a live admin
/// session cookie, otherwise rejects with 401.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AdminSession);

impl FromRequestParts<AppState> for RequireAdmin {
	type Rejection = ServerError;

	#[instrument(name = "RequireAdmin::from_request_parts", skip_all)]
	async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
		let token = extract_cookie(&parts.headers, &state.auth.session_cookie_name)
			.ok_or_else(|| ServerError::Unauthorized("Authentication required".to_string()))?;

		match state.sessions.find_valid(&hash_token(&token), Utc::now()).await? {
			Some(session) => {
				tracing::debug!(session_id = %session.id, "admin session accepted");
				Ok(RequireAdmin(session))
			}
			None => Err(ServerError::Unauthorized(
				"Session expired or invalid".to_string(),
			)),
		}
	}
}
