// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use kitbag_server_api::{HealthResponse, HealthStatus};

use crate::api::AppState;

async fn check_database(state: &AppState) -> HealthStatus {
	match sqlx::query("SELECT 1").execute(&state.pool).await {
		Ok(_) => HealthStatus::Healthy,
		Err(e) => {
			tracing::error!(error = %e, "health check: database unreachable");
			HealthStatus::Unhealthy
		}
	}
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let database = check_database(&state).await;

	let response = HealthResponse {
		status: database,
		version: crate::version::VERSION.to_string(),
		database,
		translation_configured: state.translator.is_some(),
	};

	let http_status = match database {
		HealthStatus::Healthy => StatusCode::OK,
		HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
	};

	(http_status, Json(response))
}
