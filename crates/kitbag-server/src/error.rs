// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use kitbag_catalog_core::CatalogError;
use kitbag_server_api::ErrorResponse;
use kitbag_server_db::DbError;

use crate::uploads::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error("Database error: {0}")]
	Db(#[from] DbError),

	#[error("Storage error: {0}")]
	Storage(#[from] StorageError),

	#[error("Not found: {0}")]
	NotFound(String),

	#[error("Invalid request: {0}")]
	BadRequest(String),

	#[error("Unauthorized: {0}")]
	Unauthorized(String),

	#[error("Internal error: {0}")]
	Internal(String),
}

impl From<CatalogError> for ServerError {
	fn from(e: CatalogError) -> Self {
		ServerError::BadRequest(e.to_string())
	}
}

fn body(error: &str, message: impl Into<String>) -> ErrorResponse {
	ErrorResponse {
		error: error.to_string(),
		message: message.into(),
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error_response) = match &self {
			ServerError::Db(DbError::NotFound(what)) => (
				StatusCode::NOT_FOUND,
				body("not_found", format!("Not found: {what}")),
			),
			ServerError::Db(DbError::Conflict(msg)) => {
				(StatusCode::CONFLICT, body("conflict", msg.clone()))
			}
			ServerError::Db(e) => {
				tracing::error!(error = %e, "database error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					body("database_error", "A database error occurred"),
				)
			}
			ServerError::Storage(StorageError::InvalidPath(path)) => (
				StatusCode::BAD_REQUEST,
				body("invalid_path", format!("Invalid upload path: {path}")),
			),
			ServerError::Storage(e) => {
				tracing::error!(error = %e, "upload storage error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					body("storage_error", "Could not store the uploaded files"),
				)
			}
			ServerError::NotFound(what) => (
				StatusCode::NOT_FOUND,
				body("not_found", format!("Not found: {what}")),
			),
			ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, body("bad_request", msg.clone())),
			ServerError::Unauthorized(msg) => {
				tracing::debug!(reason = %msg, "unauthorized");
				(StatusCode::UNAUTHORIZED, body("unauthorized", msg.clone()))
			}
			ServerError::Internal(msg) => {
				tracing::error!(error = %msg, "internal error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					body("internal_error", "An internal error occurred"),
				)
			}
		};

		(status, Json(error_response)).into_response()
	}
}
