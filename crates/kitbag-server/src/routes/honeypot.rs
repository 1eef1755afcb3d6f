// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::response::Redirect;
use axum::http::Uri;

/// Common admin-panel probe paths land back on the catalog.
pub async fn redirect_to_catalog(uri: Uri) -> Redirect {
	tracing::info!(path = %uri.path(), "admin probe redirected");
	Redirect::to("/catalog")
}
