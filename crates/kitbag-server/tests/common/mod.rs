// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
	body::{to_bytes, Body},
	http::{header, Request, Response},
	Router,
};
use kitbag_catalog_core::{Shirt, ShirtDraft, ShirtStatus};
use kitbag_common_config::Secret;
use kitbag_server::{create_app_state, create_router, AppState, ServerConfig};
use kitbag_server_translate::{TranslationError, Translator};
use tempfile::TempDir;
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "forza-vintage";
pub const BOUNDARY: &str = "kitbag-test-boundary";

/// Translator that prefixes the text instead of calling OpenRouter.
pub struct FakeTranslator;

#[async_trait]
impl Translator for FakeTranslator {
	async fn translate_to_italian(&self, text: &str) -> Result<String, TranslationError> {
		Ok(format!("IT: {text}"))
	}
}

pub struct TestApp {
	pub router: Router,
	pub state: AppState,
	pub uploads: TempDir,
}

impl TestApp {
	pub async fn new() -> Self {
		Self::with_prefix("admin").await
	}

	pub async fn with_prefix(prefix: &str) -> Self {
		let uploads = TempDir::new().unwrap();
		let mut config = ServerConfig::default();
		config.uploads.dir = uploads.path().to_path_buf();
		config.auth.admin_prefix = prefix.to_string();
		config.auth.admin_password_hash =
			Some(Secret::new(kitbag_server_auth::hash_password(ADMIN_PASSWORD).unwrap()));
		config.contact.whatsapp_number = Some("+39 333 0000000".to_string());

		let pool = kitbag_server_db::testing::create_test_pool().await;
		let mut state = create_app_state(pool, &config);
		state.translator = Some(Arc::new(FakeTranslator));

		let router = create_router(state.clone(), config.uploads.max_request_bytes);
		Self {
			router,
			state,
			uploads,
		}
	}

	pub async fn send(&self, request: Request<Body>) -> Response<Body> {
		self.router.clone().oneshot(request).await.unwrap()
	}

	pub async fn get(&self, uri: &str) -> Response<Body> {
		self.send(Request::get(uri).body(Body::empty()).unwrap()).await
	}

	/// Log in and return the `Cookie` header value for later requests.
	pub async fn login(&self) -> String {
		let response = self
			.send(
				Request::post("/admin/login")
					.header(header::CONTENT_TYPE, "application/json")
					.body(Body::from(format!(r#"{{"password":"{ADMIN_PASSWORD}"}}"#)))
					.unwrap(),
			)
			.await;
		assert_eq!(response.status(), 200);
		let set_cookie = response
			.headers()
			.get(header::SET_COOKIE)
			.unwrap()
			.to_str()
			.unwrap();
		set_cookie.split(';').next().unwrap().to_string()
	}

	pub async fn insert_shirt(&self, draft: ShirtDraft) -> Shirt {
		self.state.shirts.create_shirt(&draft).await.unwrap()
	}
}

pub fn draft(team: &str, season: &str) -> ShirtDraft {
	ShirtDraft {
		brand: "Umbro".to_string(),
		team: team.to_string(),
		league: "Premier League".to_string(),
		size: "L".to_string(),
		color: "Red".to_string(),
		season: season.to_string(),
		variant: Some("Home".to_string()),
		..Default::default()
	}
}

pub fn with_status(mut draft: ShirtDraft, status: ShirtStatus) -> ShirtDraft {
	draft.status = status;
	draft
}

pub async fn json(response: Response<Body>) -> serde_json::Value {
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

/// A multipart body with text fields and `images` file parts.
pub fn multipart(fields: &[(&str, &str)], files: &[(&str, &[u8])]) -> Body {
	let mut body = Vec::new();
	for (name, value) in fields {
		body.extend_from_slice(
			format!(
				"--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
			)
			.as_bytes(),
		);
	}
	for (file_name, bytes) in files {
		body.extend_from_slice(
			format!(
				"--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"images\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
			)
			.as_bytes(),
		);
		body.extend_from_slice(bytes);
		body.extend_from_slice(b"\r\n");
	}
	body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
	Body::from(body)
}

pub fn multipart_request(uri: &str, cookie: &str, body: Body) -> Request<Body> {
	Request::post(uri)
		.header(header::COOKIE, cookie)
		.header(
			header::CONTENT_TYPE,
			format!("multipart/form-data; boundary={BOUNDARY}"),
		)
		.body(body)
		.unwrap()
}
