// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-request language selection.
//!
//! `?lang=` beats the `kitbag_lang` cookie, which beats `Accept-Language`.
//! An explicit `?lang=` is remembered in the cookie for a year.

use std::convert::Infallible;

use axum::{
	extract::{FromRequestParts, Request, State},
	http::{header, request::Parts, HeaderValue},
	middleware::Next,
	response::Response,
};
use kitbag_common_i18n::{resolve_locale, Locale, LocaleSource};
use kitbag_server_auth::{extract_cookie, preference_cookie};

use crate::api::AppState;

pub const LANG_COOKIE: &str = "kitbag_lang";
const LANG_COOKIE_MAX_AGE_SECS: i64 = 365 * 24 * 60 * 60;

/// The language the current request is served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestLocale(pub Locale);

impl<S> FromRequestParts<S> for RequestLocale
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(parts
			.extensions
			.get::<RequestLocale>()
			.copied()
			.unwrap_or_default())
	}
}

fn lang_param(query: Option<&str>) -> Option<String> {
	url::form_urlencoded::parse(query?.as_bytes())
		.find(|(key, _)| key == "lang")
		.map(|(_, value)| value.into_owned())
}

pub async fn locale_middleware(
	State(state): State<AppState>,
	mut request: Request,
	next: Next,
) -> Response {
	let query = lang_param(request.uri().query());
	let stored = extract_cookie(request.headers(), LANG_COOKIE);
	let accept_language = request
		.headers()
		.get(header::ACCEPT_LANGUAGE)
		.and_then(|v| v.to_str().ok());

	let (locale, source) = resolve_locale(query.as_deref(), stored.as_deref(), accept_language);
	tracing::trace!(%locale, ?source, "locale resolved");
	request.extensions_mut().insert(RequestLocale(locale));

	let mut response = next.run(request).await;

	if source == LocaleSource::Query {
		let cookie = preference_cookie(
			LANG_COOKIE,
			locale.as_str(),
			LANG_COOKIE_MAX_AGE_SECS,
			state.auth.secure_cookies,
		);
		if let Ok(value) = HeaderValue::from_str(&cookie) {
			response.headers_mut().append(header::SET_COOKIE, value);
		}
	}

	response
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lang_param_is_read_from_query() {
		assert_eq!(lang_param(Some("q=milan&lang=it")), Some("it".to_string()));
		assert_eq!(lang_param(Some("lang=%20en")), Some(" en".to_string()));
		assert_eq!(lang_param(Some("q=lang")), None);
		assert_eq!(lang_param(None), None);
	}
}
