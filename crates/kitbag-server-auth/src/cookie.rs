// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cookie header helpers.
//!
//! Cookies are always `Path=/`, `HttpOnly` and `SameSite=Lax`; `Secure` is
//! added when the server is configured for HTTPS.

use http::header::COOKIE;
use http::HeaderMap;

/// Value of the named cookie from the request's `Cookie` headers.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
	headers
		.get_all(COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.flat_map(|value| value.split(';'))
		.find_map(|cookie| {
			let (key, value) = cookie.trim().split_once('=')?;
			(key == name && !value.is_empty()).then(|| value.to_string())
		})
}

/// `Set-Cookie` value for the admin session.
pub fn session_cookie(name: &str, token: &str, max_age_secs: i64, secure: bool) -> String {
	let mut cookie = format!("{name}={token}; Path=/; Max-Age={max_age_secs}; HttpOnly; SameSite=Lax");
	if secure {
		cookie.push_str("; Secure");
	}
	cookie
}

/// `Set-Cookie` value that removes a cookie.
pub fn clear_cookie(name: &str) -> String {
	format!("{name}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value for a long-lived preference readable by the browser,
/// such as the chosen language.
pub fn preference_cookie(name: &str, value: &str, max_age_secs: i64, secure: bool) -> String {
	let mut cookie = format!("{name}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Lax");
	if secure {
		cookie.push_str("; Secure");
	}
	cookie
}
