// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Admin authentication configuration.

use kitbag_common_config::SecretString;
use serde::Deserialize;

const DEFAULT_ADMIN_PREFIX: &str = "admin";
const DEFAULT_COOKIE_NAME: &str = "kitbag_session";
const DEFAULT_ENVIRONMENT: &str = "development";

/// Authentication configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct AuthConfig {
	/// Argon2 PHC hash of the admin password. Without it nobody can log in.
	pub admin_password_hash: Option<SecretString>,
	/// Path segment the back-office is mounted under, without slashes.
	pub admin_prefix: String,
	pub session_cookie_name: String,
	pub secure_cookies: bool,
	pub environment: String,
}

impl AuthConfig {
	pub fn is_production(&self) -> bool {
		self.environment.eq_ignore_ascii_case("production")
	}
}

impl Default for AuthConfig {
	fn default() -> Self {
		AuthConfigLayer::default().finalize()
	}
}

/// Authentication configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfigLayer {
	#[serde(default)]
	pub admin_password_hash: Option<SecretString>,
	#[serde(default)]
	pub admin_prefix: Option<String>,
	#[serde(default)]
	pub session_cookie_name: Option<String>,
	#[serde(default)]
	pub secure_cookies: Option<bool>,
	#[serde(default)]
	pub environment: Option<String>,
}

impl AuthConfigLayer {
	pub fn merge(&mut self, other: AuthConfigLayer) {
		if other.admin_password_hash.is_some() {
			self.admin_password_hash = other.admin_password_hash;
		}
		if other.admin_prefix.is_some() {
			self.admin_prefix = other.admin_prefix;
		}
		if other.session_cookie_name.is_some() {
			self.session_cookie_name = other.session_cookie_name;
		}
		if other.secure_cookies.is_some() {
			self.secure_cookies = other.secure_cookies;
		}
		if other.environment.is_some() {
			self.environment = other.environment;
		}
	}

	pub fn finalize(self) -> AuthConfig {
		AuthConfig {
			admin_password_hash: self.admin_password_hash.filter(|h| !h.is_blank()),
			admin_prefix: self
				.admin_prefix
				.map(|p| p.trim().trim_matches('/').to_string())
				.unwrap_or_else(|| DEFAULT_ADMIN_PREFIX.to_string()),
			session_cookie_name: self
				.session_cookie_name
				.unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
			secure_cookies: self.secure_cookies.unwrap_or(false),
			environment: self
				.environment
				.unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
		}
	}
}
