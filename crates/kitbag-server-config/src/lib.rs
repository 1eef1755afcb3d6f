// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the Kitbag server.
//!
//! Values are layered from built-in defaults, an optional TOML file and
//! `KITBAG_SERVER_*` environment variables, in increasing precedence, then
//! finalized into a [`ServerConfig`] and validated.
//!
//! ```ignore
//! let config = kitbag_server_config::load_config()?;
//! println!("listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::path::PathBuf;

use tracing::{debug, info};

/// First path segments owned by the storefront. The admin prefix may not
/// reuse any of them.
pub const RESERVED_PATH_SEGMENTS: &[&str] = &[
	"catalog",
	"shirt",
	"uploads",
	"health",
	"login",
	"wp-admin",
	"administrator",
	"manager",
];

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub database: DatabaseConfig,
	pub auth: AuthConfig,
	pub uploads: UploadsConfig,
	pub translation: TranslationConfig,
	pub contact: ContactConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`KITBAG_SERVER_*`)
/// 2. Config file (`/etc/kitbag/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	finalize(merged)
}

/// Finalize a merged layer into a validated config.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let config = ServerConfig {
		http: layer.http.unwrap_or_default().finalize(),
		database: layer.database.unwrap_or_default().finalize()?,
		auth: layer.auth.unwrap_or_default().finalize(),
		uploads: layer.uploads.unwrap_or_default().finalize(),
		translation: layer.translation.unwrap_or_default().finalize(),
		contact: layer.contact.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
	};

	validate_config(&config)?;

	info!(
		host = %config.http.host,
		port = config.http.port,
		database = %config.database.url,
		admin_prefix = %config.auth.admin_prefix,
		admin_login_enabled = config.auth.admin_password_hash.is_some(),
		upload_dir = %config.uploads.dir.display(),
		translation_configured = config.translation.is_configured(),
		"Server configuration loaded"
	);

	Ok(config)
}

/// Validate cross-field configuration rules.
fn validate_config(config: &ServerConfig) -> Result<(), ConfigError> {
	validate_admin_prefix(&config.auth.admin_prefix)?;

	if config.auth.is_production() && !config.auth.secure_cookies {
		return Err(ConfigError::Validation(
			"KITBAG_SERVER_ENV=production requires KITBAG_SERVER_SECURE_COOKIES=true so the admin \
			 session cookie is never sent over plain HTTP."
				.to_string(),
		));
	}

	Ok(())
}

/// The admin prefix must be one URL-safe path segment that no public route
/// uses.
pub fn validate_admin_prefix(prefix: &str) -> Result<(), ConfigError> {
	let invalid = |message: &str| ConfigError::InvalidValue {
		key: "KITBAG_SERVER_ADMIN_URL_PREFIX".to_string(),
		message: format!("'{prefix}' {message}"),
	};

	if prefix.is_empty() {
		return Err(invalid("must not be empty"));
	}
	if !prefix
		.chars()
		.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
	{
		return Err(invalid(
			"must be a single path segment of letters, digits, '-' or '_'",
		));
	}
	if RESERVED_PATH_SEGMENTS
		.iter()
		.any(|r| r.eq_ignore_ascii_case(prefix))
	{
		return Err(invalid("collides with a public route"));
	}
	Ok(())
}
