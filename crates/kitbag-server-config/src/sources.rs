// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use kitbag_common_config::load_secret_env;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	AuthConfigLayer, ContactConfigLayer, DatabaseConfigLayer, HttpConfigLayer, LoggingConfigLayer,
	TranslationConfigLayer, UploadsConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/kitbag/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `KITBAG_SERVER_<FIELD>`. Secrets also accept `<VAR>_FILE`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			database: Some(load_database_from_env()),
			auth: Some(load_auth_from_env()?),
			uploads: Some(load_uploads_from_env()?),
			translation: Some(load_translation_from_env()?),
			contact: Some(load_contact_from_env()),
			logging: Some(load_logging_from_env()),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_bool(name: &str) -> Option<bool> {
	env_var(name).map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

fn env_u16(name: &str) -> Result<Option<u16>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn env_u64(name: &str) -> Result<Option<u64>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u64 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("KITBAG_SERVER_HOST"),
		port: env_u16("KITBAG_SERVER_PORT")?,
		base_url: env_var("KITBAG_SERVER_BASE_URL"),
	})
}

fn load_database_from_env() -> DatabaseConfigLayer {
	DatabaseConfigLayer {
		url: env_var("KITBAG_SERVER_DATABASE_URL"),
	}
}

fn load_auth_from_env() -> Result<AuthConfigLayer, ConfigError> {
	Ok(AuthConfigLayer {
		admin_password_hash: load_secret_env("KITBAG_SERVER_ADMIN_PASSWORD_HASH")?,
		admin_prefix: env_var("KITBAG_SERVER_ADMIN_URL_PREFIX"),
		session_cookie_name: env_var("KITBAG_SERVER_SESSION_COOKIE_NAME"),
		secure_cookies: env_bool("KITBAG_SERVER_SECURE_COOKIES"),
		environment: env_var("KITBAG_SERVER_ENV"),
	})
}

fn load_uploads_from_env() -> Result<UploadsConfigLayer, ConfigError> {
	Ok(UploadsConfigLayer {
		dir: env_var("KITBAG_SERVER_UPLOAD_DIR").map(PathBuf::from),
		max_request_mb: env_u64("KITBAG_SERVER_MAX_UPLOAD_MB")?,
	})
}

fn load_translation_from_env() -> Result<TranslationConfigLayer, ConfigError> {
	Ok(TranslationConfigLayer {
		api_key: load_secret_env("KITBAG_SERVER_OPENROUTER_API_KEY")?,
		model: env_var("KITBAG_SERVER_OPENROUTER_MODEL"),
		site_url: env_var("KITBAG_SERVER_OPENROUTER_SITE_URL"),
		site_name: env_var("KITBAG_SERVER_OPENROUTER_SITE_NAME"),
		base_url: env_var("KITBAG_SERVER_OPENROUTER_BASE_URL"),
	})
}

fn load_contact_from_env() -> ContactConfigLayer {
	ContactConfigLayer {
		whatsapp_number: env_var("KITBAG_SERVER_WHATSAPP_NUMBER"),
		instagram_handle: env_var("KITBAG_SERVER_INSTAGRAM_HANDLE"),
		official_email: env_var("KITBAG_SERVER_OFFICIAL_EMAIL"),
	}
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("KITBAG_SERVER_LOG_LEVEL"),
	}
}
