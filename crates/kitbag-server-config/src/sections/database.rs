// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SQLite database location.
//!
//! The catalog only runs on SQLite. `url` takes either a `sqlite:` URL or a
//! plain file path, which is turned into one.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_URL: &str = "sqlite:./kitbag.db";
const SCHEME: &str = "sqlite:";

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
	pub url: String,
}

impl Default for DatabaseConfig {
	fn default() -> Self {
		Self {
			url: DEFAULT_URL.to_string(),
		}
	}
}

impl DatabaseConfig {
	pub fn is_in_memory(&self) -> bool {
		self.url.contains(":memory:")
	}

	/// The database file on disk, without URL query parameters. `None` for
	/// in-memory databases.
	pub fn file_path(&self) -> Option<PathBuf> {
		if self.is_in_memory() {
			return None;
		}
		let rest = self.url.strip_prefix(SCHEME)?;
		let rest = rest.strip_prefix("//").unwrap_or(rest);
		let path = rest.split('?').next().unwrap_or(rest);
		(!path.is_empty()).then(|| PathBuf::from(path))
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfigLayer {
	#[serde(default)]
	pub url: Option<String>,
}

impl DatabaseConfigLayer {
	pub fn merge(&mut self, other: DatabaseConfigLayer) {
		if other.url.is_some() {
			self.url = other.url;
		}
	}

	/// # Errors
	/// `InvalidValue` for an empty value or a non-SQLite URL.
	pub fn finalize(self) -> Result<DatabaseConfig, ConfigError> {
		let Some(raw) = self.url else {
			return Ok(DatabaseConfig::default());
		};
		let raw = raw.trim();
		let invalid = |message: &str| ConfigError::InvalidValue {
			key: "KITBAG_SERVER_DATABASE_URL".to_string(),
			message: format!("'{raw}' {message}"),
		};

		if raw.is_empty() {
			return Err(invalid("must not be empty"));
		}
		if raw.starts_with(SCHEME) {
			return Ok(DatabaseConfig {
				url: raw.to_string(),
			});
		}
		if raw.contains("://") {
			return Err(invalid("is not a SQLite URL"));
		}
		Ok(DatabaseConfig {
			url: format!("{SCHEME}{raw}"),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn finalize(url: &str) -> Result<DatabaseConfig, ConfigError> {
		DatabaseConfigLayer {
			url: Some(url.to_string()),
		}
		.finalize()
	}

	#[test]
	fn default_is_local_file() {
		let config = DatabaseConfigLayer::default().finalize().unwrap();
		assert_eq!(config.url, "sqlite:./kitbag.db");
		assert_eq!(config.file_path(), Some(PathBuf::from("./kitbag.db")));
	}

	#[test]
	fn plain_paths_become_urls() {
		let config = finalize(" /var/lib/kitbag/data.db ").unwrap();
		assert_eq!(config.url, "sqlite:/var/lib/kitbag/data.db");
		assert_eq!(config.file_path(), Some(PathBuf::from("/var/lib/kitbag/data.db")));
	}

	#[test]
	fn file_path_drops_slashes_and_options() {
		let config = finalize("sqlite://data/kitbag.db?mode=rwc").unwrap();
		assert_eq!(config.file_path(), Some(PathBuf::from("data/kitbag.db")));
	}

	#[test]
	fn memory_has_no_file() {
		let config = finalize("sqlite::memory:").unwrap();
		assert!(config.is_in_memory());
		assert_eq!(config.file_path(), None);
	}

	#[test]
	fn rejects_other_databases_and_blanks() {
		assert!(matches!(
			finalize("postgres://localhost/kitbag"),
			Err(ConfigError::InvalidValue { .. })
		));
		assert!(finalize("  ").is_err());
	}
}
