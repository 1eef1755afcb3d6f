// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Logging configuration section.

use serde::{Deserialize, Serialize};

fn default_level() -> String {
	"info,tower_http::trace=debug,sqlx=warn".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfigLayer {
	pub level: Option<String>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.level.is_some() {
			self.level = other.level;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level.unwrap_or_else(default_level),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
	/// `EnvFilter` directive string.
	pub level: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: default_level(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_level_is_info() {
		assert!(LoggingConfig::default().level.starts_with("info"));
	}

	#[test]
	fn deserialize_partial_layer() {
		let layer: LoggingConfigLayer = toml::from_str("level = \"warn\"").unwrap();
		assert_eq!(layer.finalize().level, "warn");

		let empty: LoggingConfigLayer = toml::from_str("").unwrap();
		assert!(empty.level.is_none());
	}

	#[test]
	fn serde_roundtrip() {
		let config = LoggingConfig {
			level: "debug".to_string(),
		};
		let parsed: LoggingConfig = toml::from_str(&toml::to_string(&config).unwrap()).unwrap();
		assert_eq!(config, parsed);
	}
}
