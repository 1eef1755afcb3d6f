// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Machine translation (OpenRouter) configuration.

use kitbag_common_config::SecretString;
use serde::Deserialize;

pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Translation configuration (runtime, fully resolved).
///
/// Translation is optional; without both an API key and a model, Italian
/// descriptions are simply not generated.
#[derive(Debug, Clone)]
pub struct TranslationConfig {
	pub api_key: Option<SecretString>,
	pub model: Option<String>,
	/// Sent as `HTTP-Referer`.
	pub site_url: Option<String>,
	/// Sent as `X-Title`.
	pub site_name: Option<String>,
	pub base_url: String,
}

impl TranslationConfig {
	pub fn is_configured(&self) -> bool {
		self.api_key.is_some() && self.model.is_some()
	}
}

impl Default for TranslationConfig {
	fn default() -> Self {
		TranslationConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationConfigLayer {
	#[serde(default)]
	pub api_key: Option<SecretString>,
	#[serde(default)]
	pub model: Option<String>,
	#[serde(default)]
	pub site_url: Option<String>,
	#[serde(default)]
	pub site_name: Option<String>,
	#[serde(default)]
	pub base_url: Option<String>,
}

impl TranslationConfigLayer {
	pub fn merge(&mut self, other: TranslationConfigLayer) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.model.is_some() {
			self.model = other.model;
		}
		if other.site_url.is_some() {
			self.site_url = other.site_url;
		}
		if other.site_name.is_some() {
			self.site_name = other.site_name;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
	}

	pub fn finalize(self) -> TranslationConfig {
		let non_blank = |s: String| {
			let t = s.trim();
			(!t.is_empty()).then(|| t.to_string())
		};
		TranslationConfig {
			api_key: self.api_key.filter(|k| !k.is_blank()),
			model: self.model.and_then(non_blank),
			site_url: self.site_url.and_then(non_blank),
			site_name: self.site_name.and_then(non_blank),
			base_url: self
				.base_url
				.and_then(non_blank)
				.map(|u| u.trim_end_matches('/').to_string())
				.unwrap_or_else(|| DEFAULT_OPENROUTER_BASE_URL.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use kitbag_common_config::Secret;

	#[test]
	fn unconfigured_by_default() {
		let config = TranslationConfigLayer::default().finalize();
		assert!(!config.is_configured());
		assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
	}

	#[test]
	fn key_alone_is_not_enough() {
		let config = TranslationConfigLayer {
			api_key: Some(Secret::new("sk-or-123".to_string())),
			model: Some("   ".to_string()),
			..Default::default()
		}
		.finalize();
		assert!(!config.is_configured());
	}

	#[test]
	fn key_and_model_configure_translation() {
		let config = TranslationConfigLayer {
			api_key: Some(Secret::new("sk-or-123".to_string())),
			model: Some("openai/gpt-4o-mini".to_string()),
			base_url: Some("http://127.0.0.1:9999/v1/".to_string()),
			..Default::default()
		}
		.finalize();
		assert!(config.is_configured());
		assert_eq!(config.base_url, "http://127.0.0.1:9999/v1");
		assert!(!format!("{config:?}").contains("sk-or-123"));
	}
}
