// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenRouter client.

use std::time::Duration;

use async_trait::async_trait;
use kitbag_common_config::SecretString;
use kitbag_common_http::{parse_retry_after, retry, RetryConfig};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

use crate::error::TranslationError;
use crate::text::{build_prompt, clean_translation};
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);
pub const MAX_ATTEMPTS: u32 = 2;
/// Longest `Retry-After` honored on a 429.
pub const MAX_RATE_LIMIT_WAIT: Duration = Duration::from_secs(2);
const TEMPERATURE: f32 = 0.2;

/// Something that can turn English product text into Italian.
#[async_trait]
pub trait Translator: Send + Sync {
	async fn translate_to_italian(&self, text: &str) -> Result<String, TranslationError>;
}

/// Connection settings for [`OpenRouterClient`].
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
	pub api_key: SecretString,
	pub model: String,
	/// Sent as `HTTP-Referer` for OpenRouter's app attribution.
	pub site_url: Option<String>,
	/// Sent as `X-Title`.
	pub site_name: Option<String>,
	pub base_url: String,
	pub connect_timeout: Duration,
	pub request_timeout: Duration,
}

impl OpenRouterConfig {
	/// Settings with the standard endpoint and timeouts.
	///
	/// # Errors
	/// `NotConfigured` when the key or the model is missing or blank.
	pub fn from_parts(
		api_key: Option<SecretString>,
		model: Option<String>,
	) -> Result<Self, TranslationError> {
		let api_key = api_key
			.filter(|k| !k.is_blank())
			.ok_or(TranslationError::NotConfigured("OpenRouter API key"))?;
		let model = model
			.map(|m| m.trim().to_string())
			.filter(|m| !m.is_empty())
			.ok_or(TranslationError::NotConfigured("OpenRouter model"))?;

		Ok(Self {
			api_key,
			model,
			site_url: None,
			site_name: None,
			base_url: DEFAULT_BASE_URL.to_string(),
			connect_timeout: CONNECT_TIMEOUT,
			request_timeout: REQUEST_TIMEOUT,
		})
	}
}

pub struct OpenRouterClient {
	config: OpenRouterConfig,
	http_client: Client,
	retry_config: RetryConfig,
}

impl OpenRouterClient {
	pub fn new(config: OpenRouterConfig) -> Result<Self, TranslationError> {
		let http_client =
			kitbag_common_http::builder_with_timeouts(config.connect_timeout, config.request_timeout)
				.build()
				.map_err(|e| TranslationError::Http(e.to_string()))?;

		let retry_config = RetryConfig {
			max_attempts: MAX_ATTEMPTS,
			base_delay: Duration::ZERO,
			max_delay: MAX_RATE_LIMIT_WAIT,
			backoff_factor: 1.0,
			jitter: false,
		};

		info!(model = %config.model, base_url = %config.base_url, "Initialized OpenRouter client");

		Ok(Self {
			config,
			http_client,
			retry_config,
		})
	}

	fn build_request(&self, text: &str) -> reqwest::RequestBuilder {
		let url = format!("{}/chat/completions", self.config.base_url);
		let body = ChatRequest {
			model: &self.config.model,
			messages: vec![ChatMessage {
				role: "user".to_string(),
				content: build_prompt(text),
			}],
			temperature: TEMPERATURE,
		};

		let mut builder = self
			.http_client
			.post(&url)
			.header("Authorization", format!("Bearer {}", self.config.api_key.expose()));
		if let Some(site_url) = &self.config.site_url {
			builder = builder.header("HTTP-Referer", site_url);
		}
		if let Some(site_name) = &self.config.site_name {
			builder = builder.header("X-Title", site_name);
		}

		builder.json(&body)
	}

	async fn attempt(&self, text: &str) -> Result<String, TranslationError> {
		let response = self.build_request(text).send().await.map_err(|e| {
			if e.is_timeout() {
				TranslationError::Timeout
			} else {
				TranslationError::Http(e.to_string())
			}
		})?;

		let status = response.status();
		if status == StatusCode::TOO_MANY_REQUESTS {
			let retry_after = parse_retry_after(response.headers());
			debug!(?retry_after, "OpenRouter rate limited");
			return Err(TranslationError::RateLimited { retry_after });
		}
		if !status.is_success() {
			let message = response.text().await.unwrap_or_default();
			return Err(TranslationError::Api {
				status: status.as_u16(),
				message,
			});
		}

		let body: ChatResponse = response.json().await.map_err(|e| {
			if e.is_timeout() {
				TranslationError::Timeout
			} else {
				TranslationError::InvalidResponse(e.to_string())
			}
		})?;
		let content = body
			.first_content()
			.ok_or_else(|| TranslationError::InvalidResponse("no choices in response".to_string()))?;

		Ok(clean_translation(content))
	}
}

#[async_trait]
impl Translator for OpenRouterClient {
	#[instrument(skip(self, text), fields(model = %self.config.model, chars = text.len()))]
	async fn translate_to_italian(&self, text: &str) -> Result<String, TranslationError> {
		let result = retry(&self.retry_config, || self.attempt(text)).await;

		match &result {
			Ok(translated) => info!(chars = translated.len(), "description translated"),
			Err(e) => warn!(error = %e, "translation failed"),
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use kitbag_common_config::Secret;
	use serde_json::json;
	use wiremock::matchers::{body_partial_json, header, method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn config(server: &MockServer) -> OpenRouterConfig {
		let mut config = OpenRouterConfig::from_parts(
			Some(Secret::new("sk-or-test".to_string())),
			Some("openai/gpt-4o-mini".to_string()),
		)
		.unwrap();
		config.base_url = server.uri();
		config
	}

	fn completion(content: &str) -> serde_json::Value {
		json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
	}

	#[test]
	fn missing_key_or_model_is_not_configured() {
		assert!(matches!(
			OpenRouterConfig::from_parts(None, Some("m".to_string())),
			Err(TranslationError::NotConfigured(_))
		));
		assert!(matches!(
			OpenRouterConfig::from_parts(Some(Secret::new("k".to_string())), Some(" ".to_string())),
			Err(TranslationError::NotConfigured(_))
		));
		let config =
			OpenRouterConfig::from_parts(Some(Secret::new("k".to_string())), Some("m".to_string()))
				.unwrap();
		assert_eq!(config.connect_timeout, Duration::from_secs(3));
		assert_eq!(config.request_timeout, Duration::from_secs(8));
		assert!(!format!("{config:?}").contains("\"k\""));
	}

	#[tokio::test]
	async fn translates_and_cleans_quotes() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/chat/completions"))
			.and(header("Authorization", "Bearer sk-or-test"))
			.and(header("X-Title", "Kitbag"))
			.and(body_partial_json(json!({
				"model": "openai/gpt-4o-mini",
				"messages": [{"role": "user", "content": build_prompt("Home shirt")}]
			})))
			.respond_with(ResponseTemplate::new(200).set_body_json(completion("\"Maglia casa\"")))
			.expect(1)
			.mount(&server)
			.await;

		let mut config = config(&server);
		config.site_name = Some("Kitbag".to_string());
		let client = OpenRouterClient::new(config).unwrap();

		assert_eq!(client.translate_to_italian("Home shirt").await.unwrap(), "Maglia casa");
	}

	#[tokio::test]
	async fn retries_once_after_rate_limit() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
			.up_to_n_times(1)
			.expect(1)
			.mount(&server)
			.await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(200).set_body_json(completion("Maglia")))
			.expect(1)
			.mount(&server)
			.await;

		let client = OpenRouterClient::new(config(&server)).unwrap();
		assert_eq!(client.translate_to_italian("Shirt").await.unwrap(), "Maglia");
	}

	#[tokio::test]
	async fn gives_up_after_two_rate_limits() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
			.expect(2)
			.mount(&server)
			.await;

		let client = OpenRouterClient::new(config(&server)).unwrap();
		assert!(matches!(
			client.translate_to_italian("Shirt").await,
			Err(TranslationError::RateLimited { .. })
		));
	}

	#[tokio::test]
	async fn server_errors_are_not_retried() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(500).set_body_string("boom"))
			.expect(1)
			.mount(&server)
			.await;

		let client = OpenRouterClient::new(config(&server)).unwrap();
		match client.translate_to_italian("Shirt").await {
			Err(TranslationError::Api { status, message }) => {
				assert_eq!(status, 500);
				assert_eq!(message, "boom");
			}
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[tokio::test]
	async fn timeouts_are_retried_then_reported() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(
				ResponseTemplate::new(200)
					.set_body_json(completion("tardi"))
					.set_delay(Duration::from_millis(500)),
			)
			.expect(2)
			.mount(&server)
			.await;

		let mut config = config(&server);
		config.request_timeout = Duration::from_millis(100);
		let client = OpenRouterClient::new(config).unwrap();

		assert!(matches!(
			client.translate_to_italian("Shirt").await,
			Err(TranslationError::Timeout)
		));
	}

	#[tokio::test]
	async fn empty_choices_is_invalid_response() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
			.mount(&server)
			.await;

		let client = OpenRouterClient::new(config(&server)).unwrap();
		assert!(matches!(
			client.translate_to_italian("Shirt").await,
			Err(TranslationError::InvalidResponse(_))
		));
	}
}
