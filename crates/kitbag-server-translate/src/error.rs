// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

use kitbag_common_http::RetryableError;
use thiserror::Error;

/// Wait before retrying a 429 that carried no usable `Retry-After`.
pub const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum TranslationError {
	/// API key or model missing. Callers log this and carry on without a
	/// translation.
	#[error("translation is not configured: {0}")]
	NotConfigured(&'static str),

	#[error("rate limited by OpenRouter")]
	RateLimited { retry_after: Option<Duration> },

	#[error("request to OpenRouter timed out")]
	Timeout,

	#[error("HTTP error: {0}")]
	Http(String),

	#[error("OpenRouter returned {status}: {message}")]
	Api { status: u16, message: String },

	#[error("invalid response: {0}")]
	InvalidResponse(String),
}

impl RetryableError for TranslationError {
	fn is_retryable(&self) -> bool {
		matches!(self, Self::RateLimited { .. } | Self::Timeout)
	}

	fn retry_after(&self) -> Option<Duration> {
		match self {
			Self::RateLimited { retry_after } => Some(retry_after.unwrap_or(DEFAULT_RATE_LIMIT_WAIT)),
			Self::Timeout => Some(Duration::ZERO),
			_ => None,
		}
	}
}
