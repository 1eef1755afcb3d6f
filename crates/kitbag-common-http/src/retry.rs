// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Retry with exponential backoff for outbound HTTP calls.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct RetryConfig {
	pub max_attempts: u32,
	pub base_delay: Duration,
	pub max_delay: Duration,
	pub backoff_factor: f64,
	pub jitter: bool,
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self {
			max_attempts: 3,
			base_delay: Duration::from_millis(200),
			max_delay: Duration::from_secs(5),
			backoff_factor: 2.0,
			jitter: true,
		}
	}
}

pub trait RetryableError {
	fn is_retryable(&self) -> bool;

	/// Server-requested wait before the next attempt, if any.
	///
	/// When present it replaces the computed backoff, still capped at
	/// `RetryConfig::max_delay`.
	fn retry_after(&self) -> Option<Duration> {
		None
	}
}

impl RetryableError for reqwest::Error {
	fn is_retryable(&self) -> bool {
		if self.is_timeout() || self.is_connect() {
			return true;
		}

		matches!(
			self.status(),
			Some(
				StatusCode::TOO_MANY_REQUESTS
					| StatusCode::REQUEST_TIMEOUT
					| StatusCode::BAD_GATEWAY
					| StatusCode::SERVICE_UNAVAILABLE
					| StatusCode::GATEWAY_TIMEOUT
			)
		)
	}
}

/// Reads a `Retry-After` header given in whole seconds.
///
/// HTTP-date values and anything non-numeric yield `None`.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();
	if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	value.parse::<u64>().ok().map(Duration::from_secs)
}

fn calculate_delay(cfg: &RetryConfig, attempt: u32, hint: Option<Duration>) -> Duration {
	if let Some(hint) = hint {
		return hint.min(cfg.max_delay);
	}

	let exponential_delay = cfg.base_delay.as_secs_f64() * cfg.backoff_factor.powi(attempt as i32);
	let capped_delay = exponential_delay.min(cfg.max_delay.as_secs_f64());

	let final_delay = if cfg.jitter {
		capped_delay * (0.5 + fastrand::f64())
	} else {
		capped_delay
	};

	Duration::from_secs_f64(final_delay)
}

pub async fn retry<F, Fut, T, E>(cfg: &RetryConfig, mut f: F) -> Result<T, E>
where
	F: FnMut() -> Fut,
	Fut: std::future::Future<Output = Result<T, E>>,
	E: RetryableError + std::fmt::Debug,
{
	let mut attempt = 0;

	loop {
		match f().await {
			Ok(result) => return Ok(result),
			Err(err) => {
				attempt += 1;

				if !err.is_retryable() {
					return Err(err);
				}

				if attempt >= cfg.max_attempts {
					warn!(
						error = ?err,
						attempt,
						max_attempts = cfg.max_attempts,
						"max retry attempts exhausted"
					);
					return Err(err);
				}

				let delay = calculate_delay(cfg, attempt - 1, err.retry_after());
				warn!(
					error = ?err,
					attempt,
					max_attempts = cfg.max_attempts,
					delay_ms = delay.as_millis() as u64,
					"retrying after error"
				);

				tokio::time::sleep(delay).await;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reqwest::header::HeaderValue;
	use std::sync::atomic::{AtomicU32, Ordering};
	use std::sync::Arc;

	#[derive(Debug)]
	struct MockError {
		retryable: bool,
		hint: Option<Duration>,
	}

	impl RetryableError for MockError {
		fn is_retryable(&self) -> bool {
			self.retryable
		}

		fn retry_after(&self) -> Option<Duration> {
			self.hint
		}
	}

	fn fast_config(max_attempts: u32) -> RetryConfig {
		RetryConfig {
			max_attempts,
			base_delay: Duration::from_millis(1),
			max_delay: Duration::from_millis(10),
			backoff_factor: 2.0,
			jitter: false,
		}
	}

	#[tokio::test]
	async fn non_retryable_error_fails_immediately() {
		let attempts = Arc::new(AtomicU32::new(0));
		let counter = Arc::clone(&attempts);

		let result: Result<(), MockError> = retry(&fast_config(3), || {
			let counter = Arc::clone(&counter);
			async move {
				counter.fetch_add(1, Ordering::SeqCst);
				Err(MockError {
					retryable: false,
					hint: None,
				})
			}
		})
		.await;

		assert!(result.is_err());
		assert_eq!(attempts.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn retryable_error_stops_at_max_attempts() {
		let attempts = Arc::new(AtomicU32::new(0));
		let counter = Arc::clone(&attempts);

		let result: Result<(), MockError> = retry(&fast_config(2), || {
			let counter = Arc::clone(&counter);
			async move {
				counter.fetch_add(1, Ordering::SeqCst);
				Err(MockError {
					retryable: true,
					hint: Some(Duration::from_secs(60)),
				})
			}
		})
		.await;

		assert!(result.is_err());
		assert_eq!(attempts.load(Ordering::SeqCst), 2);
	}

	#[tokio::test]
	async fn succeeds_after_transient_failure() {
		let attempts = Arc::new(AtomicU32::new(0));
		let counter = Arc::clone(&attempts);

		let result: Result<&str, MockError> = retry(&fast_config(3), || {
			let counter = Arc::clone(&counter);
			async move {
				if counter.fetch_add(1, Ordering::SeqCst) == 0 {
					Err(MockError {
						retryable: true,
						hint: None,
					})
				} else {
					Ok("Maglia Casa")
				}
			}
		})
		.await;

		assert_eq!(result.unwrap(), "Maglia Casa");
		assert_eq!(attempts.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn hint_overrides_backoff_but_is_capped() {
		let cfg = RetryConfig {
			max_attempts: 2,
			base_delay: Duration::from_millis(250),
			max_delay: Duration::from_secs(2),
			backoff_factor: 2.0,
			jitter: true,
		};

		assert_eq!(
			calculate_delay(&cfg, 0, Some(Duration::from_secs(1))),
			Duration::from_secs(1)
		);
		assert_eq!(
			calculate_delay(&cfg, 0, Some(Duration::from_secs(30))),
			Duration::from_secs(2)
		);
	}

	#[test]
	fn backoff_respects_max_delay() {
		let cfg = RetryConfig {
			max_attempts: 10,
			base_delay: Duration::from_secs(1),
			max_delay: Duration::from_secs(5),
			backoff_factor: 10.0,
			jitter: false,
		};

		for attempt in 0..10 {
			assert!(calculate_delay(&cfg, attempt, None) <= Duration::from_secs(5));
		}
	}

	#[test]
	fn jitter_varies_delay() {
		let cfg = RetryConfig {
			max_attempts: 3,
			base_delay: Duration::from_millis(100),
			max_delay: Duration::from_secs(5),
			backoff_factor: 2.0,
			jitter: true,
		};

		let delays: Vec<Duration> = (0..10).map(|_| calculate_delay(&cfg, 1, None)).collect();
		assert!(!delays.windows(2).all(|w| w[0] == w[1]));
	}

	#[test]
	fn retry_after_accepts_only_whole_seconds() {
		let mut headers = HeaderMap::new();
		assert_eq!(parse_retry_after(&headers), None);

		headers.insert(RETRY_AFTER, HeaderValue::from_static("3"));
		assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(3)));

		headers.insert(RETRY_AFTER, HeaderValue::from_static(" 1 "));
		assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(1)));

		headers.insert(
			RETRY_AFTER,
			HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
		);
		assert_eq!(parse_retry_after(&headers), None);

		headers.insert(RETRY_AFTER, HeaderValue::from_static("1.5"));
		assert_eq!(parse_retry_after(&headers), None);
	}
}
