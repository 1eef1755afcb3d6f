// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client builders with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Creates a client builder carrying the standard Kitbag User-Agent.
///
/// # Example
/// ```ignore
/// let client = kitbag_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a builder with separate connect and whole-request timeouts.
pub fn builder_with_timeouts(connect: Duration, request: Duration) -> ClientBuilder {
	builder().connect_timeout(connect).timeout(request)
}

/// Format: `kitbag/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!(
		"kitbag/{} ({}-{})",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_names_product_and_platform() {
		let ua = user_agent();
		assert!(ua.starts_with("kitbag/"));
		assert!(ua.contains(std::env::consts::OS));
		assert!(ua.ends_with(')'));
	}

	#[test]
	fn builders_produce_clients() {
		assert!(builder().build().is_ok());
		assert!(
			builder_with_timeouts(Duration::from_secs(3), Duration::from_secs(8))
				.build()
				.is_ok()
		);
	}
}
