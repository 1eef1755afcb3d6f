// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Kitbag's outbound calls.
//!
//! - a client builder with a consistent User-Agent header
//! - retry with exponential backoff that honours server `Retry-After` hints

mod client;
mod retry;

pub use client::{builder, builder_with_timeouts, user_agent};
pub use retry::{parse_retry_after, retry, RetryConfig, RetryableError};
