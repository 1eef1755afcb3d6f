// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! English to Italian translation of shirt descriptions.
//!
//! Descriptions are written in English by the admin; the Italian storefront
//! shows a machine translation obtained once through OpenRouter's
//! chat-completions API and then stored. The call is best-effort: at most
//! two attempts with short timeouts, so a slow provider never blocks an
//! admin save for long.

pub mod client;
pub mod error;
pub mod text;
pub mod types;

pub use client::{
	OpenRouterClient, OpenRouterConfig, Translator, CONNECT_TIMEOUT, DEFAULT_BASE_URL,
	MAX_ATTEMPTS, MAX_RATE_LIMIT_WAIT, REQUEST_TIMEOUT,
};
pub use error::TranslationError;
pub use text::{build_prompt, clean_translation};
