// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for kitbag-server.

pub mod auth;
pub mod contact;
pub mod database;
pub mod http;
pub mod logging;
pub mod translation;
pub mod uploads;

pub use auth::{AuthConfig, AuthConfigLayer};
pub use contact::{ContactConfig, ContactConfigLayer};
pub use database::{DatabaseConfig, DatabaseConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use translation::{TranslationConfig, TranslationConfigLayer, DEFAULT_OPENROUTER_BASE_URL};
pub use uploads::{UploadsConfig, UploadsConfigLayer};
