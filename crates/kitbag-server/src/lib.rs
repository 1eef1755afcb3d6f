// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Kitbag catalog server.
//!
//! A JSON API over the shirt inventory: a public storefront in English and
//! Italian, and a password-protected back-office for inventory and images.

pub mod admin_auth;
pub mod api;
pub mod error;
pub mod locale;
pub mod routes;
pub mod shirt_form;
pub mod translation;
pub mod uploads;
pub mod version;
pub mod views;

pub use api::{build_translator, create_app_state, create_router, AppState, HONEYPOT_PATHS};
pub use error::ServerError;
pub use kitbag_server_config::ServerConfig;
pub use locale::{RequestLocale, LANG_COOKIE};
pub use uploads::{StorageError, UploadStorage};
