// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Admin authentication for the Kitbag back-office.
//!
//! There is one admin, identified by a password whose Argon2 hash lives in
//! configuration. A successful login creates a session whose token is sent
//! as an HttpOnly cookie; only the token's SHA-256 is persisted.

pub mod cookie;
pub mod error;
pub mod password;
pub mod token;

pub use cookie::{clear_cookie, extract_cookie, preference_cookie, session_cookie};
pub use error::{AuthError, Result};
pub use password::{check_admin_password, hash_password, verify_password};
pub use token::{
	generate_session_token, hash_token, session_expiry, session_max_age_secs, SESSION_EXPIRY_DAYS,
};
