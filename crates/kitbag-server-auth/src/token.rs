// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session tokens.
//!
//! The browser holds a random token; the database holds only its SHA-256
//! hash, so a leaked database cannot be replayed as a cookie.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use sha2::{Digest, Sha256};

/// Admin sessions last this long from login and are not extended on use.
pub const SESSION_EXPIRY_DAYS: i64 = 7;

/// 32 random bytes, hex encoded.
pub fn generate_session_token() -> String {
	let mut rng = rand::thread_rng();
	let bytes: [u8; 32] = rng.gen();
	hex::encode(bytes)
}

/// Lowercase hex SHA-256 of a token, as stored in `admin_sessions`.
pub fn hash_token(token: &str) -> String {
	hex::encode(Sha256::digest(token.as_bytes()))
}

/// Expiry for a session created at `now`.
pub fn session_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
	now + Duration::days(SESSION_EXPIRY_DAYS)
}

/// Cookie lifetime matching [`SESSION_EXPIRY_DAYS`].
pub fn session_max_age_secs() -> i64 {
	SESSION_EXPIRY_DAYS * 24 * 60 * 60
}
