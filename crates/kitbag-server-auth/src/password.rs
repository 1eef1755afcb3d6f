// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Admin password hashing.
//!
//! There is a single admin account; its password is configured as an
//! Argon2 PHC string (`$argon2id$...`) produced by `kitbag-server
//! hash-password`.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use kitbag_common_config::SecretString;

use crate::error::{AuthError, Result};

/// Argon2id with the crate defaults (19 MiB, 2 passes). Unit tests in this
/// crate swap in a 1 MiB single pass so they stay fast; verification reads
/// the parameters from the PHC string either way.
fn hasher() -> Argon2<'static> {
	#[cfg(test)]
	if let Ok(params) = argon2::Params::new(1024, 1, 1, None) {
		return Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
	}
	Argon2::default()
}

/// Hash a password into an Argon2id PHC string with a random salt.
pub fn hash_password(plain: &str) -> Result<String> {
	let salt = SaltString::generate(&mut OsRng);
	hasher()
		.hash_password(plain.as_bytes(), &salt)
		.map(|hash| hash.to_string())
		.map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Check a password against a PHC string. A malformed hash never verifies.
pub fn verify_password(plain: &str, hash: &str) -> bool {
	let parsed = match PasswordHash::new(hash.trim()) {
		Ok(parsed) => parsed,
		Err(e) => {
			tracing::warn!(error = %e, "configured admin password hash is malformed");
			return false;
		}
	};

	hasher()
		.verify_password(plain.as_bytes(), &parsed)
		.is_ok()
}

/// Check a login attempt against the configured hash.
///
/// # Errors
/// `NotConfigured` without a hash, `InvalidPassword` on mismatch.
pub fn check_admin_password(plain: &str, configured: Option<&SecretString>) -> Result<()> {
	let hash = configured.ok_or(AuthError::NotConfigured)?;
	if verify_password(plain, hash.expose()) {
		Ok(())
	} else {
		Err(AuthError::InvalidPassword)
	}
}
