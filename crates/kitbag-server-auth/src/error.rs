// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
	/// No valid session accompanied the request.
	#[error("authentication required")]
	AuthenticationRequired,

	#[error("invalid password")]
	InvalidPassword,

	/// No admin password hash is configured, so nobody can log in.
	#[error("admin login is not configured")]
	NotConfigured,

	#[error("password hashing failed: {0}")]
	Hashing(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
