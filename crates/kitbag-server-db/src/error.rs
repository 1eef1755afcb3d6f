// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, thiserror::Error)]
pub enum DbError {
	#[error("Database error: {0}")]
	Sqlx(#[from] sqlx::Error),

	#[error("Not found: {0}")]
	NotFound(String),

	/// A unique constraint rejected the write.
	#[error("Conflict: {0}")]
	Conflict(String),

	/// A stored value could not be read back into its domain type.
	#[error("Corrupt row: {0}")]
	CorruptRow(String),

	#[error("Internal: {0}")]
	Internal(String),
}

impl DbError {
	/// Turn a unique-constraint violation into `Conflict`; anything else stays
	/// a driver error.
	pub(crate) fn from_write(err: sqlx::Error, what: &str) -> Self {
		match err {
			sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
				DbError::Conflict(format!("{what} already exists"))
			}
			other => DbError::Sqlx(other),
		}
	}
}

pub type Result<T> = std::result::Result<T, DbError>;
