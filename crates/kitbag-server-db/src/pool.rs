// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sqlx::sqlite::{
	SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::str::FromStr;

use crate::error::DbError;

/// Create a SqlitePool with WAL mode and foreign keys enforced.
///
/// An in-memory URL (`sqlite::memory:`) gets a single connection, since
/// every SQLite connection would otherwise see its own empty database.
///
/// # Errors
/// Returns `DbError::Internal` if the URL is invalid.
#[tracing::instrument(skip(database_url))]
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, DbError> {
	let in_memory = database_url.contains(":memory:");

	let mut options = SqliteConnectOptions::from_str(database_url)
		.map_err(|e| DbError::Internal(format!("Invalid database URL: {e}")))?
		.foreign_keys(true)
		.create_if_missing(true);

	if !in_memory {
		options = options
			.journal_mode(SqliteJournalMode::Wal)
			.synchronous(SqliteSynchronous::Normal);
	}

	let max_connections = if in_memory { 1 } else { 8 };
	let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections);
	if in_memory {
		// Dropping the only connection would drop the database with it.
		pool_options = pool_options.idle_timeout(None).max_lifetime(None);
	}
	let pool = pool_options.connect_with(options).await?;

	tracing::debug!(in_memory, max_connections, "database pool created");
	Ok(pool)
}
