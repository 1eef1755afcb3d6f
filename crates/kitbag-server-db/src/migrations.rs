// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Schema migrations.

use sqlx::sqlite::SqlitePool;

use crate::error::DbError;

const MIGRATIONS: &[(&str, &str)] = &[
	(
		"001_create_shirts",
		include_str!("../migrations/001_create_shirts.sql"),
	),
	(
		"002_create_shirt_images",
		include_str!("../migrations/002_create_shirt_images.sql"),
	),
	(
		"003_create_admin_sessions",
		include_str!("../migrations/003_create_admin_sessions.sql"),
	),
];

/// Individual statements of a migration file, comments removed.
fn statements(sql: &str) -> Vec<String> {
	let stripped: String = sql
		.lines()
		.filter(|line| !line.trim_start().starts_with("--"))
		.collect::<Vec<_>>()
		.join("\n");

	stripped
		.split(';')
		.map(|s| s.trim().to_string())
		.filter(|s| !s.is_empty())
		.collect()
}

/// Run all database migrations.
///
/// # Note
/// Migrations are idempotent - safe to run multiple times.
#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DbError> {
	for (name, sql) in MIGRATIONS {
		for stmt in statements(sql) {
			if let Err(e) = sqlx::query(&stmt).execute(pool).await {
				let msg = e.to_string();
				if !msg.contains("duplicate column") && !msg.contains("already exists") {
					tracing::error!(migration = *name, error = %e, "migration failed");
					return Err(e.into());
				}
			}
		}
		tracing::debug!(migration = *name, "migration applied");
	}

	tracing::info!(count = MIGRATIONS.len(), "database migrations complete");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pool::create_pool;

	#[test]
	fn statements_skip_comments_and_blanks() {
		let sql = "-- header; with semicolon\nCREATE TABLE a (x INTEGER);\n\n-- tail\nCREATE INDEX i ON a(x);\n";
		assert_eq!(
			statements(sql),
			vec!["CREATE TABLE a (x INTEGER)", "CREATE INDEX i ON a(x)"]
		);
	}

	#[tokio::test]
	async fn migrations_are_idempotent() {
		let pool = create_pool("sqlite::memory:").await.unwrap();
		run_migrations(&pool).await.unwrap();
		run_migrations(&pool).await.unwrap();

		let tables: Vec<(String,)> = sqlx::query_as(
			"SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
		)
		.fetch_all(&pool)
		.await
		.unwrap();
		let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
		assert_eq!(names, vec!["admin_sessions", "shirt_images", "shirts"]);
	}
}
