// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sqlx::sqlite::SqlitePool;

use crate::migrations::run_migrations;
use crate::pool::create_pool;

/// In-memory database with every migration applied.
pub async fn create_test_pool() -> SqlitePool {
	let pool = create_pool("sqlite::memory:").await.unwrap();
	run_migrations(&pool).await.unwrap();
	pool
}
