// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Admin session repository.
//!
//! Only SHA-256 hashes of session tokens are stored. Sessions have a fixed
//! expiry and are not extended on use.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqlitePool, Row};
use uuid::Uuid;

use crate::error::DbError;
use crate::shirt::{parse_timestamp, timestamp};

/// A stored admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
	pub id: Uuid,
	pub created_at: DateTime<Utc>,
	pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait AdminSessionStore: Send + Sync {
	async fn create_session(
		&self,
		token_hash: &str,
		expires_at: DateTime<Utc>,
	) -> Result<AdminSession, DbError>;
	async fn find_valid(
		&self,
		token_hash: &str,
		now: DateTime<Utc>,
	) -> Result<Option<AdminSession>, DbError>;
	async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, DbError>;
	async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbError>;
}

#[async_trait]
impl AdminSessionStore for AdminSessionRepository {
	async fn create_session(
		&self,
		token_hash: &str,
		expires_at: DateTime<Utc>,
	) -> Result<AdminSession, DbError> {
		self.create_session(token_hash, expires_at).await
	}

	async fn find_valid(
		&self,
		token_hash: &str,
		now: DateTime<Utc>,
	) -> Result<Option<AdminSession>, DbError> {
		self.find_valid(token_hash, now).await
	}

	async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, DbError> {
		self.delete_by_token_hash(token_hash).await
	}

	async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbError> {
		self.delete_expired(now).await
	}
}

#[derive(Clone)]
pub struct AdminSessionRepository {
	pool: SqlitePool,
}

impl AdminSessionRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self, token_hash))]
	pub async fn create_session(
		&self,
		token_hash: &str,
		expires_at: DateTime<Utc>,
	) -> Result<AdminSession, DbError> {
		let session = AdminSession {
			id: Uuid::new_v4(),
			created_at: Utc::now(),
			expires_at,
		};

		sqlx::query(
			r#"
			INSERT INTO admin_sessions (id, token_hash, created_at, expires_at)
			VALUES (?, ?, ?, ?)
			"#,
		)
		.bind(session.id.to_string())
		.bind(token_hash)
		.bind(timestamp(session.created_at))
		.bind(timestamp(session.expires_at))
		.execute(&self.pool)
		.await
		.map_err(|e| DbError::from_write(e, "Session token"))?;

		tracing::debug!(session_id = %session.id, "admin session created");
		Ok(session)
	}

	/// Look up a session by token hash, ignoring expired ones.
	#[tracing::instrument(skip(self, token_hash))]
	pub async fn find_valid(
		&self,
		token_hash: &str,
		now: DateTime<Utc>,
	) -> Result<Option<AdminSession>, DbError> {
		let row = sqlx::query(
			r#"
			SELECT id, created_at, expires_at
			FROM admin_sessions
			WHERE token_hash = ? AND expires_at > ?
			"#,
		)
		.bind(token_hash)
		.bind(timestamp(now))
		.fetch_optional(&self.pool)
		.await?;

		row.as_ref().map(parse_session_row).transpose()
	}

	#[tracing::instrument(skip(self, token_hash))]
	pub async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, DbError> {
		let result = sqlx::query("DELETE FROM admin_sessions WHERE token_hash = ?")
			.bind(token_hash)
			.execute(&self.pool)
			.await?;

		let deleted = result.rows_affected() > 0;
		tracing::debug!(deleted, "admin session deleted");
		Ok(deleted)
	}

	/// Remove every session that expired at or before `now`.
	#[tracing::instrument(skip(self))]
	pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbError> {
		let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= ?")
			.bind(timestamp(now))
			.execute(&self.pool)
			.await?;

		let removed = result.rows_affected();
		if removed > 0 {
			tracing::info!(removed, "expired admin sessions removed");
		}
		Ok(removed)
	}
}

fn parse_session_row(row: &sqlx::sqlite::SqliteRow) -> Result<AdminSession, DbError> {
	let id: String = row.get("id");
	let created_at: String = row.get("created_at");
	let expires_at: String = row.get("expires_at");

	Ok(AdminSession {
		id: Uuid::parse_str(&id).map_err(|e| DbError::CorruptRow(format!("Invalid session id: {e}")))?,
		created_at: parse_timestamp(&created_at)?,
		expires_at: parse_timestamp(&expires_at)?,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::create_test_pool;
	use chrono::Duration;

	async fn make_repo() -> AdminSessionRepository {
		AdminSessionRepository::new(create_test_pool().await)
	}

	#[tokio::test]
	async fn valid_session_is_found_until_expiry() {
		let repo = make_repo().await;
		let now = Utc::now();
		let created = repo.create_session("hash-a", now + Duration::days(7)).await.unwrap();

		let found = repo.find_valid("hash-a", now).await.unwrap().unwrap();
		assert_eq!(found.id, created.id);

		let later = now + Duration::days(8);
		assert!(repo.find_valid("hash-a", later).await.unwrap().is_none());
		assert!(repo.find_valid("other", now).await.unwrap().is_none());
	}

	#[tokio::test]
	async fn logout_deletes_by_hash() {
		let repo = make_repo().await;
		let now = Utc::now();
		repo.create_session("hash-b", now + Duration::hours(1)).await.unwrap();

		assert!(repo.delete_by_token_hash("hash-b").await.unwrap());
		assert!(!repo.delete_by_token_hash("hash-b").await.unwrap());
		assert!(repo.find_valid("hash-b", now).await.unwrap().is_none());
	}

	#[tokio::test]
	async fn expired_sessions_are_swept() {
		let repo = make_repo().await;
		let now = Utc::now();
		repo.create_session("old", now - Duration::minutes(1)).await.unwrap();
		repo.create_session("new", now + Duration::days(1)).await.unwrap();

		assert_eq!(repo.delete_expired(now).await.unwrap(), 1);
		assert!(repo.find_valid("new", now).await.unwrap().is_some());
	}

	#[tokio::test]
	async fn duplicate_token_hash_is_rejected() {
		let repo = make_repo().await;
		let expiry = Utc::now() + Duration::days(1);
		repo.create_session("same", expiry).await.unwrap();
		assert!(matches!(
			repo.create_session("same", expiry).await,
			Err(DbError::Conflict(_))
		));
	}
}
