// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shirt image repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use kitbag_catalog_core::{ShirtId, ShirtImage, ShirtImageId};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::DbError;
use crate::shirt::{parse_timestamp, timestamp};

#[async_trait]
pub trait ImageStore: Send + Sync {
	async fn add_image(
		&self,
		shirt_id: ShirtId,
		file_path: &str,
		is_cover: bool,
	) -> Result<ShirtImage, DbError>;
	async fn list_for_shirt(&self, shirt_id: ShirtId) -> Result<Vec<ShirtImage>, DbError>;
	async fn list_for_shirts(
		&self,
		shirt_ids: &[ShirtId],
	) -> Result<HashMap<ShirtId, Vec<ShirtImage>>, DbError>;
	async fn get_image(&self, id: ShirtImageId) -> Result<Option<ShirtImage>, DbError>;
	async fn delete_image(&self, id: ShirtImageId) -> Result<bool, DbError>;
	async fn set_cover(&self, id: ShirtImageId) -> Result<ShirtImage, DbError>;
	async fn rewrite_paths(&self, shirt_id: ShirtId, new_dir: &str) -> Result<u64, DbError>;
}

#[async_trait]
impl ImageStore for ImageRepository {
	async fn add_image(
		&self,
		shirt_id: ShirtId,
		file_path: &str,
		is_cover: bool,
	) -> Result<ShirtImage, DbError> {
		self.add_image(shirt_id, file_path, is_cover).await
	}

	async fn list_for_shirt(&self, shirt_id: ShirtId) -> Result<Vec<ShirtImage>, DbError> {
		self.list_for_shirt(shirt_id).await
	}

	async fn list_for_shirts(
		&self,
		shirt_ids: &[ShirtId],
	) -> Result<HashMap<ShirtId, Vec<ShirtImage>>, DbError> {
		self.list_for_shirts(shirt_ids).await
	}

	async fn get_image(&self, id: ShirtImageId) -> Result<Option<ShirtImage>, DbError> {
		self.get_image(id).await
	}

	async fn delete_image(&self, id: ShirtImageId) -> Result<bool, DbError> {
		self.delete_image(id).await
	}

	async fn set_cover(&self, id: ShirtImageId) -> Result<ShirtImage, DbError> {
		self.set_cover(id).await
	}

	async fn rewrite_paths(&self, shirt_id: ShirtId, new_dir: &str) -> Result<u64, DbError> {
		self.rewrite_paths(shirt_id, new_dir).await
	}
}

/// Ids per `IN (...)` query, well under SQLite's bound parameter limit.
const IN_CHUNK: usize = 500;

/// Repository for image rows. Files on disk are handled by the server.
#[derive(Clone)]
pub struct ImageRepository {
	pool: SqlitePool,
}

impl ImageRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	#[tracing::instrument(skip(self))]
	pub async fn add_image(
		&self,
		shirt_id: ShirtId,
		file_path: &str,
		is_cover: bool,
	) -> Result<ShirtImage, DbError> {
		let now = Utc::now();
		let row = sqlx::query(
			r#"
			INSERT INTO shirt_images (shirt_id, file_path, is_cover, created_at)
			VALUES (?, ?, ?, ?)
			RETURNING id
			"#,
		)
		.bind(shirt_id)
		.bind(file_path)
		.bind(is_cover as i32)
		.bind(timestamp(now))
		.fetch_one(&self.pool)
		.await?;

		let id: ShirtImageId = row.get("id");
		tracing::debug!(image_id = id, shirt_id, is_cover, "image added");

		Ok(ShirtImage {
			id,
			shirt_id,
			file_path: file_path.to_string(),
			is_cover,
			created_at: Some(now),
		})
	}

	/// Images of a shirt in upload order.
	#[tracing::instrument(skip(self))]
	pub async fn list_for_shirt(&self, shirt_id: ShirtId) -> Result<Vec<ShirtImage>, DbError> {
		let rows = sqlx::query(
			r#"
			SELECT id, shirt_id, file_path, is_cover, created_at
			FROM shirt_images
			WHERE shirt_id = ?
			ORDER BY id
			"#,
		)
		.bind(shirt_id)
		.fetch_all(&self.pool)
		.await?;

		rows.iter().map(parse_image_row).collect()
	}

	/// Images of many shirts at once, keyed by shirt, each in upload order.
	/// Shirts without images have no entry.
	#[tracing::instrument(skip(self, shirt_ids), fields(shirts = shirt_ids.len()))]
	pub async fn list_for_shirts(
		&self,
		shirt_ids: &[ShirtId],
	) -> Result<HashMap<ShirtId, Vec<ShirtImage>>, DbError> {
		let mut by_shirt: HashMap<ShirtId, Vec<ShirtImage>> = HashMap::new();

		for chunk in shirt_ids.chunks(IN_CHUNK) {
			let placeholders = vec!["?"; chunk.len()].join(", ");
			let sql = format!(
				"SELECT id, shirt_id, file_path, is_cover, created_at \
				 FROM shirt_images WHERE shirt_id IN ({placeholders}) ORDER BY id"
			);
			let mut query = sqlx::query(&sql);
			for id in chunk {
				query = query.bind(*id);
			}

			for row in query.fetch_all(&self.pool).await? {
				let image = parse_image_row(&row)?;
				by_shirt.entry(image.shirt_id).or_default().push(image);
			}
		}

		Ok(by_shirt)
	}

	#[tracing::instrument(skip(self))]
	pub async fn get_image(&self, id: ShirtImageId) -> Result<Option<ShirtImage>, DbError> {
		let row = sqlx::query(
			r#"
			SELECT id, shirt_id, file_path, is_cover, created_at
			FROM shirt_images
			WHERE id = ?
			"#,
		)
		.bind(id)
		.fetch_optional(&self.pool)
		.await?;

		row.as_ref().map(parse_image_row).transpose()
	}

	#[tracing::instrument(skip(self))]
	pub async fn delete_image(&self, id: ShirtImageId) -> Result<bool, DbError> {
		let result = sqlx::query("DELETE FROM shirt_images WHERE id = ?")
			.bind(id)
			.execute(&self.pool)
			.await?;

		let deleted = result.rows_affected() > 0;
		tracing::debug!(image_id = id, deleted, "image deleted");
		Ok(deleted)
	}

	/// Make an image the only cover of its shirt.
	///
	/// # Errors
	/// Returns `DbError::NotFound` if the image does not exist.
	#[tracing::instrument(skip(self))]
	pub async fn set_cover(&self, id: ShirtImageId) -> Result<ShirtImage, DbError> {
		let mut tx = self.pool.begin().await?;

		let row = sqlx::query("SELECT shirt_id FROM shirt_images WHERE id = ?")
			.bind(id)
			.fetch_optional(&mut *tx)
			.await?
			.ok_or_else(|| DbError::NotFound(format!("image {id}")))?;
		let shirt_id: ShirtId = row.get("shirt_id");

		sqlx::query("UPDATE shirt_images SET is_cover = CASE WHEN id = ? THEN 1 ELSE 0 END WHERE shirt_id = ?")
			.bind(id)
			.bind(shirt_id)
			.execute(&mut *tx)
			.await?;

		tx.commit().await?;
		tracing::debug!(image_id = id, shirt_id, "cover image set");

		self
			.get_image(id)
			.await?
			.ok_or_else(|| DbError::NotFound(format!("image {id}")))
	}

	/// Point every image of a shirt at `new_dir`, keeping file names.
	///
	/// Returns the number of rows changed.
	#[tracing::instrument(skip(self))]
	pub async fn rewrite_paths(&self, shirt_id: ShirtId, new_dir: &str) -> Result<u64, DbError> {
		let images = self.list_for_shirt(shirt_id).await?;
		let dir = new_dir.trim_end_matches('/');

		let mut tx = self.pool.begin().await?;
		let mut changed = 0;
		for image in &images {
			let name = image
				.file_path
				.rsplit('/')
				.next()
				.unwrap_or(image.file_path.as_str());
			let path = format!("{dir}/{name}");
			if path == image.file_path {
				continue;
			}
			sqlx::query("UPDATE shirt_images SET file_path = ? WHERE id = ?")
				.bind(&path)
				.bind(image.id)
				.execute(&mut *tx)
				.await?;
			changed += 1;
		}
		tx.commit().await?;

		tracing::debug!(shirt_id, changed, "image paths rewritten");
		Ok(changed)
	}
}

fn parse_image_row(row: &sqlx::sqlite::SqliteRow) -> Result<ShirtImage, DbError> {
	let is_cover: i32 = row.get("is_cover");
	let created_at: Option<String> = row.get("created_at");

	Ok(ShirtImage {
		id: row.get("id"),
		shirt_id: row.get("shirt_id"),
		file_path: row.get("file_path"),
		is_cover: is_cover != 0,
		created_at: created_at.as_deref().map(parse_timestamp).transpose()?,
	})
}
