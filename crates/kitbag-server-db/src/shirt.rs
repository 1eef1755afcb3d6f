// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shirt repository.
//!
//! All catalog queries go through here. Filters from [`CatalogFilter`] are
//! turned into parameterized `WHERE` clauses; column names in generated SQL
//! only ever come from [`FacetColumn`], never from user input.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use kitbag_catalog_core::{
	CatalogFilter, FacetCounts, PublicSort, Shirt, ShirtDraft, ShirtId, ShirtStatus,
};
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::DbError;

const SHIRT_COLUMNS: &str = "id, product_code, player_name, brand, team, league, size, color, \
	season, variant, garment_type, sleeves, player_issued, national_team, price_paid, \
	description, description_it, status, created_at";

/// Columns that can be listed or counted for filter dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetColumn {
	Brand,
	Team,
	League,
	Color,
	Season,
	GarmentType,
}

impl FacetColumn {
	pub fn column(&self) -> &'static str {
		match self {
			Self::Brand => "brand",
			Self::Team => "team",
			Self::League => "league",
			Self::Color => "color",
			Self::Season => "season",
			Self::GarmentType => "garment_type",
		}
	}

	/// Extra predicate keeping placeholder values out of the facet.
	fn exclusion(&self) -> Option<&'static str> {
		match self {
			Self::GarmentType => Some("LOWER(garment_type) != 'none'"),
			_ => None,
		}
	}
}

#[async_trait]
pub trait ShirtStore: Send + Sync {
	async fn create_shirt(&self, draft: &ShirtDraft) -> Result<Shirt, DbError>;
	async fn get_shirt(&self, id: ShirtId) -> Result<Option<Shirt>, DbError>;
	async fn update_shirt(&self, id: ShirtId, draft: &ShirtDraft) -> Result<Shirt, DbError>;
	async fn delete_shirt(&self, id: ShirtId) -> Result<bool, DbError>;
	async fn set_description_it(&self, id: ShirtId, text: Option<&str>) -> Result<(), DbError>;
	async fn list_public(
		&self,
		filter: &CatalogFilter,
		sort: PublicSort,
	) -> Result<Vec<Shirt>, DbError>;
	async fn list_admin(&self, filter: &CatalogFilter) -> Result<Vec<Shirt>, DbError>;
	async fn distinct_values(&self, column: FacetColumn) -> Result<Vec<String>, DbError>;
	async fn facet_counts(&self, column: FacetColumn) -> Result<FacetCounts, DbError>;
}

#[async_trait]
impl ShirtStore for ShirtRepository {
	async fn create_shirt(&self, draft: &ShirtDraft) -> Result<Shirt, DbError> {
		self.create_shirt(draft).await
	}

	async fn get_shirt(&self, id: ShirtId) -> Result<Option<Shirt>, DbError> {
		self.get_shirt(id).await
	}

	async fn update_shirt(&self, id: ShirtId, draft: &ShirtDraft) -> Result<Shirt, DbError> {
		self.update_shirt(id, draft).await
	}

	async fn delete_shirt(&self, id: ShirtId) -> Result<bool, DbError> {
		self.delete_shirt(id).await
	}

	async fn set_description_it(&self, id: ShirtId, text: Option<&str>) -> Result<(), DbError> {
		self.set_description_it(id, text).await
	}

	async fn list_public(
		&self,
		filter: &CatalogFilter,
		sort: PublicSort,
	) -> Result<Vec<Shirt>, DbError> {
		self.list_public(filter, sort).await
	}

	async fn list_admin(&self, filter: &CatalogFilter) -> Result<Vec<Shirt>, DbError> {
		self.list_admin(filter).await
	}

	async fn distinct_values(&self, column: FacetColumn) -> Result<Vec<String>, DbError> {
		self.distinct_values(column).await
	}

	async fn facet_counts(&self, column: FacetColumn) -> Result<FacetCounts, DbError> {
		self.facet_counts(column).await
	}
}

/// Repository for shirt rows.
#[derive(Clone)]
pub struct ShirtRepository {
	pool: SqlitePool,
}

impl ShirtRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Insert a shirt. The product code is one past the current maximum,
	/// computed inside the insert.
	///
	/// # Errors
	/// Returns `DbError::Conflict` if a concurrent insert took the same code.
	#[tracing::instrument(skip(self, draft), fields(team = %draft.team))]
	pub async fn create_shirt(&self, draft: &ShirtDraft) -> Result<Shirt, DbError> {
		let now = timestamp(Utc::now());

		let row = sqlx::query(
			r#"
			INSERT INTO shirts (
				product_code, player_name, brand, team, league, size, color, season,
				variant, garment_type, sleeves, player_issued, national_team, price_paid,
				description, description_it, status, created_at, updated_at
			)
			VALUES (
				(SELECT COALESCE(MAX(product_code), 0) + 1 FROM shirts),
				?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?
			)
			RETURNING id
			"#,
		)
		.bind(&draft.player_name)
		.bind(&draft.brand)
		.bind(&draft.team)
		.bind(&draft.league)
		.bind(&draft.size)
		.bind(&draft.color)
		.bind(&draft.season)
		.bind(&draft.variant)
		.bind(&draft.garment_type)
		.bind(&draft.sleeves)
		.bind(draft.player_issued as i32)
		.bind(draft.national_team as i32)
		.bind(draft.price_paid)
		.bind(&draft.description)
		.bind(&draft.description_it)
		.bind(draft.status.as_str())
		.bind(&now)
		.bind(&now)
		.fetch_one(&self.pool)
		.await
		.map_err(|e| DbError::from_write(e, "Product code"))?;

		let id: ShirtId = row.get("id");
		tracing::debug!(shirt_id = id, "shirt created");

		self
			.get_shirt(id)
			.await?
			.ok_or_else(|| DbError::Internal(format!("shirt {id} vanished after insert")))
	}

	#[tracing::instrument(skip(self))]
	pub async fn get_shirt(&self, id: ShirtId) -> Result<Option<Shirt>, DbError> {
		let sql = format!("SELECT {SHIRT_COLUMNS} FROM shirts WHERE id = ?");
		let row = sqlx::query(&sql)
			.bind(id)
			.fetch_optional(&self.pool)
			.await?;

		row.map(|r| parse_shirt_row(&r)).transpose()
	}

	/// Overwrite the editable fields. `product_code` and `created_at` are
	/// left alone.
	///
	/// # Errors
	/// Returns `DbError::NotFound` if the shirt does not exist.
	#[tracing::instrument(skip(self, draft))]
	pub async fn update_shirt(&self, id: ShirtId, draft: &ShirtDraft) -> Result<Shirt, DbError> {
		let result = sqlx::query(
			r#"
			UPDATE shirts SET
				player_name = ?, brand = ?, team = ?, league = ?, size = ?, color = ?,
				season = ?, variant = ?, garment_type = ?, sleeves = ?, player_issued = ?,
				national_team = ?, price_paid = ?, description = ?, description_it = ?,
				status = ?, updated_at = ?
			WHERE id = ?
			"#,
		)
		.bind(&draft.player_name)
		.bind(&draft.brand)
		.bind(&draft.team)
		.bind(&draft.league)
		.bind(&draft.size)
		.bind(&draft.color)
		.bind(&draft.season)
		.bind(&draft.variant)
		.bind(&draft.garment_type)
		.bind(&draft.sleeves)
		.bind(draft.player_issued as i32)
		.bind(draft.national_team as i32)
		.bind(draft.price_paid)
		.bind(&draft.description)
		.bind(&draft.description_it)
		.bind(draft.status.as_str())
		.bind(timestamp(Utc::now()))
		.bind(id)
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("shirt {id}")));
		}
		tracing::debug!(shirt_id = id, "shirt updated");

		self
			.get_shirt(id)
			.await?
			.ok_or_else(|| DbError::NotFound(format!("shirt {id}")))
	}

	/// Delete a shirt and, through the foreign key, its image rows.
	///
	/// Returns `false` if there was nothing to delete.
	#[tracing::instrument(skip(self))]
	pub async fn delete_shirt(&self, id: ShirtId) -> Result<bool, DbError> {
		let result = sqlx::query("DELETE FROM shirts WHERE id = ?")
			.bind(id)
			.execute(&self.pool)
			.await?;

		let deleted = result.rows_affected() > 0;
		tracing::debug!(shirt_id = id, deleted, "shirt deleted");
		Ok(deleted)
	}

	#[tracing::instrument(skip(self, text))]
	pub async fn set_description_it(&self, id: ShirtId, text: Option<&str>) -> Result<(), DbError> {
		let result =
			sqlx::query("UPDATE shirts SET description_it = ?, updated_at = ? WHERE id = ?")
				.bind(text)
				.bind(timestamp(Utc::now()))
				.bind(id)
				.execute(&self.pool)
				.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!("shirt {id}")));
		}
		tracing::debug!(shirt_id = id, present = text.is_some(), "italian description set");
		Ok(())
	}

	/// Storefront listing: active shirts only.
	#[tracing::instrument(skip(self, filter))]
	pub async fn list_public(
		&self,
		filter: &CatalogFilter,
		sort: PublicSort,
	) -> Result<Vec<Shirt>, DbError> {
		let mut clause = FilterClause::from_filter(&filter.for_storefront());
		clause.conditions.push("status = 'active'".to_string());

		let order = match sort {
			PublicSort::Newest => "created_at DESC, id DESC",
			PublicSort::Oldest => "created_at ASC, id ASC",
			PublicSort::Unordered => "id ASC",
		};
		let shirts = self.select(&clause, order).await?;

		tracing::debug!(count = shirts.len(), sort = sort.as_str(), "public shirts listed");
		Ok(shirts)
	}

	/// Dashboard listing: every status, garment type filter honored. Rows come
	/// back newest first; callers re-sort with `sort_for_dashboard`.
	#[tracing::instrument(skip(self, filter))]
	pub async fn list_admin(&self, filter: &CatalogFilter) -> Result<Vec<Shirt>, DbError> {
		let clause = FilterClause::from_filter(filter);
		let shirts = self.select(&clause, "created_at DESC, id DESC").await?;

		tracing::debug!(count = shirts.len(), "admin shirts listed");
		Ok(shirts)
	}

	/// Distinct non-empty values of a column across the whole table, sorted.
	#[tracing::instrument(skip(self))]
	pub async fn distinct_values(&self, column: FacetColumn) -> Result<Vec<String>, DbError> {
		let col = column.column();
		let mut sql = format!(
			"SELECT DISTINCT {col} AS value FROM shirts WHERE {col} IS NOT NULL AND {col} != ''"
		);
		if let Some(extra) = column.exclusion() {
			sql.push_str(" AND ");
			sql.push_str(extra);
		}
		sql.push_str(&format!(" ORDER BY {col}"));

		let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
		let values: Vec<String> = rows.iter().map(|r| r.get("value")).collect();

		tracing::debug!(column = col, count = values.len(), "distinct values listed");
		Ok(values)
	}

	/// Number of shirts per value, NULL and empty values excluded.
	#[tracing::instrument(skip(self))]
	pub async fn facet_counts(&self, column: FacetColumn) -> Result<FacetCounts, DbError> {
		let col = column.column();
		let mut sql = format!(
			"SELECT {col} AS value, COUNT(*) AS cnt FROM shirts \
			 WHERE {col} IS NOT NULL AND {col} != ''"
		);
		if let Some(extra) = column.exclusion() {
			sql.push_str(" AND ");
			sql.push_str(extra);
		}
		sql.push_str(&format!(" GROUP BY {col}"));

		let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
		let counts: FacetCounts = rows
			.iter()
			.map(|r| (r.get::<String, _>("value"), r.get::<i64, _>("cnt")))
			.collect();

		tracing::debug!(column = col, values = counts.len(), "facet counted");
		Ok(counts)
	}

	async fn select(&self, clause: &FilterClause, order: &str) -> Result<Vec<Shirt>, DbError> {
		let sql = format!(
			"SELECT {SHIRT_COLUMNS} FROM shirts WHERE {} ORDER BY {order}",
			clause.where_clause()
		);
		let mut query = sqlx::query(&sql);
		for value in &clause.binds {
			query = query.bind(value);
		}

		let rows = query.fetch_all(&self.pool).await?;
		rows.iter().map(parse_shirt_row).collect()
	}
}

/// `WHERE` conditions with their positional bind values, in order.
#[derive(Debug, Default, PartialEq)]
struct FilterClause {
	conditions: Vec<String>,
	binds: Vec<String>,
}

impl FilterClause {
	fn from_filter(filter: &CatalogFilter) -> Self {
		let mut clause = Self::default();

		if let Some(q) = filter.q() {
			let pattern = like_pattern(q);
			clause.conditions.push(
				"(LOWER(team) LIKE LOWER(?) ESCAPE '\\' OR LOWER(brand) LIKE LOWER(?) ESCAPE '\\' \
				 OR LOWER(league) LIKE LOWER(?) ESCAPE '\\' \
				 OR LOWER(COALESCE(description, '')) LIKE LOWER(?) ESCAPE '\\')"
					.to_string(),
			);
			for _ in 0..4 {
				clause.binds.push(pattern.clone());
			}
		}
		if let Some(team) = filter.team() {
			clause
				.conditions
				.push("LOWER(team) LIKE LOWER(?) ESCAPE '\\'".to_string());
			clause.binds.push(like_pattern(team));
		}
		let exact = [
			("brand", filter.brand()),
			("league", filter.league()),
			("color", filter.color()),
			("season", filter.season()),
			("garment_type", filter.garment_type()),
		];
		for (column, value) in exact {
			if let Some(v) = value {
				clause.conditions.push(format!("{column} = ?"));
				clause.binds.push(v.to_string());
			}
		}

		clause
	}

	fn where_clause(&self) -> String {
		if self.conditions.is_empty() {
			"1=1".to_string()
		} else {
			self.conditions.join(" AND ")
		}
	}
}

/// `%value%` with LIKE wildcards escaped. Case folding happens in SQL on
/// both sides, so SQLite's ASCII-only `LOWER` treats them alike.
fn like_pattern(value: &str) -> String {
	let mut out = String::with_capacity(value.len() + 2);
	out.push('%');
	for c in value.chars() {
		if matches!(c, '%' | '_' | '\\') {
			out.push('\\');
		}
		out.push(c);
	}
	out.push('%');
	out
}

pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
	at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DbError> {
	DateTime::parse_from_rfc3339(raw)
		.map(|dt| dt.with_timezone(&Utc))
		.map_err(|e| DbError::CorruptRow(format!("Invalid timestamp {raw:?}: {e}")))
}

fn parse_shirt_row(row: &sqlx::sqlite::SqliteRow) -> Result<Shirt, DbError> {
	let status: String = row.get("status");
	let created_at: Option<String> = row.get("created_at");
	let player_issued: i32 = row.get("player_issued");
	let national_team: i32 = row.get("national_team");

	Ok(Shirt {
		id: row.get("id"),
		product_code: row.get("product_code"),
		player_name: row.get("player_name"),
		brand: row.get("brand"),
		team: row.get("team"),
		league: row.get("league"),
		size: row.get("size"),
		color: row.get("color"),
		season: row.get("season"),
		variant: row.get("variant"),
		garment_type: row.get("garment_type"),
		sleeves: row.get("sleeves"),
		player_issued: player_issued != 0,
		national_team: national_team != 0,
		price_paid: row.get("price_paid"),
		description: row.get("description"),
		description_it: row.get("description_it"),
		status: status
			.parse::<ShirtStatus>()
			.map_err(|e| DbError::CorruptRow(e.to_string()))?,
		created_at: created_at.as_deref().map(parse_timestamp).transpose()?,
	})
}
