// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shirt and image records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, Result};

pub type ShirtId = i64;
pub type ShirtImageId = i64;

/// Listing state of a shirt. Only `Active` shirts appear in the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShirtStatus {
	#[default]
	Active,
	Reserved,
	Sold,
	Hidden,
}

impl ShirtStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Active => "active",
			Self::Reserved => "reserved",
			Self::Sold => "sold",
			Self::Hidden => "hidden",
		}
	}

	pub fn all() -> &'static [ShirtStatus] {
		&[Self::Active, Self::Reserved, Self::Sold, Self::Hidden]
	}

	pub fn is_public(&self) -> bool {
		matches!(self, Self::Active)
	}
}

impl fmt::Display for ShirtStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ShirtStatus {
	type Err = CatalogError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"active" => Ok(Self::Active),
			"reserved" => Ok(Self::Reserved),
			"sold" => Ok(Self::Sold),
			"hidden" => Ok(Self::Hidden),
			_ => Err(CatalogError::InvalidStatus(s.to_string())),
		}
	}
}

/// A shirt in the inventory.
///
/// Free-text attributes are stored in English exactly as entered; display
/// code localizes them on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shirt {
	pub id: ShirtId,
	/// Sequential catalog number shown to customers.
	pub product_code: i64,
	pub player_name: Option<String>,
	pub brand: String,
	pub team: String,
	pub league: String,
	pub size: String,
	pub color: String,
	pub season: String,
	/// Kit variant: Home, Away, Third, ...
	pub variant: Option<String>,
	/// Garment type: Shirt, Training Top, Hoodie, ...
	pub garment_type: Option<String>,
	/// `L/S` or `S/S`
	pub sleeves: Option<String>,
	pub player_issued: bool,
	pub national_team: bool,
	pub price_paid: Option<f64>,
	pub description: Option<String>,
	pub description_it: Option<String>,
	pub status: ShirtStatus,
	pub created_at: Option<DateTime<Utc>>,
}

impl Shirt {
	/// Directory-determining fields, in the order the upload layout uses them.
	pub fn layout_key(&self) -> (&str, &str, &str, &str) {
		(&self.league, &self.brand, &self.team, &self.size)
	}
}

/// An image attached to a shirt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShirtImage {
	pub id: ShirtImageId,
	pub shirt_id: ShirtId,
	/// Path relative to the upload root, always `/`-separated.
	pub file_path: String,
	pub is_cover: bool,
	pub created_at: Option<DateTime<Utc>>,
}

/// The image to show on catalog cards: the flagged cover, else the first one.
pub fn cover_image(images: &[ShirtImage]) -> Option<&ShirtImage> {
	images.iter().find(|i| i.is_cover).or_else(|| images.first())
}

/// Editable fields of a shirt as submitted by the admin form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShirtDraft {
	pub player_name: Option<String>,
	pub brand: String,
	pub team: String,
	pub league: String,
	pub size: String,
	pub color: String,
	pub season: String,
	pub variant: Option<String>,
	pub garment_type: Option<String>,
	pub sleeves: Option<String>,
	#[serde(default)]
	pub player_issued: bool,
	#[serde(default)]
	pub national_team: bool,
	pub price_paid: Option<f64>,
	pub description: Option<String>,
	pub description_it: Option<String>,
	#[serde(default)]
	pub status: ShirtStatus,
}

impl ShirtDraft {
	/// Trims every text field and turns blank optional fields into `None`.
	pub fn normalized(mut self) -> Self {
		fn trim(s: &mut String) {
			let trimmed = s.trim();
			if trimmed.len() != s.len() {
				*s = trimmed.to_string();
			}
		}
		fn opt(o: Option<String>) -> Option<String> {
			o.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
		}

		trim(&mut self.brand);
		trim(&mut self.team);
		trim(&mut self.league);
		trim(&mut self.size);
		trim(&mut self.color);
		trim(&mut self.season);
		self.player_name = opt(self.player_name);
		self.variant = opt(self.variant);
		self.garment_type = opt(self.garment_type);
		self.sleeves = opt(self.sleeves);
		self.description = opt(self.description);
		self.description_it = normalize_description_it(self.description_it.as_deref());
		self
	}

	/// Checks that the fields every listing needs are present.
	pub fn validate(&self) -> Result<()> {
		let required = [
			("brand", &self.brand),
			("team", &self.team),
			("league", &self.league),
			("size", &self.size),
			("color", &self.color),
			("season", &self.season),
		];
		for (name, value) in required {
			if value.trim().is_empty() {
				return Err(CatalogError::MissingField(name));
			}
		}
		if let Some(price) = self.price_paid {
			if !price.is_finite() || price < 0.0 {
				return Err(CatalogError::InvalidPrice(price.to_string()));
			}
		}
		Ok(())
	}

	/// Parses a price field. Blank means unknown; a comma decimal separator is
	/// accepted.
	pub fn parse_price(raw: &str) -> Result<Option<f64>> {
		let raw = raw.trim();
		if raw.is_empty() {
			return Ok(None);
		}
		raw.replace(',', ".")
			.parse::<f64>()
			.ok()
			.filter(|p| p.is_finite() && *p >= 0.0)
			.map(Some)
			.ok_or_else(|| CatalogError::InvalidPrice(raw.to_string()))
	}
}

/// Italian description as submitted.
///
/// The admin form uses the literal `none` (any case) to mean "no Italian
/// text"; that and blank input both come back as `None`.
pub fn normalize_description_it(raw: Option<&str>) -> Option<String> {
	let value = raw?.trim();
	if value.is_empty() || value.eq_ignore_ascii_case("none") {
		None
	} else {
		Some(value.to_string())
	}
}

#[cfg(test)]
pub(crate) mod fixtures {
	use super::*;

	pub fn shirt() -> Shirt {
		Shirt {
			id: 7,
			product_code: 7,
			player_name: None,
			brand: "Umbro".to_string(),
			team: "England".to_string(),
			league: "Nazionali".to_string(),
			size: "L".to_string(),
			color: "White".to_string(),
			season: "1996".to_string(),
			variant: Some("Home".to_string()),
			garment_type: None,
			sleeves: Some("S/S".to_string()),
			player_issued: false,
			national_team: true,
			price_paid: Some(45.0),
			description: Some("Euro 96 home shirt".to_string()),
			description_it: None,
			status: ShirtStatus::Active,
			created_at: None,
		}
	}

	pub fn image(id: ShirtImageId, is_cover: bool) -> ShirtImage {
		ShirtImage {
			id,
			shirt_id: 7,
			file_path: format!("Nazionali/Umbro/England/7_L/{id}.jpg"),
			is_cover,
			created_at: None,
		}
	}
}
