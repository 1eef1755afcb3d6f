// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The multipart add/edit shirt form.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::Multipart;
use kitbag_catalog_core::{ShirtDraft, ShirtStatus};

use crate::error::ServerError;

/// An image part of the form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
	/// Position among all `images` parts, counting empty ones. File numbers
	/// and `cover_index` refer to this position.
	pub index: usize,
	pub file_name: String,
	pub bytes: Bytes,
}

#[derive(Debug, Default)]
pub struct ShirtForm {
	fields: HashMap<String, String>,
	pub files: Vec<UploadedFile>,
}

impl ShirtForm {
	/// Read every part. Text parts are kept by name (last one wins); `images`
	/// parts without a file name are skipped, as browsers send those for an
	/// empty file input, but they still take up a position.
	pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ServerError> {
		let mut form = ShirtForm::default();
		let mut image_parts = 0;

		while let Some(field) = multipart
			.next_field()
			.await
			.map_err(|e| ServerError::BadRequest(format!("Failed to read multipart data: {e}")))?
		{
			let name = field.name().unwrap_or_default().to_string();
			let file_name = field.file_name().map(str::to_string);

			if name == "images" {
				let bytes = field
					.bytes()
					.await
					.map_err(|e| ServerError::BadRequest(format!("Failed to read image: {e}")))?;
				let index = image_parts;
				image_parts += 1;
				match file_name {
					Some(file_name) if !file_name.is_empty() => form.files.push(UploadedFile {
						index,
						file_name,
						bytes,
					}),
					_ => tracing::trace!(index, "empty image part skipped"),
				}
				continue;
			}

			let value = field
				.text()
				.await
				.map_err(|e| ServerError::BadRequest(format!("Failed to read field {name}: {e}")))?;
			form.fields.insert(name, value);
		}

		tracing::debug!(fields = form.fields.len(), files = form.files.len(), "shirt form read");
		Ok(form)
	}

	#[cfg(test)]
	pub(crate) fn from_fields(pairs: &[(&str, &str)]) -> Self {
		Self {
			fields: pairs
				.iter()
				.map(|(k, v)| (k.to_string(), v.to_string()))
				.collect(),
			files: Vec::new(),
		}
	}

	fn text(&self, name: &str) -> String {
		self.fields.get(name).cloned().unwrap_or_default()
	}

	fn optional(&self, name: &str) -> Option<String> {
		self.fields.get(name).cloned()
	}

	/// Checkbox semantics: present and not an explicit "off" value.
	fn flag(&self, name: &str) -> bool {
		match self.fields.get(name).map(|v| v.trim().to_ascii_lowercase()) {
			None => false,
			Some(v) => !matches!(v.as_str(), "" | "0" | "false" | "off" | "no"),
		}
	}

	/// The submitted shirt, normalized and validated.
	pub fn draft(&self) -> Result<ShirtDraft, ServerError> {
		let status = match self.fields.get("status").map(|s| s.trim()) {
			None | Some("") => ShirtStatus::Active,
			Some(raw) => raw.parse::<ShirtStatus>()?,
		};

		let draft = ShirtDraft {
			player_name: self.optional("player_name"),
			brand: self.text("brand"),
			team: self.text("team"),
			league: self.text("league"),
			size: self.text("size"),
			color: self.text("color"),
			season: self.text("season"),
			variant: self.optional("variant"),
			garment_type: self.optional("type").or_else(|| self.optional("garment_type")),
			sleeves: self.optional("sleeves"),
			player_issued: self.flag("player_issued"),
			national_team: self.flag("national_team"),
			price_paid: ShirtDraft::parse_price(&self.text("price_paid"))?,
			description: self.optional("description"),
			description_it: self.optional("description_it"),
			status,
		}
		.normalized();

		draft.validate()?;
		Ok(draft)
	}

	/// Which of the uploaded images becomes the cover. Defaults to the first.
	pub fn cover_index(&self) -> Result<usize, ServerError> {
		match self.fields.get("cover_index").map(|s| s.trim()) {
			None | Some("") => Ok(0),
			Some(raw) => raw
				.parse()
				.map_err(|_| ServerError::BadRequest(format!("Invalid cover index: {raw}"))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const REQUIRED: &[(&str, &str)] = &[
		("brand", " Umbro "),
		("team", "Manchester United"),
		("league", "Premier League"),
		("size", "XL"),
		("color", "Red"),
		("season", "1994/95"),
	];

	fn form(extra: &[(&str, &str)]) -> ShirtForm {
		let mut pairs = REQUIRED.to_vec();
		pairs.extend_from_slice(extra);
		ShirtForm::from_fields(&pairs)
	}

	#[test]
	fn draft_from_minimal_form() {
		let draft = form(&[]).draft().unwrap();
		assert_eq!(draft.brand, "Umbro");
		assert_eq!(draft.status, ShirtStatus::Active);
		assert!(!draft.player_issued);
		assert_eq!(draft.price_paid, None);
		assert_eq!(draft.description_it, None);
	}

	#[test]
	fn draft_reads_flags_price_and_type() {
		let draft = form(&[
			("player_issued", "on"),
			("national_team", "false"),
			("price_paid", "49,90"),
			("type", "Training Top"),
			("status", "sold"),
			("description_it", " NONE "),
		])
		.draft()
		.unwrap();

		assert!(draft.player_issued);
		assert!(!draft.national_team);
		assert_eq!(draft.price_paid, Some(49.9));
		assert_eq!(draft.garment_type.as_deref(), Some("Training Top"));
		assert_eq!(draft.status, ShirtStatus::Sold);
		assert_eq!(draft.description_it, None);
	}

	#[test]
	fn invalid_input_is_bad_request() {
		assert!(matches!(
			ShirtForm::from_fields(&[("brand", "Umbro")]).draft(),
			Err(ServerError::BadRequest(_))
		));
		assert!(matches!(form(&[("price_paid", "lots")]).draft(), Err(ServerError::BadRequest(_))));
		assert!(matches!(form(&[("status", "lost")]).draft(), Err(ServerError::BadRequest(_))));
	}

	#[test]
	fn cover_index_defaults_to_first() {
		assert_eq!(form(&[]).cover_index().unwrap(), 0);
		assert_eq!(form(&[("cover_index", "2")]).cover_index().unwrap(), 2);
		assert!(form(&[("cover_index", "-1")]).cover_index().is_err());
	}
}
