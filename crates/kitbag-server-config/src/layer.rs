// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration layer for merging from multiple sources.

use serde::Deserialize;

use crate::sections::{
	AuthConfigLayer, ContactConfigLayer, DatabaseConfigLayer, HttpConfigLayer, LoggingConfigLayer,
	TranslationConfigLayer, UploadsConfigLayer,
};

/// Server configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub database: Option<DatabaseConfigLayer>,
	#[serde(default)]
	pub auth: Option<AuthConfigLayer>,
	#[serde(default)]
	pub uploads: Option<UploadsConfigLayer>,
	#[serde(default)]
	pub translation: Option<TranslationConfigLayer>,
	#[serde(default)]
	pub contact: Option<ContactConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_option(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_option(
			&mut self.database,
			other.database,
			DatabaseConfigLayer::merge,
		);
		merge_option(&mut self.auth, other.auth, AuthConfigLayer::merge);
		merge_option(&mut self.uploads, other.uploads, UploadsConfigLayer::merge);
		merge_option(
			&mut self.translation,
			other.translation,
			TranslationConfigLayer::merge,
		);
		merge_option(&mut self.contact, other.contact, ContactConfigLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn merge_empty_layers() {
		let mut base = ServerConfigLayer::default();
		base.merge(ServerConfigLayer::default());
		assert!(base.http.is_none());
		assert!(base.auth.is_none());
	}

	#[test]
	fn merge_other_overwrites_field_by_field() {
		let mut base = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				port: Some(9000),
				host: Some("127.0.0.1".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				port: Some(8080),
				..Default::default()
			}),
			..Default::default()
		});
		let http = base.http.unwrap();
		assert_eq!(http.port, Some(8080));
		assert_eq!(http.host.as_deref(), Some("127.0.0.1"));
	}

	#[test]
	fn merge_adds_missing_sections() {
		let mut base = ServerConfigLayer::default();
		base.merge(ServerConfigLayer {
			database: Some(DatabaseConfigLayer {
				url: Some("sqlite::memory:".to_string()),
			}),
			..Default::default()
		});
		assert_eq!(
			base.database.unwrap().url.as_deref(),
			Some("sqlite::memory:")
		);
	}

	#[test]
	fn toml_sections_deserialize() {
		let layer: ServerConfigLayer = toml::from_str(
			r#"
[http]
port = 5000

[auth]
admin_prefix = "gestione"

[contact]
instagram_handle = "kitbag.vintage"
"#,
		)
		.unwrap();
		assert_eq!(layer.http.unwrap().port, Some(5000));
		assert_eq!(layer.auth.unwrap().admin_prefix.as_deref(), Some("gestione"));
		assert_eq!(
			layer.contact.unwrap().instagram_handle.as_deref(),
			Some("kitbag.vintage")
		);
		assert!(layer.translation.is_none());
	}
}
