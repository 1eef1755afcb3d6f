// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Image upload storage configuration.

use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_DIR: &str = "uploads";
const DEFAULT_MAX_REQUEST_MB: u64 = 64;

#[derive(Debug, Clone)]
pub struct UploadsConfig {
	/// Root folder for shirt images. Created at start-up.
	pub dir: PathBuf,
	/// Largest accepted admin form body, images included.
	pub max_request_bytes: usize,
}

impl Default for UploadsConfig {
	fn default() -> Self {
		UploadsConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadsConfigLayer {
	#[serde(default)]
	pub dir: Option<PathBuf>,
	#[serde(default)]
	pub max_request_mb: Option<u64>,
}

impl UploadsConfigLayer {
	pub fn merge(&mut self, other: UploadsConfigLayer) {
		if other.dir.is_some() {
			self.dir = other.dir;
		}
		if other.max_request_mb.is_some() {
			self.max_request_mb = other.max_request_mb;
		}
	}

	pub fn finalize(self) -> UploadsConfig {
		let mb = self.max_request_mb.unwrap_or(DEFAULT_MAX_REQUEST_MB);
		UploadsConfig {
			dir: self.dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DIR)),
			max_request_bytes: usize::try_from(mb.saturating_mul(1024 * 1024)).unwrap_or(usize::MAX),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = UploadsConfigLayer::default().finalize();
		assert_eq!(config.dir, PathBuf::from("uploads"));
		assert_eq!(config.max_request_bytes, 64 * 1024 * 1024);
	}

	#[test]
	fn merge_overrides_dir() {
		let mut base = UploadsConfigLayer {
			dir: Some(PathBuf::from("a")),
			max_request_mb: Some(8),
		};
		base.merge(UploadsConfigLayer {
			dir: Some(PathBuf::from("/srv/kitbag/uploads")),
			max_request_mb: None,
		});
		let config = base.finalize();
		assert_eq!(config.dir, PathBuf::from("/srv/kitbag/uploads"));
		assert_eq!(config.max_request_bytes, 8 * 1024 * 1024);
	}
}
