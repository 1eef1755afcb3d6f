// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shirt image files on disk.
//!
//! Stored paths are relative to the upload root and `/`-separated; the
//! database holds exactly those strings and `/uploads/{path}` serves them.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tokio::fs;
use tracing::{debug, instrument, warn};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// Absolute paths, `..` and empty paths are rejected.
	#[error("invalid relative path: {0}")]
	InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Public URL of a stored image.
pub fn public_url(relative: &str) -> String {
	format!("/uploads/{}", relative.trim_start_matches('/'))
}

/// Join a directory and a file name the way stored paths are written.
pub fn join(dir: &str, file_name: &str) -> String {
	format!("{}/{}", dir.trim_end_matches('/'), file_name)
}

/// Parent directory of a stored path, if it has one.
pub fn parent(relative: &str) -> Option<&str> {
	relative.rsplit_once('/').map(|(dir, _)| dir).filter(|d| !d.is_empty())
}

#[derive(Debug, Clone)]
pub struct UploadStorage {
	root: PathBuf,
}

impl UploadStorage {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Create the upload root if it is missing.
	pub async fn ensure_root(&self) -> Result<()> {
		fs::create_dir_all(&self.root).await?;
		Ok(())
	}

	fn resolve(&self, relative: &str) -> Result<PathBuf> {
		let rel = Path::new(relative);
		let mut parts = rel.components().peekable();
		if parts.peek().is_none() {
			return Err(StorageError::InvalidPath(relative.to_string()));
		}
		for part in parts {
			if !matches!(part, Component::Normal(_)) {
				return Err(StorageError::InvalidPath(relative.to_string()));
			}
		}
		Ok(self.root.join(rel))
	}

	/// Write one file, creating its directory. Returns the stored path.
	#[instrument(skip(self, bytes), fields(len = bytes.len()))]
	pub async fn write(&self, dir: &str, file_name: &str, bytes: &[u8]) -> Result<String> {
		let relative = join(dir, file_name);
		let path = self.resolve(&relative)?;
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).await?;
		}
		fs::write(&path, bytes).await?;
		debug!(path = %relative, "image written");
		Ok(relative)
	}

	/// Names of the files currently in `dir`. A missing directory is empty.
	pub async fn file_names(&self, dir: &str) -> Result<Vec<String>> {
		let path = self.resolve(dir)?;
		let mut entries = match fs::read_dir(&path).await {
			Ok(entries) => entries,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
			Err(e) => return Err(e.into()),
		};

		let mut names = Vec::new();
		while let Some(entry) = entries.next_entry().await? {
			if entry.file_type().await?.is_file() {
				names.push(entry.file_name().to_string_lossy().into_owned());
			}
		}
		names.sort();
		Ok(names)
	}

	/// Move a shirt's folder after its league, brand, team or size changed.
	///
	/// Returns `false` when there was nothing to move. If the destination
	/// already exists the files are moved into it one by one.
	#[instrument(skip(self))]
	pub async fn move_dir(&self, from: &str, to: &str) -> Result<bool> {
		let source = self.resolve(from)?;
		let target = self.resolve(to)?;
		if source == target || !fs::try_exists(&source).await? {
			return Ok(false);
		}

		if fs::try_exists(&target).await? {
			let mut entries = fs::read_dir(&source).await?;
			while let Some(entry) = entries.next_entry().await? {
				fs::rename(entry.path(), target.join(entry.file_name())).await?;
			}
			fs::remove_dir(&source).await?;
		} else {
			if let Some(parent) = target.parent() {
				fs::create_dir_all(parent).await?;
			}
			fs::rename(&source, &target).await?;
		}

		self.prune_empty_parents(from).await;
		debug!("image folder moved");
		Ok(true)
	}

	/// Delete one stored file. A file that is already gone is not an error.
	#[instrument(skip(self))]
	pub async fn remove_file(&self, relative: &str) -> Result<()> {
		let path = self.resolve(relative)?;
		match fs::remove_file(&path).await {
			Ok(()) => {}
			Err(e) if e.kind() == ErrorKind::NotFound => {
				warn!(path = %relative, "image file already missing");
			}
			Err(e) => return Err(e.into()),
		}
		Ok(())
	}

	/// Delete a shirt folder with everything in it, then its emptied parents.
	#[instrument(skip(self))]
	pub async fn remove_dir(&self, relative: &str) -> Result<()> {
		let path = self.resolve(relative)?;
		match fs::remove_dir_all(&path).await {
			Ok(()) => {}
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
			Err(e) => return Err(e.into()),
		}
		self.prune_empty_parents(relative).await;
		Ok(())
	}

	/// Remove the now-empty ancestors of `relative`, stopping at the first
	/// non-empty one. The root itself is never removed.
	pub async fn prune_empty_parents(&self, relative: &str) {
		let mut current = parent(relative);
		while let Some(dir) = current {
			let Ok(path) = self.resolve(dir) else {
				return;
			};
			if fs::remove_dir(&path).await.is_err() {
				return;
			}
			debug!(dir, "empty folder removed");
			current = parent(dir);
		}
	}
}
