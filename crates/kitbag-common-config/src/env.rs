// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret loading from the environment with `*_FILE` support.

use std::path::PathBuf;
use std::{env, fs};

use thiserror::Error;

use crate::secret::Secret;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Load a secret from `VAR`, or from the file whose path is in `VAR_FILE`.
///
/// `VAR_FILE` wins when both are set. One trailing newline is stripped from
/// file contents. A directly set but empty `VAR` counts as unset, which lets
/// deployments blank out a credential without removing the variable.
///
/// ```no_run
/// use kitbag_common_config::load_secret_env;
///
/// if let Some(key) = load_secret_env("KITBAG_SERVER_OPENROUTER_API_KEY")? {
///     println!("translation key configured: {key}"); // prints "[REDACTED]"
/// }
/// # Ok::<(), kitbag_common_config::SecretEnvError>(())
/// ```
pub fn load_secret_env(var: &str) -> Result<Option<Secret<String>>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			path: path.clone(),
			source,
		})?;

		let secret = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(Secret::new(secret)));
	}

	match env::var(var) {
		Ok(value) if !value.is_empty() => Ok(Some(Secret::new(value))),
		_ => Ok(None),
	}
}
