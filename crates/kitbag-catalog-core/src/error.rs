// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
	#[error("missing required field: {0}")]
	MissingField(&'static str),

	#[error("invalid price: {0}")]
	InvalidPrice(String),

	#[error("invalid shirt status: {0}")]
	InvalidStatus(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
