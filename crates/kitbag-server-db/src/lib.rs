// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! # kitbag-server-db
//!
//! Persistence layer for the Kitbag server using SQLite via sqlx.
//!
//! Each table has a `*Store` trait describing its operations and a
//! `*Repository` holding a `SqlitePool` that implements it:
//!
//! | Repository | Table |
//! |------------|-------|
//! | [`ShirtRepository`] | `shirts` |
//! | [`ImageRepository`] | `shirt_images` |
//! | [`AdminSessionRepository`] | `admin_sessions` |
//!
//! Lookups where absence is normal return `Result<Option<T>>`; updates of an
//! ID that must exist return [`DbError::NotFound`]. Deletes return `true`
//! when a row was removed.
//!
//! Timestamps are stored as RFC 3339 text in UTC.

pub mod error;
pub mod image;
pub mod migrations;
pub mod pool;
pub mod session;
pub mod shirt;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{DbError, Result};
pub use image::{ImageRepository, ImageStore};
pub use migrations::run_migrations;
pub use pool::create_pool;
pub use session::{AdminSession, AdminSessionRepository, AdminSessionStore};
pub use shirt::{FacetColumn, ShirtRepository, ShirtStore};
