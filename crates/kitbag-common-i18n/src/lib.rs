// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization support for Kitbag.
//!
//! The storefront speaks English and Italian. This crate decides which one a
//! request gets and turns raw catalog attributes (garment type, kit variant,
//! sleeve code, colour, national team) into locale-specific display strings.
//! It also owns [`slugify`], which every product URL goes through.
//!
//! # Example
//!
//! ```
//! use kitbag_common_i18n::{color_label, resolve_locale, slugify, type_label, Locale};
//!
//! let (locale, _) = resolve_locale(Some("it"), None, None);
//! assert_eq!(locale, Locale::It);
//! assert_eq!(type_label("Training Top", locale), "Maglia Allenamento");
//! assert_eq!(color_label("Navy", locale), "Blu Navy");
//! assert_eq!(slugify("Inter Home 1997/98"), "inter-home-1997-98");
//! ```

mod labels;
mod locale;
mod national;
mod resolve;
mod slug;

pub use labels::{color_label, feature_label, sleeve_label, type_label, type_label_or_shirt};
pub use locale::{Locale, DEFAULT_LOCALE};
pub use national::{national_team_it, NATIONAL_TEAMS};
pub use resolve::{best_match, resolve_locale, LocaleSource};
pub use slug::slugify;
