// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locales.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A locale the storefront can render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	#[default]
	En,
	It,
}

impl Locale {
	pub fn as_str(&self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::It => "it",
		}
	}

	/// Parses `en` or `it`, ignoring case and surrounding whitespace.
	pub fn parse(value: &str) -> Option<Locale> {
		let value = value.trim();
		if value.eq_ignore_ascii_case("en") {
			Some(Locale::En)
		} else if value.eq_ignore_ascii_case("it") {
			Some(Locale::It)
		} else {
			None
		}
	}

	pub fn is_italian(&self) -> bool {
		matches!(self, Locale::It)
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Locale {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Locale::parse(s).ok_or_else(|| format!("unsupported locale: {s}"))
	}
}

pub const DEFAULT_LOCALE: Locale = Locale::En;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_accepts_known_codes_only() {
		assert_eq!(Locale::parse("en"), Some(Locale::En));
		assert_eq!(Locale::parse(" IT "), Some(Locale::It));
		assert_eq!(Locale::parse("it-IT"), None);
		assert_eq!(Locale::parse("de"), None);
		assert_eq!(Locale::parse(""), None);
	}

	#[test]
	fn from_str_reports_the_rejected_code() {
		assert_eq!("it".parse::<Locale>(), Ok(Locale::It));
		assert_eq!(
			"fr".parse::<Locale>(),
			Err("unsupported locale: fr".to_string())
		);
	}

	#[test]
	fn default_locale_is_english() {
		assert_eq!(DEFAULT_LOCALE, Locale::default());
		assert_eq!(DEFAULT_LOCALE, Locale::En);
	}

	#[test]
	fn serde_uses_lowercase_codes() {
		assert_eq!(serde_json::to_string(&Locale::It).unwrap(), "\"it\"");
		assert_eq!(
			serde_json::from_str::<Locale>("\"en\"").unwrap(),
			Locale::En
		);
	}
}
