// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use unicode_normalization::UnicodeNormalization;

/// URL slug for arbitrary text.
///
/// Accented letters lose their accents (`Perù` becomes `peru`), other
/// non-ASCII characters are dropped, and every run of characters outside
/// `[a-z0-9]` collapses into a single `-`. The result never starts or ends
/// with `-`.
pub fn slugify(value: &str) -> String {
	let mut slug = String::with_capacity(value.len());
	let mut pending_dash = false;

	for c in value.nfkd().filter(char::is_ascii) {
		if c.is_ascii_alphanumeric() {
			if pending_dash && !slug.is_empty() {
				slug.push('-');
			}
			pending_dash = false;
			slug.push(c.to_ascii_lowercase());
		} else {
			pending_dash = true;
		}
	}

	slug
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn basic_slugs() {
		assert_eq!(slugify("AC Milan Home 1988/89"), "ac-milan-home-1988-89");
		assert_eq!(slugify("  --Inter--  "), "inter");
		assert_eq!(slugify(""), "");
		assert_eq!(slugify("!!!"), "");
	}

	#[test]
	fn accents_are_folded() {
		assert_eq!(slugify("Perù Trasferta"), "peru-trasferta");
		assert_eq!(slugify("Bayern München"), "bayern-munchen");
		assert_eq!(slugify("Côte d'Ivoire"), "cote-d-ivoire");
	}

	#[test]
	fn non_latin_text_is_dropped() {
		assert_eq!(slugify("日本 Japan"), "japan");
	}

	#[test]
	fn compatibility_forms_decompose() {
		assert_eq!(slugify("Ｌ/Ｓ"), "l-s");
		assert_eq!(slugify("½ zip"), "12-zip");
	}

	proptest! {
		#[test]
		fn slug_alphabet_and_edges(input in "\\PC{0,60}") {
			let slug = slugify(&input);
			prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
			prop_assert!(!slug.starts_with('-'));
			prop_assert!(!slug.ends_with('-'));
			prop_assert!(!slug.contains("--"));
		}

		#[test]
		fn slugify_is_idempotent(input in "\\PC{0,60}") {
			let once = slugify(&input);
			prop_assert_eq!(slugify(&once), once.clone());
		}
	}
}
