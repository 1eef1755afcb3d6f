// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! On-disk layout of uploaded images.
//!
//! Images live under `league/brand/team/{id}_{size}/` relative to the upload
//! root and are numbered `1.jpg`, `2.png`, ... in upload order. Paths are
//! `/`-separated so they can be stored and served as-is.

use unicode_normalization::UnicodeNormalization;

use crate::shirt::{Shirt, ShirtId};

/// Stands in for a path component that sanitizes to nothing.
const EMPTY_COMPONENT: &str = "_";

/// Reduce a user-supplied name to a safe single path component.
///
/// Accents are folded to ASCII, whitespace runs become `_`, and only
/// `[A-Za-z0-9_.-]` survive. Leading and trailing `.` and `_` are stripped, so
/// `..` and hidden names cannot be produced. May return an empty string.
pub fn secure_filename(name: &str) -> String {
	let ascii: String = name
		.nfkd()
		.filter(char::is_ascii)
		.map(|c| if c == '/' || c == '\\' { ' ' } else { c })
		.collect();

	let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
	let kept: String = joined
		.chars()
		.filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
		.collect();

	kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

fn component(value: &str) -> String {
	let secured = secure_filename(value);
	if secured.is_empty() {
		EMPTY_COMPONENT.to_string()
	} else {
		secured
	}
}

/// Directory for a shirt's images, relative to the upload root.
pub fn shirt_dir(shirt: &Shirt) -> String {
	let (league, brand, team, size) = shirt.layout_key();
	shirt_dir_for(shirt.id, league, brand, team, size)
}

pub(crate) fn shirt_dir_for(
	id: ShirtId,
	league: &str,
	brand: &str,
	team: &str,
	size: &str,
) -> String {
	format!(
		"{}/{}/{}/{}_{}",
		component(league),
		component(brand),
		component(team),
		id,
		secure_filename(size)
	)
}

/// Number for the next image in a directory: one past the highest purely
/// numeric file stem, or 1 when there is none.
pub fn next_image_index<'a, I>(file_names: I) -> u32
where
	I: IntoIterator<Item = &'a str>,
{
	file_names
		.into_iter()
		.filter_map(|name| {
			let stem = name.rsplit('/').next().unwrap_or(name);
			let stem = stem.rsplit_once('.').map_or(stem, |(s, _)| s);
			if !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_digit()) {
				stem.parse::<u32>().ok()
			} else {
				None
			}
		})
		.max()
		.map_or(1, |max| max.saturating_add(1))
}

/// File name for an upload: the index plus the original's lowercased
/// extension, if it had one.
pub fn image_file_name(index: u32, original_name: &str) -> String {
	let secured = secure_filename(original_name);
	match secured.rsplit_once('.') {
		Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
			format!("{index}.{}", ext.to_ascii_lowercase())
		}
		_ => index.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::shirt::fixtures::shirt;
	use proptest::prelude::*;

	#[test]
	fn secure_filename_cases() {
		assert_eq!(secure_filename("My Photo.JPG"), "My_Photo.JPG");
		assert_eq!(secure_filename("../../etc/passwd"), "etc_passwd");
		assert_eq!(secure_filename("Perù home"), "Peru_home");
		assert_eq!(secure_filename("Serie A"), "Serie_A");
		assert_eq!(secure_filename("..."), "");
		assert_eq!(secure_filename("Inter (1998)"), "Inter_1998");
	}

	#[test]
	fn shirt_dir_layout() {
		let s = shirt();
		assert_eq!(shirt_dir(&s), "Nazionali/Umbro/England/7_L");
	}

	#[test]
	fn shirt_dir_with_awkward_names() {
		assert_eq!(
			shirt_dir_for(3, "Serie A", "New Balance", "A.S. Roma", "XL"),
			"Serie_A/New_Balance/A.S._Roma/3_XL"
		);
		assert_eq!(shirt_dir_for(4, "", "???", "Milan", ""), "_/_/Milan/4_");
	}

	#[test]
	fn next_index_skips_non_numeric() {
		assert_eq!(next_image_index(Vec::<&str>::new()), 1);
		assert_eq!(next_image_index(["1.jpg", "2.png", "cover.jpg"]), 3);
		assert_eq!(next_image_index(["10.jpg", "9.jpg", "a1.jpg"]), 11);
		assert_eq!(next_image_index(["dir/4.webp"]), 5);
		// The extension is what follows the last dot.
		assert_eq!(next_image_index(["1.backup.jpg", "2.jpg"]), 3);
		assert_eq!(next_image_index(["7.backup.jpg"]), 1);
		assert_eq!(next_image_index(["5"]), 6);
	}

	#[test]
	fn image_names_keep_lowercase_extension() {
		assert_eq!(image_file_name(1, "IMG_0001.JPG"), "1.jpg");
		assert_eq!(image_file_name(3, "scan.back.PNG"), "3.png");
		assert_eq!(image_file_name(2, "noext"), "2");
		assert_eq!(image_file_name(4, ".hidden"), "4");
	}

	proptest! {
		#[test]
		fn secured_names_are_single_safe_components(name in "\\PC{0,40}") {
			let secured = secure_filename(&name);
			prop_assert!(!secured.contains('/'));
			prop_assert!(!secured.contains('\\'));
			prop_assert!(!secured.starts_with('.'));
			prop_assert!(secured.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')));
		}

		#[test]
		fn next_index_exceeds_all_numeric_names(nums in proptest::collection::vec(1u32..10_000, 0..8)) {
			let names: Vec<String> = nums.iter().map(|n| format!("{n}.jpg")).collect();
			let next = next_image_index(names.iter().map(String::as_str));
			prop_assert!(nums.iter().all(|n| next > *n));
		}
	}
}
