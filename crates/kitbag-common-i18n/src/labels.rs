// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display labels for raw catalog attributes.
//!
//! Catalog data is entered in English. Each function maps a stored value to
//! the label for a locale and passes unknown values through untouched, so a
//! typo in the admin form shows up as-is instead of vanishing.

use std::borrow::Cow;

use crate::locale::Locale;

const TYPE_LABELS_IT: &[(&str, &str)] = &[
	("Shirt", "Maglia"),
	("Training Top", "Maglia Allenamento"),
	("Polo Shirt", "Polo"),
	("T-Shirt", "Maglietta"),
	("Sweatshirt", "Felpa"),
	("Hoodie", "Felpa con cappuccio"),
	("Coat", "Giacca"),
	("1/4 Zip", "1/4 zip"),
	("Track Jacket", "Zip"),
	("Tracksuit", "Tuta"),
	("Bottoms", "Pantaloni"),
	("Shorts", "Pantaloncini"),
	("Gilet", "Gilet"),
	("Vest", "Canottiera"),
	("Accessories", "Accessori"),
];

const FEATURE_LABELS_IT: &[(&str, &str)] = &[
	("Home", "Casa"),
	("Away", "Trasferta"),
	("Third", "Terza"),
	("Fourth", "Quarta"),
	("Goalkeeper", "Portiere"),
	("GK", "Portiere"),
];

const SLEEVE_LABELS_EN: &[(&str, &str)] = &[("L/S", "Long Sleeve"), ("S/S", "Short Sleeve")];

const SLEEVE_LABELS_IT: &[(&str, &str)] = &[("L/S", "Maniche Lunghe"), ("S/S", "Maniche Corte")];

// Keys are lowercase.
const COLOR_LABELS_IT: &[(&str, &str)] = &[
	("black", "Nero"),
	("white", "Bianco"),
	("red", "Rosso"),
	("blue", "Blu"),
	("yellow", "Giallo"),
	("green", "Verde"),
	("purple", "Viola"),
	("orange", "Arancione"),
	("grey", "Grigio"),
	("gray", "Grigio"),
	("gold", "Oro"),
	("silver", "Argento"),
	("navy", "Blu Navy"),
	("burgundy", "Bordeaux"),
];

/// Stored by older entries before the type list was renamed.
const LEGACY_TRAINING_SHIRT: &str = "Training Shirt";

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
	table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Garment type label. Empty input gives an empty label.
pub fn type_label(value: &str, locale: Locale) -> Cow<'_, str> {
	if value.is_empty() {
		return Cow::Borrowed("");
	}
	let value = if value == LEGACY_TRAINING_SHIRT {
		"Training Top"
	} else {
		value
	};
	if locale.is_italian() {
		if let Some(label) = lookup(TYPE_LABELS_IT, value) {
			return Cow::Borrowed(label);
		}
	}
	Cow::Borrowed(value)
}

/// Like [`type_label`], but a missing type reads as a plain shirt.
pub fn type_label_or_shirt(value: Option<&str>, locale: Locale) -> Cow<'_, str> {
	match value {
		Some(v) if !v.is_empty() => type_label(v, locale),
		_ => type_label("Shirt", locale),
	}
}

/// Kit variant label (Home, Away, ...). Only Italian is translated.
pub fn feature_label(value: &str, locale: Locale) -> Cow<'_, str> {
	if locale.is_italian() {
		if let Some(label) = lookup(FEATURE_LABELS_IT, value) {
			return Cow::Borrowed(label);
		}
	}
	Cow::Borrowed(value)
}

/// Expands the `L/S` and `S/S` sleeve codes for both locales.
pub fn sleeve_label(value: &str, locale: Locale) -> Cow<'_, str> {
	let table = match locale {
		Locale::En => SLEEVE_LABELS_EN,
		Locale::It => SLEEVE_LABELS_IT,
	};
	match lookup(table, value) {
		Some(label) => Cow::Borrowed(label),
		None => Cow::Borrowed(value),
	}
}

/// Colour label. Italian lookups ignore case and surrounding whitespace.
pub fn color_label(value: &str, locale: Locale) -> Cow<'_, str> {
	if !locale.is_italian() || value.is_empty() {
		return Cow::Borrowed(value);
	}
	let key = value.trim().to_lowercase();
	match lookup(COLOR_LABELS_IT, &key) {
		Some(label) => Cow::Borrowed(label),
		None => Cow::Borrowed(value),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn type_labels_translate_for_italian_only() {
		assert_eq!(type_label("Track Jacket", Locale::It), "Zip");
		assert_eq!(type_label("Hoodie", Locale::It), "Felpa con cappuccio");
		assert_eq!(type_label("Track Jacket", Locale::En), "Track Jacket");
		assert_eq!(type_label("Kimono", Locale::It), "Kimono");
		assert_eq!(type_label("", Locale::It), "");
	}

	#[test]
	fn legacy_training_shirt_reads_as_training_top() {
		assert_eq!(type_label("Training Shirt", Locale::En), "Training Top");
		assert_eq!(
			type_label("Training Shirt", Locale::It),
			"Maglia Allenamento"
		);
	}

	#[test]
	fn missing_type_defaults_to_shirt() {
		assert_eq!(type_label_or_shirt(None, Locale::En), "Shirt");
		assert_eq!(type_label_or_shirt(Some(""), Locale::It), "Maglia");
		assert_eq!(type_label_or_shirt(Some("Shorts"), Locale::It), "Pantaloncini");
	}

	#[test]
	fn feature_labels() {
		assert_eq!(feature_label("Away", Locale::It), "Trasferta");
		assert_eq!(feature_label("GK", Locale::It), "Portiere");
		assert_eq!(feature_label("Away", Locale::En), "Away");
		assert_eq!(feature_label("Special", Locale::It), "Special");
	}

	#[test]
	fn sleeve_labels_expand_in_both_locales() {
		assert_eq!(sleeve_label("L/S", Locale::En), "Long Sleeve");
		assert_eq!(sleeve_label("S/S", Locale::It), "Maniche Corte");
		assert_eq!(sleeve_label("3/4", Locale::It), "3/4");
	}

	#[test]
	fn color_labels_are_case_insensitive_in_italian() {
		assert_eq!(color_label(" NAVY ", Locale::It), "Blu Navy");
		assert_eq!(color_label("gray", Locale::It), "Grigio");
		assert_eq!(color_label("Claret", Locale::It), "Claret");
		assert_eq!(color_label(" NAVY ", Locale::En), " NAVY ");
	}

	proptest! {
		#[test]
		fn english_passthrough_for_features_and_colors(value in "[A-Za-z /]{0,20}") {
			prop_assert_eq!(feature_label(&value, Locale::En), value.as_str());
			prop_assert_eq!(color_label(&value, Locale::En), value.as_str());
		}

		#[test]
		fn unknown_types_pass_through(value in "[a-z]{3,12}") {
			prop_assert_eq!(type_label(&value, Locale::It), value.as_str());
		}
	}
}
