// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Prompt construction and clean-up of model output.

/// Instruction sent ahead of the text to translate.
pub const PROMPT_PREFIX: &str =
	"Translate the following English text to Italian. Return only the translation, no quotes.";

pub fn build_prompt(text: &str) -> String {
	format!("{PROMPT_PREFIX}\n\n{text}")
}

/// Trim the model's answer and strip one pair of wrapping quotes, straight
/// (`"..."`) or curly (`“...”`), trimming again afterwards.
pub fn clean_translation(text: &str) -> String {
	let trimmed = text.trim();
	let unquoted = trimmed
		.strip_prefix('"')
		.and_then(|s| s.strip_suffix('"'))
		.or_else(|| {
			trimmed
				.strip_prefix('\u{201C}')
				.and_then(|s| s.strip_suffix('\u{201D}'))
		});

	match unquoted {
		Some(inner) => inner.trim().to_string(),
		None => trimmed.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn prompt_layout() {
		assert_eq!(
			build_prompt("Home shirt"),
			"Translate the following English text to Italian. Return only the translation, no quotes.\n\nHome shirt"
		);
	}

	#[test]
	fn strips_one_pair_of_quotes() {
		assert_eq!(clean_translation("  \"Maglia casa\" \n"), "Maglia casa");
		assert_eq!(clean_translation("\u{201C} Maglia \u{201D}"), "Maglia");
		assert_eq!(clean_translation("\"\"doppie\"\""), "\"doppie\"");
	}

	#[test]
	fn leaves_mismatched_or_single_quotes() {
		assert_eq!(clean_translation("\"aperta"), "\"aperta");
		assert_eq!(clean_translation("\u{201C}mista\""), "\u{201C}mista\"");
		assert_eq!(clean_translation("\""), "\"");
		assert_eq!(clean_translation(""), "");
	}

	proptest! {
		#[test]
		fn cleaned_text_has_no_outer_whitespace(s in "\\PC{0,40}") {
			let cleaned = clean_translation(&s);
			prop_assert_eq!(cleaned.trim(), cleaned.as_str());
		}
	}
}
