// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{Locale, DEFAULT_LOCALE};

/// Where a resolved locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
	/// An explicit `?lang=` query parameter. Callers persist it.
	Query,
	/// A previously persisted choice (the language cookie).
	Stored,
	/// Negotiated from the `Accept-Language` header.
	Header,
	Default,
}

/// Resolve the effective locale for a request.
///
/// Resolution order (highest to lowest priority):
/// 1. `query` if it names a supported locale
/// 2. `stored` if it names a supported locale
/// 3. best match of `accept_language` against the supported locales
/// 4. [`DEFAULT_LOCALE`]
///
/// # Example
///
/// ```
/// use kitbag_common_i18n::{resolve_locale, Locale, LocaleSource};
///
/// assert_eq!(
///     resolve_locale(Some("it"), Some("en"), None),
///     (Locale::It, LocaleSource::Query)
/// );
/// assert_eq!(
///     resolve_locale(Some("xx"), None, Some("it-IT,it;q=0.9")),
///     (Locale::It, LocaleSource::Header)
/// );
/// ```
pub fn resolve_locale(
	query: Option<&str>,
	stored: Option<&str>,
	accept_language: Option<&str>,
) -> (Locale, LocaleSource) {
	if let Some(raw) = query {
		match Locale::parse(raw) {
			Some(locale) => return (locale, LocaleSource::Query),
			None => tracing::debug!(lang = raw, "ignoring unsupported lang parameter"),
		}
	}

	if let Some(locale) = stored.and_then(Locale::parse) {
		return (locale, LocaleSource::Stored);
	}

	if let Some(header) = accept_language {
		match best_match(header) {
			Some(locale) => {
				tracing::debug!(%locale, "locale taken from Accept-Language");
				return (locale, LocaleSource::Header);
			}
			None => tracing::debug!(accept_language = header, "no supported language in Accept-Language"),
		}
	}

	(DEFAULT_LOCALE, LocaleSource::Default)
}

/// Pick the supported locale the client prefers most.
///
/// Language ranges are compared on their primary subtag, so `it-CH` counts as
/// `it`. A `*` range matches the default locale. Entries with `q=0` are
/// refusals and never match; among equal weights the earlier entry wins.
pub fn best_match(accept_language: &str) -> Option<Locale> {
	let mut ranges: Vec<(usize, f32, &str)> = accept_language
		.split(',')
		.enumerate()
		.filter_map(|(position, entry)| {
			let mut parts = entry.split(';');
			let tag = parts.next()?.trim();
			if tag.is_empty() {
				return None;
			}
			let quality = parts
				.filter_map(|p| p.trim().strip_prefix("q="))
				.find_map(|q| q.trim().parse::<f32>().ok())
				.unwrap_or(1.0);
			Some((position, quality, tag))
		})
		.filter(|(_, quality, _)| *quality > 0.0)
		.collect();

	ranges.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

	ranges.into_iter().find_map(|(_, _, tag)| {
		if tag == "*" {
			return Some(DEFAULT_LOCALE);
		}
		let primary = tag.split(['-', '_']).next().unwrap_or(tag);
		Locale::parse(primary)
	})
}
