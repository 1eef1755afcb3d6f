// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Italian descriptions for saved shirts.

use kitbag_catalog_core::Shirt;
use kitbag_server_translate::TranslationError;
use tracing::{info, instrument, warn};

use crate::api::AppState;
use crate::error::ServerError;

/// Outcome of [`get_or_translate_description`].
#[derive(Debug)]
pub enum ItalianDescription {
	/// The shirt has no English description to translate.
	NotNeeded,
	/// An Italian text was already stored.
	Existing(String),
	/// A fresh translation was stored.
	Translated(String),
	/// Translation was wanted but failed; the English text stays in use.
	Failed(TranslationError),
}

impl ItalianDescription {
	/// Message for the admin when the translation could not be produced.
	pub fn warning(&self) -> Option<String> {
		match self {
			Self::Failed(e) => Some(format!("Italian description not generated: {e}")),
			_ => None,
		}
	}
}

/// Return the shirt's Italian description, translating the English one and
/// storing the result when it is missing.
///
/// Translation problems never fail the caller; only the database write can.
#[instrument(skip(state, shirt), fields(shirt_id = shirt.id))]
pub async fn get_or_translate_description(
	state: &AppState,
	shirt: &mut Shirt,
) -> Result<ItalianDescription, ServerError> {
	let Some(english) = shirt.description.clone() else {
		return Ok(ItalianDescription::NotNeeded);
	};
	if let Some(existing) = &shirt.description_it {
		return Ok(ItalianDescription::Existing(existing.clone()));
	}

	let Some(translator) = &state.translator else {
		warn!("translation not configured; keeping English description only");
		return Ok(ItalianDescription::Failed(TranslationError::NotConfigured(
			"OpenRouter API key and model",
		)));
	};

	match translator.translate_to_italian(&english).await {
		Ok(italian) if !italian.is_empty() => {
			state.shirts.set_description_it(shirt.id, Some(&italian)).await?;
			shirt.description_it = Some(italian.clone());
			info!("Italian description stored");
			Ok(ItalianDescription::Translated(italian))
		}
		Ok(_) => {
			warn!("translation came back empty");
			Ok(ItalianDescription::Failed(TranslationError::InvalidResponse(
				"empty translation".to_string(),
			)))
		}
		Err(e) => {
			warn!(error = %e, "translation failed; keeping English description only");
			Ok(ItalianDescription::Failed(e))
		}
	}
}
