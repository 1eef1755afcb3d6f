// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shop contact details shown on every storefront page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactConfig {
	pub whatsapp_number: Option<String>,
	pub instagram_handle: Option<String>,
	pub official_email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactConfigLayer {
	#[serde(default)]
	pub whatsapp_number: Option<String>,
	#[serde(default)]
	pub instagram_handle: Option<String>,
	#[serde(default)]
	pub official_email: Option<String>,
}

impl ContactConfigLayer {
	pub fn merge(&mut self, other: ContactConfigLayer) {
		if other.whatsapp_number.is_some() {
			self.whatsapp_number = other.whatsapp_number;
		}
		if other.instagram_handle.is_some() {
			self.instagram_handle = other.instagram_handle;
		}
		if other.official_email.is_some() {
			self.official_email = other.official_email;
		}
	}

	pub fn finalize(self) -> ContactConfig {
		ContactConfig {
			whatsapp_number: self.whatsapp_number,
			instagram_handle: self.instagram_handle,
			official_email: self.official_email,
		}
	}
}
