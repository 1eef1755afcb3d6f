// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Turning stored shirts into response payloads.

use kitbag_catalog_core::{
	build_shirt_slug, cover_image, display_title, localized_description, Shirt, ShirtImage,
	ShirtLabels,
};
use kitbag_common_i18n::Locale;
use kitbag_server_api::{AdminShirtResponse, ContactInfo, ImageResponse, ShirtCard, ShirtDetailResponse};

use crate::uploads::public_url;

/// Canonical product path for a shirt in a language.
pub fn shirt_url(shirt: &Shirt, locale: Locale) -> String {
	format!("/shirt/{}/{}", shirt.id, build_shirt_slug(shirt, locale))
}

pub fn image_response(image: &ShirtImage) -> ImageResponse {
	ImageResponse {
		id: image.id,
		url: public_url(&image.file_path),
		is_cover: image.is_cover,
	}
}

pub fn shirt_card(shirt: &Shirt, images: &[ShirtImage], locale: Locale) -> ShirtCard {
	let slug = build_shirt_slug(shirt, locale);
	ShirtCard {
		id: shirt.id,
		product_code: shirt.product_code,
		url: format!("/shirt/{}/{}", shirt.id, slug),
		slug,
		title: display_title(shirt, locale),
		labels: ShirtLabels::for_shirt(shirt, locale),
		player_name: shirt.player_name.clone(),
		brand: shirt.brand.clone(),
		season: shirt.season.clone(),
		size: shirt.size.clone(),
		cover_image_url: cover_image(images).map(|i| public_url(&i.file_path)),
	}
}

pub fn shirt_detail(
	shirt: &Shirt,
	images: &[ShirtImage],
	locale: Locale,
	contact: ContactInfo,
) -> ShirtDetailResponse {
	ShirtDetailResponse {
		locale,
		card: shirt_card(shirt, images, locale),
		player_issued: shirt.player_issued,
		national_team: shirt.national_team,
		description: localized_description(shirt, locale).map(str::to_string),
		images: images.iter().map(image_response).collect(),
		contact,
	}
}

pub fn admin_shirt(shirt: Shirt, images: &[ShirtImage]) -> AdminShirtResponse {
	let slug = build_shirt_slug(&shirt, Locale::En);
	AdminShirtResponse {
		url: format!("/shirt/{}/{}", shirt.id, slug),
		slug,
		cover_image_url: cover_image(images).map(|i| public_url(&i.file_path)),
		images: images.iter().map(image_response).collect(),
		shirt,
	}
}
