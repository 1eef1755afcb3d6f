// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod admin;
pub mod catalog;
pub mod error;
pub mod health;

pub use admin::{
	AdminShirtResponse, DashboardCounts, DashboardOptions, DashboardQuery, DashboardResponse,
	DashboardTotals, DeleteImageResponse, FormOptionsResponse, LoginRequest, ShirtSavedResponse,
	SuccessResponse,
};
pub use catalog::{
	CatalogQuery, CatalogResponse, ContactInfo, FilterOptions, ImageResponse, ShirtCard,
	ShirtDetailResponse,
};
pub use error::ErrorResponse;
pub use health::{HealthResponse, HealthStatus};
