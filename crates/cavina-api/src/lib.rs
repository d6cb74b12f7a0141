// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cavina inventory REST API client.
//!
//! This crate provides a typed Rust client for the catalog, product, stock and
//! authentication endpoints under `/api/v1`. Calls are one-shot request and
//! response exchanges with no retries.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
	AdjustmentResult, CatalogItem, CatalogResponse, Credentials, LoginToken, Product,
	StockAdjustment,
};
