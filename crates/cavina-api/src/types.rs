// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request and response types for the Cavina API.
//!
//! Catalog items and products are loosely specified by the backend, so the
//! well-known fields are optional and anything else lands in `extra`.

use cavina_common_secret::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `GET /api/v1/catalog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
	pub location_id: i64,
	#[serde(default)]
	pub items: Vec<CatalogItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub product_id: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quantity: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unit: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// One record of `GET /api/v1/products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sku: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unit: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Body of `POST /api/v1/stock/adjust`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAdjustment {
	pub location_id: i64,
	pub product_id: i64,
	/// Signed delta; negative values remove stock.
	pub quantity: f64,
	pub unit: String,
}

/// Whatever the backend reports for an adjustment.
pub type AdjustmentResult = Value;

/// Username and password for `POST /api/v1/auth/token`.
#[derive(Debug, Clone)]
pub struct Credentials {
	pub username: String,
	pub password: SecretString,
}

impl Credentials {
	pub fn new(username: impl Into<String>, password: SecretString) -> Self {
		Self {
			username: username.into(),
			password,
		}
	}
}

/// Response of `POST /api/v1/auth/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginToken {
	pub access_token: SecretString,
	pub token_type: String,
}

impl LoginToken {
	pub fn is_bearer(&self) -> bool {
		self.token_type.eq_ignore_ascii_case("bearer")
	}
}
