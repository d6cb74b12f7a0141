// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cavina API client implementation.

use std::time::Duration;

use cavina_common_secret::SecretString;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, trace};

use crate::error::ApiError;
use crate::types::{AdjustmentResult, CatalogResponse, Credentials, LoginToken, Product, StockAdjustment};

const CATALOG_PATH: &str = "/api/v1/catalog";
const PRODUCTS_PATH: &str = "/api/v1/products";
const STOCK_ADJUST_PATH: &str = "/api/v1/stock/adjust";
const AUTH_TOKEN_PATH: &str = "/api/v1/auth/token";

/// Default request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Cavina inventory backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
	http_client: Client,
	base_url: String,
	token: Option<SecretString>,
	locale: Option<String>,
}

impl ApiClient {
	/// Creates a client for `base_url` with the default timeout.
	pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
		Self::with_timeout(base_url, REQUEST_TIMEOUT)
	}

	pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
		let http_client = cavina_common_http::builder_with_timeout(timeout).build()?;
		Self::with_http_client(http_client, base_url)
	}

	/// Creates a client around an existing `reqwest::Client`.
	pub fn with_http_client(http_client: Client, base_url: impl Into<String>) -> Result<Self, ApiError> {
		let base_url = base_url.into();
		let parsed = reqwest::Url::parse(&base_url).map_err(|e| ApiError::InvalidBaseUrl {
			url: base_url.clone(),
			message: e.to_string(),
		})?;
		if parsed.cannot_be_a_base() {
			return Err(ApiError::InvalidBaseUrl {
				url: base_url,
				message: "URL cannot be used as a base".to_string(),
			});
		}

		Ok(Self {
			http_client,
			base_url: base_url.trim_end_matches('/').to_string(),
			token: None,
			locale: None,
		})
	}

	/// Attach a bearer token to every request.
	pub fn with_token(mut self, token: SecretString) -> Self {
		self.token = Some(token);
		self
	}

	/// Send the given language code as `Accept-Language`.
	pub fn with_locale(mut self, code: impl Into<String>) -> Self {
		self.locale = Some(code.into());
		self
	}

	pub fn set_token(&mut self, token: Option<SecretString>) {
		self.token = token;
	}

	pub fn has_token(&self) -> bool {
		self.token.is_some()
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	fn request(&self, method: Method, path: &str) -> RequestBuilder {
		let mut request = self.http_client.request(method, self.url(path));
		if let Some(token) = &self.token {
			request = request.bearer_auth(token.expose());
		}
		if let Some(locale) = &self.locale {
			request = request.header(ACCEPT_LANGUAGE, locale.as_str());
		}
		request
	}

	async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
		let response = request.send().await.map_err(|e| {
			if e.is_timeout() {
				error!("Request timed out");
				return ApiError::Timeout;
			}
			error!(error = %e, "Network error during API request");
			ApiError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "Received response");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();

			if status == StatusCode::UNAUTHORIZED {
				error!(status = status.as_u16(), "Unauthorized request");
				return Err(ApiError::Unauthorized);
			}

			error!(status = status.as_u16(), body = %body, "API error");
			return Err(ApiError::Api {
				status: status.as_u16(),
				message: body,
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			ApiError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse response");
			ApiError::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}

	/// `GET /api/v1/catalog?location={location_id}`
	#[instrument(skip(self))]
	pub async fn fetch_catalog(&self, location_id: i64) -> Result<CatalogResponse, ApiError> {
		let request = self
			.request(Method::GET, CATALOG_PATH)
			.query(&[("location", location_id)]);
		let catalog: CatalogResponse = self.send_json(request).await?;
		debug!(item_count = catalog.items.len(), "Catalog fetched");
		Ok(catalog)
	}

	/// `GET /api/v1/products`
	#[instrument(skip(self))]
	pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
		let products: Vec<Product> = self.send_json(self.request(Method::GET, PRODUCTS_PATH)).await?;
		debug!(product_count = products.len(), "Products listed");
		Ok(products)
	}

	/// `POST /api/v1/stock/adjust`
	#[instrument(skip(self), fields(location_id = adjustment.location_id, product_id = adjustment.product_id))]
	pub async fn adjust_stock(&self, adjustment: &StockAdjustment) -> Result<AdjustmentResult, ApiError> {
		let request = self.request(Method::POST, STOCK_ADJUST_PATH).json(adjustment);
		self.send_json(request).await
	}

	/// `POST /api/v1/auth/token` with a form-encoded body.
	///
	/// The returned token is not attached automatically; call
	/// [`set_token`](Self::set_token) or [`with_token`](Self::with_token).
	#[instrument(skip_all, fields(username = %credentials.username))]
	pub async fn login(&self, credentials: &Credentials) -> Result<LoginToken, ApiError> {
		let request = self.request(Method::POST, AUTH_TOKEN_PATH).form(&[
			("username", credentials.username.as_str()),
			("password", credentials.password.expose()),
		]);
		let token: LoginToken = self.send_json(request).await?;
		debug!(token_type = %token.token_type, "Login succeeded");
		Ok(token)
	}

	/// Forget the bearer token.
	///
	/// The backend keeps no session, so nothing is sent.
	pub async fn logout(&mut self) -> Result<(), ApiError> {
		self.token = None;
		debug!("Logged out");
		Ok(())
	}
}
