// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog, product and stock commands.

use anyhow::{anyhow, Result};
use cavina_api::{
	AdjustmentResult, ApiClient, ApiError, CatalogResponse, Product, StockAdjustment,
};
use cavina_common_i18n::{locale_store, ActiveLocale};

const MISSING: &str = "-";

/// Turn an API failure into a user-facing error. Rejected credentials get the
/// localized login hint.
pub fn describe_api_error(locale: &ActiveLocale, error: ApiError) -> anyhow::Error {
	match error {
		ApiError::Unauthorized => anyhow!(locale.t("auth.not_logged_in")),
		other => anyhow::Error::new(other),
	}
}

fn or_missing<T: ToString>(value: Option<T>) -> String {
	value.map(|v| v.to_string()).unwrap_or_else(|| MISSING.to_string())
}

pub fn render_catalog(locale: &ActiveLocale, catalog: &CatalogResponse) -> String {
	let mut out = locale.t_fmt(
		"catalog.header",
		&[
			("location", &catalog.location_id.to_string()),
			("count", &catalog.items.len().to_string()),
		],
	);
	if catalog.items.is_empty() {
		out.push('\n');
		out.push_str(&locale.t("common.no_data"));
		return out;
	}
	for item in &catalog.items {
		out.push_str(&format!(
			"\n{:<8} {:<30} {:>10} {}",
			or_missing(item.product_id),
			or_missing(item.name.as_deref()),
			or_missing(item.quantity),
			item.unit.as_deref().unwrap_or("")
		));
	}
	out
}

pub fn render_products(locale: &ActiveLocale, products: &[Product]) -> String {
	let mut out = locale.t_fmt("products.header", &[("count", &products.len().to_string())]);
	if products.is_empty() {
		out.push('\n');
		out.push_str(&locale.t("common.no_data"));
		return out;
	}
	for product in products {
		out.push_str(&format!(
			"\n{:<8} {:<16} {:<30} {}",
			or_missing(product.id),
			or_missing(product.sku.as_deref()),
			or_missing(product.name.as_deref()),
			product.unit.as_deref().unwrap_or("")
		));
	}
	out
}

pub fn render_adjustment(locale: &ActiveLocale, result: &AdjustmentResult) -> String {
	let mut out = locale.t("stock.adjusted");
	if !result.is_null() {
		let body = serde_json::to_string_pretty(result).unwrap_or_else(|_| result.to_string());
		out.push('\n');
		out.push_str(&body);
	}
	out
}

fn active_locale() -> ActiveLocale {
	locale_store().read().active_locale().clone()
}

pub async fn catalog(client: &ApiClient, location_id: i64) -> Result<()> {
	let locale = active_locale();
	let catalog = client
		.fetch_catalog(location_id)
		.await
		.map_err(|e| describe_api_error(&locale, e))?;
	println!("{}", render_catalog(&locale, &catalog));
	Ok(())
}

pub async fn products(client: &ApiClient) -> Result<()> {
	let locale = active_locale();
	let products = client
		.list_products()
		.await
		.map_err(|e| describe_api_error(&locale, e))?;
	println!("{}", render_products(&locale, &products));
	Ok(())
}

pub async fn adjust_stock(client: &ApiClient, adjustment: StockAdjustment) -> Result<()> {
	let locale = active_locale();
	let result = client
		.adjust_stock(&adjustment)
		.await
		.map_err(|e| describe_api_error(&locale, e))?;
	println!("{}", render_adjustment(&locale, &result));
	Ok(())
}
