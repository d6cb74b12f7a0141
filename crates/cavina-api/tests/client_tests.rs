// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request and response shapes of the API client against a mock backend.

use cavina_api::{ApiClient, ApiError, Credentials, StockAdjustment};
use cavina_common_secret::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
	ApiClient::new(server.uri()).unwrap()
}

#[tokio::test]
async fn fetch_catalog_sends_location_query() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/v1/catalog"))
		.and(query_param("location", "7"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"location_id": 7,
			"items": [{ "product_id": 1, "name": "Flour", "quantity": 4, "unit": "kg" }]
		})))
		.expect(1)
		.mount(&server)
		.await;

	let catalog = client_for(&server).await.fetch_catalog(7).await.unwrap();

	assert_eq!(catalog.location_id, 7);
	assert_eq!(catalog.items.len(), 1);
	assert_eq!(catalog.items[0].name.as_deref(), Some("Flour"));
	assert_eq!(catalog.items[0].quantity, Some(4.0));
}

#[tokio::test]
async fn list_products_returns_array() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/v1/products"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([
			{ "id": 1, "name": "Flour", "sku": "FL-1" },
			{ "id": 2, "name": "Sugar", "category": "baking" }
		])))
		.expect(1)
		.mount(&server)
		.await;

	let products = client_for(&server).await.list_products().await.unwrap();

	assert_eq!(products.len(), 2);
	assert_eq!(products[0].sku.as_deref(), Some("FL-1"));
	assert_eq!(products[1].extra.get("category"), Some(&json!("baking")));
}

#[tokio::test]
async fn adjust_stock_posts_json_body() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/api/v1/stock/adjust"))
		.and(body_json(json!({
			"location_id": 2,
			"product_id": 9,
			"quantity": 1.5,
			"unit": "kg"
		})))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "new_quantity": 11.5 })))
		.expect(1)
		.mount(&server)
		.await;

	let result = client_for(&server)
		.await
		.adjust_stock(&StockAdjustment {
			location_id: 2,
			product_id: 9,
			quantity: 1.5,
			unit: "kg".to_string(),
		})
		.await
		.unwrap();

	assert_eq!(result["new_quantity"], json!(11.5));
}

#[tokio::test]
async fn login_posts_form_encoded_credentials() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/api/v1/auth/token"))
		.and(header("content-type", "application/x-www-form-urlencoded"))
		.and(body_string("username=ana&password=s3cret"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"access_token": "tok-123",
			"token_type": "bearer"
		})))
		.expect(1)
		.mount(&server)
		.await;

	let token = client_for(&server)
		.await
		.login(&Credentials::new("ana", SecretString::new("s3cret")))
		.await
		.unwrap();

	assert_eq!(token.access_token.expose(), "tok-123");
	assert!(token.is_bearer());
}

#[tokio::test]
async fn token_and_locale_are_sent_as_headers() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/v1/products"))
		.and(header("authorization", "Bearer tok-123"))
		.and(header("accept-language", "es"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
		.expect(1)
		.mount(&server)
		.await;

	let client = client_for(&server)
		.await
		.with_token(SecretString::new("tok-123"))
		.with_locale("es");

	assert!(client.list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn unauthorized_maps_to_error() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/v1/products"))
		.respond_with(ResponseTemplate::new(401).set_body_string("{\"detail\":\"Not authenticated\"}"))
		.mount(&server)
		.await;

	let err = client_for(&server).await.list_products().await.unwrap_err();
	assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/api/v1/stock/adjust"))
		.respond_with(ResponseTemplate::new(422).set_body_string("unknown unit"))
		.expect(1)
		.mount(&server)
		.await;

	let err = client_for(&server)
		.await
		.adjust_stock(&StockAdjustment {
			location_id: 1,
			product_id: 1,
			quantity: 1.0,
			unit: "parsec".to_string(),
		})
		.await
		.unwrap_err();

	match err {
		ApiError::Api { status, message } => {
			assert_eq!(status, 422);
			assert_eq!(message, "unknown unit");
		}
		other => panic!("expected Api error, got {other:?}"),
	}
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path("/api/v1/catalog"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
		.mount(&server)
		.await;

	let err = client_for(&server).await.fetch_catalog(1).await.unwrap_err();
	assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn logout_sends_nothing_and_drops_token() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(500))
		.expect(0)
		.mount(&server)
		.await;

	let mut client = client_for(&server).await.with_token(SecretString::new("tok"));
	client.logout().await.unwrap();
	assert!(!client.has_token());
}
