// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Cavina API client.

use thiserror::Error;

/// Errors that can occur when talking to the Cavina backend.
#[derive(Debug, Error)]
pub enum ApiError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Missing, expired or rejected credentials.
	#[error("Unauthorized")]
	Unauthorized,

	/// The backend answered with a non-success status.
	#[error("API error: {status} - {message}")]
	Api { status: u16, message: String },

	/// Response body did not match the expected shape.
	#[error("Invalid response: {0}")]
	InvalidResponse(String),

	/// The configured server URL cannot be parsed.
	#[error("Invalid base URL '{url}': {message}")]
	InvalidBaseUrl { url: String, message: String },
}

impl ApiError {
	/// HTTP status carried by the error, if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			ApiError::Api { status, .. } => Some(*status),
			ApiError::Unauthorized => Some(401),
			ApiError::Network(e) => e.status().map(|s| s.as_u16()),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status() {
		let err = ApiError::Api {
			status: 422,
			message: "bad unit".to_string(),
		};
		assert_eq!(err.status(), Some(422));
		assert_eq!(ApiError::Unauthorized.status(), Some(401));
		assert_eq!(ApiError::Timeout.status(), None);
	}

	#[test]
	fn test_display() {
		let err = ApiError::Api {
			status: 500,
			message: "boom".to_string(),
		};
		assert_eq!(err.to_string(), "API error: 500 - boom");
	}
}
