// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration validation.

use crate::runtime::CavinaConfig;
use crate::ConfigError;

/// Validate the final configuration.
pub fn validate_config(config: &CavinaConfig) -> Result<(), ConfigError> {
	let url = config.server.url.trim();
	if url.is_empty() {
		return Err(ConfigError::invalid_value("server.url", "must not be empty"));
	}
	if !url.starts_with("http://") && !url.starts_with("https://") {
		return Err(ConfigError::invalid_value(
			"server.url",
			format!("'{url}' must start with http:// or https://"),
		));
	}

	if config.server.timeout_secs == 0 {
		return Err(ConfigError::invalid_value(
			"server.timeout_secs",
			"must be greater than zero",
		));
	}

	Ok(())
}
