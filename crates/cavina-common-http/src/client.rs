// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client with the standard Cavina User-Agent header.
///
/// # Errors
///
/// Fails only if the TLS backend cannot be initialized.
pub fn new_client() -> reqwest::Result<Client> {
	builder().build()
}

/// Creates a new HTTP client builder with the standard Cavina User-Agent header.
///
/// Use this when you need to customize the client (e.g., set timeout).
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Builder with the standard User-Agent and the given request timeout.
pub fn builder_with_timeout(timeout: Duration) -> ClientBuilder {
	tracing::trace!(timeout_ms = timeout.as_millis() as u64, "building HTTP client");
	builder().timeout(timeout)
}

/// Platform string in `{os}-{arch}` format, e.g. "linux-x86_64".
pub fn platform() -> String {
	format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Returns the standard Cavina User-Agent string.
///
/// Format: `cavina/{version}/{platform}`
pub fn user_agent() -> String {
	format!("cavina/{}/{}", env!("CARGO_PKG_VERSION"), platform())
}
