// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale error types.

use cavina_common_storage::StorageError;

/// Errors that can occur while selecting or persisting the UI locale.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
	/// The requested code has no entry in the resolution table.
	#[error("locale '{code}' is not configured")]
	Configuration { code: String },

	/// The preference could not be written. The in-memory selection has
	/// already been applied when this is returned.
	#[error("locale preference could not be persisted: {0}")]
	StorageUnavailable(#[from] StorageError),

	#[error("invalid locale registry: {0}")]
	InvalidRegistry(String),

	#[error("locale store is already initialized")]
	AlreadyInitialized,
}

impl LocaleError {
	pub fn configuration(code: impl Into<String>) -> Self {
		Self::Configuration { code: code.into() }
	}

	/// Whether the caller can ignore this error and keep going with the
	/// current store state.
	pub fn is_recoverable(&self) -> bool {
		matches!(self, LocaleError::StorageUnavailable(_))
	}
}
