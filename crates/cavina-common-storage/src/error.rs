// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Storage error types.

use std::path::PathBuf;

/// Errors raised by a [`KeyValueStore`](crate::KeyValueStore) backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
	#[error("storage I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("storage serialization error: {0}")]
	Serde(#[from] serde_json::Error),

	#[error("storage file {path} is not a JSON object of strings: {source}")]
	Corrupt {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("storage unavailable: {0}")]
	Unavailable(String),
}
