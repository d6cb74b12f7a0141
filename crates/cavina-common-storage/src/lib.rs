// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Durable key-value storage for Cavina client preferences.
//!
//! This crate provides the storage facility behind user preferences such as
//! the selected UI language and the saved access token:
//!
//! - **KeyValueStore trait**: synchronous `get`/`set`/`remove` over string keys
//! - **FileKeyValueStore**: a JSON object on disk, replaced atomically on write
//! - **MemoryKeyValueStore**: in-memory storage for tests
//!
//! # Example
//!
//! ```rust,no_run
//! use cavina_common_storage::{FileKeyValueStore, KeyValueStore};
//!
//! let store = FileKeyValueStore::new("/tmp/cavina/preferences.json");
//! store.set("lang", "es").unwrap();
//! assert_eq!(store.get("lang").unwrap().as_deref(), Some("es"));
//! ```

mod error;
mod store;

pub use error::StorageError;
pub use store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
