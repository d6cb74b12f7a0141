// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide locale store.
//!
//! Exactly one [`LocalePreferenceStore`] exists per process. It is created on
//! first access to [`locale_store`] and lives until exit; there is no reset or
//! reload. Binaries that want a specific storage location or registry call
//! [`install_locale_store`] before anything reads the store.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use cavina_common_storage::FileKeyValueStore;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::LocaleError;
use crate::store::LocalePreferenceStore;

static LOCALE_STORE: OnceLock<RwLock<LocalePreferenceStore>> = OnceLock::new();

/// Default location of the preferences file:
/// `$XDG_DATA_HOME/cavina/preferences.json`, or
/// `~/.local/share/cavina/preferences.json` when `XDG_DATA_HOME` is unset.
///
/// This is the same file the CLI configuration resolves by default, on every
/// platform.
pub fn default_preferences_path() -> PathBuf {
	preferences_path_from(
		std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
		dirs::home_dir(),
	)
}

fn preferences_path_from(data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
	data_home
		.filter(|p| !p.as_os_str().is_empty())
		.or_else(|| home.map(|h| h.join(".local/share")))
		.unwrap_or_else(|| PathBuf::from("."))
		.join("cavina")
		.join("preferences.json")
}

/// The shared locale store, opened on first access.
///
/// Without a prior [`install_locale_store`] call the store is backed by the
/// preferences file at [`default_preferences_path`] and offers the standard
/// languages. Readers take the read lock; `set_active_locale` runs entirely
/// under the write lock, so a half-applied change is never observable.
pub fn locale_store() -> &'static RwLock<LocalePreferenceStore> {
	LOCALE_STORE.get_or_init(|| {
		let path = default_preferences_path();
		debug!(path = %path.display(), "opening default locale store");
		RwLock::new(LocalePreferenceStore::open(Arc::new(FileKeyValueStore::new(path))))
	})
}

/// Install `store` as the process-wide locale store.
///
/// # Errors
///
/// Returns [`LocaleError::AlreadyInitialized`] if the store was already
/// installed or accessed.
pub fn install_locale_store(store: LocalePreferenceStore) -> Result<(), LocaleError> {
	LOCALE_STORE
		.set(RwLock::new(store))
		.map_err(|_| LocaleError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_preferences_path() {
		let path = default_preferences_path();
		assert!(path.ends_with("cavina/preferences.json"));
	}

	#[test]
	fn test_preferences_path_prefers_xdg_data_home() {
		let path = preferences_path_from(Some("/xdg/data".into()), Some("/home/ana".into()));
		assert_eq!(path, PathBuf::from("/xdg/data/cavina/preferences.json"));
	}

	#[test]
	fn test_preferences_path_falls_back_to_local_share() {
		let path = preferences_path_from(None, Some("/home/ana".into()));
		assert_eq!(path, PathBuf::from("/home/ana/.local/share/cavina/preferences.json"));

		let path = preferences_path_from(Some(PathBuf::new()), Some("/home/ana".into()));
		assert_eq!(path, PathBuf::from("/home/ana/.local/share/cavina/preferences.json"));
	}
}
