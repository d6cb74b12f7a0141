// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Key-value storage backends.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::StorageError;

/// On-disk layout of a [`FileKeyValueStore`].
type PersistedEntries = BTreeMap<String, String>;

/// Durable string-to-string storage scoped to one application namespace.
///
/// Calls are synchronous and complete before returning.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
	/// Read the value stored under `key`, or `None` when absent.
	fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

	/// Store `value` under `key`, replacing any previous value.
	fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

	/// Remove `key`. Removing a missing key is not an error.
	fn remove(&self, key: &str) -> Result<(), StorageError>;

	fn contains(&self, key: &str) -> Result<bool, StorageError> {
		Ok(self.get(key)?.is_some())
	}
}

/// File-backed store holding a single JSON object.
///
/// Writes go to a sibling temp file which is then renamed over the target, so a
/// crash mid-write leaves the previous contents intact. The file is created
/// with 0600 permissions on Unix because it may hold access tokens.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
	path: PathBuf,
}

impl FileKeyValueStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_entries(&self) -> Result<PersistedEntries, StorageError> {
		if !self.path.exists() {
			return Ok(PersistedEntries::new());
		}

		let contents = fs::read_to_string(&self.path)?;
		if contents.trim().is_empty() {
			return Ok(PersistedEntries::new());
		}

		serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
			path: self.path.clone(),
			source,
		})
	}

	/// Entries to build the next write on.
	///
	/// A corrupt file is moved aside to `*.corrupt` and treated as empty, so a
	/// damaged file does not block every later write. The flag reports whether
	/// that happened.
	fn entries_for_write(&self) -> Result<(PersistedEntries, bool), StorageError> {
		match self.read_entries() {
			Ok(entries) => Ok((entries, false)),
			Err(StorageError::Corrupt { path, source }) => {
				let backup = path.with_extension("corrupt");
				warn!(
					path = %path.display(),
					backup = %backup.display(),
					error = %source,
					"storage file is corrupt, replacing it"
				);
				if let Err(e) = fs::rename(&path, &backup) {
					warn!(path = %path.display(), error = %e, "failed to move corrupt storage file aside");
				}
				Ok((PersistedEntries::new(), true))
			}
			Err(e) => Err(e),
		}
	}

	fn write_entries(&self, entries: &PersistedEntries) -> Result<(), StorageError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}

		let contents = serde_json::to_string_pretty(entries)?;

		let temp_path = self.path.with_extension("tmp");
		let mut file = open_private(&temp_path)?;
		file.write_all(contents.as_bytes())?;
		file.sync_all()?;
		drop(file);

		fs::rename(&temp_path, &self.path)?;

		debug!(path = ?self.path, entries = entries.len(), "storage file written");
		Ok(())
	}
}

/// Create or truncate `path` for writing, readable only by the owner from the
/// moment it exists.
#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
	use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

	let file = fs::OpenOptions::new()
		.write(true)
		.create(true)
		.truncate(true)
		.mode(0o600)
		.open(path)?;
	// mode() only applies on creation; a stale temp file keeps its old bits.
	file.set_permissions(fs::Permissions::from_mode(0o600))?;
	Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
	fs::OpenOptions::new()
		.write(true)
		.create(true)
		.truncate(true)
		.open(path)
}

impl KeyValueStore for FileKeyValueStore {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		let entries = self.read_entries()?;
		Ok(entries.get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		let (mut entries, _) = self.entries_for_write()?;
		entries.insert(key.to_string(), value.to_string());
		self.write_entries(&entries)
	}

	fn remove(&self, key: &str) -> Result<(), StorageError> {
		let (mut entries, recovered) = self.entries_for_write()?;
		if entries.remove(key).is_none() && !recovered {
			return Ok(());
		}
		self.write_entries(&entries)
	}
}

/// In-memory store for tests.
///
/// Counts `set` calls so tests can observe write-through behaviour.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
	entries: RwLock<HashMap<String, String>>,
	writes: RwLock<usize>,
}

impl MemoryKeyValueStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a store pre-populated with `entries`.
	pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
		let map = entries
			.into_iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		Self {
			entries: RwLock::new(map),
			writes: RwLock::new(0),
		}
	}

	/// Number of `set` calls observed so far.
	pub fn write_count(&self) -> usize {
		*self.writes.read()
	}
}

impl KeyValueStore for MemoryKeyValueStore {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.entries.read().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.entries.write().insert(key.to_string(), value.to_string());
		*self.writes.write() += 1;
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), StorageError> {
		self.entries.write().remove(key);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_memory_store_roundtrip() {
		let store = MemoryKeyValueStore::new();
		store.set("lang", "es").unwrap();
		assert_eq!(store.get("lang").unwrap().as_deref(), Some("es"));
		assert_eq!(store.write_count(), 1);
	}

	#[test]
	fn test_memory_store_missing_key() {
		let store = MemoryKeyValueStore::new();
		assert!(store.get("lang").unwrap().is_none());
		assert!(!store.contains("lang").unwrap());
	}

	#[test]
	fn test_memory_store_with_entries_does_not_count_writes() {
		let store = MemoryKeyValueStore::with_entries([("lang", "ru")]);
		assert_eq!(store.get("lang").unwrap().as_deref(), Some("ru"));
		assert_eq!(store.write_count(), 0);
	}

	#[test]
	fn test_memory_store_remove() {
		let store = MemoryKeyValueStore::with_entries([("access_token", "abc")]);
		store.remove("access_token").unwrap();
		store.remove("access_token").unwrap();
		assert!(!store.contains("access_token").unwrap());
	}

	#[test]
	fn test_file_store_missing_file_is_empty() {
		let temp_dir = tempfile::tempdir().unwrap();
		let store = FileKeyValueStore::new(temp_dir.path().join("preferences.json"));
		assert!(store.get("lang").unwrap().is_none());
	}

	#[test]
	fn test_file_store_roundtrip_survives_new_instance() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("nested").join("preferences.json");

		FileKeyValueStore::new(&path).set("lang", "ru").unwrap();
		assert!(path.exists());

		let reopened = FileKeyValueStore::new(&path);
		assert_eq!(reopened.get("lang").unwrap().as_deref(), Some("ru"));
	}

	#[test]
	fn test_file_store_keeps_other_keys() {
		let temp_dir = tempfile::tempdir().unwrap();
		let store = FileKeyValueStore::new(temp_dir.path().join("preferences.json"));

		store.set("lang", "en").unwrap();
		store.set("theme", "dark").unwrap();
		store.set("lang", "es").unwrap();

		assert_eq!(store.get("lang").unwrap().as_deref(), Some("es"));
		assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
	}

	#[test]
	fn test_file_store_remove() {
		let temp_dir = tempfile::tempdir().unwrap();
		let store = FileKeyValueStore::new(temp_dir.path().join("credentials.json"));

		store.set("access_token", "abc").unwrap();
		store.remove("access_token").unwrap();
		assert!(store.get("access_token").unwrap().is_none());

		store.remove("never-set").unwrap();
	}

	#[test]
	fn test_file_store_corrupt_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("preferences.json");
		fs::write(&path, "[1, 2, 3]").unwrap();

		let store = FileKeyValueStore::new(&path);
		let err = store.get("lang").unwrap_err();
		assert!(matches!(err, StorageError::Corrupt { .. }));
	}

	#[test]
	fn test_file_store_set_replaces_corrupt_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("preferences.json");
		fs::write(&path, "not json").unwrap();

		let store = FileKeyValueStore::new(&path);
		store.set("lang", "es").unwrap();

		assert_eq!(store.get("lang").unwrap().as_deref(), Some("es"));
		let backup = fs::read_to_string(path.with_extension("corrupt")).unwrap();
		assert_eq!(backup, "not json");
	}

	#[test]
	fn test_file_store_remove_rewrites_corrupt_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("credentials.json");
		fs::write(&path, "{\"access_token\":").unwrap();

		let store = FileKeyValueStore::new(&path);
		store.remove("access_token").unwrap();

		assert!(store.get("access_token").unwrap().is_none());
		assert_eq!(fs::read_to_string(&path).unwrap().trim(), "{}");
	}

	#[test]
	fn test_file_store_unwritable_parent() {
		let temp_dir = tempfile::tempdir().unwrap();
		let blocker = temp_dir.path().join("not-a-dir");
		fs::write(&blocker, "file").unwrap();

		let store = FileKeyValueStore::new(blocker.join("preferences.json"));
		assert!(matches!(store.set("lang", "es"), Err(StorageError::Io(_))));
	}

	#[cfg(unix)]
	#[test]
	fn test_file_store_permissions() {
		use std::os::unix::fs::PermissionsExt;

		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("credentials.json");
		let store = FileKeyValueStore::new(&path);
		store.set("access_token", "abc").unwrap();

		let mode = fs::metadata(&path).unwrap().permissions().mode();
		assert_eq!(mode & 0o777, 0o600);
	}

	#[cfg(unix)]
	#[test]
	fn test_private_file_is_never_group_readable() {
		use std::os::unix::fs::PermissionsExt;

		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("credentials.tmp");

		let file = open_private(&path).unwrap();
		let mode = file.metadata().unwrap().permissions().mode();
		assert_eq!(mode & 0o777, 0o600);
		drop(file);

		fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
		open_private(&path).unwrap();
		let mode = fs::metadata(&path).unwrap().permissions().mode();
		assert_eq!(mode & 0o777, 0o600);
	}

	proptest! {
		#[test]
		fn prop_memory_store_last_write_wins(values in proptest::collection::vec("[a-z]{1,5}", 1..10)) {
			let store = MemoryKeyValueStore::new();
			for value in &values {
				store.set("lang", value).unwrap();
			}
			prop_assert_eq!(store.get("lang").unwrap(), values.last().cloned());
			prop_assert_eq!(store.write_count(), values.len());
		}
	}
}
