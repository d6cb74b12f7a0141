// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::PathBuf;

use crate::ConfigError;

/// Resolved XDG paths for Cavina.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
	/// User config file: ~/.config/cavina/config.toml
	pub user_config_file: PathBuf,
	/// Data directory: ~/.local/share/cavina/
	pub data_dir: PathBuf,
}

impl PathsConfig {
	/// Build paths rooted at explicit config and data homes.
	pub fn from_homes(config_home: impl Into<PathBuf>, data_home: impl Into<PathBuf>) -> Self {
		Self {
			user_config_file: config_home.into().join("cavina/config.toml"),
			data_dir: data_home.into().join("cavina"),
		}
	}

	/// Get the config directory (parent of user_config_file)
	pub fn config_dir(&self) -> PathBuf {
		self
			.user_config_file
			.parent()
			.map(|p| p.to_path_buf())
			.unwrap_or_else(|| self.user_config_file.clone())
	}

	/// Default preferences file holding the UI language.
	pub fn preferences_file(&self) -> PathBuf {
		self.data_dir.join("preferences.json")
	}

	/// Default credentials file holding the access token.
	pub fn credentials_file(&self) -> PathBuf {
		self.config_dir().join("credentials.json")
	}
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self::from_homes("~/.config", "~/.local/share")
	}
}

/// Resolve XDG paths according to the Base Directory Specification.
///
/// Uses environment variables if set, otherwise falls back to defaults:
/// - XDG_CONFIG_HOME or ~/.config
/// - XDG_DATA_HOME or ~/.local/share
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.filter(|v| !v.is_empty())
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".config"));

	let data_home = std::env::var_os("XDG_DATA_HOME")
		.filter(|v| !v.is_empty())
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".local/share"));

	tracing::debug!(
		config_home = %config_home.display(),
		data_home = %data_home.display(),
		"resolved XDG paths"
	);

	Ok(PathsConfig::from_homes(config_home, data_home))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve_xdg_paths_succeeds() {
		let paths = resolve_xdg_paths().unwrap();
		assert!(paths.user_config_file.ends_with("cavina/config.toml"));
		assert!(paths.data_dir.ends_with("cavina"));
	}

	#[test]
	fn test_derived_files() {
		let paths = PathsConfig::from_homes("/cfg", "/data");
		assert_eq!(paths.config_dir(), PathBuf::from("/cfg/cavina"));
		assert_eq!(paths.preferences_file(), PathBuf::from("/data/cavina/preferences.json"));
		assert_eq!(paths.credentials_file(), PathBuf::from("/cfg/cavina/credentials.json"));
	}
}
