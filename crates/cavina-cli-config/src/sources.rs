// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: files, environment, CLI, defaults.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::layer::*;
use crate::paths::PathsConfig;
use crate::runtime::{LogFormat, LogLevel};
use crate::ConfigError;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	UserFile = 30,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	/// Name for logging
	fn name(&self) -> &'static str;

	/// Precedence level
	fn precedence(&self) -> Precedence;

	/// Load configuration layer from this source
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		// Defaults are applied in CavinaConfig::from_layer
		Ok(ConfigLayer::default())
	}
}

/// File-based configuration source (TOML).
pub struct FileSource {
	path: PathBuf,
	precedence: Precedence,
	name: &'static str,
	required: bool,
}

impl FileSource {
	/// User config: ~/.config/cavina/config.toml
	pub fn user(paths: &PathsConfig) -> Self {
		Self {
			path: paths.user_config_file.clone(),
			precedence: Precedence::UserFile,
			name: "user-config",
			required: false,
		}
	}

	/// A file the user named explicitly (`--config`). It must exist.
	pub fn explicit(path: PathBuf) -> Self {
		Self {
			path,
			precedence: Precedence::UserFile,
			name: "cli-config",
			required: true,
		}
	}

	/// Custom file path with specified precedence
	pub fn custom(path: PathBuf, precedence: Precedence, name: &'static str) -> Self {
		Self {
			path,
			precedence,
			name,
			required: false,
		}
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		self.name
	}
	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			if self.required {
				return Err(ConfigError::Io(std::io::Error::new(
					std::io::ErrorKind::NotFound,
					format!("config file {} not found", self.path.display()),
				)));
			}
			debug!(path = %self.path.display(), source = self.name, "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), source = self.name, "loading config file");

		let content = std::fs::read_to_string(&self.path)?;
		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!(source = self.name, "parsed config layer");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Recognized variables:
/// `CAVINA_SERVER_URL`, `CAVINA_SERVER_TIMEOUT_SECS`, `CAVINA_PREFERENCES_FILE`,
/// `CAVINA_CREDENTIALS_FILE`, `CAVINA_LOG_LEVEL`, `CAVINA_LOG_FORMAT`,
/// `CAVINA_DETECT_SYSTEM_LOCALE`.
pub struct EnvSource {
	vars: Vec<(String, String)>,
}

impl EnvSource {
	/// Snapshot the current process environment.
	pub fn process() -> Self {
		Self::from_vars(std::env::vars())
	}

	/// Build from an explicit set of variables.
	pub fn from_vars<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			vars: vars
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.filter(|(k, _)| k.starts_with("CAVINA_"))
				.collect(),
		}
	}

	fn get(&self, key: &str) -> Option<&str> {
		self
			.vars
			.iter()
			.rev()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.trim())
			.filter(|v| !v.is_empty())
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		let mut layer = ConfigLayer::default();

		let url = self.get("CAVINA_SERVER_URL").map(str::to_string);
		let timeout_secs = self
			.get("CAVINA_SERVER_TIMEOUT_SECS")
			.map(|v| {
				v.parse::<u64>().map_err(|e| {
					ConfigError::invalid_value("CAVINA_SERVER_TIMEOUT_SECS", e.to_string())
				})
			})
			.transpose()?;
		if url.is_some() || timeout_secs.is_some() {
			layer.server = Some(ServerLayer { url, timeout_secs });
		}

		let preferences_file = self.get("CAVINA_PREFERENCES_FILE").map(PathBuf::from);
		let credentials_file = self.get("CAVINA_CREDENTIALS_FILE").map(PathBuf::from);
		if preferences_file.is_some() || credentials_file.is_some() {
			layer.storage = Some(StorageLayer {
				preferences_file,
				credentials_file,
			});
		}

		let level = self
			.get("CAVINA_LOG_LEVEL")
			.map(str::parse::<LogLevel>)
			.transpose()?;
		let format = self
			.get("CAVINA_LOG_FORMAT")
			.map(str::parse::<LogFormat>)
			.transpose()?;
		if level.is_some() || format.is_some() {
			layer.logging = Some(LoggingLayer { level, format });
		}

		if let Some(raw) = self.get("CAVINA_DETECT_SYSTEM_LOCALE") {
			layer.locale = Some(LocaleLayer {
				detect_system: Some(parse_bool("CAVINA_DETECT_SYSTEM_LOCALE", raw)?),
			});
		}

		trace!(?layer, "environment layer");
		Ok(layer)
	}
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, ConfigError> {
	match raw.to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		other => Err(ConfigError::invalid_value(
			field,
			format!("expected a boolean, got '{other}'"),
		)),
	}
}

/// Overrides supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub config_file: Option<PathBuf>,
	pub server_url: Option<String>,
	pub log_level: Option<LogLevel>,
	pub log_format: Option<LogFormat>,
}

/// CLI arguments source.
pub struct CliSource {
	overrides: CliOverrides,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		let mut layer = ConfigLayer::default();
		if let Some(url) = &self.overrides.server_url {
			layer.server = Some(ServerLayer {
				url: Some(url.clone()),
				timeout_secs: None,
			});
		}
		if self.overrides.log_level.is_some() || self.overrides.log_format.is_some() {
			layer.logging = Some(LoggingLayer {
				level: self.overrides.log_level,
				format: self.overrides.log_format,
			});
		}
		Ok(layer)
	}
}
