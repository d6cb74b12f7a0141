// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::layer::*;
use crate::paths::PathsConfig;
use crate::ConfigError;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The final, validated configuration for Cavina.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CavinaConfig {
	pub server: ServerConfig,
	pub storage: StorageConfig,
	pub logging: LoggingConfig,
	pub locale: LocaleConfig,

	/// Resolved XDG paths (not serialized)
	#[serde(skip)]
	pub paths: PathsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
	pub url: String,
	pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
	pub preferences_file: PathBuf,
	pub credentials_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
	/// Seed the first-run language from the operating system locale.
	pub detect_system: bool,
}

impl Default for LocaleConfig {
	fn default() -> Self {
		Self {
			detect_system: true,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	Warn,
	#[default]
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	/// Directive usable with `tracing_subscriber::EnvFilter`.
	pub fn as_filter(&self) -> &'static str {
		match self {
			LogLevel::Error => "error",
			LogLevel::Warn => "warn",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
			LogLevel::Trace => "trace",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_filter())
	}
}

impl FromStr for LogLevel {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"error" => Ok(LogLevel::Error),
			"warn" | "warning" => Ok(LogLevel::Warn),
			"info" => Ok(LogLevel::Info),
			"debug" => Ok(LogLevel::Debug),
			"trace" => Ok(LogLevel::Trace),
			other => Err(ConfigError::invalid_value(
				"logging.level",
				format!("unknown log level '{other}'"),
			)),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Compact,
	Json,
}

impl FromStr for LogFormat {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"pretty" => Ok(LogFormat::Pretty),
			"compact" => Ok(LogFormat::Compact),
			"json" => Ok(LogFormat::Json),
			other => Err(ConfigError::invalid_value(
				"logging.format",
				format!("unknown log format '{other}'"),
			)),
		}
	}
}

impl CavinaConfig {
	/// Resolve a merged layer into a complete configuration.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Result<Self, ConfigError> {
		let server = layer.server.unwrap_or_default();
		let storage = layer.storage.unwrap_or_default();
		let logging = layer.logging.unwrap_or_default();
		let locale = layer.locale.unwrap_or_default();

		Ok(Self {
			server: ServerConfig {
				url: server
					.url
					.unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
				timeout_secs: server.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
			},
			storage: StorageConfig {
				preferences_file: storage
					.preferences_file
					.unwrap_or_else(|| paths.preferences_file()),
				credentials_file: storage
					.credentials_file
					.unwrap_or_else(|| paths.credentials_file()),
			},
			logging: LoggingConfig {
				level: logging.level.unwrap_or_default(),
				format: logging.format.unwrap_or_default(),
			},
			locale: LocaleConfig {
				detect_system: locale
					.detect_system
					.unwrap_or_else(|| LocaleConfig::default().detect_system),
			},
			paths,
		})
	}

	/// Request timeout for the API client.
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.server.timeout_secs)
	}
}
