// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for the Cavina client.
//!
//! This crate provides:
//! - XDG Base Directory compliant path resolution
//! - Layered configuration: defaults, TOML file, `CAVINA_*` environment
//!   variables and command-line overrides, in increasing precedence
//! - Configuration validation

pub mod error;
pub mod layer;
pub mod paths;
pub mod registry;
pub mod runtime;
pub mod sources;
pub mod validation;

pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::PathsConfig;
pub use registry::ConfigRegistry;
pub use runtime::{CavinaConfig, LogFormat, LogLevel};
pub use sources::{CliOverrides, ConfigSource, Precedence};

/// Load configuration from all sources with CLI overrides applied last.
///
/// `cli.config_file` replaces the user config file when set; unlike the
/// default user file it must exist.
pub fn load_config(cli: CliOverrides) -> Result<CavinaConfig, ConfigError> {
	let paths = paths::resolve_xdg_paths()?;

	let mut registry = ConfigRegistry::new();
	registry.register(Box::new(sources::DefaultsSource));
	match &cli.config_file {
		Some(path) => registry.register(Box::new(sources::FileSource::explicit(path.clone()))),
		None => registry.register(Box::new(sources::FileSource::user(&paths))),
	}
	registry.register(Box::new(sources::EnvSource::process()));
	registry.register(Box::new(sources::CliSource::new(cli)));

	registry.load(paths)
}
