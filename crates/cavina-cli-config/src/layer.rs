// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use std::path::PathBuf;

use serde::Deserialize;

use crate::runtime::{LogFormat, LogLevel};

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigLayer {
	#[serde(default)]
	pub server: Option<ServerLayer>,
	#[serde(default)]
	pub storage: Option<StorageLayer>,
	#[serde(default)]
	pub logging: Option<LoggingLayer>,
	#[serde(default)]
	pub locale: Option<LocaleLayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerLayer {
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StorageLayer {
	#[serde(default)]
	pub preferences_file: Option<PathBuf>,
	#[serde(default)]
	pub credentials_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoggingLayer {
	#[serde(default)]
	pub level: Option<LogLevel>,
	#[serde(default)]
	pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocaleLayer {
	#[serde(default)]
	pub detect_system: Option<bool>,
}

impl ConfigLayer {
	/// Merge another layer into this one. Values from `other` win.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_option(&mut self.server, other.server, ServerLayer::merge);
		merge_option(&mut self.storage, other.storage, StorageLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingLayer::merge);
		merge_option(&mut self.locale, other.locale, LocaleLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

impl ServerLayer {
	fn merge(&mut self, other: ServerLayer) {
		if other.url.is_some() {
			self.url = other.url;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}
}

impl StorageLayer {
	fn merge(&mut self, other: StorageLayer) {
		if other.preferences_file.is_some() {
			self.preferences_file = other.preferences_file;
		}
		if other.credentials_file.is_some() {
			self.credentials_file = other.credentials_file;
		}
	}
}

impl LoggingLayer {
	fn merge(&mut self, other: LoggingLayer) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.format.is_some() {
			self.format = other.format;
		}
	}
}

impl LocaleLayer {
	fn merge(&mut self, other: LocaleLayer) {
		if other.detect_system.is_some() {
			self.detect_system = other.detect_system;
		}
	}
}
