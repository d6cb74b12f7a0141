// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale bootstrap and the `cavina locale` commands.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use cavina_cli_config::CavinaConfig;
use cavina_common_i18n::{
	detect_system_locale, install_locale_store, locale_store, LocaleError,
	LocalePreferenceStore, LocaleRegistry,
};
use cavina_common_storage::{FileKeyValueStore, KeyValueStore};
use tracing::debug;

/// Open the preferences file named by `config` and install it as the shared
/// locale store.
pub fn init_locale_store(config: &CavinaConfig) -> Result<()> {
	let storage: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(
		config.storage.preferences_file.clone(),
	));
	let registry = LocaleRegistry::standard();
	let hint = if config.locale.detect_system {
		detect_system_locale(&registry)
	} else {
		None
	};
	debug!(hint = ?hint, path = %config.storage.preferences_file.display(), "opening locale store");

	let store = LocalePreferenceStore::open_with_hint(storage, registry, hint.as_deref());
	install_locale_store(store).context("failed to install locale store")
}

/// Code of the active UI language.
pub fn get_locale() -> String {
	locale_store().read().active_locale().code().to_string()
}

pub fn tr(key: &str) -> String {
	locale_store().read().active_locale().t(key)
}

pub fn tr_fmt(key: &str, args: &[(&str, &str)]) -> String {
	locale_store().read().active_locale().t_fmt(key, args)
}

pub fn describe_current(store: &LocalePreferenceStore) -> String {
	let active = store.active_locale();
	let name = store
		.registry()
		.descriptor(active.code())
		.map(|d| d.display_name.as_str())
		.unwrap_or_else(|| active.code());
	active.t_fmt("locale.current", &[("name", name), ("code", active.code())])
}

/// One line per offered language, the active one marked with `*`.
pub fn render_list(store: &LocalePreferenceStore) -> String {
	let current = store.active_locale().code();
	store
		.available_locales()
		.iter()
		.map(|d| {
			let marker = if d.code == current { '*' } else { ' ' };
			format!("{marker} {:<4} {}", d.code, d.display_name)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Result of switching language: what to print, plus a warning when the
/// change only holds for this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetReport {
	pub message: String,
	pub warning: Option<String>,
}

pub fn apply_locale(store: &mut LocalePreferenceStore, code: &str) -> Result<SetReport> {
	let warning = match store.set_active_code(code) {
		Ok(()) => None,
		Err(e) if e.is_recoverable() => Some(
			store
				.active_locale()
				.t_fmt("locale.not_saved", &[("error", &e.to_string())]),
		),
		Err(LocaleError::Configuration { code }) => {
			return Err(anyhow!(store
				.active_locale()
				.t_fmt("locale.unknown", &[("code", &code)])));
		}
		Err(e) => return Err(e.into()),
	};

	let active = store.active_locale();
	let name = store
		.registry()
		.descriptor(active.code())
		.map(|d| d.display_name.clone())
		.unwrap_or_else(|| active.code().to_string());
	Ok(SetReport {
		message: active.t_fmt("locale.changed", &[("name", &name)]),
		warning,
	})
}

pub fn show() {
	println!("{}", describe_current(&locale_store().read()));
}

pub fn list() {
	println!("{}", render_list(&locale_store().read()));
}

pub fn set(code: &str) -> Result<()> {
	// The report is rendered under the same write guard; taking the read
	// lock here would deadlock.
	let report = apply_locale(&mut locale_store().write(), code)?;
	println!("{}", report.message);
	if let Some(warning) = report.warning {
		eprintln!("{warning}");
	}
	Ok(())
}
