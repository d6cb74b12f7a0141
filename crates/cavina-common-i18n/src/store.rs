// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The locale preference store.

use std::fmt;
use std::sync::Arc;

use cavina_common_storage::KeyValueStore;
use tracing::{debug, warn};

use crate::catalog::{substitute, translate};
use crate::error::LocaleError;
use crate::locale::{LanguageDescriptor, LocaleData};
use crate::registry::LocaleRegistry;
use crate::resolve::resolve_code;

/// Storage key holding the selected language code.
pub const LANG_KEY: &str = "lang";

/// The selected language and the locale data it resolves to.
///
/// `code` is always present in the registry that produced this value.
#[derive(Clone, PartialEq, Eq)]
pub struct ActiveLocale {
	code: String,
	resolved_locale: &'static LocaleData,
}

impl ActiveLocale {
	pub fn code(&self) -> &str {
		&self.code
	}

	pub fn resolved_locale(&self) -> &'static LocaleData {
		self.resolved_locale
	}

	/// Translate `key` in this locale, falling back to English and then the key.
	pub fn t(&self, key: &str) -> String {
		translate(self.resolved_locale, key)
	}

	pub fn t_fmt(&self, key: &str, args: &[(&str, &str)]) -> String {
		substitute(self.t(key), args)
	}
}

impl fmt::Debug for ActiveLocale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActiveLocale")
			.field("code", &self.code)
			.field("resolved_locale", &self.resolved_locale.name())
			.finish()
	}
}

/// Full in-memory state of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleState {
	pub current_locale: ActiveLocale,
	/// Offered languages in display order. Rebuilt from the registry on
	/// every start and never persisted.
	pub locale_map: Vec<LanguageDescriptor>,
}

/// Tracks the UI language and mirrors every change to persistent storage.
///
/// Reads are pure. The only mutation is [`set_active_locale`], which updates
/// the in-memory state and then writes the code under [`LANG_KEY`] before
/// returning.
///
/// [`set_active_locale`]: LocalePreferenceStore::set_active_locale
#[derive(Debug)]
pub struct LocalePreferenceStore {
	storage: Arc<dyn KeyValueStore>,
	registry: LocaleRegistry,
	state: LocaleState,
}

impl LocalePreferenceStore {
	/// Open the store over `storage` with the standard language set.
	pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
		Self::with_registry(storage, LocaleRegistry::standard())
	}

	pub fn with_registry(storage: Arc<dyn KeyValueStore>, registry: LocaleRegistry) -> Self {
		Self::open_with_hint(storage, registry, None)
	}

	/// Open the store, using `hint` as the initial language when storage holds
	/// no saved choice (for example the detected system locale).
	///
	/// A saved choice always wins over the hint. Unreadable storage and unknown
	/// saved codes are logged and resolve to the registry default.
	pub fn open_with_hint(
		storage: Arc<dyn KeyValueStore>,
		registry: LocaleRegistry,
		hint: Option<&str>,
	) -> Self {
		let stored = match storage.get(LANG_KEY) {
			Ok(value) => value,
			Err(e) => {
				warn!(error = %e, "failed to read locale preference, using default");
				None
			}
		};

		let code = match stored.as_deref() {
			Some(code) if registry.is_supported(code) => code.to_string(),
			Some(code) => {
				warn!(
					lang = %code,
					default = %registry.default_code(),
					"saved locale is not configured, falling back to default"
				);
				registry.default_code().to_string()
			}
			None => resolve_code(hint, &registry).to_string(),
		};

		let resolved_locale = registry
			.resolve(&code)
			.unwrap_or_else(|| registry.default_locale());

		debug!(lang = %code, saved = stored.is_some(), "locale store initialized");

		let state = LocaleState {
			current_locale: ActiveLocale {
				code,
				resolved_locale,
			},
			locale_map: registry.descriptors(),
		};

		Self {
			storage,
			registry,
			state,
		}
	}

	pub fn active_locale(&self) -> &ActiveLocale {
		&self.state.current_locale
	}

	pub fn available_locales(&self) -> &[LanguageDescriptor] {
		&self.state.locale_map
	}

	pub fn state(&self) -> &LocaleState {
		&self.state
	}

	pub fn registry(&self) -> &LocaleRegistry {
		&self.registry
	}

	/// Switch the active language and persist the choice.
	///
	/// # Errors
	///
	/// - [`LocaleError::Configuration`] if the code is not in the registry. The
	///   state is left unchanged.
	/// - [`LocaleError::StorageUnavailable`] if the write fails. The new
	///   language is already active in memory; the error only reports that it
	///   will not survive a restart.
	pub fn set_active_locale(&mut self, descriptor: &LanguageDescriptor) -> Result<(), LocaleError> {
		let resolved_locale = self
			.registry
			.resolve(&descriptor.code)
			.ok_or_else(|| {
				warn!(lang = %descriptor.code, "rejected unconfigured locale");
				LocaleError::configuration(&descriptor.code)
			})?;

		self.state.current_locale = ActiveLocale {
			code: descriptor.code.clone(),
			resolved_locale,
		};

		if let Err(e) = self.storage.set(LANG_KEY, &descriptor.code) {
			warn!(lang = %descriptor.code, error = %e, "locale changed but preference was not saved");
			return Err(LocaleError::StorageUnavailable(e));
		}

		debug!(lang = %descriptor.code, "locale preference saved");
		Ok(())
	}

	/// Convenience wrapper over [`set_active_locale`](Self::set_active_locale)
	/// taking just a code.
	pub fn set_active_code(&mut self, code: &str) -> Result<(), LocaleError> {
		let descriptor = self
			.registry
			.descriptor(code)
			.cloned()
			.ok_or_else(|| LocaleError::configuration(code))?;
		self.set_active_locale(&descriptor)
	}
}
