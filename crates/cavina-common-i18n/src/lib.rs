// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! UI locale selection for Cavina.
//!
//! The [`LocalePreferenceStore`] is the single source of truth for the
//! language the interface is rendered in. It reads the saved choice from a
//! [`KeyValueStore`](cavina_common_storage::KeyValueStore) under the `"lang"`
//! key, resolves it to a static [`LocaleData`] table, and writes every change
//! straight back to storage.
//!
//! Resolution never yields an unset locale: unknown or missing codes fall back
//! to the registry default (`"en"`), and attempts to select an unconfigured
//! language are rejected with [`LocaleError::Configuration`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use cavina_common_i18n::{LocalePreferenceStore, LocaleRegistry};
//! use cavina_common_storage::MemoryKeyValueStore;
//!
//! let mut store = LocalePreferenceStore::open(Arc::new(MemoryKeyValueStore::new()));
//! assert_eq!(store.active_locale().code(), "en");
//!
//! let spanish = store.registry().descriptor("es").cloned().unwrap();
//! store.set_active_locale(&spanish).unwrap();
//! assert_eq!(store.active_locale().t("common.cancel"), "Cancelar");
//! ```

mod catalog;
mod error;
mod global;
mod locale;
mod registry;
mod resolve;
mod store;

pub use catalog::{t, t_fmt};
pub use error::LocaleError;
pub use global::{default_preferences_path, install_locale_store, locale_store};
pub use locale::{LanguageDescriptor, LocaleData, DEFAULT_LOCALE, EN, ES, RU};
pub use registry::{LocaleRegistry, LocaleRegistryBuilder};
pub use resolve::{detect_system_locale, language_subtag, resolve_code};
pub use store::{ActiveLocale, LocalePreferenceStore, LocaleState, LANG_KEY};
