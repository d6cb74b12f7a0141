// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The process-wide store lives in its own test binary so installing it
//! cannot race with other tests.

use std::sync::Arc;

use cavina_common_i18n::{
	install_locale_store, locale_store, LocaleError, LocalePreferenceStore, LANG_KEY,
};
use cavina_common_storage::{KeyValueStore, MemoryKeyValueStore};

#[test]
fn installed_store_is_shared_and_cannot_be_replaced() {
	let storage = Arc::new(MemoryKeyValueStore::with_entries([(LANG_KEY, "es")]));
	install_locale_store(LocalePreferenceStore::open(storage.clone())).unwrap();

	assert_eq!(locale_store().read().active_locale().code(), "es");

	locale_store().write().set_active_code("ru").unwrap();
	assert_eq!(locale_store().read().active_locale().code(), "ru");
	assert_eq!(storage.get(LANG_KEY).unwrap().as_deref(), Some("ru"));

	let second = LocalePreferenceStore::open(Arc::new(MemoryKeyValueStore::new()));
	let err = install_locale_store(second).unwrap_err();
	assert!(matches!(err, LocaleError::AlreadyInitialized));
	assert_eq!(locale_store().read().active_locale().code(), "ru");
}
