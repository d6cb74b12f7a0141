// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message lookup over the static locale tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::locale::{LocaleData, DEFAULT_LOCALE, EN, ES, RU};

static CATALOGS: Lazy<HashMap<&'static str, &'static LocaleData>> = Lazy::new(|| {
	let mut map = HashMap::new();
	for data in [&EN, &ES, &RU] {
		map.insert(data.name(), data);
	}
	map
});

/// Translate `key` using the given locale data.
///
/// Falls back to English, then to the key itself.
pub(crate) fn translate(data: &LocaleData, key: &str) -> String {
	if let Some(message) = data.message(key) {
		return message.to_string();
	}

	if let Some(message) = EN.message(key) {
		return message.to_string();
	}

	key.to_string()
}

pub(crate) fn substitute(mut message: String, args: &[(&str, &str)]) -> String {
	for (name, value) in args {
		let placeholder = format!("{{{name}}}");
		message = message.replace(&placeholder, value);
	}
	message
}

/// Translate a string for the given locale code.
///
/// Only the built-in `en`, `es` and `ru` tables are consulted; unknown codes
/// are treated as the default locale. Code that offers a custom
/// [`LocaleRegistry`](crate::LocaleRegistry) translates through
/// [`LocaleRegistry::t`](crate::LocaleRegistry::t) or
/// [`ActiveLocale::t`](crate::ActiveLocale::t) instead.
///
/// ```
/// use cavina_common_i18n::t;
///
/// assert_eq!(t("es", "common.cancel"), "Cancelar");
/// assert_eq!(t("xx", "common.cancel"), "Cancel");
/// ```
pub fn t(locale: &str, key: &str) -> String {
	let data = CATALOGS
		.get(locale)
		.or_else(|| CATALOGS.get(DEFAULT_LOCALE))
		.copied()
		.unwrap_or(&EN);
	translate(data, key)
}

/// Translate a string with `{name}` placeholder substitution.
///
/// ```
/// use cavina_common_i18n::t_fmt;
///
/// let line = t_fmt("en", "auth.login_success", &[("username", "ana")]);
/// assert_eq!(line, "Logged in as ana");
/// ```
pub fn t_fmt(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
	substitute(t(locale, key), args)
}
