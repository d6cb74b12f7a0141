// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use tracing::debug;

use crate::registry::LocaleRegistry;

/// Resolve the effective locale code from an optional preference.
///
/// Resolution order (highest to lowest priority):
/// 1. The preferred code, if the registry knows it
/// 2. The registry default
///
/// # Example
///
/// ```
/// use cavina_common_i18n::{resolve_code, LocaleRegistry};
///
/// let registry = LocaleRegistry::standard();
/// assert_eq!(resolve_code(Some("ru"), &registry), "ru");
/// assert_eq!(resolve_code(Some("klingon"), &registry), "en");
/// assert_eq!(resolve_code(None, &registry), "en");
/// ```
pub fn resolve_code<'a>(preferred: Option<&str>, registry: &'a LocaleRegistry) -> &'a str {
	if let Some(code) = preferred {
		if let Some(descriptor) = registry.descriptor(code) {
			return &descriptor.code;
		}
	}

	registry.default_code()
}

/// Extract the lowercase primary language subtag from a system locale string.
///
/// Accepts both POSIX (`es_ES.UTF-8`) and BCP-47 (`es-ES`) forms.
pub fn language_subtag(raw: &str) -> Option<String> {
	let subtag = raw
		.split(['_', '-', '.', '@'])
		.next()?
		.trim()
		.to_lowercase();

	if subtag.is_empty() || subtag == "c" || subtag == "posix" {
		return None;
	}

	Some(subtag)
}

/// Detect the operating system locale and map it onto the registry.
///
/// Returns `None` when detection fails or the language is not offered.
pub fn detect_system_locale(registry: &LocaleRegistry) -> Option<String> {
	let system_locale = sys_locale::get_locale()?;
	let lang_code = language_subtag(&system_locale)?;

	if registry.is_supported(&lang_code) {
		debug!(system_locale = %system_locale, lang = %lang_code, "detected system locale");
		Some(lang_code)
	} else {
		debug!(system_locale = %system_locale, "system locale is not offered");
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_preference_takes_priority() {
		let registry = LocaleRegistry::standard();
		assert_eq!(resolve_code(Some("es"), &registry), "es");
		assert_eq!(resolve_code(Some("ru"), &registry), "ru");
	}

	#[test]
	fn test_fallback_to_default() {
		let registry = LocaleRegistry::standard();
		assert_eq!(resolve_code(Some("fr"), &registry), "en");
		assert_eq!(resolve_code(Some(""), &registry), "en");
		assert_eq!(resolve_code(None, &registry), "en");
	}

	#[test]
	fn test_fallback_honours_custom_default() {
		let registry = LocaleRegistry::builder()
			.language("en", "English", &crate::EN)
			.language("ru", "Русский", &crate::RU)
			.default_code("ru")
			.build()
			.unwrap();
		assert_eq!(resolve_code(Some("es"), &registry), "ru");
	}

	#[test]
	fn test_language_subtag() {
		assert_eq!(language_subtag("es_ES.UTF-8").as_deref(), Some("es"));
		assert_eq!(language_subtag("ru-RU").as_deref(), Some("ru"));
		assert_eq!(language_subtag("EN").as_deref(), Some("en"));
		assert_eq!(language_subtag("C"), None);
		assert_eq!(language_subtag("POSIX"), None);
		assert_eq!(language_subtag(""), None);
	}

	#[test]
	fn test_detect_system_locale_is_offered_or_none() {
		let registry = LocaleRegistry::standard();
		if let Some(code) = detect_system_locale(&registry) {
			assert!(registry.is_supported(&code));
		}
	}
}
