// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The code → locale data resolution table.

use std::collections::HashSet;

use crate::catalog::{substitute, translate};
use crate::error::LocaleError;
use crate::locale::{LanguageDescriptor, LocaleData, DEFAULT_LOCALE, EN, ES, RU};

#[derive(Debug, Clone)]
struct LocaleEntry {
	descriptor: LanguageDescriptor,
	data: &'static LocaleData,
}

/// Ordered set of offered languages and the locale data each one resolves to.
///
/// A registry always contains its default code, and codes are unique and free
/// of surrounding whitespace. [`LocaleRegistryBuilder::build`] enforces all
/// three.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
	entries: Vec<LocaleEntry>,
	default_code: String,
	default_data: &'static LocaleData,
}

impl LocaleRegistry {
	/// The reference deployment: English, Spanish and Russian, defaulting to English.
	pub fn standard() -> Self {
		Self {
			entries: vec![
				LocaleEntry {
					descriptor: LanguageDescriptor::new("en", "English"),
					data: &EN,
				},
				LocaleEntry {
					descriptor: LanguageDescriptor::new("es", "Spanish"),
					data: &ES,
				},
				LocaleEntry {
					descriptor: LanguageDescriptor::new("ru", "Русский"),
					data: &RU,
				},
			],
			default_code: DEFAULT_LOCALE.to_string(),
			default_data: &EN,
		}
	}

	pub fn builder() -> LocaleRegistryBuilder {
		LocaleRegistryBuilder::default()
	}

	/// Resolve a code to its locale data.
	///
	/// Returns `None` if the code is not configured.
	pub fn resolve(&self, code: &str) -> Option<&'static LocaleData> {
		self
			.entries
			.iter()
			.find(|e| e.descriptor.code == code)
			.map(|e| e.data)
	}

	pub fn is_supported(&self, code: &str) -> bool {
		self.entries.iter().any(|e| e.descriptor.code == code)
	}

	pub fn descriptor(&self, code: &str) -> Option<&LanguageDescriptor> {
		self
			.entries
			.iter()
			.find(|e| e.descriptor.code == code)
			.map(|e| &e.descriptor)
	}

	/// Descriptors in registration order.
	pub fn descriptors(&self) -> Vec<LanguageDescriptor> {
		self.entries.iter().map(|e| e.descriptor.clone()).collect()
	}

	pub fn default_code(&self) -> &str {
		&self.default_code
	}

	pub fn default_locale(&self) -> &'static LocaleData {
		self.default_data
	}

	/// Translate `key` for `code` using this registry's tables.
	///
	/// Codes outside the registry use the default language's table.
	pub fn t(&self, code: &str, key: &str) -> String {
		translate(self.resolve(code).unwrap_or(self.default_data), key)
	}

	pub fn t_fmt(&self, code: &str, key: &str, args: &[(&str, &str)]) -> String {
		substitute(self.t(code, key), args)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Default for LocaleRegistry {
	fn default() -> Self {
		Self::standard()
	}
}

/// Builder for a custom [`LocaleRegistry`].
///
/// ```
/// use cavina_common_i18n::{LocaleRegistry, EN, RU};
///
/// let registry = LocaleRegistry::builder()
///     .language("ru", "Русский", &RU)
///     .language("en", "English", &EN)
///     .default_code("ru")
///     .build()
///     .unwrap();
/// assert_eq!(registry.default_code(), "ru");
/// ```
#[derive(Debug, Default)]
pub struct LocaleRegistryBuilder {
	entries: Vec<LocaleEntry>,
	default_code: Option<String>,
}

impl LocaleRegistryBuilder {
	pub fn language(
		mut self,
		code: impl Into<String>,
		display_name: impl Into<String>,
		data: &'static LocaleData,
	) -> Self {
		self.entries.push(LocaleEntry {
			descriptor: LanguageDescriptor::new(code, display_name),
			data,
		});
		self
	}

	/// Defaults to "en" when not set.
	pub fn default_code(mut self, code: impl Into<String>) -> Self {
		self.default_code = Some(code.into());
		self
	}

	/// Validate and build the registry. Codes are stored trimmed.
	pub fn build(mut self) -> Result<LocaleRegistry, LocaleError> {
		if self.entries.is_empty() {
			return Err(LocaleError::InvalidRegistry(
				"at least one language is required".to_string(),
			));
		}

		for entry in &mut self.entries {
			let trimmed = entry.descriptor.code.trim();
			if trimmed.len() != entry.descriptor.code.len() {
				entry.descriptor.code = trimmed.to_string();
			}
		}

		let mut seen = HashSet::new();
		for entry in &self.entries {
			let code = entry.descriptor.code.as_str();
			if code.is_empty() {
				return Err(LocaleError::InvalidRegistry(
					"language code must not be empty".to_string(),
				));
			}
			if !seen.insert(code) {
				return Err(LocaleError::InvalidRegistry(format!(
					"duplicate language code '{code}'"
				)));
			}
		}

		let default_code = self
			.default_code
			.map(|code| code.trim().to_string())
			.unwrap_or_else(|| DEFAULT_LOCALE.to_string());
		let default_data = self
			.entries
			.iter()
			.find(|e| e.descriptor.code == default_code)
			.map(|e| e.data)
			.ok_or_else(|| {
				LocaleError::InvalidRegistry(format!(
					"default language '{default_code}' is not registered"
				))
			})?;

		Ok(LocaleRegistry {
			entries: self.entries,
			default_code,
			default_data,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_standard_registry_order() {
		let codes: Vec<_> = LocaleRegistry::standard()
			.descriptors()
			.into_iter()
			.map(|d| d.code)
			.collect();
		assert_eq!(codes, vec!["en", "es", "ru"]);
	}

	#[test]
	fn test_standard_display_names() {
		let registry = LocaleRegistry::standard();
		assert_eq!(registry.descriptor("en").unwrap().display_name, "English");
		assert_eq!(registry.descriptor("es").unwrap().display_name, "Spanish");
		assert_eq!(registry.descriptor("ru").unwrap().display_name, "Русский");
	}

	#[test]
	fn test_resolve_returns_static_tables() {
		let registry = LocaleRegistry::standard();
		assert!(std::ptr::eq(registry.resolve("en").unwrap(), &EN));
		assert!(std::ptr::eq(registry.resolve("es").unwrap(), &ES));
		assert!(std::ptr::eq(registry.resolve("ru").unwrap(), &RU));
	}

	#[test]
	fn test_resolve_unknown() {
		let registry = LocaleRegistry::standard();
		assert!(registry.resolve("de").is_none());
		assert!(registry.resolve("").is_none());
		assert!(!registry.is_supported("EN"));
	}

	#[test]
	fn test_default_locale() {
		let registry = LocaleRegistry::standard();
		assert_eq!(registry.default_code(), "en");
		assert!(std::ptr::eq(registry.default_locale(), &EN));
	}

	#[test]
	fn test_builder_rejects_empty() {
		let err = LocaleRegistry::builder().build().unwrap_err();
		assert!(matches!(err, LocaleError::InvalidRegistry(_)));
	}

	#[test]
	fn test_builder_rejects_duplicates() {
		let err = LocaleRegistry::builder()
			.language("en", "English", &EN)
			.language("en", "English again", &EN)
			.build()
			.unwrap_err();
		assert!(err.to_string().contains("duplicate"));
	}

	#[test]
	fn test_builder_rejects_blank_code() {
		let err = LocaleRegistry::builder()
			.language("  ", "Nothing", &EN)
			.build()
			.unwrap_err();
		assert!(matches!(err, LocaleError::InvalidRegistry(_)));
	}

	#[test]
	fn test_builder_requires_default_to_be_registered() {
		let err = LocaleRegistry::builder()
			.language("es", "Spanish", &ES)
			.build()
			.unwrap_err();
		assert!(err.to_string().contains("'en'"));

		let registry = LocaleRegistry::builder()
			.language("es", "Spanish", &ES)
			.default_code("es")
			.build()
			.unwrap();
		assert_eq!(registry.len(), 1);
		assert!(std::ptr::eq(registry.default_locale(), &ES));
	}

	static PIRATE: LocaleData = LocaleData::new("pirate", &[("common.confirm", "Aye")]);

	#[test]
	fn test_translation_uses_registry_tables() {
		let registry = LocaleRegistry::builder()
			.language("en", "English", &EN)
			.language("x-pirate", "Pirate", &PIRATE)
			.build()
			.unwrap();

		assert_eq!(registry.t("x-pirate", "common.confirm"), "Aye");
		assert_eq!(registry.t("x-pirate", "common.cancel"), "Cancel");
		assert_eq!(registry.t("ru", "common.confirm"), "OK");
		assert_eq!(
			registry.t_fmt("x-pirate", "products.header", &[("count", "2")]),
			"2 products"
		);
	}

	#[test]
	fn test_builder_trims_padded_codes() {
		let registry = LocaleRegistry::builder()
			.language(" en", "English", &EN)
			.language("es ", "Spanish", &ES)
			.default_code(" en ")
			.build()
			.unwrap();

		assert_eq!(registry.default_code(), "en");
		assert!(registry.is_supported("en"));
		assert!(registry.is_supported("es"));
		assert!(!registry.is_supported(" en"));
		assert!(std::ptr::eq(registry.resolve("en").unwrap(), &EN));
		assert!(std::ptr::eq(registry.default_locale(), &EN));
	}

	#[test]
	fn test_builder_rejects_codes_equal_after_trimming() {
		let err = LocaleRegistry::builder()
			.language("en", "English", &EN)
			.language(" en", "English", &EN)
			.build()
			.unwrap_err();
		assert!(err.to_string().contains("duplicate"));
	}
}
