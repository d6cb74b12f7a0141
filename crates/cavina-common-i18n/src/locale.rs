// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language descriptors and the static locale data tables.

use serde::{Deserialize, Serialize};

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: &str = "en";

/// One selectable UI language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageDescriptor {
	/// BCP-47 style tag, e.g. "en", "es", "ru"
	pub code: String,
	/// Label shown in a language picker
	pub display_name: String,
}

impl LanguageDescriptor {
	pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			display_name: display_name.into(),
		}
	}
}

/// Translated strings and formatting name for one language.
///
/// Instances live in statics and are handed out as `&'static LocaleData`; the
/// store swaps references and never mutates the tables.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleData {
	name: &'static str,
	messages: &'static [(&'static str, &'static str)],
}

impl LocaleData {
	pub const fn new(name: &'static str, messages: &'static [(&'static str, &'static str)]) -> Self {
		Self { name, messages }
	}

	/// Library name of the locale, e.g. "es".
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Look up a message by key.
	pub fn message(&self, key: &str) -> Option<&'static str> {
		self
			.messages
			.iter()
			.find(|(k, _)| *k == key)
			.map(|(_, v)| *v)
	}

	pub fn keys(&self) -> impl Iterator<Item = &'static str> {
		let messages: &'static [(&'static str, &'static str)] = self.messages;
		messages.iter().map(|(k, _)| *k)
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}

pub static EN: LocaleData = LocaleData::new(
	"en",
	&[
		("common.confirm", "OK"),
		("common.cancel", "Cancel"),
		("common.loading", "Loading"),
		("common.no_data", "No data"),
		("locale.current", "Current language: {name} ({code})"),
		("locale.changed", "Language set to {name}"),
		("locale.unknown", "Unknown language code: {code}"),
		(
			"locale.not_saved",
			"Language changed for this session, but the preference could not be saved: {error}",
		),
		("catalog.header", "Catalog for location {location} ({count} items)"),
		("products.header", "{count} products"),
		("stock.adjusted", "Stock adjusted"),
		("auth.password_prompt", "Password: "),
		("auth.login_success", "Logged in as {username}"),
		("auth.logged_out", "Logged out"),
		("auth.not_logged_in", "Not logged in; run `cavina login` first"),
	],
);

pub static ES: LocaleData = LocaleData::new(
	"es",
	&[
		("common.confirm", "Confirmar"),
		("common.cancel", "Cancelar"),
		("common.loading", "Cargando"),
		("common.no_data", "Sin datos"),
		("locale.current", "Idioma actual: {name} ({code})"),
		("locale.changed", "Idioma cambiado a {name}"),
		("locale.unknown", "Código de idioma desconocido: {code}"),
		(
			"locale.not_saved",
			"Idioma cambiado para esta sesión, pero no se pudo guardar la preferencia: {error}",
		),
		("catalog.header", "Catálogo de la ubicación {location} ({count} artículos)"),
		("products.header", "{count} productos"),
		("stock.adjusted", "Existencias ajustadas"),
		("auth.password_prompt", "Contraseña: "),
		("auth.login_success", "Sesión iniciada como {username}"),
		("auth.logged_out", "Sesión cerrada"),
	],
);

pub static RU: LocaleData = LocaleData::new(
	"ru",
	&[
		("common.confirm", "ОК"),
		("common.cancel", "Отмена"),
		("common.loading", "Загрузка"),
		("common.no_data", "Нет данных"),
		("locale.current", "Текущий язык: {name} ({code})"),
		("locale.changed", "Язык изменён на {name}"),
		("locale.unknown", "Неизвестный код языка: {code}"),
		(
			"locale.not_saved",
			"Язык изменён для этого сеанса, но настройку не удалось сохранить: {error}",
		),
		("catalog.header", "Каталог точки {location} ({count} позиций)"),
		("products.header", "Товаров: {count}"),
		("stock.adjusted", "Остатки скорректированы"),
		("auth.password_prompt", "Пароль: "),
		("auth.login_success", "Вход выполнен: {username}"),
		("auth.logged_out", "Выход выполнен"),
	],
);
