// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacted string wrapper for credentials handled by the Cavina client.
//!
//! Login passwords and bearer tokens travel through config, logs and the
//! credential file. [`SecretString`] keeps them out of `Debug`, `Display` and
//! serialized output, and zeroes the buffer on drop. Reading the value
//! requires an explicit [`SecretString::expose`] call.
//!
//! ```
//! use cavina_common_secret::SecretString;
//!
//! let token = SecretString::new("eyJhbGciOi");
//! assert_eq!(format!("{token}"), "[REDACTED]");
//! assert_eq!(token.expose(), "eyJhbGciOi");
//! ```

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Placeholder written wherever a secret would otherwise appear.
pub const REDACTED: &str = "[REDACTED]";

/// A string that never prints its contents.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
	inner: String,
}

impl SecretString {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			inner: value.into(),
		}
	}

	/// Access the underlying value.
	pub fn expose(&self) -> &str {
		&self.inner
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("SecretString").field(&REDACTED).finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

#[cfg(feature = "serde")]
mod serde_impl {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::{SecretString, REDACTED};

	/// Always serializes as the redaction marker.
	///
	/// Stores that must persist the real value write `expose()` explicitly.
	impl Serialize for SecretString {
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.serialize_str(REDACTED)
		}
	}

	impl<'de> Deserialize<'de> for SecretString {
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			String::deserialize(deserializer).map(SecretString::new)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_is_redacted() {
		let secret = SecretString::new("hunter2");
		assert_eq!(format!("{secret:?}"), "SecretString(\"[REDACTED]\")");
	}

	#[test]
	fn display_is_redacted() {
		let secret = SecretString::new("hunter2");
		assert_eq!(secret.to_string(), REDACTED);
	}

	#[test]
	fn expose_returns_value() {
		let secret = SecretString::from("hunter2".to_string());
		assert_eq!(secret.expose(), "hunter2");
		assert!(!secret.is_empty());
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serialize_is_redacted_but_deserialize_keeps_value() {
		let secret = SecretString::new("hunter2");
		assert_eq!(serde_json::to_string(&secret).unwrap(), "\"[REDACTED]\"");

		let parsed: SecretString = serde_json::from_str("\"s3cret\"").unwrap();
		assert_eq!(parsed.expose(), "s3cret");
	}
}
