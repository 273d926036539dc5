//! Custom serde helpers for Bleutrade's loosely typed JSON.
//!
//! The API is not consistent about scalar types: the envelope's `success`
//! flag arrives as `"true"`/`"false"` strings, and `message` may be empty or
//! `null` when there is nothing to say.

use std::fmt;

use serde::{Deserialize, Deserializer, de};

/// Deserialize a flag that may be a JSON boolean or a `"true"`/`"false"` string.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use bleutrade_api_client::types::serde_helpers::bool_or_string;
///
/// #[derive(Deserialize, Debug)]
/// struct Envelope {
///     #[serde(deserialize_with = "bool_or_string::deserialize")]
///     success: bool,
/// }
///
/// let envelope: Envelope = serde_json::from_str(r#"{"success":"true"}"#).unwrap();
/// assert!(envelope.success);
///
/// let envelope: Envelope = serde_json::from_str(r#"{"success":false}"#).unwrap();
/// assert!(!envelope.success);
/// ```
pub mod bool_or_string {
    use super::*;

    /// Deserialize a boolean given as a bool or a string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoolOrStringVisitor;

        impl de::Visitor<'_> for BoolOrStringVisitor {
            type Value = bool;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean or the string \"true\" or \"false\"")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match v.trim() {
                    s if s.eq_ignore_ascii_case("true") => Ok(true),
                    s if s.eq_ignore_ascii_case("false") => Ok(false),
                    _ => Err(de::Error::invalid_value(de::Unexpected::Str(v), &self)),
                }
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_str(&v)
            }
        }

        deserializer.deserialize_any(BoolOrStringVisitor)
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use bleutrade_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Envelope {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     message: Option<String>,
/// }
///
/// let envelope: Envelope = serde_json::from_str(r#"{"message":""}"#).unwrap();
/// assert!(envelope.message.is_none());
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
