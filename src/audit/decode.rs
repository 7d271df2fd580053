//! Lenient field decoding for provider documents.
//!
//! The provider's schema shifts between Lighthouse versions. A field that comes
//! back with an unexpected JSON type decodes as `None` instead of failing the
//! whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes an optional field, treating a type mismatch as absent.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decodes an audit score: numbers pass through, booleans become 1 or 0.
pub(crate) fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(true) => Some(1.0),
        Value::Bool(false) => Some(0.0),
        _ => None,
    })
}

/// Decodes a keyed map, dropping entries that do not decode as `T`.
///
/// Entries are yielded in document order, so an ordered collection such as
/// `Vec<(String, T)>` keeps the provider's ordering.
pub(crate) fn lenient_map<'de, D, T, M>(deserializer: D) -> Result<M, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
    M: FromIterator<(String, T)>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(entries) = value else {
        return Ok(std::iter::empty::<(String, T)>().collect());
    };
    Ok(entries
        .into_iter()
        .filter_map(|(key, entry)| {
            serde_json::from_value(entry)
                .ok()
                .map(|decoded| (key, decoded))
        })
        .collect())
}

/// JavaScript-style truthiness, used where the provider's fallbacks rely on it.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns `Some` only for a JSON value that is a finite number.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|f| f.is_finite())
}
