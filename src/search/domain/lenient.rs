//! Tolerant field decoders for backend payloads.
//!
//! The backend is loose about types (ids arrive as numbers or strings, lists
//! arrive as `null`), so these helpers degrade to defaults instead of failing
//! the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a JSON string or number and renders it as a string.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts a JSON number or a numeric string as a price.
///
/// Anything else (including a string that is not a number) counts as no price.
pub(crate) fn price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
        _ => None,
    })
}
