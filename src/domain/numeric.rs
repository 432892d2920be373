//! Lenient deserializers for values that forms persisted as text.
//!
//! Stored records may hold `"3"`, `3`, `""` or nothing at all for the same
//! field depending on which screen wrote them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::pricing::{non_negative_or_zero, parse_number};

fn raw<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Option::<Value>::deserialize(deserializer)
}

fn value_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Any number or numeric text; everything else is `0.0`.
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(raw(deserializer)?
        .as_ref()
        .and_then(value_to_number)
        .unwrap_or(0.0))
}

/// Like [`number`], but keeps "absent" distinct from zero.
pub fn optional_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(raw(deserializer)?.as_ref().and_then(value_to_number))
}

/// Non-negative whole count; fractions are truncated.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let n = non_negative_or_zero(number(deserializer)?);
    Ok(n.trunc().min(u32::MAX as f64) as u32)
}

/// Text that some screens stored as a JSON number (phone, CNPJ). `null`,
/// arrays and objects read as empty text.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match raw(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}
