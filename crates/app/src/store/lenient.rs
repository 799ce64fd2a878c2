//! Forgiving decoders for numeric document fields.
//!
//! Documents are written by more than one client, so a number may arrive as
//! text, as a negative value, or not at all. Anything that is not a
//! non-negative whole number reads as zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a price or total.
pub(crate) fn amount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(whole_number(&Value::deserialize(deserializer)?))
}

/// Decode a quantity; values beyond `u32` read as zero.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u32::try_from(whole_number(&Value::deserialize(deserializer)?)).unwrap_or_default())
}

fn whole_number(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number.as_u64().unwrap_or_default(),
        Value::String(text) => text.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}
