use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parses a text token into an enum through its serde representation.
///
/// Trims and uppercases the input first, so `"approved"`, `"Approved"`, and
/// `"APPROVED"` all resolve to the same variant of a SCREAMING_SNAKE_CASE
/// enum.
///
/// # Returns
/// - `Some(T)` - The token matched a variant
/// - `None` - No variant matched
pub fn parse_enum_token<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_value(Value::String(raw.trim().to_uppercase())).ok()
}
