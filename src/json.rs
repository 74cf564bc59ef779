//! Field extraction helpers for schema-on-read decoding
//!
//! Every helper has a single fallback for missing or mistyped fields so the
//! decoders degrade field by field instead of aborting a whole document.

use serde_json::{Map, Value};
use std::sync::OnceLock;

pub(crate) type Object = Map<String, Value>;

/// String field, `""` when missing or not a string
pub(crate) fn read_string(object: &Object, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Integer field, `None` when missing or not an integer
///
/// Accepts numbers and decimal strings.
pub(crate) fn read_int(object: &Object, key: &str) -> Option<i64> {
    match object.get(key)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Array of strings, `None` when the field is absent
///
/// Non-string elements are skipped.
pub(crate) fn read_string_array(object: &Object, key: &str) -> Option<Vec<String>> {
    let value = object.get(key)?;
    Some(string_list(value).unwrap_or_default())
}

/// Object field, empty when missing or not an object
pub(crate) fn read_object<'a>(object: &'a Object, key: &str) -> &'a Object {
    object
        .get(key)
        .and_then(Value::as_object)
        .unwrap_or_else(|| empty_object())
}

/// Shared empty object for fallbacks
pub(crate) fn empty_object() -> &'static Object {
    static EMPTY: OnceLock<Object> = OnceLock::new();
    EMPTY.get_or_init(Object::new)
}

/// Array field, empty when missing or not an array
pub(crate) fn read_array<'a>(object: &'a Object, key: &str) -> &'a [Value] {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Strings of a JSON array, `None` if the value is not an array
pub(crate) fn string_list(value: &Value) -> Option<Vec<String>> {
    let array = value.as_array()?;
    Some(
        array
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}
