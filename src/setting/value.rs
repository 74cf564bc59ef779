//! Typed setting values
//!
//! A closed set of variants, one per [`SettingType`]. Loading is permissive
//! about scalar spelling (numeric text, legacy boolean tokens, comma-joined
//! lists) and saving always writes the canonical current-generation form.

use super::SettingType;
use serde_json::{Value, json};

/// A setting value tagged by its type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    String(String),
    Int(i64),
    SaveFile(String),
    LoadFile(String),
    SaveFolder(String),
    /// Legacy tokens `"TRUE"` / `"FALSE"`
    Bool(bool),
    /// Deprecated numeric boolean, legacy tokens `"1"` / `"0"`
    BoolNumeric(bool),
    Enum(String),
    VuidFilter(Vec<String>),
    Flags(Vec<String>),
}

impl SettingValue {
    /// Zero/empty value for a type
    pub fn new(setting_type: SettingType) -> Self {
        match setting_type {
            SettingType::String => SettingValue::String(String::new()),
            SettingType::Int => SettingValue::Int(0),
            SettingType::SaveFile => SettingValue::SaveFile(String::new()),
            SettingType::LoadFile => SettingValue::LoadFile(String::new()),
            SettingType::SaveFolder => SettingValue::SaveFolder(String::new()),
            SettingType::Bool => SettingValue::Bool(false),
            SettingType::BoolNumeric => SettingValue::BoolNumeric(false),
            SettingType::Enum => SettingValue::Enum(String::new()),
            SettingType::VuidFilter => SettingValue::VuidFilter(Vec::new()),
            SettingType::Flags => SettingValue::Flags(Vec::new()),
        }
    }

    pub fn setting_type(&self) -> SettingType {
        match self {
            SettingValue::String(_) => SettingType::String,
            SettingValue::Int(_) => SettingType::Int,
            SettingValue::SaveFile(_) => SettingType::SaveFile,
            SettingValue::LoadFile(_) => SettingType::LoadFile,
            SettingValue::SaveFolder(_) => SettingType::SaveFolder,
            SettingValue::Bool(_) => SettingType::Bool,
            SettingValue::BoolNumeric(_) => SettingType::BoolNumeric,
            SettingValue::Enum(_) => SettingType::Enum,
            SettingValue::VuidFilter(_) => SettingType::VuidFilter,
            SettingValue::Flags(_) => SettingType::Flags,
        }
    }

    /// Populate from a JSON node, keeping the current tag
    ///
    /// Returns `false` and leaves the value untouched when the node cannot
    /// represent this type (an object where a scalar is expected, non-numeric
    /// text for an integer, ...).
    pub fn load(&mut self, node: &Value) -> bool {
        match self {
            SettingValue::String(value)
            | SettingValue::SaveFile(value)
            | SettingValue::LoadFile(value)
            | SettingValue::SaveFolder(value)
            | SettingValue::Enum(value) => match scalar_text(node) {
                Some(text) => {
                    *value = text;
                    true
                }
                None => false,
            },
            SettingValue::Int(value) => match parse_int(node) {
                Some(parsed) => {
                    *value = parsed;
                    true
                }
                None => false,
            },
            SettingValue::Bool(value) => match node {
                Value::Bool(b) => {
                    *value = *b;
                    true
                }
                Value::String(token) => {
                    *value = token == "TRUE";
                    true
                }
                _ => false,
            },
            SettingValue::BoolNumeric(value) => match node {
                Value::Bool(b) => {
                    *value = *b;
                    true
                }
                Value::String(token) => {
                    *value = token == "1";
                    true
                }
                Value::Number(number) => {
                    *value = number.as_i64() == Some(1);
                    true
                }
                _ => false,
            },
            SettingValue::VuidFilter(list) | SettingValue::Flags(list) => match parse_list(node) {
                Some(parsed) => {
                    *list = parsed;
                    true
                }
                None => false,
            },
        }
    }

    /// Canonical on-disk representation
    ///
    /// Lists are always written as native arrays, never as comma-joined text.
    pub fn to_json(&self) -> Value {
        match self {
            SettingValue::String(value)
            | SettingValue::SaveFile(value)
            | SettingValue::LoadFile(value)
            | SettingValue::SaveFolder(value)
            | SettingValue::Enum(value) => Value::String(value.clone()),
            SettingValue::Int(value) => json!(value),
            SettingValue::Bool(value) | SettingValue::BoolNumeric(value) => Value::Bool(*value),
            SettingValue::VuidFilter(list) | SettingValue::Flags(list) => json!(list),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(value)
            | SettingValue::SaveFile(value)
            | SettingValue::LoadFile(value)
            | SettingValue::SaveFolder(value)
            | SettingValue::Enum(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(value) | SettingValue::BoolNumeric(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            SettingValue::VuidFilter(list) | SettingValue::Flags(list) => Some(list),
            _ => None,
        }
    }
}

fn scalar_text(node: &Value) -> Option<String> {
    match node {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_int(node: &Value) -> Option<i64> {
    match node {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn parse_list(node: &Value) -> Option<Vec<String>> {
    match node {
        Value::String(text) => Some(
            text.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        Value::Array(_) => crate::json::string_list(node),
        _ => None,
    }
}
