//! Setting types, values and keyed collections
//!
//! - [`SettingType`] - the ten recognized setting kinds
//! - [`SettingValue`] - a value tagged by its kind
//! - [`SettingSet`] - insertion-ordered `key -> value` collection for one layer

mod set;
mod value;

pub use set::{SettingData, SettingSet};
pub use value::SettingValue;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingType {
    String,
    Int,
    SaveFile,
    LoadFile,
    SaveFolder,
    Bool,
    BoolNumeric,
    Enum,
    #[serde(rename = "VUID_EXCLUDE")]
    VuidFilter,
    Flags,
}

impl SettingType {
    pub const ALL: [SettingType; 10] = [
        SettingType::String,
        SettingType::Int,
        SettingType::SaveFile,
        SettingType::LoadFile,
        SettingType::SaveFolder,
        SettingType::Bool,
        SettingType::BoolNumeric,
        SettingType::Enum,
        SettingType::VuidFilter,
        SettingType::Flags,
    ];

    /// Token written to documents
    pub fn token(self) -> &'static str {
        match self {
            SettingType::String => "STRING",
            SettingType::Int => "INT",
            SettingType::SaveFile => "SAVE_FILE",
            SettingType::LoadFile => "LOAD_FILE",
            SettingType::SaveFolder => "SAVE_FOLDER",
            SettingType::Bool => "BOOL",
            SettingType::BoolNumeric => "BOOL_NUMERIC",
            SettingType::Enum => "ENUM",
            SettingType::VuidFilter => "VUID_EXCLUDE",
            SettingType::Flags => "FLAGS",
        }
    }

    /// Parse a document token
    ///
    /// Case-insensitive; older documents spell flag lists `multi_enum`.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("MULTI_ENUM") {
            return Some(SettingType::Flags);
        }
        Self::ALL
            .into_iter()
            .find(|setting_type| setting_type.token().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
