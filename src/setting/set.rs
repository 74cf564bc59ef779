use super::{SettingType, SettingValue};
use crate::error::{Error, Result};
use log::debug;

/// A keyed setting value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingData {
    pub key: String,
    pub value: SettingValue,
}

impl SettingData {
    pub fn setting_type(&self) -> SettingType {
        self.value.setting_type()
    }
}

/// Insertion-ordered collection of setting values, unique by key
///
/// The type of a key is fixed by the first value created for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingSet {
    data: Vec<SettingData>,
}

impl SettingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the value for `key`
    ///
    /// A new key gets an empty value of `setting_type`. An existing key keeps
    /// its type and current value whatever `setting_type` is requested.
    pub fn create(&mut self, key: &str, setting_type: SettingType) -> &mut SettingValue {
        let index = match self.position(key) {
            Some(index) => {
                let existing = self.data[index].setting_type();
                if existing != setting_type {
                    debug!("Setting '{key}' keeps type {existing}, requested {setting_type}");
                }
                index
            }
            None => {
                self.data.push(SettingData {
                    key: key.to_string(),
                    value: SettingValue::new(setting_type),
                });
                self.data.len() - 1
            }
        };
        &mut self.data[index].value
    }

    /// Replace the value of `key`, inserting it if absent
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettingValue`] if `key` already holds a value of
    /// another type.
    pub fn set(&mut self, key: &str, value: SettingValue) -> Result<()> {
        match self.position(key) {
            Some(index) => {
                let existing = self.data[index].setting_type();
                if existing != value.setting_type() {
                    return Err(Error::InvalidSettingValue {
                        key: key.to_string(),
                        reason: format!(
                            "expected {existing}, got {}",
                            value.setting_type()
                        ),
                    });
                }
                self.data[index].value = value;
            }
            None => self.data.push(SettingData {
                key: key.to_string(),
                value,
            }),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.data
            .iter()
            .find(|data| data.key == key)
            .map(|data| &data.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut SettingValue> {
        self.data
            .iter_mut()
            .find(|data| data.key == key)
            .map(|data| &mut data.value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<SettingValue> {
        let index = self.position(key)?;
        Some(self.data.remove(index).value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SettingData> {
        self.data.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|data| data.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.data.iter().position(|data| data.key == key)
    }
}

impl<'a> IntoIterator for &'a SettingSet {
    type Item = &'a SettingData;
    type IntoIter = std::slice::Iter<'a, SettingData>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
