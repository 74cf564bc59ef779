//! Known layers and their declared settings
//!
//! The catalog of installed layers is discovered elsewhere and handed to the
//! decoders as a borrowed slice. It only seeds default values; a configuration
//! never keeps a reference to it.

use crate::setting::{SettingSet, SettingType, SettingValue};

/// A setting declared by a layer, with its default value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingDefinition {
    pub key: String,
    pub default: SettingValue,
}

impl SettingDefinition {
    pub fn new(key: impl Into<String>, default: SettingValue) -> Self {
        Self {
            key: key.into(),
            default,
        }
    }

    /// Definition with the empty value of `setting_type` as default
    pub fn typed(key: impl Into<String>, setting_type: SettingType) -> Self {
        Self::new(key, SettingValue::new(setting_type))
    }

    pub fn setting_type(&self) -> SettingType {
        self.default.setting_type()
    }
}

/// A known layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub key: String,
    pub settings: Vec<SettingDefinition>,
}

impl Layer {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            settings: Vec::new(),
        }
    }

    /// Add a declared setting
    #[must_use]
    pub fn setting(mut self, definition: SettingDefinition) -> Self {
        self.settings.push(definition);
        self
    }

    /// Declared defaults, in declaration order
    pub fn default_settings(&self) -> SettingSet {
        let mut set = SettingSet::new();
        for definition in &self.settings {
            *set.create(&definition.key, definition.setting_type()) = definition.default.clone();
        }
        set
    }
}

/// Find a layer by key
pub fn find_layer<'a>(layers: &'a [Layer], key: &str) -> Option<&'a Layer> {
    layers.iter().find(|layer| layer.key == key)
}

/// Default settings for `key`, empty when the layer is unknown
pub fn default_settings(layers: &[Layer], key: &str) -> SettingSet {
    find_layer(layers, key)
        .map(Layer::default_settings)
        .unwrap_or_default()
}
