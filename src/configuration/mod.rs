//! Layer override configurations
//!
//! A [`Configuration`] is a named set of per-layer [`Parameter`]s. Each
//! parameter says whether its layer is forced on, forced off or left to the
//! application, where it ranks among forced layers, and which setting values
//! it carries.
//!
//! Configurations are loaded from any of three document generations and always
//! saved in the current one (see [`format`]).

pub mod format;
mod io;
mod naming;

pub use io::{ResetSource, load_all};
pub use naming::{make_configuration_name, split_duplicate_suffix};

use crate::layer::{Layer, default_settings};
use crate::platform::{Platform, PlatformFlags};
use crate::setting::SettingSet;
use serde_json::Value;

/// Name given to configurations whose document has no usable name
pub const PLACEHOLDER_NAME: &str = "Configuration";

/// Rank of a parameter that has no explicit position
pub const NO_RANK: Option<u32> = None;

/// How a configuration treats a layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LayerState {
    /// Forced on
    Overridden,
    /// Forced off
    Excluded,
    /// Left to the application
    #[default]
    ApplicationControlled,
}

impl LayerState {
    pub fn token(self) -> &'static str {
        match self {
            LayerState::Overridden => "OVERRIDDEN",
            LayerState::Excluded => "EXCLUDED",
            LayerState::ApplicationControlled => "APPLICATION_CONTROLLED",
        }
    }

    /// Parse a document token; unknown tokens mean application controlled
    pub fn from_token(token: &str) -> Self {
        [LayerState::Overridden, LayerState::Excluded]
            .into_iter()
            .find(|state| state.token().eq_ignore_ascii_case(token.trim()))
            .unwrap_or(LayerState::ApplicationControlled)
    }
}

/// Per-layer override record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Layer name, unique within a configuration
    pub key: String,
    pub state: LayerState,
    /// Explicit position among layers; `None` sorts after every ranked layer
    pub overridden_rank: Option<u32>,
    pub platform_flags: PlatformFlags,
    pub settings: SettingSet,
}

impl Parameter {
    pub fn new(key: impl Into<String>, state: LayerState) -> Self {
        Self {
            key: key.into(),
            state,
            overridden_rank: NO_RANK,
            platform_flags: PlatformFlags::ALL,
            settings: SettingSet::new(),
        }
    }

    #[must_use]
    pub fn with_rank(mut self, rank: u32) -> Self {
        self.overridden_rank = Some(rank);
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: SettingSet) -> Self {
        self.settings = settings;
        self
    }
}

/// A named set of layer overrides
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Display name, never empty once loaded
    pub key: String,
    pub description: String,
    pub platform_flags: PlatformFlags,
    /// Editor state, passed through untouched
    pub setting_tree_state: Value,
    pub parameters: Vec<Parameter>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            key: "New Configuration".to_string(),
            description: String::new(),
            platform_flags: PlatformFlags::ALL,
            setting_tree_state: Value::Null,
            parameters: Vec::new(),
        }
    }
}

impl Configuration {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn find_parameter(&self, key: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|parameter| parameter.key == key)
    }

    pub fn find_parameter_mut(&mut self, key: &str) -> Option<&mut Parameter> {
        self.parameters
            .iter_mut()
            .find(|parameter| parameter.key == key)
    }

    /// Add a parameter, replacing any parameter with the same key
    ///
    /// The parameter list is re-ordered afterwards.
    pub fn insert_parameter(&mut self, parameter: Parameter) {
        match self.find_parameter_mut(&parameter.key) {
            Some(existing) => *existing = parameter,
            None => self.parameters.push(parameter),
        }
        self.order_parameters();
    }

    /// Sort parameters by rank, unranked last, keeping the current order among equals
    pub fn order_parameters(&mut self) {
        order_parameters(&mut self.parameters);
    }

    /// Put every parameter back to application control with catalog defaults
    pub fn clear_overrides(&mut self, layers: &[Layer]) {
        for parameter in &mut self.parameters {
            parameter.state = LayerState::ApplicationControlled;
            parameter.overridden_rank = NO_RANK;
            parameter.settings = default_settings(layers, &parameter.key);
        }
        self.order_parameters();
    }

    /// Copy of this configuration named so it does not collide with `existing`
    pub fn duplicate(&self, existing: &[Configuration]) -> Configuration {
        let mut copy = self.clone();
        copy.key = make_configuration_name(
            existing.iter().map(|configuration| configuration.key.as_str()),
            &self.key,
        );
        copy
    }

    /// Whether any parameter applicable on `platform` overrides its layer
    pub fn has_override(&self, platform: Platform) -> bool {
        self.parameters.iter().any(|parameter| {
            parameter.platform_flags.contains(platform.flag())
                && parameter.state != LayerState::ApplicationControlled
        })
    }

    pub fn is_available_on(&self, platform: Platform) -> bool {
        self.platform_flags.contains(platform.flag())
    }

    pub fn is_available_on_this_platform(&self) -> bool {
        self.is_available_on(Platform::current())
    }
}

/// Sort parameters by explicit rank ascending
///
/// Unranked parameters go after all ranked ones. The sort is stable, so equal
/// ranks keep their relative order and re-sorting a sorted list is a no-op.
pub fn order_parameters(parameters: &mut [Parameter]) {
    parameters.sort_by_key(|parameter| {
        (
            parameter.overridden_rank.is_none(),
            parameter.overridden_rank,
        )
    });
}
