//! Generation 2.0 decoder
//!
//! ```json
//! {
//!   "file_format_version": "2.0.3",
//!   "Validation": {
//!     "name": "Validation",
//!     "description": "...",
//!     "layer_options": {
//!       "VK_LAYER_KHRONOS_validation": {
//!         "layer_rank": 0,
//!         "debug_action": { "type": "multi_enum", "default": "VK_DBG_LAYER_ACTION_LOG_MSG" }
//!       }
//!     },
//!     "blacklisted_layers": ["VK_LAYER_LUNARG_api_dump"]
//!   }
//! }
//! ```
//!
//! The configuration body is the first object member of the root other than
//! the version field; a root without one is not a configuration. Early 2.0 files are named after the file rather than a
//! `"name"` field, as decided by [`LoadPolicy`](crate::LoadPolicy).

use super::{DecodeContext, FILE_FORMAT_VERSION, read_header, read_rank, seeded_parameter};
use crate::configuration::{Configuration, LayerState};
use crate::error::{Error, Result};
use crate::json::{Object, empty_object, read_array, read_object, read_string};
use crate::setting::SettingType;
use log::{debug, warn};
use serde_json::Value;

/// Reserved `layer_options` entry holding the rank
const LAYER_RANK: &str = "layer_rank";

pub(super) fn decode(context: &DecodeContext<'_>, root: &Object) -> Result<Configuration> {
    let Some(body) = root
        .iter()
        .filter(|(key, _)| key.as_str() != FILE_FORMAT_VERSION)
        .find_map(|(_, value)| value.as_object())
    else {
        debug!("'{}' has no configuration body", context.path.display());
        return Err(Error::NotAConfiguration(context.path.to_path_buf()));
    };

    let key = if context.policy.name_from_filename(context.version) {
        context
            .path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        read_string(body, "name")
    };

    let mut configuration = Configuration::new(key);
    read_header(body, &mut configuration);

    for (layer_key, layer_value) in read_object(body, "layer_options") {
        let layer_object = layer_value.as_object().unwrap_or_else(|| {
            warn!("Layer options for '{layer_key}' are not an object, keeping the layer without options");
            empty_object()
        });

        let mut parameter = seeded_parameter(context.layers, layer_key, LayerState::Overridden);
        parameter.overridden_rank = read_rank(layer_object, LAYER_RANK);

        for (setting_key, setting_value) in layer_object {
            if setting_key == LAYER_RANK {
                continue;
            }
            let Some(setting_object) = setting_value.as_object() else {
                warn!("Setting '{layer_key}.{setting_key}' is not an object, skipping");
                continue;
            };

            let token = read_string(setting_object, "type");
            let Some(setting_type) = SettingType::from_token(&token) else {
                warn!("Setting '{layer_key}.{setting_key}' has unknown type '{token}', skipping");
                continue;
            };

            let value = parameter.settings.create(setting_key, setting_type);
            let node = setting_object.get("default").unwrap_or(&Value::Null);
            if !value.load(node) {
                warn!("Setting '{layer_key}.{setting_key}' has an invalid default {node}, keeping {value:?}");
            }
        }

        configuration.parameters.push(parameter);
    }

    for excluded in read_array(body, "blacklisted_layers") {
        let Some(layer_key) = excluded.as_str() else {
            continue;
        };
        match configuration.find_parameter_mut(layer_key) {
            Some(parameter) => parameter.state = LayerState::Excluded,
            None => configuration.parameters.push(seeded_parameter(
                context.layers,
                layer_key,
                LayerState::Excluded,
            )),
        }
    }

    Ok(configuration)
}
