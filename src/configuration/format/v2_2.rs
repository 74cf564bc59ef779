//! Generation 2.2 decoder (current)
//!
//! ```json
//! {
//!   "file_format_version": "2.2.0",
//!   "configuration": {
//!     "name": "Validation",
//!     "description": "...",
//!     "editor_state": "...",
//!     "platforms": ["WINDOWS", "LINUX", "MACOS"],
//!     "layers": [{
//!       "name": "VK_LAYER_KHRONOS_validation",
//!       "rank": 0,
//!       "state": "OVERRIDDEN",
//!       "platforms": ["WINDOWS", "LINUX"],
//!       "settings": [{"key": "debug_action", "type": "FLAGS", "value": ["LOG_MSG"]}]
//!     }]
//!   }
//! }
//! ```

use super::{CONFIGURATION, DecodeContext, read_header, read_platforms, read_rank, seeded_parameter};
use crate::configuration::{Configuration, LayerState};
use crate::error::{Error, Result};
use crate::json::{Object, read_array, read_string};
use crate::setting::SettingType;
use log::{debug, warn};

pub(super) fn decode(context: &DecodeContext<'_>, root: &Object) -> Result<Configuration> {
    let Some(body) = root.get(CONFIGURATION).and_then(|value| value.as_object()) else {
        debug!("'{}' has no configuration object", context.path.display());
        return Err(Error::NotAConfiguration(context.path.to_path_buf()));
    };

    let mut configuration = Configuration::new(read_string(body, "name"));
    read_header(body, &mut configuration);

    for layer_value in read_array(body, "layers") {
        let Some(layer_object) = layer_value.as_object() else {
            warn!("Layer entry is not an object, skipping");
            continue;
        };

        let layer_key = read_string(layer_object, "name");
        if layer_key.is_empty() {
            warn!("Layer entry without name, skipping");
            continue;
        }
        let state = LayerState::from_token(&read_string(layer_object, "state"));
        let mut parameter = seeded_parameter(context.layers, &layer_key, state);
        parameter.overridden_rank = read_rank(layer_object, "rank");
        parameter.platform_flags = read_platforms(layer_object);

        for setting_value in read_array(layer_object, "settings") {
            let Some(setting_object) = setting_value.as_object() else {
                continue;
            };

            let setting_key = read_string(setting_object, "key");
            if setting_key.is_empty() {
                warn!("Setting without key in layer '{layer_key}', skipping");
                continue;
            }

            let token = read_string(setting_object, "type");
            let setting_type = SettingType::from_token(&token).or_else(|| {
                parameter
                    .settings
                    .get(&setting_key)
                    .map(|existing| existing.setting_type())
            });
            let Some(setting_type) = setting_type else {
                warn!("Setting '{layer_key}.{setting_key}' has unknown type '{token}', skipping");
                continue;
            };

            let value = parameter.settings.create(&setting_key, setting_type);
            let loaded = setting_object
                .get("value")
                .is_some_and(|node| value.load(node));
            if !loaded {
                warn!("Setting '{layer_key}.{setting_key}' could not be read as {}", value.setting_type());
            }
        }

        if configuration.find_parameter(&layer_key).is_some() {
            warn!("Layer '{layer_key}' listed twice, keeping the first entry");
            continue;
        }
        configuration.parameters.push(parameter);
    }

    Ok(configuration)
}
