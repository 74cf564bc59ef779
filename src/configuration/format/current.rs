use super::NO_RANK_VALUE;
use crate::configuration::{Configuration, LayerState, Parameter};
use crate::version::Version;
use serde_json::{Map, Value, json};

/// Encode a configuration as a current-generation document
///
/// Application-controlled parameters are left out; loading treats a missing
/// layer the same way.
pub fn encode_document(configuration: &Configuration) -> Value {
    let layers: Vec<Value> = configuration
        .parameters
        .iter()
        .filter(|parameter| parameter.state != LayerState::ApplicationControlled)
        .map(encode_parameter)
        .collect();

    json!({
        "file_format_version": Version::CURRENT.to_string(),
        "configuration": {
            "name": configuration.key,
            "description": configuration.description,
            "editor_state": configuration.setting_tree_state,
            "platforms": configuration.platform_flags.tokens(),
            "layers": layers,
        }
    })
}

fn encode_parameter(parameter: &Parameter) -> Value {
    let settings: Vec<Value> = parameter
        .settings
        .iter()
        .map(|data| {
            let mut setting = Map::new();
            setting.insert("key".to_string(), Value::String(data.key.clone()));
            setting.insert(
                "type".to_string(),
                Value::String(data.setting_type().token().to_string()),
            );
            setting.insert("value".to_string(), data.value.to_json());
            Value::Object(setting)
        })
        .collect();

    json!({
        "name": parameter.key,
        "rank": parameter.overridden_rank.map_or(NO_RANK_VALUE, i64::from),
        "state": parameter.state.token(),
        "platforms": parameter.platform_flags.tokens(),
        "settings": settings,
    })
}
