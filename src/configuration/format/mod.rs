//! Document generations
//!
//! Configuration files come in three incompatible shapes, selected by the
//! document's `file_format_version`:
//!
//! | version          | generation | shape                                              |
//! |------------------|------------|----------------------------------------------------|
//! | `< 2.1.0`        | 2.0        | unwrapped object, `layer_options` map, `blacklisted_layers` |
//! | `< 2.2.0`        | 2.1        | `"configuration"` wrapper, setting types from the catalog |
//! | otherwise        | 2.2        | `"configuration"` wrapper, typed settings          |
//!
//! Old generations are read-only; [`encode_document`] always writes 2.2.

mod current;
mod v2_0;
mod v2_1;
mod v2_2;

pub use current::encode_document;

use crate::config::LoadPolicy;
use crate::configuration::{Configuration, LayerState, Parameter};
use crate::error::{Error, Result};
use crate::json::{Object, read_int, read_string, read_string_array};
use crate::layer::{Layer, find_layer};
use crate::platform::PlatformFlags;
use crate::version::Version;
use log::{debug, warn};
use serde_json::Value;
use std::path::Path;

/// Key of the format version field
pub const FILE_FORMAT_VERSION: &str = "file_format_version";

/// Key of the wrapper object in generation 2.1 and later
pub const CONFIGURATION: &str = "configuration";

/// Rank written for parameters without one
pub(crate) const NO_RANK_VALUE: i64 = -1;

/// On-disk document generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    V2_0,
    V2_1,
    V2_2,
}

impl Generation {
    /// Generation used for a document of `version`
    pub fn for_version(version: Version) -> Self {
        if version < Version::GENERATION_2_1 {
            Generation::V2_0
        } else if version < Version::GENERATION_2_2 {
            Generation::V2_1
        } else {
            Generation::V2_2
        }
    }
}

/// Inputs shared by the decoders
pub(crate) struct DecodeContext<'a> {
    pub layers: &'a [Layer],
    pub policy: &'a LoadPolicy,
    pub path: &'a Path,
    pub version: Version,
}

/// Declared format version of a document
///
/// Strings and bare numbers (`2.2`) are both read. An absent field, or one
/// that does not start with a version, means `policy.legacy_default_version`.
pub fn document_version(root: &Value, policy: &LoadPolicy) -> Version {
    let parsed: Result<Version> = match root.get(FILE_FORMAT_VERSION) {
        None => return policy.legacy_default_version,
        Some(Value::String(text)) => text.parse(),
        Some(Value::Number(number)) => number.to_string().parse(),
        Some(other) => Err(Error::InvalidVersion(other.to_string())),
    };

    parsed.unwrap_or_else(|e| {
        warn!("{e}, assuming {}", policy.legacy_default_version);
        policy.legacy_default_version
    })
}

/// Decode a parsed document
///
/// `path` is the file the document came from; generation 2.0 may take the
/// configuration name from it. The returned configuration is ordered but may
/// still have an empty key, which the file-level loader repairs.
///
/// # Errors
///
/// Returns [`Error::NotAConfiguration`] if the document is not a configuration.
pub fn decode_document(
    root: &Value,
    path: &Path,
    layers: &[Layer],
    policy: &LoadPolicy,
) -> Result<Configuration> {
    let root_object = root
        .as_object()
        .ok_or_else(|| Error::NotAConfiguration(path.to_path_buf()))?;

    let version = document_version(root, policy);
    let generation = Generation::for_version(version);
    debug!(
        "Decoding '{}' (format {version}) as generation {generation:?}",
        path.display()
    );

    let context = DecodeContext {
        layers,
        policy,
        path,
        version,
    };

    let mut configuration = match generation {
        Generation::V2_0 => v2_0::decode(&context, root_object)?,
        Generation::V2_1 => v2_1::decode(&context, root_object)?,
        Generation::V2_2 => v2_2::decode(&context, root_object)?,
    };

    configuration.order_parameters();
    Ok(configuration)
}

// =============================================================================
// Construction helpers shared by the decoders
// =============================================================================

/// Rank field, negative or missing values mean no rank
pub(crate) fn read_rank(object: &Object, key: &str) -> Option<u32> {
    read_int(object, key).and_then(|rank| u32::try_from(rank).ok())
}

/// Platform mask from an optional token list, all platforms when absent
pub(crate) fn read_platforms(object: &Object) -> PlatformFlags {
    read_string_array(object, "platforms")
        .map(|tokens| PlatformFlags::from_tokens(&tokens))
        .unwrap_or_default()
}

/// Header fields present in every generation
pub(crate) fn read_header(object: &Object, configuration: &mut Configuration) {
    configuration.setting_tree_state = object.get("editor_state").cloned().unwrap_or(Value::Null);
    configuration.description = read_string(object, "description");
    configuration.platform_flags = read_platforms(object);
}

/// Parameter for `key` seeded with the catalog defaults
///
/// Layers missing from the catalog are kept with an empty setting set.
pub(crate) fn seeded_parameter(layers: &[Layer], key: &str, state: LayerState) -> Parameter {
    match find_layer(layers, key) {
        Some(layer) => Parameter::new(key, state).with_settings(layer.default_settings()),
        None => {
            debug!("Layer '{key}' is not in the catalog, keeping it without defaults");
            Parameter::new(key, state)
        }
    }
}
