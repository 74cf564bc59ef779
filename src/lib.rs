//! # layerconf - Layer override configurations
//!
//! Loading, migrating and saving named sets of layer overrides: which layers
//! are forced on, forced off or left to the application, in which order, and
//! with which setting values.
//!
//! ## Features
//!
//! - **Three document generations**: 2.0, 2.1 and 2.2 files are all readable,
//!   saving always writes the current generation
//! - **Typed settings**: ten setting kinds, each loaded with permissive token
//!   spelling and saved in one canonical form
//! - **Catalog defaults**: settings declared by known layers are seeded before
//!   the document values are applied
//! - **Deterministic order**: parameters are sorted by explicit rank, unranked last
//! - **Duplicate names**: `"Name (N)"` copies never collide
//! - **Reset**: back to the built-in, the saved file, or application control
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use layerconf::{Configuration, ConfigPaths, Layer, LoadPolicy, SettingDefinition, SettingValue};
//! use std::path::Path;
//!
//! # fn example() -> layerconf::Result<()> {
//! let layers = vec![
//!     Layer::new("VK_LAYER_KHRONOS_validation")
//!         .setting(SettingDefinition::new("enables", SettingValue::Flags(Vec::new()))),
//! ];
//!
//! let configuration = Configuration::load(
//!     Path::new("Validation.json"),
//!     &layers,
//!     &LoadPolicy::default(),
//! )?;
//!
//! let paths = ConfigPaths::builder().config_dir("~/.config/layerconf").build();
//! configuration.save_to(&paths)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Scanning a directory
//!
//! Directories often hold other JSON files. Those decode as
//! [`Error::NotAConfiguration`], which is distinct from a malformed file:
//!
//! ```rust,no_run
//! use layerconf::{Configuration, LoadPolicy};
//! use std::path::Path;
//!
//! match Configuration::load(Path::new("layers.json"), &[], &LoadPolicy::default()) {
//!     Ok(configuration) => println!("{}", configuration.key),
//!     Err(e) if e.is_not_applicable() => {}
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

// Core modules
mod error;
mod json;
pub mod builtin;
pub mod layer;
pub mod platform;
pub mod setting;
pub mod storage;
pub mod version;

// Grouped modules
pub mod config;
pub mod configuration;

// Re-exports from core
pub use builtin::{BuiltinEntry, BuiltinProvider, DirectoryBuiltins, StaticBuiltins};
pub use error::{Error, Result};
pub use layer::{Layer, SettingDefinition, find_layer};
pub use platform::{Platform, PlatformFlags};
pub use setting::{SettingData, SettingSet, SettingType, SettingValue};
pub use storage::{JsonStorage, StorageBackend};
pub use version::Version;

// Re-exports from config
pub use config::{ConfigPaths, ConfigPathsBuilder, LoadPolicy, PathKind, PathResolver};

// Re-exports from configuration
pub use configuration::format::{Generation, decode_document, encode_document};
pub use configuration::{
    Configuration, LayerState, NO_RANK, PLACEHOLDER_NAME, Parameter, ResetSource, load_all,
    make_configuration_name, order_parameters,
};
