//! Locations and policy for loading configurations
//!
//! - `ConfigPaths` - where saved and built-in configurations live
//! - `PathResolver` - trait for resolving a configuration name to a file
//! - `LoadPolicy` - decode-time choices a document cannot express itself

mod paths;
mod types;

pub use paths::{PathKind, PathResolver};
pub use types::{APP_DIR, ConfigPaths, ConfigPathsBuilder, EXTENSION, LoadPolicy};
