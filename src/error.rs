//! Error types for layerconf

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for layerconf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for layerconf
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete file '{path}': {source}")]
    FileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to parse document: {0}")]
    Parse(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Not a configuration file: {}", .0.display())]
    NotAConfiguration(PathBuf),

    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    #[error("Invalid setting value for {key}: {reason}")]
    InvalidSettingValue { key: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if the document was valid JSON but not a configuration
    ///
    /// Expected when scanning a directory that holds unrelated JSON files.
    #[must_use]
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Error::NotAConfiguration(_))
    }

    /// Check if the document could not be parsed at all
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Check if this is a filesystem error
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Error::FileRead { .. }
                | Error::FileWrite { .. }
                | Error::DirectoryCreate { .. }
                | Error::DirectoryRead { .. }
                | Error::FileDelete { .. }
        )
    }
}

// =============================================================================
// I/O helpers
// =============================================================================

/// Read directory entries with proper error handling
pub fn read_dir(path: &Path) -> Result<std::fs::ReadDir> {
    std::fs::read_dir(path).map_err(|e| Error::DirectoryRead {
        path: path.to_path_buf(),
        source: e,
    })
}
