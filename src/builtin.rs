//! Built-in configuration listing
//!
//! Built-in configurations are read-only templates shipped with an
//! application. They are supplied through [`BuiltinProvider`] so callers can
//! point at a resource directory or hand over a fixed list.

use crate::error::Result;
use crate::storage::{JsonStorage, StorageBackend};
use log::debug;
use std::path::{Path, PathBuf};

/// A built-in configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinEntry {
    /// Configuration name (file basename)
    pub name: String,
    pub path: PathBuf,
}

impl BuiltinEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Source of built-in configurations
pub trait BuiltinProvider {
    /// List every built-in configuration
    fn list_builtins(&self) -> Result<Vec<BuiltinEntry>>;

    /// Find the built-in configuration called `name`
    fn find_builtin(&self, name: &str) -> Result<Option<BuiltinEntry>> {
        Ok(self
            .list_builtins()?
            .into_iter()
            .find(|entry| entry.name == name))
    }
}

/// Built-ins stored as `*.json` files in a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryBuiltins {
    dir: PathBuf,
}

impl DirectoryBuiltins {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl BuiltinProvider for DirectoryBuiltins {
    fn list_builtins(&self) -> Result<Vec<BuiltinEntry>> {
        if !self.dir.exists() {
            debug!("Built-in directory '{}' does not exist", self.dir.display());
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for path in JsonStorage::new().list(&self.dir)? {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                entries.push(BuiltinEntry::new(stem, &path));
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        debug!("Found {} built-in configurations in '{}'", entries.len(), self.dir.display());
        Ok(entries)
    }
}

/// Fixed list of built-ins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticBuiltins(pub Vec<BuiltinEntry>);

impl BuiltinProvider for StaticBuiltins {
    fn list_builtins(&self) -> Result<Vec<BuiltinEntry>> {
        Ok(self.0.clone())
    }
}
