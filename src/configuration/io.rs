use crate::builtin::BuiltinProvider;
use crate::config::{LoadPolicy, PathKind, PathResolver};
use crate::configuration::format::{decode_document, encode_document};
use crate::configuration::{Configuration, PLACEHOLDER_NAME};
use crate::error::{Error, Result};
use crate::layer::Layer;
use crate::storage::{JsonStorage, StorageBackend};

use log::{debug, info, warn};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Which rule [`Configuration::reset`] applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetSource {
    /// Reloaded from the built-in configuration with the same name
    Builtin(PathBuf),
    /// Reloaded from a saved file with the same name
    Saved(PathBuf),
    /// No file found; every layer handed back to the application
    Defaults,
}

impl Configuration {
    /// Load a configuration file of any supported generation
    ///
    /// A document that decodes to an empty name is considered broken: the
    /// file is deleted and the configuration is named [`PLACEHOLDER_NAME`].
    ///
    /// # Errors
    ///
    /// - [`Error::FileRead`] if the file cannot be read
    /// - [`Error::Parse`] if the file is not valid JSON
    /// - [`Error::NotAConfiguration`] if the JSON is not a configuration
    pub fn load(path: &Path, layers: &[Layer], policy: &LoadPolicy) -> Result<Self> {
        let root: Value = JsonStorage::new().read(path)?;
        let mut configuration = decode_document(&root, path, layers, policy)?;

        if configuration.key.trim().is_empty() {
            warn!(
                "Configuration '{}' has no name, deleting it and using '{PLACEHOLDER_NAME}'",
                path.display()
            );
            if let Err(e) = std::fs::remove_file(path) {
                warn!("Failed to delete '{}': {e}", path.display());
            }
            configuration.key = PLACEHOLDER_NAME.to_string();
        }

        debug!(
            "Loaded configuration '{}' with {} layers",
            configuration.key,
            configuration.parameters.len()
        );
        Ok(configuration)
    }

    /// Save in the current document generation
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written; the previous file is
    /// left untouched in that case.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.save_with(&JsonStorage::new(), path)
    }

    /// Save using a specific storage backend
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_with<S: StorageBackend>(&self, storage: &S, path: &Path) -> Result<()> {
        storage.write(path, &encode_document(self))?;
        info!("Configuration '{}' saved to '{}'", self.key, path.display());
        Ok(())
    }

    /// Save to the current save location under the configuration's name
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the resolver has no current save location,
    /// or any error of [`Configuration::save`].
    pub fn save_to(&self, paths: &dyn PathResolver) -> Result<PathBuf> {
        let path = paths
            .resolve(PathKind::Configuration, &self.key)
            .ok_or_else(|| Error::Config("No configuration save location".to_string()))?;
        self.save(&path)?;
        Ok(path)
    }

    /// Whether a built-in configuration has this name
    ///
    /// # Errors
    ///
    /// Returns an error if the built-ins cannot be listed.
    pub fn is_builtin(&self, builtins: &dyn BuiltinProvider) -> Result<bool> {
        Ok(builtins.find_builtin(&self.key)?.is_some())
    }

    /// Saved file for this name, current location first
    pub fn saved_file(&self, paths: &dyn PathResolver) -> Option<PathBuf> {
        [PathKind::Configuration, PathKind::ConfigurationLegacy]
            .into_iter()
            .filter_map(|kind| paths.resolve(kind, &self.key))
            .find(|path| path.is_file())
    }

    pub fn has_saved_file(&self, paths: &dyn PathResolver) -> bool {
        self.saved_file(paths).is_some()
    }

    /// Reset to the state the configuration's name refers to
    ///
    /// The first matching rule wins:
    /// 1. reload the built-in configuration with the same name
    /// 2. reload the saved file with the same name (current, then legacy location)
    /// 3. hand every layer back to the application with catalog defaults
    ///
    /// On error the configuration is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-ins cannot be listed or the selected file
    /// fails to load.
    pub fn reset(
        &mut self,
        layers: &[Layer],
        builtins: &dyn BuiltinProvider,
        paths: &dyn PathResolver,
        policy: &LoadPolicy,
    ) -> Result<ResetSource> {
        let source = if let Some(entry) = builtins.find_builtin(&self.key)? {
            *self = Configuration::load(&entry.path, layers, policy)?;
            ResetSource::Builtin(entry.path)
        } else if let Some(path) = self.saved_file(paths) {
            *self = Configuration::load(&path, layers, policy)?;
            ResetSource::Saved(path)
        } else {
            self.clear_overrides(layers);
            ResetSource::Defaults
        };

        self.order_parameters();
        info!("Configuration '{}' reset from {source:?}", self.key);
        Ok(source)
    }
}

/// Load every configuration file in `dir`
///
/// JSON files that are not configurations are skipped quietly; unreadable or
/// malformed files are skipped with a warning. Results are sorted by file name.
///
/// # Errors
///
/// Returns [`Error::DirectoryRead`] if the directory cannot be listed.
pub fn load_all(dir: &Path, layers: &[Layer], policy: &LoadPolicy) -> Result<Vec<Configuration>> {
    let paths = JsonStorage::new().list(dir)?;

    let mut configurations = Vec::new();
    for path in paths {
        match Configuration::load(&path, layers, policy) {
            Ok(configuration) => configurations.push(configuration),
            Err(e) if e.is_not_applicable() => {
                debug!("Skipping '{}': {e}", path.display());
            }
            Err(e) => warn!("Skipping '{}': {e}", path.display()),
        }
    }

    info!("Loaded {} configurations from '{}'", configurations.len(), dir.display());
    Ok(configurations)
}
