//! Save locations and load policy

use std::path::{Path, PathBuf};

use crate::builtin::DirectoryBuiltins;
use crate::config::paths::{PathKind, PathResolver};
use crate::version::Version;

/// Directory name used under the system config directory
pub const APP_DIR: &str = "layerconf";

/// Extension of configuration files
pub const EXTENSION: &str = "json";

/// Where configurations are saved and looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Directory for user-saved configurations
    pub config_dir: PathBuf,

    /// Directory used by older releases, searched after `config_dir`
    pub legacy_dir: Option<PathBuf>,

    /// Directory holding the built-in configurations
    pub builtin_dir: Option<PathBuf>,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        ConfigPaths::builder().build()
    }
}

impl ConfigPaths {
    /// Create a new builder for ConfigPaths
    ///
    /// # Example
    /// ```rust
    /// use layerconf::ConfigPaths;
    ///
    /// let paths = ConfigPaths::builder()
    ///     .config_dir("/tmp/layerconf/configurations")
    ///     .legacy_dir("/tmp/layerconf/legacy")
    ///     .build();
    /// assert!(paths.legacy_dir.is_some());
    /// ```
    pub fn builder() -> ConfigPathsBuilder {
        ConfigPathsBuilder::default()
    }

    /// File path for a configuration name in `dir`
    ///
    /// Path separators in `key` are replaced with `_`, so the file always
    /// lands directly in `dir`.
    pub fn file_in(dir: &Path, key: &str) -> PathBuf {
        let file_stem = key.replace(['/', '\\'], "_");
        dir.join(format!("{file_stem}.{EXTENSION}"))
    }

    /// Built-in configurations, if a built-in directory is set
    pub fn builtins(&self) -> Option<DirectoryBuiltins> {
        self.builtin_dir.clone().map(DirectoryBuiltins::new)
    }
}

impl PathResolver for ConfigPaths {
    fn resolve(&self, kind: PathKind, key: &str) -> Option<PathBuf> {
        let dir = match kind {
            PathKind::Configuration => Some(&self.config_dir),
            PathKind::ConfigurationLegacy => self.legacy_dir.as_ref(),
            PathKind::Builtin => self.builtin_dir.as_ref(),
        }?;
        Some(ConfigPaths::file_in(dir, key))
    }
}

/// Builder for creating ConfigPaths with a fluent API
#[derive(Debug, Clone, Default)]
pub struct ConfigPathsBuilder {
    config_dir: Option<PathBuf>,
    legacy_dir: Option<PathBuf>,
    builtin_dir: Option<PathBuf>,
}

impl ConfigPathsBuilder {
    /// Set the configuration directory
    ///
    /// Supports `~` expansion for home directory.
    pub fn config_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(expand_home(path.into()));
        self
    }

    /// Set the legacy configuration directory
    pub fn legacy_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.legacy_dir = Some(expand_home(path.into()));
        self
    }

    /// Set the built-in configuration directory
    pub fn builtin_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.builtin_dir = Some(expand_home(path.into()));
        self
    }

    /// Build the ConfigPaths
    ///
    /// If `config_dir` is not set, uses `<system config dir>/layerconf/configurations`.
    pub fn build(self) -> ConfigPaths {
        let config_dir = self.config_dir.unwrap_or_else(|| {
            dirs::config_dir()
                .map(|d| d.join(APP_DIR).join("configurations"))
                .unwrap_or_else(|| PathBuf::from("."))
        });

        ConfigPaths {
            config_dir,
            legacy_dir: self.legacy_dir,
            builtin_dir: self.builtin_dir,
        }
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(path.strip_prefix("~").unwrap_or(&path));
        }
    }
    path
}

/// Decode-time policy that cannot be derived from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPolicy {
    /// Generation-2.0 documents at or below this version are named after
    /// their file instead of their `"name"` field. `None` always reads `"name"`.
    pub name_from_filename_up_to: Option<Version>,

    /// Version assumed when `file_format_version` is absent
    pub legacy_default_version: Version,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            name_from_filename_up_to: Some(Version::LEGACY_DEFAULT),
            legacy_default_version: Version::LEGACY_DEFAULT,
        }
    }
}

impl LoadPolicy {
    /// Never derive names from file names
    #[must_use]
    pub fn names_from_documents(mut self) -> Self {
        self.name_from_filename_up_to = None;
        self
    }

    /// Whether a generation-2.0 document of `version` is named after its file
    pub fn name_from_filename(&self, version: Version) -> bool {
        self.name_from_filename_up_to
            .is_some_and(|cutoff| version <= cutoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let paths = ConfigPaths::builder().config_dir("/tmp/configs").build();

        assert_eq!(paths.config_dir, PathBuf::from("/tmp/configs"));
        assert!(paths.legacy_dir.is_none());
        assert!(paths.builtins().is_none());
    }

    #[test]
    fn test_resolve_kinds() {
        let paths = ConfigPaths::builder()
            .config_dir("/tmp/current")
            .legacy_dir("/tmp/legacy")
            .build();

        assert_eq!(
            paths.resolve(PathKind::Configuration, "Validation"),
            Some(PathBuf::from("/tmp/current/Validation.json"))
        );
        assert_eq!(
            paths.resolve(PathKind::ConfigurationLegacy, "Validation"),
            Some(PathBuf::from("/tmp/legacy/Validation.json"))
        );
        assert_eq!(paths.resolve(PathKind::Builtin, "Validation"), None);
    }

    #[test]
    fn test_file_in_stays_in_dir() {
        let dir = Path::new("/tmp/configs");
        assert_eq!(
            ConfigPaths::file_in(dir, "Team/Debug"),
            PathBuf::from("/tmp/configs/Team_Debug.json")
        );
        assert_eq!(
            ConfigPaths::file_in(dir, "..\\x"),
            PathBuf::from("/tmp/configs/.._x.json")
        );
        assert_eq!(ConfigPaths::file_in(dir, "../x").parent(), Some(dir));
    }

    #[test]
    fn test_load_policy_cutoff() {
        let policy = LoadPolicy::default();
        assert!(policy.name_from_filename(Version::new(2, 0, 1)));
        assert!(policy.name_from_filename(Version::new(1, 2, 0)));
        assert!(!policy.name_from_filename(Version::new(2, 0, 2)));

        let policy = policy.names_from_documents();
        assert!(!policy.name_from_filename(Version::new(2, 0, 1)));
    }
}
