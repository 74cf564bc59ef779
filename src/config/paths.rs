use std::path::PathBuf;

/// Location kinds a configuration file can live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Current save location
    Configuration,
    /// Save location of older releases
    ConfigurationLegacy,
    /// Bundled read-only configurations
    Builtin,
}

/// Resolves a configuration name to a file path
///
/// Implemented by [`ConfigPaths`](crate::ConfigPaths); applications with their
/// own directory layout can supply another implementation.
pub trait PathResolver {
    /// Full path for `key` in the `kind` location, `None` if that location is not configured
    fn resolve(&self, kind: PathKind, key: &str) -> Option<PathBuf>;
}
