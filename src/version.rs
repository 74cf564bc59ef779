//! Document format versions
//!
//! Configuration files carry a `file_format_version` string such as `"2.1.0"`.
//! Only the first three dot-separated components are significant; missing
//! components count as zero and `-pre` / `+build` suffixes are ignored.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` format version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Version written by [`Configuration::save`](crate::Configuration::save)
    pub const CURRENT: Version = Version::new(2, 2, 0);

    /// First version using the `"configuration"` wrapper
    pub const GENERATION_2_1: Version = Version::new(2, 1, 0);

    /// First version where every setting carries its own `type`
    pub const GENERATION_2_2: Version = Version::new(2, 2, 0);

    /// Assumed when a document has no `file_format_version`
    pub const LEGACY_DEFAULT: Version = Version::new(2, 0, 1);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Pre-release and build suffixes do not select a generation
        let trimmed = s.trim().split(['-', '+']).next().unwrap_or_default();
        if trimmed.is_empty() {
            return Err(Error::InvalidVersion(s.to_string()));
        }

        let mut parts = [0u32; 3];
        for (index, component) in trimmed.split('.').take(3).enumerate() {
            parts[index] = component
                .trim()
                .parse()
                .map_err(|_| Error::InvalidVersion(s.to_string()))?;
        }

        Ok(Version::new(parts[0], parts[1], parts[2]))
    }
}
