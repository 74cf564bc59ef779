//! Platform applicability masks
//!
//! Configurations and individual layer parameters may be limited to a subset
//! of platforms. On disk this is a list of tokens; in memory a bitmask.

use bitflags::bitflags;
use log::warn;
use serde::{Deserialize, Serialize};

/// A single supported platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    Windows,
    Linux,
    Macos,
    Android,
}

impl Platform {
    /// All platforms, in bit order
    pub const ALL: [Platform; 4] = [
        Platform::Windows,
        Platform::Linux,
        Platform::Macos,
        Platform::Android,
    ];

    /// Token used in configuration documents
    pub fn token(self) -> &'static str {
        match self {
            Platform::Windows => "WINDOWS",
            Platform::Linux => "LINUX",
            Platform::Macos => "MACOS",
            Platform::Android => "ANDROID",
        }
    }

    /// Parse a document token (case-insensitive)
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.token().eq_ignore_ascii_case(token))
    }

    /// The platform this library was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Macos
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Linux
        }
    }

    /// Mask holding only this platform
    pub fn flag(self) -> PlatformFlags {
        match self {
            Platform::Windows => PlatformFlags::WINDOWS,
            Platform::Linux => PlatformFlags::LINUX,
            Platform::Macos => PlatformFlags::MACOS,
            Platform::Android => PlatformFlags::ANDROID,
        }
    }
}

bitflags! {
    /// Set of platforms a configuration or layer applies to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PlatformFlags: u32 {
        const WINDOWS = 0b0001;
        const LINUX   = 0b0010;
        const MACOS   = 0b0100;
        const ANDROID = 0b1000;
    }
}

impl PlatformFlags {
    pub const NONE: Self = Self::empty();
    pub const ALL: Self = Self::WINDOWS
        .union(Self::LINUX)
        .union(Self::MACOS)
        .union(Self::ANDROID);

    /// Build a mask from document tokens, ignoring unknown ones
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut flags = Self::NONE;
        for token in tokens {
            match Platform::from_token(token.as_ref()) {
                Some(platform) => flags.insert(platform.flag()),
                None => warn!("Ignoring unknown platform token '{}'", token.as_ref()),
            }
        }
        flags
    }

    /// Document tokens for every platform in the mask, in bit order
    pub fn tokens(self) -> Vec<String> {
        Platform::ALL
            .into_iter()
            .filter(|platform| self.contains(platform.flag()))
            .map(|platform| platform.token().to_string())
            .collect()
    }
}

impl Default for PlatformFlags {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<Platform> for PlatformFlags {
    fn from(platform: Platform) -> Self {
        platform.flag()
    }
}
