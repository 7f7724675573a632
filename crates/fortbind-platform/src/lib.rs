//! Platform key resolution for fortbind.
//!
//! A [`PlatformKey`] identifies the host well enough to pick the matching
//! precompiled native artifact out of the bundle: the operating system
//! name paired with the CPU architecture, exactly as the runtime reports
//! them. The key is pure identity data; it performs no probing beyond
//! reading `std::env::consts` and has no side effects.
//!
//! # Resource Layout
//!
//! Bundled artifacts live under `resources/native/<os>-<arch>/`, so the
//! key doubles as the directory component of the resource path. The
//! reported strings are used verbatim; there is no aliasing table, and a
//! host for which no artifact was bundled simply fails provisioning.
//!
//! # Failure Policy
//!
//! A key with an empty component cannot select an artifact, so
//! construction rejects it up front. There is no fallback platform.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced while forming a platform key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The operating-system name was missing or empty.
    #[error("operating system name is empty; cannot select a native artifact")]
    EmptyOs,

    /// The CPU architecture string was missing or empty.
    #[error("cpu architecture is empty; cannot select a native artifact")]
    EmptyArch,
}

/// Result type for platform resolution.
pub type PlatformResult<T> = Result<T, PlatformError>;

/// The (operating system, CPU architecture) pair identifying the host.
///
/// Both components are kept exactly as reported; the pair selects which
/// bundled native artifact gets extracted and loaded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformKey {
    os: String,
    arch: String,
}

impl PlatformKey {
    /// Create a key from explicit components.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::EmptyOs`] or [`PlatformError::EmptyArch`]
    /// if the corresponding component is empty.
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> PlatformResult<Self> {
        let os = os.into();
        let arch = arch.into();
        if os.is_empty() {
            return Err(PlatformError::EmptyOs);
        }
        if arch.is_empty() {
            return Err(PlatformError::EmptyArch);
        }
        Ok(Self { os, arch })
    }

    /// Resolve the key for the running process.
    ///
    /// Reads `std::env::consts::OS` and `std::env::consts::ARCH`. These
    /// are compile-time constants and non-empty on every supported
    /// target, but the emptiness check is kept so that the failure mode
    /// is a clear error rather than a malformed resource path.
    ///
    /// # Errors
    ///
    /// Returns an error if either reported component is empty.
    pub fn detect() -> PlatformResult<Self> {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// The operating-system component.
    #[must_use]
    pub fn os(&self) -> &str {
        &self.os
    }

    /// The CPU-architecture component.
    #[must_use]
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// The directory component used in bundled resource paths.
    ///
    /// Identical to the `Display` rendering: `<os>-<arch>`.
    #[must_use]
    pub fn resource_dir(&self) -> String {
        format!("{}-{}", self.os, self.arch)
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_is_non_empty() {
        let key = PlatformKey::detect().expect("host platform must resolve");
        assert!(!key.os().is_empty());
        assert!(!key.arch().is_empty());
    }

    #[test]
    fn test_empty_os_rejected() {
        assert_eq!(PlatformKey::new("", "amd64"), Err(PlatformError::EmptyOs));
    }

    #[test]
    fn test_empty_arch_rejected() {
        assert_eq!(PlatformKey::new("linux", ""), Err(PlatformError::EmptyArch));
    }

    #[test]
    fn test_display_matches_resource_dir() {
        let key = PlatformKey::new("Linux", "amd64").unwrap();
        assert_eq!(key.to_string(), "Linux-amd64");
        assert_eq!(key.resource_dir(), "Linux-amd64");
    }

    #[test]
    fn test_components_kept_verbatim() {
        // No normalization: the reported strings are used as-is.
        let key = PlatformKey::new("Mac OS X", "x86_64").unwrap();
        assert_eq!(key.os(), "Mac OS X");
        assert_eq!(key.arch(), "x86_64");
        assert_eq!(key.resource_dir(), "Mac OS X-x86_64");
    }

    #[test]
    fn test_serde_round_trip() {
        let key = PlatformKey::new("linux", "aarch64").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        let back: PlatformKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, back);
    }
}
