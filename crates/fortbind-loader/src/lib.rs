//! Native library provisioning for fortbind.
//!
//! This crate turns a bundled, platform-qualified shared-library artifact
//! into a library loaded in the running process:
//!
//! 1. Resolve the host [`PlatformKey`] (no fallback platform).
//! 2. Look the artifact up in an [`ArtifactRegistry`] under the fixed
//!    path template `resources/native/<os>-<arch>/<file>`.
//! 3. Materialize the bytes as a uniquely named, owner-only-executable
//!    file in the system temp directory.
//! 4. Register the file for best-effort deletion at process exit.
//! 5. Load it with `libloading`.
//!
//! Every failure along the way is fatal and collapses into
//! [`ProvisionError`]; a call-marshalling bridge with no working native
//! backend has no safe degraded mode, so there is no retry and no
//! fallback implementation.
//!
//! The sequence itself is not guarded against repetition. Callers that
//! need exactly-once semantics (every real bridge does) hold the
//! returned [`LoadedLibrary`] in a process-wide `OnceLock`, which also
//! keeps the in-memory mapping alive for the life of the process.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod cleanup;
mod extract;
mod registry;

pub use extract::extract_artifact;
pub use registry::ArtifactRegistry;

use fortbind_platform::{PlatformError, PlatformKey};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A provisioning failure. Unconditionally fatal to the bridge.
///
/// The variants exist for diagnostics only; callers are not expected to
/// branch on them, and every rendering carries the same banner.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The host platform key could not be formed.
    #[error("unable to load native implementation: {0}")]
    Platform(#[from] PlatformError),

    /// No artifact was bundled for the resolved platform. This is a
    /// packaging defect, surfaced as an error rather than trusted away.
    #[error("unable to load native implementation: no bundled artifact at {path}")]
    MissingResource {
        /// The resource path that came up empty.
        path: String,
    },

    /// Filesystem I/O failed while materializing the artifact.
    #[error("unable to load native implementation: i/o failure at {path}: {source}")]
    Io {
        /// The path being written when the failure occurred.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The extracted file could not be loaded as a shared library, or a
    /// required symbol was absent from it.
    #[error("unable to load native implementation: {0}")]
    Load(#[from] libloading::Error),
}

impl ProvisionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for provisioning operations.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// A native shared library loaded into the process.
///
/// The in-memory mapping lives until process exit; the backing temp file
/// is deleted at exit on a best-effort basis, which does not affect the
/// mapping. Dropping this value would unload the library, so bridges
/// keep it in process-wide static storage.
#[derive(Debug)]
pub struct LoadedLibrary {
    library: libloading::Library,
    artifact: PathBuf,
}

impl LoadedLibrary {
    /// The loaded library, for symbol resolution.
    #[must_use]
    pub fn library(&self) -> &libloading::Library {
        &self.library
    }

    /// The extracted temp file backing the mapping.
    #[must_use]
    pub fn artifact_path(&self) -> &Path {
        &self.artifact
    }
}

/// The resource path of the artifact for `platform`.
///
/// Fixed template `resources/native/<os>-<arch>/<file>`, using the
/// platform components exactly as reported.
#[must_use]
pub fn resource_path(platform: &PlatformKey, file_name: &str) -> String {
    format!("resources/native/{}/{file_name}", platform.resource_dir())
}

/// Provision `file_name` for the running host.
///
/// Resolves the platform key, then runs [`provision_for`].
///
/// # Errors
///
/// Returns [`ProvisionError`] on any failure; see the crate docs for the
/// fail-fast policy.
pub fn provision(file_name: &str, registry: &ArtifactRegistry) -> ProvisionResult<LoadedLibrary> {
    let platform = PlatformKey::detect()?;
    provision_for(&platform, file_name, registry)
}

/// Provision `file_name` for an explicit platform key.
///
/// # Errors
///
/// Returns [`ProvisionError::MissingResource`] if the registry has no
/// artifact for the platform, [`ProvisionError::Io`] if extraction
/// fails, and [`ProvisionError::Load`] if the extracted file cannot be
/// loaded as a shared library.
pub fn provision_for(
    platform: &PlatformKey,
    file_name: &str,
    registry: &ArtifactRegistry,
) -> ProvisionResult<LoadedLibrary> {
    let resource = resource_path(platform, file_name);
    tracing::debug!(resource = %resource, "resolving bundled native artifact");

    let bytes = registry
        .lookup(&resource)
        .ok_or(ProvisionError::MissingResource { path: resource })?;

    let artifact = extract_artifact(file_name, bytes)?;
    tracing::debug!(path = %artifact.display(), "loading native library");

    // Safety: loading a shared library runs its initialization code.
    // The artifact comes from the application's own bundle, extracted to
    // an owner-only file, so the content is as trusted as the
    // application binary itself.
    let library = unsafe { libloading::Library::new(&artifact) }?;
    tracing::info!(path = %artifact.display(), "native library loaded");

    Ok(LoadedLibrary { library, artifact })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path_template() {
        let key = PlatformKey::new("Linux", "amd64").unwrap();
        assert_eq!(
            resource_path(&key, "libfortbindlapack.so"),
            "resources/native/Linux-amd64/libfortbindlapack.so"
        );
    }

    #[test]
    fn test_missing_resource_is_fatal() {
        let key = PlatformKey::new("Linux", "amd64").unwrap();
        let registry = ArtifactRegistry::new();
        let err = provision_for(&key, "libfortbindlapack.so", &registry).unwrap_err();
        assert!(matches!(err, ProvisionError::MissingResource { .. }));
    }

    #[test]
    fn test_error_banner_is_uniform() {
        let errors = [
            ProvisionError::Platform(PlatformError::EmptyOs),
            ProvisionError::MissingResource {
                path: "resources/native/x-y/lib.so".into(),
            },
            ProvisionError::io("/tmp/lib.so", std::io::Error::other("disk full")),
        ];
        for err in errors {
            assert!(
                err.to_string()
                    .starts_with("unable to load native implementation"),
                "unexpected rendering: {err}"
            );
        }
    }
}
