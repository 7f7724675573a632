//! Registry of bundled native artifacts.
//!
//! Artifacts are keyed by their full resource path (see
//! [`crate::resource_path`]). The bytes are usually embedded into the
//! binary at compile time by the crate that owns the call surface, but
//! the registry is plain data so tests and alternate packagings can
//! register artifacts programmatically.

use std::borrow::Cow;
use std::collections::HashMap;

/// An in-memory map from resource path to artifact bytes.
#[derive(Debug, Default)]
pub struct ArtifactRegistry {
    artifacts: HashMap<String, Cow<'static, [u8]>>,
}

impl ArtifactRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the artifact bytes for a resource path.
    ///
    /// A later registration for the same path replaces the earlier one.
    pub fn register(
        &mut self,
        resource: impl Into<String>,
        bytes: impl Into<Cow<'static, [u8]>>,
    ) {
        self.artifacts.insert(resource.into(), bytes.into());
    }

    /// Look up the artifact bytes for a resource path.
    #[must_use]
    pub fn lookup(&self, resource: &str) -> Option<&[u8]> {
        self.artifacts.get(resource).map(Cow::as_ref)
    }

    /// Number of registered artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether the registry holds no artifacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ArtifactRegistry::new();
        registry.register("resources/native/linux-x86_64/lib.so", &b"\x7fELF"[..]);

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.lookup("resources/native/linux-x86_64/lib.so"),
            Some(&b"\x7fELF"[..])
        );
        assert_eq!(registry.lookup("resources/native/linux-aarch64/lib.so"), None);
    }

    #[test]
    fn test_registration_replaces() {
        let mut registry = ArtifactRegistry::new();
        registry.register("r", &b"old"[..]);
        registry.register("r", &b"new"[..]);
        assert_eq!(registry.lookup("r"), Some(&b"new"[..]));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_owned_bytes_accepted() {
        let mut registry = ArtifactRegistry::new();
        registry.register("r", vec![1u8, 2, 3]);
        assert_eq!(registry.lookup("r"), Some(&[1u8, 2, 3][..]));
    }
}
