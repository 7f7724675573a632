//! End-to-end provisioning behavior against an in-memory registry.

use fortbind_loader::{provision_for, resource_path, ArtifactRegistry, ProvisionError};
use fortbind_platform::PlatformKey;

#[test]
fn missing_artifact_fails_before_any_extraction() {
    let key = PlatformKey::new("Linux", "amd64").unwrap();
    let registry = ArtifactRegistry::new();

    let err = provision_for(&key, "libfortbindlapack.so", &registry).unwrap_err();
    match err {
        ProvisionError::MissingResource { path } => {
            assert_eq!(path, "resources/native/Linux-amd64/libfortbindlapack.so");
        }
        other => panic!("expected MissingResource, got {other}"),
    }
}

#[test]
fn non_library_artifact_fails_at_load() {
    let key = PlatformKey::detect().unwrap();
    let resource = resource_path(&key, "libnotreally.so");

    let mut registry = ArtifactRegistry::new();
    registry.register(resource, &b"this is not an ELF image"[..]);

    // Extraction succeeds; the dynamic loader rejects the content.
    let err = provision_for(&key, "libnotreally.so", &registry).unwrap_err();
    assert!(matches!(err, ProvisionError::Load(_)));
    assert!(err
        .to_string()
        .starts_with("unable to load native implementation"));
}

#[test]
fn empty_platform_component_cannot_form_a_key() {
    // Provisioning is unreachable without a valid key; the failure
    // happens before any filesystem or loader activity.
    assert!(PlatformKey::new("", "amd64").is_err());
    assert!(PlatformKey::new("Linux", "").is_err());
}
