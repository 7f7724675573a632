//! Singleton behavior of the bridge when no artifact is bundled.
//!
//! These tests run without the `bundled` feature, so provisioning must
//! fail — which is itself the interesting case: the failure has to be
//! fatal, cached, and identical for every caller, with no partially
//! initialized bridge ever observable.
//!
//! The success-path half of the exactly-once property needs a loadable
//! artifact and cannot run here; the `OnceLock` caching both outcomes
//! identically is what the failure path pins down, and the loader's
//! own tests cover concurrent extraction independence.

#![cfg(not(feature = "bundled"))]

use fortbind_lapack::{Lapack, ProvisionError};

#[test]
fn initialization_failure_is_cached_and_shared() {
    let first = Lapack::instance().expect_err("no artifact is bundled");
    let second = Lapack::instance().expect_err("no artifact is bundled");

    // Same cached error, not a fresh provisioning attempt.
    assert!(std::ptr::eq(first, second));
    assert!(matches!(first, ProvisionError::MissingResource { .. }));
    assert!(first
        .to_string()
        .starts_with("unable to load native implementation"));
}

#[test]
fn concurrent_first_use_observes_a_single_outcome() {
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| Lapack::instance().expect_err("no artifact is bundled")))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread panicked"))
            .collect()
    });

    let first = results[0];
    for err in &results {
        assert!(
            std::ptr::eq(first, *err),
            "every thread must see the same cached initialization outcome"
        );
    }
}

#[test]
fn ensure_loaded_is_idempotent() {
    assert!(Lapack::ensure_loaded().is_err());
    assert!(Lapack::ensure_loaded().is_err());
}
