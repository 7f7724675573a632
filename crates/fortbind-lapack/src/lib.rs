//! Strongly-typed call surface over a bundled native LAPACK library.
//!
//! On first use the bridge extracts the platform-matching shared
//! library bundled under `resources/native/<os>-<arch>/` to an
//! owner-only-executable temp file, loads it, and eagerly resolves
//! every Fortran entry point into a function-pointer table. All of
//! that happens exactly once per process behind a `OnceLock`; a
//! provisioning failure is cached and returned to every caller, so a
//! partially initialized bridge is never observable.
//!
//! # Calling Convention
//!
//! The wrapped routines use the Fortran convention: column-major flat
//! arrays, every argument by reference. The wrappers reproduce it
//! rather than translating it away, which is what lets the same native
//! binary serve every caller unchanged:
//!
//! - matrix/vector arguments are `(slice, offset, lda-or-stride)`
//!   groups, the offset selecting a sub-array view without copying;
//! - workspace arguments are caller-sized `(slice, offset, length)`
//!   groups whose final contents are unspecified;
//! - by-reference scalar outputs are `&mut` bindings written through
//!   by the native code, with the trailing `info: &mut i32` status
//!   carrier on every routine that can fail numerically (`0` success,
//!   `-i` invalid argument `i`, positive a routine-specific condition
//!   the bridge never interprets);
//! - mode flags are single ASCII bytes (`b'U'`, `b'N'`, ...) validated
//!   by the native routine itself via the status code.
//!
//! # Safety
//!
//! Every routine wrapper is `unsafe`: the layer does no bounds
//! checking, no shape inference, and no copying. For each array
//! argument, `offset` plus the extent implied by the dimension
//! arguments must stay within the slice; getting this wrong is
//! undefined behavior at the native boundary, not a recoverable
//! error. Validation belongs at the call site.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_wrap)]

mod auxiliary;
mod cond;
mod eig;
mod factor;
mod solve;
mod svd;
mod table;

pub use fortbind_loader::{ProvisionError, ProvisionResult};

use fortbind_loader::{ArtifactRegistry, LoadedLibrary};
use std::sync::OnceLock;
use table::LapackApi;

/// File name of the bundled native LAPACK artifact.
pub const LIBRARY_FILE: &str = "libfortbindlapack.so";

/// The process-wide LAPACK bridge.
///
/// Obtained through [`Lapack::instance`]; constructed at most once per
/// process. Each routine method is a direct, synchronous, blocking
/// transfer into native code with no queuing or added locking; the
/// native library's own thread-safety characteristics apply unchanged.
pub struct Lapack {
    api: LapackApi,
    // Keeps the mapping alive and answers `has` probes. Absent only in
    // stub-driven unit tests.
    library: Option<LoadedLibrary>,
}

static INSTANCE: OnceLock<Result<Lapack, ProvisionError>> = OnceLock::new();

impl Lapack {
    /// The process-wide bridge, provisioning the native library on
    /// first call.
    ///
    /// # Errors
    ///
    /// Returns the provisioning failure if the native library could
    /// not be loaded. The failure is cached: subsequent calls return
    /// the same error without retrying.
    pub fn instance() -> Result<&'static Self, &'static ProvisionError> {
        INSTANCE
            .get_or_init(|| {
                let loaded = fortbind_loader::provision(LIBRARY_FILE, builtin_registry())?;
                // Safety: the bundled artifact is built to export the
                // symbols in the table with the declared signatures.
                let api = unsafe { LapackApi::resolve(loaded.library()) }?;
                tracing::debug!("lapack call surface bound");
                Ok(Self {
                    api,
                    library: Some(loaded),
                })
            })
            .as_ref()
    }

    /// Provision the native library without retaining the reference.
    ///
    /// Idempotent; safe to call any number of times.
    ///
    /// # Errors
    ///
    /// Same as [`Lapack::instance`].
    pub fn ensure_loaded() -> Result<(), &'static ProvisionError> {
        Self::instance().map(|_| ())
    }

    /// Whether the loaded library exports `symbol` (without the
    /// Fortran name mangling, e.g. `"dgesv"`).
    #[must_use]
    pub fn has(&self, symbol: &str) -> bool {
        let Some(library) = &self.library else {
            return false;
        };
        let mut mangled = Vec::with_capacity(symbol.len() + 2);
        mangled.extend_from_slice(symbol.as_bytes());
        mangled.extend_from_slice(b"_\0");
        // Safety: probing a symbol's presence dereferences nothing.
        unsafe {
            library
                .library()
                .get::<unsafe extern "C" fn()>(&mangled)
                .is_ok()
        }
    }

    /// Path of the extracted artifact backing the loaded library.
    #[must_use]
    pub fn artifact_path(&self) -> Option<&std::path::Path> {
        self.library.as_ref().map(LoadedLibrary::artifact_path)
    }

    #[cfg(test)]
    pub(crate) fn stubbed(api: LapackApi) -> Self {
        Self { api, library: None }
    }
}

impl std::fmt::Debug for Lapack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lapack")
            .field("artifact", &self.artifact_path())
            .finish_non_exhaustive()
    }
}

/// The registry of artifacts compiled into this binary.
fn builtin_registry() -> &'static ArtifactRegistry {
    static REGISTRY: OnceLock<ArtifactRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = ArtifactRegistry::new();
        bundle(&mut registry);
        registry
    })
}

#[cfg(feature = "bundled")]
fn bundle(registry: &mut ArtifactRegistry) {
    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    registry.register(
        "resources/native/linux-x86_64/libfortbindlapack.so",
        &include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/resources/native/linux-x86_64/libfortbindlapack.so"
        ))[..],
    );

    #[cfg(all(target_os = "linux", target_arch = "aarch64"))]
    registry.register(
        "resources/native/linux-aarch64/libfortbindlapack.so",
        &include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/resources/native/linux-aarch64/libfortbindlapack.so"
        ))[..],
    );

    #[cfg(all(target_os = "macos", target_arch = "aarch64"))]
    registry.register(
        "resources/native/macos-aarch64/libfortbindlapack.so",
        &include_bytes!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/resources/native/macos-aarch64/libfortbindlapack.so"
        ))[..],
    );
}

#[cfg(not(feature = "bundled"))]
fn bundle(_registry: &mut ArtifactRegistry) {}

#[cfg(test)]
mod tests {
    //! Convention round-trip tests against a stubbed symbol table.
    //!
    //! A real native library is not required to verify the marshalling
    //! layer: stubs stand in for the Fortran entry points and record
    //! what arrives through the ABI, which is exactly the behavior
    //! this crate owns.

    use super::*;
    use std::os::raw::{c_char, c_double, c_int};

    unsafe extern "C" fn dgesv_recording(
        n: *const c_int,
        nrhs: *const c_int,
        a: *mut c_double,
        _lda: *const c_int,
        ipiv: *mut c_int,
        b: *mut c_double,
        _ldb: *const c_int,
        info: *mut c_int,
    ) {
        unsafe {
            // Touch the first element of each view so the caller can
            // verify the offsets were applied, then report success.
            *a += f64::from(*n);
            *b += f64::from(*nrhs);
            *ipiv = 7;
            *info = 0;
        }
    }

    #[test]
    fn test_offsets_and_status_round_trip() {
        let mut api = LapackApi::stubbed();
        api.dgesv = dgesv_recording;
        let lapack = Lapack::stubbed(api);

        let mut a = vec![1.0f64; 8];
        let mut b = vec![2.0f64; 8];
        let mut ipiv = vec![0i32; 8];
        let mut info = -1i32;

        unsafe {
            lapack.dgesv(3, 4, &mut a, 5, 3, &mut ipiv, 2, &mut b, 6, 3, &mut info);
        }

        assert_eq!(info, 0, "status carrier must observe the stub's write");
        assert_eq!(a[5], 1.0 + 3.0, "A view must start at offset 5");
        assert_eq!(b[6], 2.0 + 4.0, "B view must start at offset 6");
        assert_eq!(ipiv[2], 7, "pivot view must start at offset 2");
        assert_eq!(a[0], 1.0, "elements before the offset are untouched");
    }

    unsafe extern "C" fn dpotrf_rejecting(
        uplo: *const c_char,
        _n: *const c_int,
        _a: *mut c_double,
        _lda: *const c_int,
        info: *mut c_int,
    ) {
        unsafe {
            // Mirror the native argument check: anything but U/L is a
            // complaint about argument 1.
            *info = match *uplo as u8 {
                b'U' | b'L' => 0,
                _ => -1,
            };
        }
    }

    #[test]
    fn test_mode_flags_cross_the_boundary() {
        let mut api = LapackApi::stubbed();
        api.dpotrf = dpotrf_rejecting;
        let lapack = Lapack::stubbed(api);

        let mut a = vec![0.0f64; 4];
        let mut info = 99;
        unsafe {
            lapack.dpotrf(b'U', 2, &mut a, 0, 2, &mut info);
        }
        assert_eq!(info, 0);

        unsafe {
            lapack.dpotrf(b'Q', 2, &mut a, 0, 2, &mut info);
        }
        assert_eq!(info, -1, "invalid flag is rejected by the routine, not the bridge");
    }

    unsafe extern "C" fn dgebal_marking(
        _job: *const c_char,
        n: *const c_int,
        _a: *mut c_double,
        _lda: *const c_int,
        ilo: *mut c_int,
        ihi: *mut c_int,
        scale: *mut c_double,
        info: *mut c_int,
    ) {
        unsafe {
            *ilo = 1;
            *ihi = *n;
            *scale = 1.0;
            *info = 0;
        }
    }

    #[test]
    fn test_multiple_scalar_carriers() {
        let mut api = LapackApi::stubbed();
        api.dgebal = dgebal_marking;
        let lapack = Lapack::stubbed(api);

        let mut a = vec![0.0f64; 9];
        let mut scale = vec![0.0f64; 3];
        let (mut ilo, mut ihi, mut info) = (0, 0, -1);

        unsafe {
            lapack.dgebal(b'B', 3, &mut a, 0, 3, &mut ilo, &mut ihi, &mut scale, 0, &mut info);
        }

        assert_eq!((ilo, ihi, info), (1, 3, 0));
        assert_eq!(scale[0], 1.0);
    }

    unsafe extern "C" fn dgesvx_equilibrating(
        _fact: *const c_char,
        _trans: *const c_char,
        _n: *const c_int,
        _nrhs: *const c_int,
        _a: *mut c_double,
        _lda: *const c_int,
        _af: *mut c_double,
        _ldaf: *const c_int,
        _ipiv: *mut c_int,
        equed: *mut c_char,
        _r: *mut c_double,
        _c: *mut c_double,
        _b: *mut c_double,
        _ldb: *const c_int,
        _x: *mut c_double,
        _ldx: *const c_int,
        rcond: *mut c_double,
        _ferr: *mut c_double,
        _berr: *mut c_double,
        _work: *mut c_double,
        _iwork: *mut c_int,
        info: *mut c_int,
    ) {
        unsafe {
            // Report row-and-column equilibration through the
            // one-character carrier, alongside the usual scalars.
            *equed = b'B' as c_char;
            *rcond = 0.5;
            *info = 0;
        }
    }

    #[test]
    fn test_string_mode_carrier_round_trip() {
        let mut api = LapackApi::stubbed();
        api.dgesvx = dgesvx_equilibrating;
        let lapack = Lapack::stubbed(api);

        let mut a = vec![0.0f64; 4];
        let mut af = vec![0.0f64; 4];
        let mut ipiv = vec![0i32; 2];
        let mut equed = b'N';
        let (mut r, mut c) = (vec![0.0f64; 2], vec![0.0f64; 2]);
        let mut b = vec![0.0f64; 2];
        let mut x = vec![0.0f64; 2];
        let mut rcond = 0.0;
        let (mut ferr, mut berr) = (vec![0.0f64; 1], vec![0.0f64; 1]);
        let mut work = vec![0.0f64; 8];
        let mut iwork = vec![0i32; 2];
        let mut info = -1;

        unsafe {
            lapack.dgesvx(
                b'E', b'N', 2, 1, &mut a, 0, 2, &mut af, 0, 2, &mut ipiv, 0, &mut equed, &mut r,
                0, &mut c, 0, &mut b, 0, 2, &mut x, 0, 2, &mut rcond, &mut ferr, 0, &mut berr, 0,
                &mut work, 0, &mut iwork, 0, &mut info,
            );
        }

        assert_eq!(
            equed, b'B',
            "one-character mode carrier must observe the native write"
        );
        assert_eq!(rcond, 0.5);
        assert_eq!(info, 0);
    }

    unsafe extern "C" fn dlamch_eps(cmach: *const c_char) -> c_double {
        unsafe {
            match *cmach as u8 {
                b'E' | b'e' => f64::EPSILON,
                _ => 0.0,
            }
        }
    }

    #[test]
    fn test_value_returning_query() {
        let mut api = LapackApi::stubbed();
        api.dlamch = dlamch_eps;
        let lapack = Lapack::stubbed(api);

        assert_eq!(lapack.dlamch(b'E'), f64::EPSILON);
        assert_eq!(lapack.dlamch(b'Q'), 0.0);
    }

    unsafe extern "C" fn dlartg_fixed(
        _f: *const c_double,
        _g: *const c_double,
        cs: *mut c_double,
        sn: *mut c_double,
        r: *mut c_double,
    ) {
        unsafe {
            *cs = 0.6;
            *sn = 0.8;
            *r = 5.0;
        }
    }

    #[test]
    fn test_scalar_output_tuple_shape() {
        let mut api = LapackApi::stubbed();
        api.dlartg = dlartg_fixed;
        let lapack = Lapack::stubbed(api);

        let (mut cs, mut sn, mut r) = (0.0, 0.0, 0.0);
        lapack.dlartg(3.0, 4.0, &mut cs, &mut sn, &mut r);
        assert_eq!((cs, sn, r), (0.6, 0.8, 5.0));
    }

    #[test]
    fn test_has_without_library_is_false() {
        let lapack = Lapack::stubbed(LapackApi::stubbed());
        assert!(!lapack.has("dgesv"));
    }
}
