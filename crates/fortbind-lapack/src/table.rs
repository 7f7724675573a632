//! The resolved Fortran symbol table.
//!
//! Every entry point the bridge exposes is declared once in the
//! [`lapack_api!`] invocation below: field name, mangled Fortran symbol,
//! and exact C signature. The macro generates the function-pointer
//! table, the eager resolver that fills it from the loaded library, and
//! (for tests) a table of inert stubs that individual tests override to
//! observe the marshalling convention.
//!
//! The Fortran calling convention passes every argument by reference,
//! so scalar inputs appear as `*const` pointers and by-reference outputs
//! as `*mut` pointers. Character mode flags are single `c_char` values
//! passed by reference; the bundled library is built without hidden
//! string-length arguments for them.

use std::os::raw::{c_char, c_double, c_float, c_int};

/// Default value written by test stubs for routines that return a value.
#[cfg(test)]
pub(crate) trait StubReturn {
    fn stub() -> Self;
}

#[cfg(test)]
impl StubReturn for () {
    fn stub() -> Self {}
}

#[cfg(test)]
impl StubReturn for c_double {
    fn stub() -> Self {
        0.0
    }
}

#[cfg(test)]
impl StubReturn for c_float {
    fn stub() -> Self {
        0.0
    }
}

macro_rules! lapack_api {
    (
        $(
            $field:ident => $symbol:literal :
            fn( $( $param:ident : $ty:ty ),* $(,)? ) $(-> $ret:ty)? ;
        )+
    ) => {
        /// Function pointers for every bridged Fortran entry point,
        /// resolved eagerly when the bridge is constructed.
        pub(crate) struct LapackApi {
            $( pub(crate) $field: unsafe extern "C" fn( $( $param: $ty ),* ) $(-> $ret)?, )+
        }

        impl LapackApi {
            /// Resolve every symbol from `library`.
            ///
            /// A single missing symbol fails the whole resolution; the
            /// bridge never hands out a partially bound table.
            ///
            /// # Safety
            ///
            /// The library must export these symbols with exactly the
            /// declared signatures.
            pub(crate) unsafe fn resolve(
                library: &libloading::Library,
            ) -> Result<Self, libloading::Error> {
                Ok(Self {
                    $(
                        $field: *library
                            .get::<unsafe extern "C" fn( $( $ty ),* ) $(-> $ret)?>($symbol)?,
                    )+
                })
            }
        }

        #[cfg(test)]
        impl LapackApi {
            /// A table of no-op stubs; tests replace individual fields.
            pub(crate) fn stubbed() -> Self {
                Self { $( $field: stubs::$field, )+ }
            }
        }

        #[cfg(test)]
        #[allow(unused_variables)]
        mod stubs {
            use super::*;

            $(
                pub(crate) unsafe extern "C" fn $field( $( $param: $ty ),* ) $(-> $ret)? {
                    StubReturn::stub()
                }
            )+
        }
    };
}

lapack_api! {
    // Factorizations.
    dgetrf => b"dgetrf_\0":
        fn(m: *const c_int, n: *const c_int, a: *mut c_double, lda: *const c_int,
           ipiv: *mut c_int, info: *mut c_int);
    sgetrf => b"sgetrf_\0":
        fn(m: *const c_int, n: *const c_int, a: *mut c_float, lda: *const c_int,
           ipiv: *mut c_int, info: *mut c_int);
    dgetf2 => b"dgetf2_\0":
        fn(m: *const c_int, n: *const c_int, a: *mut c_double, lda: *const c_int,
           ipiv: *mut c_int, info: *mut c_int);
    dpotrf => b"dpotrf_\0":
        fn(uplo: *const c_char, n: *const c_int, a: *mut c_double, lda: *const c_int,
           info: *mut c_int);
    spotrf => b"spotrf_\0":
        fn(uplo: *const c_char, n: *const c_int, a: *mut c_float, lda: *const c_int,
           info: *mut c_int);
    dgeqrf => b"dgeqrf_\0":
        fn(m: *const c_int, n: *const c_int, a: *mut c_double, lda: *const c_int,
           tau: *mut c_double, work: *mut c_double, lwork: *const c_int, info: *mut c_int);
    sgeqrf => b"sgeqrf_\0":
        fn(m: *const c_int, n: *const c_int, a: *mut c_float, lda: *const c_int,
           tau: *mut c_float, work: *mut c_float, lwork: *const c_int, info: *mut c_int);
    dorgqr => b"dorgqr_\0":
        fn(m: *const c_int, n: *const c_int, k: *const c_int, a: *mut c_double,
           lda: *const c_int, tau: *const c_double, work: *mut c_double,
           lwork: *const c_int, info: *mut c_int);
    sorgqr => b"sorgqr_\0":
        fn(m: *const c_int, n: *const c_int, k: *const c_int, a: *mut c_float,
           lda: *const c_int, tau: *const c_float, work: *mut c_float,
           lwork: *const c_int, info: *mut c_int);
    dormqr => b"dormqr_\0":
        fn(side: *const c_char, trans: *const c_char, m: *const c_int, n: *const c_int,
           k: *const c_int, a: *mut c_double, lda: *const c_int, tau: *const c_double,
           c: *mut c_double, ldc: *const c_int, work: *mut c_double, lwork: *const c_int,
           info: *mut c_int);
    dgbtrf => b"dgbtrf_\0":
        fn(m: *const c_int, n: *const c_int, kl: *const c_int, ku: *const c_int,
           ab: *mut c_double, ldab: *const c_int, ipiv: *mut c_int, info: *mut c_int);

    // Linear solvers.
    dgesv => b"dgesv_\0":
        fn(n: *const c_int, nrhs: *const c_int, a: *mut c_double, lda: *const c_int,
           ipiv: *mut c_int, b: *mut c_double, ldb: *const c_int, info: *mut c_int);
    sgesv => b"sgesv_\0":
        fn(n: *const c_int, nrhs: *const c_int, a: *mut c_float, lda: *const c_int,
           ipiv: *mut c_int, b: *mut c_float, ldb: *const c_int, info: *mut c_int);
    dgetrs => b"dgetrs_\0":
        fn(trans: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const c_double,
           lda: *const c_int, ipiv: *const c_int, b: *mut c_double, ldb: *const c_int,
           info: *mut c_int);
    sgetrs => b"sgetrs_\0":
        fn(trans: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const c_float,
           lda: *const c_int, ipiv: *const c_int, b: *mut c_float, ldb: *const c_int,
           info: *mut c_int);
    dposv => b"dposv_\0":
        fn(uplo: *const c_char, n: *const c_int, nrhs: *const c_int, a: *mut c_double,
           lda: *const c_int, b: *mut c_double, ldb: *const c_int, info: *mut c_int);
    dpotrs => b"dpotrs_\0":
        fn(uplo: *const c_char, n: *const c_int, nrhs: *const c_int, a: *const c_double,
           lda: *const c_int, b: *mut c_double, ldb: *const c_int, info: *mut c_int);
    dtrtrs => b"dtrtrs_\0":
        fn(uplo: *const c_char, trans: *const c_char, diag: *const c_char, n: *const c_int,
           nrhs: *const c_int, a: *const c_double, lda: *const c_int, b: *mut c_double,
           ldb: *const c_int, info: *mut c_int);
    strtrs => b"strtrs_\0":
        fn(uplo: *const c_char, trans: *const c_char, diag: *const c_char, n: *const c_int,
           nrhs: *const c_int, a: *const c_float, lda: *const c_int, b: *mut c_float,
           ldb: *const c_int, info: *mut c_int);
    dgels => b"dgels_\0":
        fn(trans: *const c_char, m: *const c_int, n: *const c_int, nrhs: *const c_int,
           a: *mut c_double, lda: *const c_int, b: *mut c_double, ldb: *const c_int,
           work: *mut c_double, lwork: *const c_int, info: *mut c_int);
    sgels => b"sgels_\0":
        fn(trans: *const c_char, m: *const c_int, n: *const c_int, nrhs: *const c_int,
           a: *mut c_float, lda: *const c_int, b: *mut c_float, ldb: *const c_int,
           work: *mut c_float, lwork: *const c_int, info: *mut c_int);
    dgbsv => b"dgbsv_\0":
        fn(n: *const c_int, kl: *const c_int, ku: *const c_int, nrhs: *const c_int,
           ab: *mut c_double, ldab: *const c_int, ipiv: *mut c_int, b: *mut c_double,
           ldb: *const c_int, info: *mut c_int);
    dgtsv => b"dgtsv_\0":
        fn(n: *const c_int, nrhs: *const c_int, dl: *mut c_double, d: *mut c_double,
           du: *mut c_double, b: *mut c_double, ldb: *const c_int, info: *mut c_int);
    dgesvx => b"dgesvx_\0":
        fn(fact: *const c_char, trans: *const c_char, n: *const c_int, nrhs: *const c_int,
           a: *mut c_double, lda: *const c_int, af: *mut c_double, ldaf: *const c_int,
           ipiv: *mut c_int, equed: *mut c_char, r: *mut c_double, c: *mut c_double,
           b: *mut c_double, ldb: *const c_int, x: *mut c_double, ldx: *const c_int,
           rcond: *mut c_double, ferr: *mut c_double, berr: *mut c_double,
           work: *mut c_double, iwork: *mut c_int, info: *mut c_int);

    // Eigenproblems.
    dsyev => b"dsyev_\0":
        fn(jobz: *const c_char, uplo: *const c_char, n: *const c_int, a: *mut c_double,
           lda: *const c_int, w: *mut c_double, work: *mut c_double, lwork: *const c_int,
           info: *mut c_int);
    ssyev => b"ssyev_\0":
        fn(jobz: *const c_char, uplo: *const c_char, n: *const c_int, a: *mut c_float,
           lda: *const c_int, w: *mut c_float, work: *mut c_float, lwork: *const c_int,
           info: *mut c_int);
    dsyevd => b"dsyevd_\0":
        fn(jobz: *const c_char, uplo: *const c_char, n: *const c_int, a: *mut c_double,
           lda: *const c_int, w: *mut c_double, work: *mut c_double, lwork: *const c_int,
           iwork: *mut c_int, liwork: *const c_int, info: *mut c_int);
    dgeev => b"dgeev_\0":
        fn(jobvl: *const c_char, jobvr: *const c_char, n: *const c_int, a: *mut c_double,
           lda: *const c_int, wr: *mut c_double, wi: *mut c_double, vl: *mut c_double,
           ldvl: *const c_int, vr: *mut c_double, ldvr: *const c_int, work: *mut c_double,
           lwork: *const c_int, info: *mut c_int);
    sgeev => b"sgeev_\0":
        fn(jobvl: *const c_char, jobvr: *const c_char, n: *const c_int, a: *mut c_float,
           lda: *const c_int, wr: *mut c_float, wi: *mut c_float, vl: *mut c_float,
           ldvl: *const c_int, vr: *mut c_float, ldvr: *const c_int, work: *mut c_float,
           lwork: *const c_int, info: *mut c_int);
    dgebal => b"dgebal_\0":
        fn(job: *const c_char, n: *const c_int, a: *mut c_double, lda: *const c_int,
           ilo: *mut c_int, ihi: *mut c_int, scale: *mut c_double, info: *mut c_int);

    // Singular value decomposition.
    dgesvd => b"dgesvd_\0":
        fn(jobu: *const c_char, jobvt: *const c_char, m: *const c_int, n: *const c_int,
           a: *mut c_double, lda: *const c_int, s: *mut c_double, u: *mut c_double,
           ldu: *const c_int, vt: *mut c_double, ldvt: *const c_int, work: *mut c_double,
           lwork: *const c_int, info: *mut c_int);
    sgesvd => b"sgesvd_\0":
        fn(jobu: *const c_char, jobvt: *const c_char, m: *const c_int, n: *const c_int,
           a: *mut c_float, lda: *const c_int, s: *mut c_float, u: *mut c_float,
           ldu: *const c_int, vt: *mut c_float, ldvt: *const c_int, work: *mut c_float,
           lwork: *const c_int, info: *mut c_int);
    dgesdd => b"dgesdd_\0":
        fn(jobz: *const c_char, m: *const c_int, n: *const c_int, a: *mut c_double,
           lda: *const c_int, s: *mut c_double, u: *mut c_double, ldu: *const c_int,
           vt: *mut c_double, ldvt: *const c_int, work: *mut c_double, lwork: *const c_int,
           iwork: *mut c_int, info: *mut c_int);
    dbdsqr => b"dbdsqr_\0":
        fn(uplo: *const c_char, n: *const c_int, ncvt: *const c_int, nru: *const c_int,
           ncc: *const c_int, d: *mut c_double, e: *mut c_double, vt: *mut c_double,
           ldvt: *const c_int, u: *mut c_double, ldu: *const c_int, c: *mut c_double,
           ldc: *const c_int, work: *mut c_double, info: *mut c_int);

    // Condition numbers, norms, equilibration.
    dgecon => b"dgecon_\0":
        fn(norm: *const c_char, n: *const c_int, a: *const c_double, lda: *const c_int,
           anorm: *const c_double, rcond: *mut c_double, work: *mut c_double,
           iwork: *mut c_int, info: *mut c_int);
    sgecon => b"sgecon_\0":
        fn(norm: *const c_char, n: *const c_int, a: *const c_float, lda: *const c_int,
           anorm: *const c_float, rcond: *mut c_float, work: *mut c_float,
           iwork: *mut c_int, info: *mut c_int);
    dpocon => b"dpocon_\0":
        fn(uplo: *const c_char, n: *const c_int, a: *const c_double, lda: *const c_int,
           anorm: *const c_double, rcond: *mut c_double, work: *mut c_double,
           iwork: *mut c_int, info: *mut c_int);
    dtrcon => b"dtrcon_\0":
        fn(norm: *const c_char, uplo: *const c_char, diag: *const c_char, n: *const c_int,
           a: *const c_double, lda: *const c_int, rcond: *mut c_double,
           work: *mut c_double, iwork: *mut c_int, info: *mut c_int);
    dgeequ => b"dgeequ_\0":
        fn(m: *const c_int, n: *const c_int, a: *const c_double, lda: *const c_int,
           r: *mut c_double, c: *mut c_double, rowcnd: *mut c_double,
           colcnd: *mut c_double, amax: *mut c_double, info: *mut c_int);
    dlange => b"dlange_\0":
        fn(norm: *const c_char, m: *const c_int, n: *const c_int, a: *const c_double,
           lda: *const c_int, work: *mut c_double) -> c_double;
    slange => b"slange_\0":
        fn(norm: *const c_char, m: *const c_int, n: *const c_int, a: *const c_float,
           lda: *const c_int, work: *mut c_float) -> c_float;
    dlansy => b"dlansy_\0":
        fn(norm: *const c_char, uplo: *const c_char, n: *const c_int, a: *const c_double,
           lda: *const c_int, work: *mut c_double) -> c_double;

    // Elementary kernels and machine queries.
    dlamch => b"dlamch_\0":
        fn(cmach: *const c_char) -> c_double;
    slamch => b"slamch_\0":
        fn(cmach: *const c_char) -> c_float;
    dlacpy => b"dlacpy_\0":
        fn(uplo: *const c_char, m: *const c_int, n: *const c_int, a: *const c_double,
           lda: *const c_int, b: *mut c_double, ldb: *const c_int);
    slacpy => b"slacpy_\0":
        fn(uplo: *const c_char, m: *const c_int, n: *const c_int, a: *const c_float,
           lda: *const c_int, b: *mut c_float, ldb: *const c_int);
    dlaset => b"dlaset_\0":
        fn(uplo: *const c_char, m: *const c_int, n: *const c_int, alpha: *const c_double,
           beta: *const c_double, a: *mut c_double, lda: *const c_int);
    dlaswp => b"dlaswp_\0":
        fn(n: *const c_int, a: *mut c_double, lda: *const c_int, k1: *const c_int,
           k2: *const c_int, ipiv: *const c_int, incx: *const c_int);
    dlarfg => b"dlarfg_\0":
        fn(n: *const c_int, alpha: *mut c_double, x: *mut c_double, incx: *const c_int,
           tau: *mut c_double);
    slarfg => b"slarfg_\0":
        fn(n: *const c_int, alpha: *mut c_float, x: *mut c_float, incx: *const c_int,
           tau: *mut c_float);
    dlartg => b"dlartg_\0":
        fn(f: *const c_double, g: *const c_double, cs: *mut c_double, sn: *mut c_double,
           r: *mut c_double);
    dlapy2 => b"dlapy2_\0":
        fn(x: *const c_double, y: *const c_double) -> c_double;
}
