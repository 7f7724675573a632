//! Elementary kernels and machine-parameter queries.
//!
//! The queries here take no array arguments and cannot touch memory
//! they were not given, so they are exposed as safe functions; the
//! kernels operating on caller buffers carry the usual `unsafe`
//! pass-through contract.

use crate::Lapack;
use std::os::raw::c_char;

impl Lapack {
    /// Machine parameter query (`DLAMCH`): `b'E'` for epsilon, `b'S'`
    /// for safe minimum, and so on. Unknown selectors yield zero from
    /// the native routine.
    #[must_use]
    pub fn dlamch(&self, cmach: u8) -> f64 {
        let cmach = cmach as c_char;
        // Safety: reads only the selector it is handed.
        unsafe { (self.api.dlamch)(&cmach) }
    }

    /// Single-precision `DLAMCH`.
    #[must_use]
    pub fn slamch(&self, cmach: u8) -> f32 {
        let cmach = cmach as c_char;
        // Safety: reads only the selector it is handed.
        unsafe { (self.api.slamch)(&cmach) }
    }

    /// `sqrt(x^2 + y^2)` without destructive overflow (`DLAPY2`).
    #[must_use]
    pub fn dlapy2(&self, x: f64, y: f64) -> f64 {
        // Safety: pure scalar computation.
        unsafe { (self.api.dlapy2)(&x, &y) }
    }

    /// Generate a plane rotation (`DLARTG`): computes `cs`, `sn`, and
    /// `r` so that `[cs sn; -sn cs] * [f; g] = [r; 0]`.
    pub fn dlartg(&self, f: f64, g: f64, cs: &mut f64, sn: &mut f64, r: &mut f64) {
        // Safety: writes only through the three provided carriers.
        unsafe { (self.api.dlartg)(&f, &g, cs, sn, r) }
    }

    /// Copy all or part of a matrix (`DLACPY`).
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()` and `offset_b + ldb * n <=
    /// b.len()` must hold; no validation is performed.
    pub unsafe fn dlacpy(
        &self,
        uplo: u8,
        m: i32,
        n: i32,
        a: &[f64],
        offset_a: usize,
        lda: i32,
        b: &mut [f64],
        offset_b: usize,
        ldb: i32,
    ) {
        let uplo = uplo as c_char;
        (self.api.dlacpy)(
            &uplo,
            &m,
            &n,
            a.as_ptr().add(offset_a),
            &lda,
            b.as_mut_ptr().add(offset_b),
            &ldb,
        );
    }

    /// Single-precision `DLACPY`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dlacpy`].
    pub unsafe fn slacpy(
        &self,
        uplo: u8,
        m: i32,
        n: i32,
        a: &[f32],
        offset_a: usize,
        lda: i32,
        b: &mut [f32],
        offset_b: usize,
        ldb: i32,
    ) {
        let uplo = uplo as c_char;
        (self.api.slacpy)(
            &uplo,
            &m,
            &n,
            a.as_ptr().add(offset_a),
            &lda,
            b.as_mut_ptr().add(offset_b),
            &ldb,
        );
    }

    /// Initialize a matrix to `beta` on the diagonal and `alpha`
    /// elsewhere (`DLASET`).
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()` must hold.
    pub unsafe fn dlaset(
        &self,
        uplo: u8,
        m: i32,
        n: i32,
        alpha: f64,
        beta: f64,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
    ) {
        let uplo = uplo as c_char;
        (self.api.dlaset)(
            &uplo,
            &m,
            &n,
            &alpha,
            &beta,
            a.as_mut_ptr().add(offset_a),
            &lda,
        );
    }

    /// Apply a series of row interchanges (`DLASWP`).
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()` and `offset_ipiv + k2 <=
    /// ipiv.len()` must hold, with every pivot index in range for `a`.
    pub unsafe fn dlaswp(
        &self,
        n: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        k1: i32,
        k2: i32,
        ipiv: &[i32],
        offset_ipiv: usize,
        incx: i32,
    ) {
        (self.api.dlaswp)(
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            &k1,
            &k2,
            ipiv.as_ptr().add(offset_ipiv),
            &incx,
        );
    }

    /// Generate an elementary Householder reflector (`DLARFG`).
    /// `alpha` is an in/out scalar carrier; `tau` receives the
    /// reflector coefficient.
    ///
    /// # Safety
    ///
    /// `offset_x + (n - 2) * |incx| < x.len()` must hold for `n > 1`.
    pub unsafe fn dlarfg(
        &self,
        n: i32,
        alpha: &mut f64,
        x: &mut [f64],
        offset_x: usize,
        incx: i32,
        tau: &mut f64,
    ) {
        (self.api.dlarfg)(&n, alpha, x.as_mut_ptr().add(offset_x), &incx, tau);
    }

    /// Single-precision `DLARFG`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dlarfg`].
    pub unsafe fn slarfg(
        &self,
        n: i32,
        alpha: &mut f32,
        x: &mut [f32],
        offset_x: usize,
        incx: i32,
        tau: &mut f32,
    ) {
        (self.api.slarfg)(&n, alpha, x.as_mut_ptr().add(offset_x), &incx, tau);
    }
}
