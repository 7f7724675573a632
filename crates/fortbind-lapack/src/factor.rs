//! Matrix factorizations: LU, Cholesky, QR, and banded LU.
//!
//! All wrappers follow the crate-level calling convention; see the
//! crate docs for the `(slice, offset, lda)` grouping and the status
//! code contract.

use crate::Lapack;
use std::os::raw::c_char;

impl Lapack {
    /// LU factorization with partial pivoting of a general matrix
    /// (`DGETRF`).
    ///
    /// # Safety
    ///
    /// Every `(offset, dimension)` pair must stay within its slice:
    /// `offset_a + lda * n <= a.len()` and `offset_ipiv + min(m, n) <=
    /// ipiv.len()`. Nothing is validated here.
    pub unsafe fn dgetrf(
        &self,
        m: i32,
        n: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        ipiv: &mut [i32],
        offset_ipiv: usize,
        info: &mut i32,
    ) {
        (self.api.dgetrf)(
            &m,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            ipiv.as_mut_ptr().add(offset_ipiv),
            info,
        );
    }

    /// Single-precision `DGETRF`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dgetrf`].
    pub unsafe fn sgetrf(
        &self,
        m: i32,
        n: i32,
        a: &mut [f32],
        offset_a: usize,
        lda: i32,
        ipiv: &mut [i32],
        offset_ipiv: usize,
        info: &mut i32,
    ) {
        (self.api.sgetrf)(
            &m,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            ipiv.as_mut_ptr().add(offset_ipiv),
            info,
        );
    }

    /// Unblocked LU factorization (`DGETF2`).
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dgetrf`].
    pub unsafe fn dgetf2(
        &self,
        m: i32,
        n: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        ipiv: &mut [i32],
        offset_ipiv: usize,
        info: &mut i32,
    ) {
        (self.api.dgetf2)(
            &m,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            ipiv.as_mut_ptr().add(offset_ipiv),
            info,
        );
    }

    /// Cholesky factorization of a symmetric positive-definite matrix
    /// (`DPOTRF`).
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()` must hold.
    pub unsafe fn dpotrf(
        &self,
        uplo: u8,
        n: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        info: &mut i32,
    ) {
        let uplo = uplo as c_char;
        (self.api.dpotrf)(&uplo, &n, a.as_mut_ptr().add(offset_a), &lda, info);
    }

    /// Single-precision `DPOTRF`.
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()` must hold.
    pub unsafe fn spotrf(
        &self,
        uplo: u8,
        n: i32,
        a: &mut [f32],
        offset_a: usize,
        lda: i32,
        info: &mut i32,
    ) {
        let uplo = uplo as c_char;
        (self.api.spotrf)(&uplo, &n, a.as_mut_ptr().add(offset_a), &lda, info);
    }

    /// QR factorization (`DGEQRF`). `work` is caller-sized scratch
    /// space; pass `lwork = -1` for a size query written to `work[0]`.
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()`, `offset_tau + min(m, n) <=
    /// tau.len()`, and `offset_work + lwork <= work.len()` must hold.
    pub unsafe fn dgeqrf(
        &self,
        m: i32,
        n: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        tau: &mut [f64],
        offset_tau: usize,
        work: &mut [f64],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        (self.api.dgeqrf)(
            &m,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            tau.as_mut_ptr().add(offset_tau),
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Single-precision `DGEQRF`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dgeqrf`].
    pub unsafe fn sgeqrf(
        &self,
        m: i32,
        n: i32,
        a: &mut [f32],
        offset_a: usize,
        lda: i32,
        tau: &mut [f32],
        offset_tau: usize,
        work: &mut [f32],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        (self.api.sgeqrf)(
            &m,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            tau.as_mut_ptr().add(offset_tau),
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Generate the orthogonal matrix Q from a `DGEQRF` factorization
    /// (`DORGQR`).
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()`, `offset_tau + k <= tau.len()`,
    /// and `offset_work + lwork <= work.len()` must hold.
    pub unsafe fn dorgqr(
        &self,
        m: i32,
        n: i32,
        k: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        tau: &[f64],
        offset_tau: usize,
        work: &mut [f64],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        (self.api.dorgqr)(
            &m,
            &n,
            &k,
            a.as_mut_ptr().add(offset_a),
            &lda,
            tau.as_ptr().add(offset_tau),
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Single-precision `DORGQR`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dorgqr`].
    pub unsafe fn sorgqr(
        &self,
        m: i32,
        n: i32,
        k: i32,
        a: &mut [f32],
        offset_a: usize,
        lda: i32,
        tau: &[f32],
        offset_tau: usize,
        work: &mut [f32],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        (self.api.sorgqr)(
            &m,
            &n,
            &k,
            a.as_mut_ptr().add(offset_a),
            &lda,
            tau.as_ptr().add(offset_tau),
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Multiply by Q or Qᵀ from a `DGEQRF` factorization (`DORMQR`).
    /// `a` is restored on exit but written to during the call.
    ///
    /// # Safety
    ///
    /// All `(offset, extent)` pairs must stay within their slices; see
    /// the LAPACK documentation for the exact extents.
    pub unsafe fn dormqr(
        &self,
        side: u8,
        trans: u8,
        m: i32,
        n: i32,
        k: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        tau: &[f64],
        offset_tau: usize,
        c: &mut [f64],
        offset_c: usize,
        ldc: i32,
        work: &mut [f64],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        let side = side as c_char;
        let trans = trans as c_char;
        (self.api.dormqr)(
            &side,
            &trans,
            &m,
            &n,
            &k,
            a.as_mut_ptr().add(offset_a),
            &lda,
            tau.as_ptr().add(offset_tau),
            c.as_mut_ptr().add(offset_c),
            &ldc,
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// LU factorization of a banded matrix (`DGBTRF`). `ab` is the
    /// band storage with `ldab >= 2*kl + ku + 1`.
    ///
    /// # Safety
    ///
    /// `offset_ab + ldab * n <= ab.len()` and `offset_ipiv +
    /// min(m, n) <= ipiv.len()` must hold.
    pub unsafe fn dgbtrf(
        &self,
        m: i32,
        n: i32,
        kl: i32,
        ku: i32,
        ab: &mut [f64],
        offset_ab: usize,
        ldab: i32,
        ipiv: &mut [i32],
        offset_ipiv: usize,
        info: &mut i32,
    ) {
        (self.api.dgbtrf)(
            &m,
            &n,
            &kl,
            &ku,
            ab.as_mut_ptr().add(offset_ab),
            &ldab,
            ipiv.as_mut_ptr().add(offset_ipiv),
            info,
        );
    }
}
