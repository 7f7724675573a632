//! Linear system solvers: dense, triangular, banded, tridiagonal, and
//! least squares, plus the expert driver with equilibration.

use crate::Lapack;
use std::os::raw::c_char;

impl Lapack {
    /// Solve `A * X = B` for a general matrix via LU with partial
    /// pivoting (`DGESV`). `a` receives the factors, `b` the solution.
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()`, `offset_ipiv + n <=
    /// ipiv.len()`, and `offset_b + ldb * nrhs <= b.len()` must hold;
    /// the call is a raw pass-through.
    pub unsafe fn dgesv(
        &self,
        n: i32,
        nrhs: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        ipiv: &mut [i32],
        offset_ipiv: usize,
        b: &mut [f64],
        offset_b: usize,
        ldb: i32,
        info: &mut i32,
    ) {
        (self.api.dgesv)(
            &n,
            &nrhs,
            a.as_mut_ptr().add(offset_a),
            &lda,
            ipiv.as_mut_ptr().add(offset_ipiv),
            b.as_mut_ptr().add(offset_b),
            &ldb,
            info,
        );
    }

    /// Single-precision `DGESV`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dgesv`].
    pub unsafe fn sgesv(
        &self,
        n: i32,
        nrhs: i32,
        a: &mut [f32],
        offset_a: usize,
        lda: i32,
        ipiv: &mut [i32],
        offset_ipiv: usize,
        b: &mut [f32],
        offset_b: usize,
        ldb: i32,
        info: &mut i32,
    ) {
        (self.api.sgesv)(
            &n,
            &nrhs,
            a.as_mut_ptr().add(offset_a),
            &lda,
            ipiv.as_mut_ptr().add(offset_ipiv),
            b.as_mut_ptr().add(offset_b),
            &ldb,
            info,
        );
    }

    /// Solve using an existing `DGETRF` factorization (`DGETRS`).
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()`, `offset_ipiv + n <=
    /// ipiv.len()`, and `offset_b + ldb * nrhs <= b.len()` must hold.
    pub unsafe fn dgetrs(
        &self,
        trans: u8,
        n: i32,
        nrhs: i32,
        a: &[f64],
        offset_a: usize,
        lda: i32,
        ipiv: &[i32],
        offset_ipiv: usize,
        b: &mut [f64],
        offset_b: usize,
        ldb: i32,
        info: &mut i32,
    ) {
        let trans = trans as c_char;
        (self.api.dgetrs)(
            &trans,
            &n,
            &nrhs,
            a.as_ptr().add(offset_a),
            &lda,
            ipiv.as_ptr().add(offset_ipiv),
            b.as_mut_ptr().add(offset_b),
            &ldb,
            info,
        );
    }

    /// Single-precision `DGETRS`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dgetrs`].
    pub unsafe fn sgetrs(
        &self,
        trans: u8,
        n: i32,
        nrhs: i32,
        a: &[f32],
        offset_a: usize,
        lda: i32,
        ipiv: &[i32],
        offset_ipiv: usize,
        b: &mut [f32],
        offset_b: usize,
        ldb: i32,
        info: &mut i32,
    ) {
        let trans = trans as c_char;
        (self.api.sgetrs)(
            &trans,
            &n,
            &nrhs,
            a.as_ptr().add(offset_a),
            &lda,
            ipiv.as_ptr().add(offset_ipiv),
            b.as_mut_ptr().add(offset_b),
            &ldb,
            info,
        );
    }

    /// Solve a symmetric positive-definite system via Cholesky
    /// (`DPOSV`).
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()` and `offset_b + ldb * nrhs <=
    /// b.len()` must hold.
    pub unsafe fn dposv(
        &self,
        uplo: u8,
        n: i32,
        nrhs: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        b: &mut [f64],
        offset_b: usize,
        ldb: i32,
        info: &mut i32,
    ) {
        let uplo = uplo as c_char;
        (self.api.dposv)(
            &uplo,
            &n,
            &nrhs,
            a.as_mut_ptr().add(offset_a),
            &lda,
            b.as_mut_ptr().add(offset_b),
            &ldb,
            info,
        );
    }

    /// Solve using an existing `DPOTRF` factorization (`DPOTRS`).
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dposv`].
    pub unsafe fn dpotrs(
        &self,
        uplo: u8,
        n: i32,
        nrhs: i32,
        a: &[f64],
        offset_a: usize,
        lda: i32,
        b: &mut [f64],
        offset_b: usize,
        ldb: i32,
        info: &mut i32,
    ) {
        let uplo = uplo as c_char;
        (self.api.dpotrs)(
            &uplo,
            &n,
            &nrhs,
            a.as_ptr().add(offset_a),
            &lda,
            b.as_mut_ptr().add(offset_b),
            &ldb,
            info,
        );
    }

    /// Solve a triangular system (`DTRTRS`).
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()` and `offset_b + ldb * nrhs <=
    /// b.len()` must hold.
    pub unsafe fn dtrtrs(
        &self,
        uplo: u8,
        trans: u8,
        diag: u8,
        n: i32,
        nrhs: i32,
        a: &[f64],
        offset_a: usize,
        lda: i32,
        b: &mut [f64],
        offset_b: usize,
        ldb: i32,
        info: &mut i32,
    ) {
        let uplo = uplo as c_char;
        let trans = trans as c_char;
        let diag = diag as c_char;
        (self.api.dtrtrs)(
            &uplo,
            &trans,
            &diag,
            &n,
            &nrhs,
            a.as_ptr().add(offset_a),
            &lda,
            b.as_mut_ptr().add(offset_b),
            &ldb,
            info,
        );
    }

    /// Single-precision `DTRTRS`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dtrtrs`].
    pub unsafe fn strtrs(
        &self,
        uplo: u8,
        trans: u8,
        diag: u8,
        n: i32,
        nrhs: i32,
        a: &[f32],
        offset_a: usize,
        lda: i32,
        b: &mut [f32],
        offset_b: usize,
        ldb: i32,
        info: &mut i32,
    ) {
        let uplo = uplo as c_char;
        let trans = trans as c_char;
        let diag = diag as c_char;
        (self.api.strtrs)(
            &uplo,
            &trans,
            &diag,
            &n,
            &nrhs,
            a.as_ptr().add(offset_a),
            &lda,
            b.as_mut_ptr().add(offset_b),
            &ldb,
            info,
        );
    }

    /// Least-squares solve of an over- or under-determined system via
    /// QR or LQ (`DGELS`).
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()`, `offset_b + ldb * nrhs <=
    /// b.len()`, and `offset_work + lwork <= work.len()` must hold.
    pub unsafe fn dgels(
        &self,
        trans: u8,
        m: i32,
        n: i32,
        nrhs: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        b: &mut [f64],
        offset_b: usize,
        ldb: i32,
        work: &mut [f64],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        let trans = trans as c_char;
        (self.api.dgels)(
            &trans,
            &m,
            &n,
            &nrhs,
            a.as_mut_ptr().add(offset_a),
            &lda,
            b.as_mut_ptr().add(offset_b),
            &ldb,
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Single-precision `DGELS`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dgels`].
    pub unsafe fn sgels(
        &self,
        trans: u8,
        m: i32,
        n: i32,
        nrhs: i32,
        a: &mut [f32],
        offset_a: usize,
        lda: i32,
        b: &mut [f32],
        offset_b: usize,
        ldb: i32,
        work: &mut [f32],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        let trans = trans as c_char;
        (self.api.sgels)(
            &trans,
            &m,
            &n,
            &nrhs,
            a.as_mut_ptr().add(offset_a),
            &lda,
            b.as_mut_ptr().add(offset_b),
            &ldb,
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Solve a banded system (`DGBSV`).
    ///
    /// # Safety
    ///
    /// `offset_ab + ldab * n <= ab.len()`, `offset_ipiv + n <=
    /// ipiv.len()`, and `offset_b + ldb * nrhs <= b.len()` must hold.
    pub unsafe fn dgbsv(
        &self,
        n: i32,
        kl: i32,
        ku: i32,
        nrhs: i32,
        ab: &mut [f64],
        offset_ab: usize,
        ldab: i32,
        ipiv: &mut [i32],
        offset_ipiv: usize,
        b: &mut [f64],
        offset_b: usize,
        ldb: i32,
        info: &mut i32,
    ) {
        (self.api.dgbsv)(
            &n,
            &kl,
            &ku,
            &nrhs,
            ab.as_mut_ptr().add(offset_ab),
            &ldab,
            ipiv.as_mut_ptr().add(offset_ipiv),
            b.as_mut_ptr().add(offset_b),
            &ldb,
            info,
        );
    }

    /// Solve a tridiagonal system by Gaussian elimination (`DGTSV`).
    /// The three diagonals are overwritten.
    ///
    /// # Safety
    ///
    /// `offset_dl + n - 1 <= dl.len()`, `offset_d + n <= d.len()`,
    /// `offset_du + n - 1 <= du.len()`, and `offset_b + ldb * nrhs <=
    /// b.len()` must hold.
    pub unsafe fn dgtsv(
        &self,
        n: i32,
        nrhs: i32,
        dl: &mut [f64],
        offset_dl: usize,
        d: &mut [f64],
        offset_d: usize,
        du: &mut [f64],
        offset_du: usize,
        b: &mut [f64],
        offset_b: usize,
        ldb: i32,
        info: &mut i32,
    ) {
        (self.api.dgtsv)(
            &n,
            &nrhs,
            dl.as_mut_ptr().add(offset_dl),
            d.as_mut_ptr().add(offset_d),
            du.as_mut_ptr().add(offset_du),
            b.as_mut_ptr().add(offset_b),
            &ldb,
            info,
        );
    }

    /// Expert driver for general systems (`DGESVX`): optional
    /// equilibration, condition estimate, and per-column error bounds.
    /// `equed` is an in/out one-character carrier describing the
    /// equilibration actually applied.
    ///
    /// # Safety
    ///
    /// Every `(offset, extent)` pair must stay within its slice;
    /// `work` needs `4 * n` elements from `offset_work` and `iwork`
    /// needs `n` from `offset_iwork`. See the LAPACK documentation for
    /// the remaining extents.
    pub unsafe fn dgesvx(
        &self,
        fact: u8,
        trans: u8,
        n: i32,
        nrhs: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        af: &mut [f64],
        offset_af: usize,
        ldaf: i32,
        ipiv: &mut [i32],
        offset_ipiv: usize,
        equed: &mut u8,
        r: &mut [f64],
        offset_r: usize,
        c: &mut [f64],
        offset_c: usize,
        b: &mut [f64],
        offset_b: usize,
        ldb: i32,
        x: &mut [f64],
        offset_x: usize,
        ldx: i32,
        rcond: &mut f64,
        ferr: &mut [f64],
        offset_ferr: usize,
        berr: &mut [f64],
        offset_berr: usize,
        work: &mut [f64],
        offset_work: usize,
        iwork: &mut [i32],
        offset_iwork: usize,
        info: &mut i32,
    ) {
        let fact = fact as c_char;
        let trans = trans as c_char;
        (self.api.dgesvx)(
            &fact,
            &trans,
            &n,
            &nrhs,
            a.as_mut_ptr().add(offset_a),
            &lda,
            af.as_mut_ptr().add(offset_af),
            &ldaf,
            ipiv.as_mut_ptr().add(offset_ipiv),
            std::ptr::from_mut(equed).cast(),
            r.as_mut_ptr().add(offset_r),
            c.as_mut_ptr().add(offset_c),
            b.as_mut_ptr().add(offset_b),
            &ldb,
            x.as_mut_ptr().add(offset_x),
            &ldx,
            rcond,
            ferr.as_mut_ptr().add(offset_ferr),
            berr.as_mut_ptr().add(offset_berr),
            work.as_mut_ptr().add(offset_work),
            iwork.as_mut_ptr().add(offset_iwork),
            info,
        );
    }
}
