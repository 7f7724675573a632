//! Eigenvalue problems: symmetric and general, plus balancing.

use crate::Lapack;
use std::os::raw::c_char;

impl Lapack {
    /// Eigenvalues, and optionally eigenvectors, of a symmetric matrix
    /// (`DSYEV`). Eigenvalues land in `w` in ascending order.
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()`, `offset_w + n <= w.len()`, and
    /// `offset_work + lwork <= work.len()` must hold; no validation is
    /// performed.
    pub unsafe fn dsyev(
        &self,
        jobz: u8,
        uplo: u8,
        n: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        w: &mut [f64],
        offset_w: usize,
        work: &mut [f64],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        let jobz = jobz as c_char;
        let uplo = uplo as c_char;
        (self.api.dsyev)(
            &jobz,
            &uplo,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            w.as_mut_ptr().add(offset_w),
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Single-precision `DSYEV`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dsyev`].
    pub unsafe fn ssyev(
        &self,
        jobz: u8,
        uplo: u8,
        n: i32,
        a: &mut [f32],
        offset_a: usize,
        lda: i32,
        w: &mut [f32],
        offset_w: usize,
        work: &mut [f32],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        let jobz = jobz as c_char;
        let uplo = uplo as c_char;
        (self.api.ssyev)(
            &jobz,
            &uplo,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            w.as_mut_ptr().add(offset_w),
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Divide-and-conquer symmetric eigensolver (`DSYEVD`). Takes both
    /// a floating and an integer workspace, each caller-sized.
    ///
    /// # Safety
    ///
    /// Preconditions of [`Lapack::dsyev`] plus `offset_iwork + liwork
    /// <= iwork.len()`.
    pub unsafe fn dsyevd(
        &self,
        jobz: u8,
        uplo: u8,
        n: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        w: &mut [f64],
        offset_w: usize,
        work: &mut [f64],
        offset_work: usize,
        lwork: i32,
        iwork: &mut [i32],
        offset_iwork: usize,
        liwork: i32,
        info: &mut i32,
    ) {
        let jobz = jobz as c_char;
        let uplo = uplo as c_char;
        (self.api.dsyevd)(
            &jobz,
            &uplo,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            w.as_mut_ptr().add(offset_w),
            work.as_mut_ptr().add(offset_work),
            &lwork,
            iwork.as_mut_ptr().add(offset_iwork),
            &liwork,
            info,
        );
    }

    /// Eigendecomposition of a general matrix (`DGEEV`). Real and
    /// imaginary parts of the eigenvalues arrive in `wr`/`wi`;
    /// positive `info` reports a failed QR iteration.
    ///
    /// # Safety
    ///
    /// Every `(offset, extent)` pair must stay within its slice; `vl`
    /// and `vr` only need their full extent when the corresponding job
    /// flag requests vectors.
    pub unsafe fn dgeev(
        &self,
        jobvl: u8,
        jobvr: u8,
        n: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        wr: &mut [f64],
        offset_wr: usize,
        wi: &mut [f64],
        offset_wi: usize,
        vl: &mut [f64],
        offset_vl: usize,
        ldvl: i32,
        vr: &mut [f64],
        offset_vr: usize,
        ldvr: i32,
        work: &mut [f64],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        let jobvl = jobvl as c_char;
        let jobvr = jobvr as c_char;
        (self.api.dgeev)(
            &jobvl,
            &jobvr,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            wr.as_mut_ptr().add(offset_wr),
            wi.as_mut_ptr().add(offset_wi),
            vl.as_mut_ptr().add(offset_vl),
            &ldvl,
            vr.as_mut_ptr().add(offset_vr),
            &ldvr,
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Single-precision `DGEEV`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dgeev`].
    pub unsafe fn sgeev(
        &self,
        jobvl: u8,
        jobvr: u8,
        n: i32,
        a: &mut [f32],
        offset_a: usize,
        lda: i32,
        wr: &mut [f32],
        offset_wr: usize,
        wi: &mut [f32],
        offset_wi: usize,
        vl: &mut [f32],
        offset_vl: usize,
        ldvl: i32,
        vr: &mut [f32],
        offset_vr: usize,
        ldvr: i32,
        work: &mut [f32],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        let jobvl = jobvl as c_char;
        let jobvr = jobvr as c_char;
        (self.api.sgeev)(
            &jobvl,
            &jobvr,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            wr.as_mut_ptr().add(offset_wr),
            wi.as_mut_ptr().add(offset_wi),
            vl.as_mut_ptr().add(offset_vl),
            &ldvl,
            vr.as_mut_ptr().add(offset_vr),
            &ldvr,
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Balance a general matrix ahead of eigendecomposition
    /// (`DGEBAL`). `ilo` and `ihi` receive the active row range.
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()` and `offset_scale + n <=
    /// scale.len()` must hold.
    pub unsafe fn dgebal(
        &self,
        job: u8,
        n: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        ilo: &mut i32,
        ihi: &mut i32,
        scale: &mut [f64],
        offset_scale: usize,
        info: &mut i32,
    ) {
        let job = job as c_char;
        (self.api.dgebal)(
            &job,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            ilo,
            ihi,
            scale.as_mut_ptr().add(offset_scale),
            info,
        );
    }
}
