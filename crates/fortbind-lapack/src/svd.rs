//! Singular value decompositions.

use crate::Lapack;
use std::os::raw::c_char;

impl Lapack {
    /// Singular value decomposition of a general matrix (`DGESVD`).
    /// Positive `info` reports unconverged superdiagonals.
    ///
    /// # Safety
    ///
    /// Every `(offset, extent)` pair must stay within its slice; `u`
    /// and `vt` only need their full extent when the corresponding job
    /// flag requests vectors. No validation is performed.
    pub unsafe fn dgesvd(
        &self,
        jobu: u8,
        jobvt: u8,
        m: i32,
        n: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        s: &mut [f64],
        offset_s: usize,
        u: &mut [f64],
        offset_u: usize,
        ldu: i32,
        vt: &mut [f64],
        offset_vt: usize,
        ldvt: i32,
        work: &mut [f64],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        let jobu = jobu as c_char;
        let jobvt = jobvt as c_char;
        (self.api.dgesvd)(
            &jobu,
            &jobvt,
            &m,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            s.as_mut_ptr().add(offset_s),
            u.as_mut_ptr().add(offset_u),
            &ldu,
            vt.as_mut_ptr().add(offset_vt),
            &ldvt,
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Single-precision `DGESVD`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dgesvd`].
    pub unsafe fn sgesvd(
        &self,
        jobu: u8,
        jobvt: u8,
        m: i32,
        n: i32,
        a: &mut [f32],
        offset_a: usize,
        lda: i32,
        s: &mut [f32],
        offset_s: usize,
        u: &mut [f32],
        offset_u: usize,
        ldu: i32,
        vt: &mut [f32],
        offset_vt: usize,
        ldvt: i32,
        work: &mut [f32],
        offset_work: usize,
        lwork: i32,
        info: &mut i32,
    ) {
        let jobu = jobu as c_char;
        let jobvt = jobvt as c_char;
        (self.api.sgesvd)(
            &jobu,
            &jobvt,
            &m,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            s.as_mut_ptr().add(offset_s),
            u.as_mut_ptr().add(offset_u),
            &ldu,
            vt.as_mut_ptr().add(offset_vt),
            &ldvt,
            work.as_mut_ptr().add(offset_work),
            &lwork,
            info,
        );
    }

    /// Divide-and-conquer SVD (`DGESDD`). Needs an additional integer
    /// workspace of `8 * min(m, n)` elements.
    ///
    /// # Safety
    ///
    /// Preconditions of [`Lapack::dgesvd`] plus `offset_iwork +
    /// 8 * min(m, n) <= iwork.len()`.
    pub unsafe fn dgesdd(
        &self,
        jobz: u8,
        m: i32,
        n: i32,
        a: &mut [f64],
        offset_a: usize,
        lda: i32,
        s: &mut [f64],
        offset_s: usize,
        u: &mut [f64],
        offset_u: usize,
        ldu: i32,
        vt: &mut [f64],
        offset_vt: usize,
        ldvt: i32,
        work: &mut [f64],
        offset_work: usize,
        lwork: i32,
        iwork: &mut [i32],
        offset_iwork: usize,
        info: &mut i32,
    ) {
        let jobz = jobz as c_char;
        (self.api.dgesdd)(
            &jobz,
            &m,
            &n,
            a.as_mut_ptr().add(offset_a),
            &lda,
            s.as_mut_ptr().add(offset_s),
            u.as_mut_ptr().add(offset_u),
            &ldu,
            vt.as_mut_ptr().add(offset_vt),
            &ldvt,
            work.as_mut_ptr().add(offset_work),
            &lwork,
            iwork.as_mut_ptr().add(offset_iwork),
            info,
        );
    }

    /// SVD of a bidiagonal matrix by implicit QR (`DBDSQR`).
    ///
    /// # Safety
    ///
    /// Every `(offset, extent)` pair must stay within its slice; see
    /// the LAPACK documentation for the exact extents.
    pub unsafe fn dbdsqr(
        &self,
        uplo: u8,
        n: i32,
        ncvt: i32,
        nru: i32,
        ncc: i32,
        d: &mut [f64],
        offset_d: usize,
        e: &mut [f64],
        offset_e: usize,
        vt: &mut [f64],
        offset_vt: usize,
        ldvt: i32,
        u: &mut [f64],
        offset_u: usize,
        ldu: i32,
        c: &mut [f64],
        offset_c: usize,
        ldc: i32,
        work: &mut [f64],
        offset_work: usize,
        info: &mut i32,
    ) {
        let uplo = uplo as c_char;
        (self.api.dbdsqr)(
            &uplo,
            &n,
            &ncvt,
            &nru,
            &ncc,
            d.as_mut_ptr().add(offset_d),
            e.as_mut_ptr().add(offset_e),
            vt.as_mut_ptr().add(offset_vt),
            &ldvt,
            u.as_mut_ptr().add(offset_u),
            &ldu,
            c.as_mut_ptr().add(offset_c),
            &ldc,
            work.as_mut_ptr().add(offset_work),
            info,
        );
    }
}
