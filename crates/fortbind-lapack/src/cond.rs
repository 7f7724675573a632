//! Condition-number estimators, norms, and equilibration queries.

use crate::Lapack;
use std::os::raw::c_char;

impl Lapack {
    /// Reciprocal condition number estimate of a general matrix from
    /// its LU factorization (`DGECON`). `anorm` is the norm of the
    /// original matrix; the estimate lands in the `rcond` carrier.
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()`, `offset_work + 4 * n <=
    /// work.len()`, and `offset_iwork + n <= iwork.len()` must hold;
    /// no validation is performed.
    pub unsafe fn dgecon(
        &self,
        norm: u8,
        n: i32,
        a: &[f64],
        offset_a: usize,
        lda: i32,
        anorm: f64,
        rcond: &mut f64,
        work: &mut [f64],
        offset_work: usize,
        iwork: &mut [i32],
        offset_iwork: usize,
        info: &mut i32,
    ) {
        let norm = norm as c_char;
        (self.api.dgecon)(
            &norm,
            &n,
            a.as_ptr().add(offset_a),
            &lda,
            &anorm,
            rcond,
            work.as_mut_ptr().add(offset_work),
            iwork.as_mut_ptr().add(offset_iwork),
            info,
        );
    }

    /// Single-precision `DGECON`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dgecon`].
    pub unsafe fn sgecon(
        &self,
        norm: u8,
        n: i32,
        a: &[f32],
        offset_a: usize,
        lda: i32,
        anorm: f32,
        rcond: &mut f32,
        work: &mut [f32],
        offset_work: usize,
        iwork: &mut [i32],
        offset_iwork: usize,
        info: &mut i32,
    ) {
        let norm = norm as c_char;
        (self.api.sgecon)(
            &norm,
            &n,
            a.as_ptr().add(offset_a),
            &lda,
            &anorm,
            rcond,
            work.as_mut_ptr().add(offset_work),
            iwork.as_mut_ptr().add(offset_iwork),
            info,
        );
    }

    /// Condition estimate of a symmetric positive-definite matrix from
    /// its Cholesky factorization (`DPOCON`).
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()`, `offset_work + 3 * n <=
    /// work.len()`, and `offset_iwork + n <= iwork.len()` must hold.
    pub unsafe fn dpocon(
        &self,
        uplo: u8,
        n: i32,
        a: &[f64],
        offset_a: usize,
        lda: i32,
        anorm: f64,
        rcond: &mut f64,
        work: &mut [f64],
        offset_work: usize,
        iwork: &mut [i32],
        offset_iwork: usize,
        info: &mut i32,
    ) {
        let uplo = uplo as c_char;
        (self.api.dpocon)(
            &uplo,
            &n,
            a.as_ptr().add(offset_a),
            &lda,
            &anorm,
            rcond,
            work.as_mut_ptr().add(offset_work),
            iwork.as_mut_ptr().add(offset_iwork),
            info,
        );
    }

    /// Condition estimate of a triangular matrix (`DTRCON`).
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dgecon`] with `work` needing
    /// `3 * n` elements from `offset_work`.
    pub unsafe fn dtrcon(
        &self,
        norm: u8,
        uplo: u8,
        diag: u8,
        n: i32,
        a: &[f64],
        offset_a: usize,
        lda: i32,
        rcond: &mut f64,
        work: &mut [f64],
        offset_work: usize,
        iwork: &mut [i32],
        offset_iwork: usize,
        info: &mut i32,
    ) {
        let norm = norm as c_char;
        let uplo = uplo as c_char;
        let diag = diag as c_char;
        (self.api.dtrcon)(
            &norm,
            &uplo,
            &diag,
            &n,
            a.as_ptr().add(offset_a),
            &lda,
            rcond,
            work.as_mut_ptr().add(offset_work),
            iwork.as_mut_ptr().add(offset_iwork),
            info,
        );
    }

    /// Row and column scale factors to equilibrate a general matrix
    /// (`DGEEQU`). Three scalar carriers receive the row/column
    /// condition ratios and the absolute maximum.
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()`, `offset_r + m <= r.len()`, and
    /// `offset_c + n <= c.len()` must hold.
    pub unsafe fn dgeequ(
        &self,
        m: i32,
        n: i32,
        a: &[f64],
        offset_a: usize,
        lda: i32,
        r: &mut [f64],
        offset_r: usize,
        c: &mut [f64],
        offset_c: usize,
        rowcnd: &mut f64,
        colcnd: &mut f64,
        amax: &mut f64,
        info: &mut i32,
    ) {
        (self.api.dgeequ)(
            &m,
            &n,
            a.as_ptr().add(offset_a),
            &lda,
            r.as_mut_ptr().add(offset_r),
            c.as_mut_ptr().add(offset_c),
            rowcnd,
            colcnd,
            amax,
            info,
        );
    }

    /// Norm of a general matrix (`DLANGE`). Returns the value
    /// directly; this query cannot fail, so there is no status
    /// carrier.
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()`; `work` needs `m` elements from
    /// `offset_work` only for the infinity norm.
    pub unsafe fn dlange(
        &self,
        norm: u8,
        m: i32,
        n: i32,
        a: &[f64],
        offset_a: usize,
        lda: i32,
        work: &mut [f64],
        offset_work: usize,
    ) -> f64 {
        let norm = norm as c_char;
        (self.api.dlange)(
            &norm,
            &m,
            &n,
            a.as_ptr().add(offset_a),
            &lda,
            work.as_mut_ptr().add(offset_work),
        )
    }

    /// Single-precision `DLANGE`.
    ///
    /// # Safety
    ///
    /// Same preconditions as [`Lapack::dlange`].
    pub unsafe fn slange(
        &self,
        norm: u8,
        m: i32,
        n: i32,
        a: &[f32],
        offset_a: usize,
        lda: i32,
        work: &mut [f32],
        offset_work: usize,
    ) -> f32 {
        let norm = norm as c_char;
        (self.api.slange)(
            &norm,
            &m,
            &n,
            a.as_ptr().add(offset_a),
            &lda,
            work.as_mut_ptr().add(offset_work),
        )
    }

    /// Norm of a symmetric matrix (`DLANSY`).
    ///
    /// # Safety
    ///
    /// `offset_a + lda * n <= a.len()`; `work` needs `n` elements from
    /// `offset_work` for the one and infinity norms.
    pub unsafe fn dlansy(
        &self,
        norm: u8,
        uplo: u8,
        n: i32,
        a: &[f64],
        offset_a: usize,
        lda: i32,
        work: &mut [f64],
        offset_work: usize,
    ) -> f64 {
        let norm = norm as c_char;
        let uplo = uplo as c_char;
        (self.api.dlansy)(
            &norm,
            &uplo,
            &n,
            a.as_ptr().add(offset_a),
            &lda,
            work.as_mut_ptr().add(offset_work),
        )
    }
}
