//! Conversions between our CSR format and the sprs library
//!
//! Used by the test suite to cross-validate the SpMV kernels against an
//! independent sparse-matrix implementation.

use num_traits::Num;
use sprs::CsMat;

use crate::matrix::CsrMatrix;

/// Converts our CSR matrix format to a sprs CsMat in CSR layout
pub fn to_sprs<T>(matrix: &CsrMatrix<T>) -> CsMat<T>
where
    T: Copy + Num + Default,
{
    CsMat::new(
        (matrix.n, matrix.n),
        matrix.row_ptr.clone(),
        matrix.col_idx.clone(),
        matrix.values.clone(),
    )
}

/// Converts a sprs CsMat back to our CSR format
///
/// # Panics
///
/// Panics if the sprs matrix is not square.
pub fn from_sprs<T>(matrix: CsMat<T>) -> CsrMatrix<T>
where
    T: Copy + Num + Default,
{
    // Ensure matrix is in CSR layout before unpacking raw storage
    let matrix = if matrix.is_csr() {
        matrix
    } else {
        matrix.to_csr()
    };

    let shape = matrix.shape();
    assert_eq!(shape.0, shape.1, "only square matrices are supported");

    let (indptr, indices, data) = matrix.into_raw_storage();

    CsrMatrix::new(shape.0, indptr, indices, data)
}
