//! Sequential sparse matrix-vector multiplication
//!
//! This is the ground-truth kernel: each row is a self-contained dot product
//! over a CSR slice, accumulated in increasing index order. Because the
//! parallel kernels reuse the same per-row reduction, their results are
//! bit-identical to this one, which is what makes exact-equality validation
//! between the variants meaningful.

use num_traits::Num;
use std::ops::AddAssign;

use crate::matrix::CsrMatrix;

/// Computes the dot product of row i of `a` with `x`
///
/// Accumulation runs over `row_ptr[i]..row_ptr[i + 1]` in increasing order,
/// fixing the floating-point summation order for every caller.
#[inline]
pub(crate) fn row_dot<T>(a: &CsrMatrix<T>, x: &[T], i: usize) -> T
where
    T: Copy + Num + AddAssign,
{
    let mut sum = T::zero();
    for k in a.row_ptr[i]..a.row_ptr[i + 1] {
        sum += a.values[k] * x[a.col_idx[k]];
    }
    sum
}

/// Computes y = A·x sequentially, one row at a time in order
///
/// Rows with no non-zeros yield an exact 0.0 entry. Repeated calls on
/// identical inputs produce bit-identical output.
///
/// # Panics
///
/// Panics if `x.len()` does not match the matrix dimension.
pub fn spmv<T>(a: &CsrMatrix<T>, x: &[T]) -> Vec<T>
where
    T: Copy + Num + AddAssign,
{
    assert_eq!(x.len(), a.n, "vector length must match matrix dimension");

    (0..a.n).map(|i| row_dot(a, x, i)).collect()
}
