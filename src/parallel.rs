//! Row-parallel sparse matrix-vector multiplication
//!
//! Both kernels in this module partition ownership of rows across workers.
//! Each row's dot product is a self-contained reduction over a CSR slice, so
//! workers share the matrix and input vector read-only and never write the
//! same output slot: no locks, no atomics, no merge step. The arithmetic is
//! exactly the sequential kernel's, only the scheduling differs, which keeps
//! results bit-identical to [`crate::spmv::spmv`].

use rayon::prelude::*;
use num_traits::Num;
use std::ops::AddAssign;
use std::sync::mpsc;
use std::thread;

use crate::matrix::CsrMatrix;
use crate::spmv::row_dot;

/// Computes y = A·x with one rayon work item per row
///
/// This is the thread-parallel variant: rows are distributed over rayon's
/// global pool and each worker writes directly into its rows' slots of y.
///
/// # Panics
///
/// Panics if `x.len()` does not match the matrix dimension.
pub fn spmv_parallel<T>(a: &CsrMatrix<T>, x: &[T]) -> Vec<T>
where
    T: Copy + Num + AddAssign + Send + Sync,
{
    assert_eq!(x.len(), a.n, "vector length must match matrix dimension");

    let mut y = vec![T::zero(); a.n];
    y.par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| *slot = row_dot(a, x, i));
    y
}

/// A worker's assignment: the half-open row range it owns
///
/// Blocks are contiguous and disjoint, so the receiver can splice each
/// result straight into y at `start` without inspecting other blocks.
#[derive(Debug, Clone, Copy)]
struct RowBlock {
    start: usize,
    end: usize,
}

/// Computes y = A·x on a pool of `n_workers` scoped threads
///
/// This variant models the reference harness's process pool: the pool is
/// created inside the call (its startup cost is deliberately part of what a
/// timed invocation pays), each worker receives a typed [`RowBlock`] rather
/// than an opaque argument tuple, and results travel back over a channel
/// tagged with the block's starting row so gathering never depends on
/// completion order.
///
/// Worker count never affects the result, only wall-clock time; `n_workers`
/// larger than n simply leaves some workers without a block.
///
/// # Panics
///
/// Panics if `x.len()` does not match the matrix dimension or if
/// `n_workers` is zero.
pub fn spmv_pool<T>(a: &CsrMatrix<T>, x: &[T], n_workers: usize) -> Vec<T>
where
    T: Copy + Num + AddAssign + Send + Sync,
{
    assert_eq!(x.len(), a.n, "vector length must match matrix dimension");
    assert!(n_workers > 0, "worker pool must have at least one worker");

    let n = a.n;
    let block_len = n.div_ceil(n_workers);
    let blocks: Vec<RowBlock> = (0..n)
        .step_by(block_len)
        .map(|start| RowBlock {
            start,
            end: (start + block_len).min(n),
        })
        .collect();

    let (tx, rx) = mpsc::channel::<(usize, Vec<T>)>();

    let mut y = vec![T::zero(); n];
    thread::scope(|scope| {
        for block in &blocks {
            let tx = tx.clone();
            scope.spawn(move || {
                let partial: Vec<T> = (block.start..block.end)
                    .map(|i| row_dot(a, x, i))
                    .collect();
                // The scope keeps the receiver alive, so send cannot fail.
                let _ = tx.send((block.start, partial));
            });
        }
        drop(tx);

        for (start, partial) in rx {
            y[start..start + partial.len()].copy_from_slice(&partial);
        }
    });

    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{random_csr, random_vector};
    use crate::spmv::spmv;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_parallel_matches_sequential_exactly() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let a = random_csr(200, 0.6, &mut rng);
        let x = random_vector(200, &mut rng);

        // Same per-row summation order, so equality is exact.
        assert_eq!(spmv_parallel(&a, &x), spmv(&a, &x));
    }

    #[test]
    fn test_pool_matches_sequential_exactly() {
        let mut rng = ChaCha8Rng::seed_from_u64(100);
        let a = random_csr(200, 0.6, &mut rng);
        let x = random_vector(200, &mut rng);
        let expected = spmv(&a, &x);

        for n_workers in [1, 2, 3, 8] {
            assert_eq!(spmv_pool(&a, &x, n_workers), expected);
        }
    }

    #[test]
    fn test_pool_with_more_workers_than_rows() {
        let a = CsrMatrix::new(
            3,
            vec![0, 1, 2, 3],
            vec![0, 1, 2],
            vec![1.0, 1.0, 1.0],
        );
        let x = vec![5.0, 6.0, 7.0];

        assert_eq!(spmv_pool(&a, &x, 16), x);
    }

    #[test]
    fn test_parallel_on_empty_matrix() {
        let a = CsrMatrix::<f64>::zeros(8);
        let x = vec![1.0; 8];

        assert_eq!(spmv_parallel(&a, &x), vec![0.0; 8]);
        assert_eq!(spmv_pool(&a, &x, 4), vec![0.0; 8]);
    }

    #[test]
    #[should_panic(expected = "at least one worker")]
    fn test_zero_workers_rejected() {
        let a = CsrMatrix::<f64>::identity(2);
        spmv_pool(&a, &[1.0, 2.0], 0);
    }
}
