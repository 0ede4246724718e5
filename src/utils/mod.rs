//! Utility functions and helpers

pub mod formats;

pub use formats::{from_sprs, to_sprs};

/// Computes an exclusive prefix sum (scan) for a vector
///
/// The generator turns per-row non-zero counts into a CSR row-pointer array
/// with this: the result has one more element than the input, starting at 0.
pub fn exclusive_scan(input: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(input.len() + 1);
    let mut sum = 0;

    result.push(0); // First element is always 0

    for &val in input {
        sum += val;
        result.push(sum);
    }

    result
}
