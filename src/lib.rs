//! # spmv-bench: sequential vs. parallel sparse kernels
//!
//! A micro-benchmark harness comparing sequential and row-parallel execution
//! of sparse matrix-vector multiplication (SpMV) over a compressed-row (CSR)
//! matrix, with a dense matrix-multiplication baseline alongside.
//!
//! ## Overview
//!
//! The harness measures, per problem size:
//!
//! - wall-clock time of each kernel variant, averaged over repeated runs
//! - speedup of the parallel variant over the sequential one
//! - parallel efficiency (speedup normalized by worker count)
//! - memory footprint of the timed section plus the matrix's own arrays
//!
//! ## Components
//!
//! 1. **CSR matrix**: the [`CsrMatrix`] entity plus a random generator that
//!    scans every candidate cell, preserving the O(n²) generation cost of
//!    the reference implementation.
//!
//! 2. **Kernels**:
//!    - [`spmv`]: sequential, fixed per-row summation order
//!    - [`spmv_parallel`]: rayon data-parallel over rows
//!    - [`spmv_pool`]: explicit worker pool with typed row-block dispatch
//!
//! 3. **Harness**: [`run_benchmark`] drives the timing loops and derives the
//!    comparison metrics; [`bench::ResourceMeter`] scopes the memory reading
//!    to the timed section.
//!
//! ## Usage
//!
//! ```
//! use spmv_bench::{random_csr, random_vector, spmv, spmv_parallel};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let a = random_csr(100, 0.8, &mut rng);
//! let x = random_vector(100, &mut rng);
//!
//! // Row ownership is partitioned, so the parallel result is bit-identical.
//! assert_eq!(spmv(&a, &x), spmv_parallel(&a, &x));
//! ```

pub mod bench;
pub mod dense;
pub mod matrix;
pub mod parallel;
pub mod spmv;
pub mod utils;

// Re-export primary components
pub use bench::{run_benchmark, BenchConfig, BenchResult, ParallelMode};
pub use matrix::{random_csr, random_vector, CsrMatrix};
pub use parallel::{spmv_parallel, spmv_pool};
pub use spmv::spmv;
pub use utils::{from_sprs, to_sprs};

/// Version information for the spmv-bench crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
