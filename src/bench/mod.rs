//! Benchmark harness for the SpMV kernels
//!
//! One benchmark invocation is a linear pipeline: generate inputs, take a
//! memory baseline, time the sequential kernel, time the parallel kernel,
//! derive speedup and efficiency, read the closing memory figure. There are
//! no retries; a fault in any repetition propagates and aborts the size
//! being measured.

pub mod memory;

pub use memory::ResourceMeter;

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::matrix::{random_csr, random_vector};
use crate::parallel::{spmv_parallel, spmv_pool};
use crate::spmv::spmv;

/// Which parallel kernel a benchmark invocation exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallelMode {
    /// Rayon data-parallel rows on the global thread pool
    DataParallel,
    /// Explicit worker pool created inside every call, so pool startup is
    /// paid inside the timed region the way the reference's process pool
    /// paid it
    WorkerPool,
}

/// Parameters for one benchmark invocation
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Timed repetitions per kernel variant
    pub runs: usize,

    /// Probability that a candidate cell is excluded during generation
    /// (see [`crate::matrix::random_csr`] for the inverted naming)
    pub density: f64,

    /// Worker count used to size the pool variant and to normalize
    /// efficiency; zero is allowed and maps efficiency to 0.0
    pub n_threads: usize,

    /// Parallel kernel under test
    pub mode: ParallelMode,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            runs: 5,
            density: 0.1,
            n_threads: num_cpus::get(), // Use all available cores
            mode: ParallelMode::DataParallel,
        }
    }
}

/// Aggregated metrics from one benchmark invocation
#[derive(Debug, Clone)]
pub struct BenchResult {
    /// Problem size
    pub n: usize,

    /// Mean sequential kernel time in seconds
    pub avg_seq: f64,

    /// Mean parallel kernel time in seconds
    pub avg_par: f64,

    /// avg_seq / avg_par; positive infinity when avg_par is exactly zero
    pub speedup: f64,

    /// speedup / worker count; zero when the worker count is zero
    pub efficiency: f64,

    /// Net resident-memory delta across the timed section plus the
    /// matrix's own footprint, in MB
    pub mem_mb: f64,
}

impl fmt::Display for BenchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "N={}: Sequential {:.6}s | Parallel {:.6}s | Speedup {:.2}x | Efficiency {:.2}",
            self.n, self.avg_seq, self.avg_par, self.speedup, self.efficiency
        )?;
        write!(f, "Memory usage: {:.2} MB", self.mem_mb)
    }
}

/// Speedup of the parallel variant over the sequential one
///
/// A parallel mean of exactly zero maps to the infinite-speedup sentinel
/// instead of a division fault.
fn derive_speedup(avg_seq: f64, avg_par: f64) -> f64 {
    if avg_par == 0.0 {
        f64::INFINITY
    } else {
        avg_seq / avg_par
    }
}

/// Speedup normalized by worker count; zero when the count is unknown
fn derive_efficiency(speedup: f64, n_workers: usize) -> f64 {
    if n_workers == 0 {
        0.0
    } else {
        speedup / n_workers as f64
    }
}

/// Times `runs` invocations of a kernel and returns the arithmetic mean in
/// seconds
///
/// One untimed warm-up call precedes the loop so one-time setup costs such
/// as lazy thread-pool initialization do not skew the first repetition.
/// Only the kernel call sits inside the clocked region; every repetition
/// weighs equally and no outlier trimming is applied.
fn time_runs<T>(runs: usize, mut kernel: impl FnMut() -> Vec<T>) -> f64 {
    black_box(kernel());

    let mut total = Duration::ZERO;
    for _ in 0..runs {
        let start = Instant::now();
        let y = kernel();
        total += start.elapsed();
        black_box(y);
    }

    total.as_secs_f64() / runs as f64
}

/// Runs the full benchmark pipeline for one problem size
///
/// Generates a fresh matrix and vector, measures both kernel variants, and
/// derives the comparison metrics. Generation and reporting stay outside
/// the timed regions.
///
/// # Panics
///
/// Panics on invalid configuration (`runs` of zero, out-of-range density,
/// or a zero worker count in `WorkerPool` mode) and propagates any kernel
/// fault unchanged.
pub fn run_benchmark(n: usize, config: &BenchConfig) -> BenchResult {
    assert!(config.runs > 0, "benchmark needs at least one run");

    let mut rng = rand::thread_rng();
    let a = random_csr(n, config.density, &mut rng);
    let x = random_vector(n, &mut rng);

    let meter = ResourceMeter::start();

    let avg_seq = time_runs(config.runs, || spmv(&a, &x));
    let avg_par = match config.mode {
        ParallelMode::DataParallel => time_runs(config.runs, || spmv_parallel(&a, &x)),
        ParallelMode::WorkerPool => {
            assert!(
                config.n_threads > 0,
                "worker pool mode needs a positive thread count"
            );
            time_runs(config.runs, || spmv_pool(&a, &x, config.n_threads))
        }
    };

    let speedup = derive_speedup(avg_seq, avg_par);
    let efficiency = derive_efficiency(speedup, config.n_threads);
    let mem_mb = meter.finish() + a.memory_footprint_bytes() as f64 / (1024.0 * 1024.0);

    BenchResult {
        n,
        avg_seq,
        avg_par,
        speedup,
        efficiency,
        mem_mb,
    }
}
