use spmv_bench::dense::run_dense_benchmark;
use spmv_bench::{run_benchmark, BenchConfig};

/// Problem sizes for the SpMV sweep
const SPMV_SIZES: [usize; 3] = [500, 1000, 2000];

/// Problem sizes for the dense baseline sweep
const DENSE_SIZES: [usize; 3] = [64, 128, 256];

/// Timed repetitions for the dense baseline
const DENSE_RUNS: usize = 3;

fn main() {
    println!("--- SpMV Benchmark: sequential vs parallel CSR kernels ---");

    let config = BenchConfig::default();
    println!(
        "Runs per kernel: {} | Exclusion density: {} | Workers: {}",
        config.runs, config.density, config.n_threads
    );
    println!("---------------------------------------------------------");

    for &n in &SPMV_SIZES {
        let result = run_benchmark(n, &config);
        println!("{}", result);
        println!("---------------------------------------------------------");
    }

    println!("--- Dense Matrix Multiplication Baseline ---");

    for &n in &DENSE_SIZES {
        let avg = run_dense_benchmark(n, DENSE_RUNS);
        println!("Dense N={} Average Time: {:.6} s", n, avg);
        println!("---------------------------------------------------------");
    }
}
