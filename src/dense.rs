//! Dense matrix-multiplication reference baseline
//!
//! The classic i-j-k triple loop the original benchmark scripts used. It has
//! no structural cleverness on purpose: it exists so the sparse kernels'
//! numbers can be read against a familiar dense workload.

use ndarray::Array2;
use rand::Rng;

/// Generates a random n × n dense matrix with uniform entries in [0, 1)
pub fn random_dense<R: Rng>(n: usize, rng: &mut R) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |_| rng.gen::<f64>())
}

/// Computes C = A·B with the classic i-j-k loop order
///
/// # Panics
///
/// Panics if the matrices are not square with matching dimensions.
pub fn multiply_matrices(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    let n = a.nrows();
    assert_eq!(a.ncols(), n, "left matrix must be square");
    assert_eq!(b.nrows(), n, "matrix dimensions must match");
    assert_eq!(b.ncols(), n, "right matrix must be square");

    let mut c = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[[i, k]] * b[[k, j]];
            }
            c[[i, j]] = sum;
        }
    }
    c
}

/// Times `runs` multiplications of freshly generated n × n matrices and
/// returns the mean seconds per multiplication
///
/// Mirrors the reference scripts: generation stays outside the clocked
/// region and there is no warm-up pass.
pub fn run_dense_benchmark(n: usize, runs: usize) -> f64 {
    assert!(runs > 0, "benchmark needs at least one run");

    let mut rng = rand::thread_rng();
    let a = random_dense(n, &mut rng);
    let b = random_dense(n, &mut rng);

    let mut total = std::time::Duration::ZERO;
    for _ in 0..runs {
        let start = std::time::Instant::now();
        let c = multiply_matrices(&a, &b);
        total += start.elapsed();
        std::hint::black_box(c);
    }

    total.as_secs_f64() / runs as f64
}
