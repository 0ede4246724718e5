// Matrix data structures and generation

pub mod csr;
pub mod generate;

pub use csr::CsrMatrix;
pub use generate::{random_csr, random_vector};
