//! Compressed Sparse Row (CSR) matrix format implementation

use std::fmt;
use std::mem;
use num_traits::Num;

/// A square sparse matrix in Compressed Sparse Row (CSR) format
///
/// The CSR format stores a sparse matrix using three arrays:
/// - row_ptr: Array of size n + 1 containing indices into col_idx and values arrays
/// - col_idx: Array of size nnz containing column indices of non-zero elements
/// - values: Array of size nnz containing the non-zero values
///
/// The benchmark only ever works with square matrices, so a single dimension
/// field is carried instead of separate row/column counts.
#[derive(Clone)]
pub struct CsrMatrix<T> {
    /// Number of rows and columns in the matrix
    pub n: usize,

    /// Row pointers (size: n + 1)
    /// row_ptr[i] is the index in col_idx and values where row i starts
    /// row_ptr[n] is equal to nnz
    pub row_ptr: Vec<usize>,

    /// Column indices (size: nnz)
    pub col_idx: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> CsrMatrix<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR matrix with the given dimension and data
    ///
    /// # Arguments
    ///
    /// * `n` - Number of rows (and columns)
    /// * `row_ptr` - Row pointers
    /// * `col_idx` - Column indices
    /// * `values` - Non-zero values
    ///
    /// # Panics
    ///
    /// Panics if the input arrays are inconsistent:
    /// - row_ptr.len() must be n + 1
    /// - row_ptr[0] must be 0 and row_ptr must be non-decreasing
    /// - col_idx.len() must equal values.len()
    /// - row_ptr[n] must equal col_idx.len()
    /// - every column index must be below n
    ///
    /// Column indices within a row are not required to be sorted.
    pub fn new(n: usize, row_ptr: Vec<usize>, col_idx: Vec<usize>, values: Vec<T>) -> Self {
        assert_eq!(row_ptr.len(), n + 1, "row_ptr.len() must be n + 1");
        assert_eq!(row_ptr[0], 0, "row_ptr[0] must be 0");
        assert_eq!(col_idx.len(), values.len(), "col_idx.len() must equal values.len()");
        assert_eq!(
            row_ptr[n],
            col_idx.len(),
            "row_ptr[n] must equal col_idx.len()"
        );

        for window in row_ptr.windows(2) {
            assert!(window[0] <= window[1], "row_ptr must be non-decreasing");
        }

        for &col in &col_idx {
            assert!(col < n, "Column index {} out of bounds (n = {})", col, n);
        }

        Self {
            n,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the non-zero elements in row i
    ///
    /// Each item is a tuple (col_idx, value) representing a non-zero element
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_idx[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }

    /// Creates an empty matrix with the given dimension
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            row_ptr: vec![0; n + 1],
            col_idx: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let row_ptr = (0..=n).collect();
        let col_idx = (0..n).collect();
        let values = vec![T::one(); n];

        Self {
            n,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Returns the number of bytes held by the three backing arrays
    ///
    /// This is the matrix's own footprint as reported by the benchmark harness,
    /// on top of whatever net process-memory delta the timed section produced.
    pub fn memory_footprint_bytes(&self) -> usize {
        self.values.len() * mem::size_of::<T>()
            + self.col_idx.len() * mem::size_of::<usize>()
            + self.row_ptr.len() * mem::size_of::<usize>()
    }
}

impl<T: fmt::Debug + Copy + Num> fmt::Debug for CsrMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CsrMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n, self.n)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(self.n);

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let start = self.row_ptr[i];
                let end = self.row_ptr[i + 1];

                if start == end {
                    writeln!(f, "(empty)")?;
                } else {
                    let max_elements = 5.min(end - start);

                    for j in start..(start + max_elements) {
                        write!(f, "({}, {:?}) ", self.col_idx[j], self.values[j])?;
                    }

                    if end - start > max_elements {
                        write!(f, "... ({} more)", end - start - max_elements)?;
                    }

                    writeln!(f)?;
                }
            }

            if self.n > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix() {
        let matrix = CsrMatrix::new(
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );

        assert_eq!(matrix.n, 3);
        assert_eq!(matrix.nnz(), 5);
    }

    #[test]
    fn test_row_iter() {
        let matrix = CsrMatrix::new(
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );

        let row0: Vec<_> = matrix.row_iter(0).collect();
        assert_eq!(row0, vec![(0, &1), (1, &2)]);

        let row1: Vec<_> = matrix.row_iter(1).collect();
        assert_eq!(row1, vec![(1, &3)]);

        let row2: Vec<_> = matrix.row_iter(2).collect();
        assert_eq!(row2, vec![(0, &4), (2, &5)]);
    }

    #[test]
    fn test_zeros_has_empty_rows() {
        let matrix = CsrMatrix::<f64>::zeros(4);

        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.row_ptr, vec![0, 0, 0, 0, 0]);
        for i in 0..4 {
            assert_eq!(matrix.row_iter(i).count(), 0);
        }
    }

    #[test]
    fn test_identity() {
        let identity = CsrMatrix::<i32>::identity(3);

        assert_eq!(identity.n, 3);
        assert_eq!(identity.nnz(), 3);

        assert_eq!(identity.row_ptr, vec![0, 1, 2, 3]);
        assert_eq!(identity.col_idx, vec![0, 1, 2]);
        assert_eq!(identity.values, vec![1, 1, 1]);
    }

    #[test]
    fn test_memory_footprint() {
        let matrix = CsrMatrix::new(
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1.0f64, 2.0, 3.0, 4.0, 5.0],
        );

        let expected =
            5 * mem::size_of::<f64>() + 5 * mem::size_of::<usize>() + 4 * mem::size_of::<usize>();
        assert_eq!(matrix.memory_footprint_bytes(), expected);
    }

    #[test]
    #[should_panic(expected = "row_ptr.len() must be n + 1")]
    fn test_invalid_row_ptr() {
        CsrMatrix::new(
            3,
            vec![0, 2, 3], // Missing last element
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );
    }

    #[test]
    #[should_panic(expected = "row_ptr must be non-decreasing")]
    fn test_decreasing_row_ptr() {
        CsrMatrix::new(
            3,
            vec![0, 3, 2, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4, 5],
        );
    }

    #[test]
    #[should_panic(expected = "col_idx.len() must equal values.len()")]
    fn test_inconsistent_lengths() {
        CsrMatrix::new(
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![1, 2, 3, 4], // Missing last element
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_column_out_of_bounds() {
        CsrMatrix::new(
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 3], // 3 >= n
            vec![1, 2, 3, 4, 5],
        );
    }
}
