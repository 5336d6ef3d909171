//! Matrix creation functions.

use crate::complex::Complex64;

use super::CMatrix;

impl CMatrix {
    /// Create a zero-filled `rows x cols` matrix.
    ///
    /// ```
    /// # use zmat_core::matrix::CMatrix;
    /// let m = CMatrix::new(2, 3);
    /// assert_eq!(m.shape(), [2, 3]);
    /// assert!(m.as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; 2 * rows * cols],
            num_rows: rows,
            num_cols: cols,
            row_stride: 2 * cols,
        }
    }

    /// Create a matrix with every element set to `value`.
    pub fn full(rows: usize, cols: usize, value: Complex64) -> Self {
        let mut data = Vec::with_capacity(2 * rows * cols);
        for _ in 0..rows * cols {
            data.push(value.re);
            data.push(value.im);
        }
        Self {
            data,
            num_rows: rows,
            num_cols: cols,
            row_stride: 2 * cols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// # use zmat_core::matrix::CMatrix;
    /// let eye = CMatrix::identity(3);
    /// assert_eq!(eye.get(1, 1).unwrap().re, 1.0);
    /// assert_eq!(eye.get(0, 1).unwrap().re, 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        let stride = m.row_stride;
        for i in 0..n {
            m.data[i * stride + 2 * i] = 1.0;
        }
        m
    }

    /// Build a matrix by evaluating `f(row, col)` for every element.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Complex64,
    {
        let mut data = Vec::with_capacity(2 * rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let v = f(i, j);
                data.push(v.re);
                data.push(v.im);
            }
        }
        Self {
            data,
            num_rows: rows,
            num_cols: cols,
            row_stride: 2 * cols,
        }
    }

    /// Build a matrix from complex values listed in row-major order.
    ///
    /// Returns an error if `values.len() != rows * cols`.
    pub fn from_complex(values: &[Complex64], rows: usize, cols: usize) -> crate::Result<Self> {
        let data = values.iter().flat_map(|v| [v.re, v.im]).collect();
        Self::from_interleaved(data, rows, cols)
    }
}
