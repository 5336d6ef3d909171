//! Element access by `(row, col)`.

use crate::complex::Complex64;
use crate::error::{CoreError, Result};

use super::CMatrix;

impl CMatrix {
    /// Offset of the real part of element `(row, col)` in the backing data.
    /// The imaginary part is at the next slot.
    ///
    /// No bounds check beyond a debug assertion; kernels that have already
    /// validated shapes use this directly.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.num_rows && col < self.num_cols);
        row * self.row_stride + 2 * col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(CoreError::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            });
        }
        Ok(self.index(row, col))
    }

    /// The element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Complex64> {
        let i = self.checked_index(row, col)?;
        Ok(Complex64::new(self.data[i], self.data[i + 1]))
    }

    /// Real part of the element at `(row, col)`.
    pub fn get_real(&self, row: usize, col: usize) -> Result<f64> {
        let i = self.checked_index(row, col)?;
        Ok(self.data[i])
    }

    /// Imaginary part of the element at `(row, col)`.
    pub fn get_imag(&self, row: usize, col: usize) -> Result<f64> {
        let i = self.checked_index(row, col)?;
        Ok(self.data[i + 1])
    }

    /// Set the element at `(row, col)` to `real + imaginary i`.
    pub fn set(&mut self, row: usize, col: usize, real: f64, imaginary: f64) -> Result<()> {
        let i = self.checked_index(row, col)?;
        self.data[i] = real;
        self.data[i + 1] = imaginary;
        Ok(())
    }

    /// Set the element at `(row, col)` from a complex value.
    pub fn set_complex(&mut self, row: usize, col: usize, value: Complex64) -> Result<()> {
        self.set(row, col, value.re, value.im)
    }
}
