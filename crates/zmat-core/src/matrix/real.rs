//! Real-valued companion matrix.

use crate::error::{CoreError, Result};

/// A dense row-major matrix of `f64`.
///
/// Only the pieces the complex kernels need are provided: construction,
/// shape queries and element access.
#[derive(Debug, Clone, PartialEq)]
pub struct RealMatrix {
    data: Vec<f64>,
    num_rows: usize,
    num_cols: usize,
}

impl RealMatrix {
    /// Create a zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            num_rows: rows,
            num_cols: cols,
        }
    }

    /// Wrap a row-major buffer of exactly `rows * cols` values.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(CoreError::InvalidDimension {
                rows,
                cols,
                reason: "data length does not equal rows * cols",
            });
        }
        Ok(Self {
            data,
            num_rows: rows,
            num_cols: cols,
        })
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.num_rows, self.num_cols]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// The element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(CoreError::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            });
        }
        Ok(self.data[row * self.num_cols + col])
    }

    /// Set the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(CoreError::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            });
        }
        self.data[row * self.num_cols + col] = value;
        Ok(())
    }
}
