//! Dense complex matrix with interleaved row-major storage.
//!
//! A [`CMatrix`] stores an `R x C` matrix of complex doubles in one flat
//! `Vec<f64>`, alternating real and imaginary parts:
//!
//! ```text
//! [re(0,0), im(0,0), re(0,1), im(0,1), ..., re(1,0), im(1,0), ...]
//! ```
//!
//! Row `i` starts at `i * row_stride`. For a freshly allocated matrix the
//! stride is exactly `2 * num_cols`; a matrix wrapping an existing buffer may
//! use a wider stride, in which case the gap at the end of each row is never
//! read or written by the kernels.
//!
//! [`RealMatrix`] is the real-valued companion used as the output of
//! [`strip_real`](crate::ops::strip_real), [`magnitude`](crate::ops::magnitude)
//! and friends.

mod create;
mod display;
mod indexing;
mod real;
mod reshape;

pub use real::RealMatrix;

use crate::error::{CoreError, Result};

/// A dense matrix of complex `f64` values.
///
/// The matrix owns its backing vector and cloning performs a deep copy.
#[derive(Debug, Clone, Default)]
pub struct CMatrix {
    data: Vec<f64>,
    num_rows: usize,
    num_cols: usize,
    row_stride: usize,
}

impl CMatrix {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Wrap an interleaved `(re, im)` buffer of exactly `2 * rows * cols`
    /// values. The vector is taken over without copying.
    ///
    /// ```
    /// # use zmat_core::matrix::CMatrix;
    /// let m = CMatrix::from_interleaved(vec![1.0, 2.0, 3.0, 4.0], 1, 2).unwrap();
    /// assert_eq!(m.get(0, 1).unwrap().re, 3.0);
    /// ```
    pub fn from_interleaved(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() % 2 == 1 {
            return Err(CoreError::InvalidDimension {
                rows,
                cols,
                reason: "interleaved data must have an even length",
            });
        }
        if data.len() != 2 * rows * cols {
            return Err(CoreError::InvalidDimension {
                rows,
                cols,
                reason: "data length does not equal 2 * rows * cols",
            });
        }
        Ok(Self {
            data,
            num_rows: rows,
            num_cols: cols,
            row_stride: 2 * cols,
        })
    }

    /// Wrap a buffer whose rows are `row_stride` values apart.
    ///
    /// `row_stride` must be at least `2 * cols` and the buffer must hold at
    /// least `rows * row_stride` values.
    pub fn from_interleaved_with_stride(
        data: Vec<f64>,
        rows: usize,
        cols: usize,
        row_stride: usize,
    ) -> Result<Self> {
        if row_stride < 2 * cols {
            return Err(CoreError::InvalidDimension {
                rows,
                cols,
                reason: "row stride is smaller than 2 * cols",
            });
        }
        if data.len() < rows * row_stride {
            return Err(CoreError::InvalidDimension {
                rows,
                cols,
                reason: "backing data is shorter than rows * row_stride",
            });
        }
        Ok(Self {
            data,
            num_rows: rows,
            num_cols: cols,
            row_stride,
        })
    }

    /// Copy an interleaved slice into a new matrix.
    pub fn from_slice(data: &[f64], rows: usize, cols: usize) -> Result<Self> {
        Self::from_interleaved(data.to_vec(), rows, cols)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// `[num_rows, num_cols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.num_rows, self.num_cols]
    }

    /// Distance in `f64` slots between the starts of consecutive rows.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Number of complex elements, `num_rows * num_cols`.
    #[inline]
    pub fn num_elements(&self) -> usize {
        self.num_rows * self.num_cols
    }

    /// Number of `f64` slots the matrix spans, `num_rows * row_stride`.
    #[inline]
    pub fn data_length(&self) -> usize {
        self.num_rows * self.row_stride
    }

    /// Whether the matrix has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_elements() == 0
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Whether rows are packed back to back (`row_stride == 2 * num_cols`).
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.row_stride == 2 * self.num_cols
    }

    /// The `f64` slots spanned by the matrix, in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data[..self.data_length()]
    }

    /// Mutable view of the `f64` slots spanned by the matrix.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        let len = self.data_length();
        &mut self.data[..len]
    }

    /// Consume the matrix and return the backing vector.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    // ------------------------------------------------------------------
    // Row access
    // ------------------------------------------------------------------

    /// The `2 * num_cols` interleaved values of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_rows`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.num_rows, "row {i} out of bounds");
        let start = i * self.row_stride;
        &self.data[start..start + 2 * self.num_cols]
    }

    /// Mutable access to row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_rows`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(i < self.num_rows, "row {i} out of bounds");
        let start = i * self.row_stride;
        &mut self.data[start..start + 2 * self.num_cols]
    }

    /// Iterate over the rows, skipping any stride padding.
    ///
    /// Always yields `num_rows` slices, empty ones when `num_cols == 0`.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.num_rows).map(move |i| self.row(i))
    }

    /// Iterate mutably over the rows, skipping any stride padding.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [f64]> {
        let width = 2 * self.num_cols;
        let stride = self.row_stride;
        let mut remaining = self.num_rows;
        let mut rest = self.data.as_mut_slice();
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            // the last row may have no padding after it
            let step = if remaining == 0 { width } else { stride };
            let (row, tail) = std::mem::take(&mut rest).split_at_mut(step);
            rest = tail;
            Some(&mut row[..width])
        })
    }

    /// Error unless `self` and `other` have the same shape.
    pub(crate) fn check_same_shape(&self, other: [usize; 2]) -> Result<()> {
        if self.shape() != other {
            return Err(CoreError::DimensionMismatch {
                expected: self.shape().to_vec(),
                got: other.to_vec(),
            });
        }
        Ok(())
    }
}

impl PartialEq for CMatrix {
    /// Shapes and element values are compared; stride padding is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.rows().zip(other.rows()).all(|(a, b)| a == b)
    }
}
