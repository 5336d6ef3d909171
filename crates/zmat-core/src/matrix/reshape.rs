//! In-place shape changes and bulk copies.

use super::CMatrix;

impl CMatrix {
    /// Change the shape to `rows x cols`.
    ///
    /// The backing vector is reused when it already holds `2 * rows * cols`
    /// values and grown otherwise. Element values are not preserved in any
    /// meaningful layout; callers overwrite the matrix afterwards. The row
    /// stride becomes `2 * cols`.
    pub fn reshape(&mut self, rows: usize, cols: usize) {
        let needed = 2 * rows * cols;
        if self.data.len() < needed {
            self.data.resize(needed, 0.0);
        }
        self.num_rows = rows;
        self.num_cols = cols;
        self.row_stride = 2 * cols;
    }

    /// Make `self` a copy of `other`, reshaping as needed.
    pub fn set_from(&mut self, other: &CMatrix) {
        self.reshape(other.num_rows, other.num_cols);
        for (dst, src) in self.rows_mut().zip(other.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Set every element to zero.
    pub fn zero(&mut self) {
        for row in self.rows_mut() {
            row.fill(0.0);
        }
    }

    /// A contiguous deep copy (`row_stride == 2 * num_cols`), dropping any
    /// stride padding.
    pub fn copy(&self) -> CMatrix {
        let mut out = CMatrix::new(self.num_rows, self.num_cols);
        out.set_from(self);
        out
    }
}
