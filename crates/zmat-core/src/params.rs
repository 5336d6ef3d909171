//! Tuning parameters shared by the kernels and the solver factory.
//!
//! These are compile-time constants: the crate reads no environment
//! variables or configuration files.

/// Number of columns in `b` at or above which complex matrix multiplication
/// switches from the small triple loop to the row-reordered kernel.
pub const CMULT_COLUMN_SWITCH: usize = 7;

/// Largest system size for which [`linear`](crate::linalg::linsol::linear)
/// would hand out a fixed-size specialized solver.
///
/// No specializations ship with this crate, so every size maps to the
/// general LU solver.
pub const SOLVER_SPECIALIZE_MAX: usize = 0;

/// The two matrix-multiply algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultAlgorithm {
    /// Plain `ijk` triple loop. Lowest setup cost, best for narrow `b`.
    Small,
    /// `ikj` order that streams rows of `b` and `c` for cache locality.
    Reorder,
}

impl MultAlgorithm {
    /// Pick the algorithm for a right-hand operand with `b_cols` columns.
    ///
    /// ```
    /// # use zmat_core::params::{MultAlgorithm, CMULT_COLUMN_SWITCH};
    /// assert_eq!(MultAlgorithm::select(1), MultAlgorithm::Small);
    /// assert_eq!(MultAlgorithm::select(CMULT_COLUMN_SWITCH), MultAlgorithm::Reorder);
    /// ```
    #[inline]
    pub fn select(b_cols: usize) -> Self {
        if b_cols >= CMULT_COLUMN_SWITCH {
            Self::Reorder
        } else {
            Self::Small
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_threshold() {
        assert_eq!(MultAlgorithm::select(0), MultAlgorithm::Small);
        assert_eq!(
            MultAlgorithm::select(CMULT_COLUMN_SWITCH - 1),
            MultAlgorithm::Small
        );
        assert_eq!(
            MultAlgorithm::select(CMULT_COLUMN_SWITCH),
            MultAlgorithm::Reorder
        );
        assert_eq!(MultAlgorithm::select(500), MultAlgorithm::Reorder);
    }
}
