use thiserror::Error;

/// All errors returned by `zmat-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Operand shapes do not match the required layout.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A matrix could not be built or reshaped with the requested layout.
    #[error("invalid dimension {rows}x{cols}: {reason}")]
    InvalidDimension {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// An element index lies outside the matrix.
    #[error("index ({row}, {col}) out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        shape: [usize; 2],
    },

    /// Matrix is singular and cannot be inverted / decomposed.
    #[error("singular matrix")]
    SingularMatrix,

    /// A solve or invert was requested before a successful factorization.
    #[error("linear solver has no factorization; call set_a first")]
    NotFactored,

    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

/// Convenience alias used throughout `zmat-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
