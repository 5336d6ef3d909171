//! `zmat-core` — Dense complex matrix kernels.
//!
//! Provides interleaved complex matrix storage, element-wise operations,
//! matrix multiply and transpose kernels, and an LU-backed linear solver
//! family for square systems.
//!
//! # Design
//!
//! - Complex values are stored interleaved (`re, im, re, im, ...`) in row
//!   major order with an explicit row stride.
//! - Kernels write into caller-supplied outputs; operations that would
//!   alias an input with an output come as separate `_in_place` functions.
//! - Shape mismatches are reported as [`CoreError`] values, never panics.
//! - No `unsafe`.

pub mod complex;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod ops;
pub mod params;

// Re-export key types at crate root for convenience.
pub use complex::Complex64;
pub use error::{CoreError, Result};
pub use matrix::{CMatrix, RealMatrix};

/// Items intended for glob-import: `use zmat_core::prelude::*;`
pub mod prelude {
    pub use crate::complex::Complex64;
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::{LinearSolver, LinearSolverLu, LuDecomposition, SafeSolver};
    pub use crate::matrix::{CMatrix, RealMatrix};
}
