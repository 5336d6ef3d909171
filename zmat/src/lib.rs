//! # zmat
//!
//! Dense linear algebra over complex double-precision matrices, implemented
//! in pure Rust with no native BLAS/LAPACK dependency.
//!
//! One `use zmat::prelude::*;` gives you the interleaved complex matrix type,
//! the element-wise and multiply kernels, and the LU-backed solvers.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Complex matrix storage, kernels, LU solvers |

#[cfg(feature = "core")]
pub use zmat_core as core;

/// Glob-import convenience: `use zmat::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use zmat_core::prelude::*;
}
