//! Matrix decompositions.
//!
//! | Decomposition | Module  | Factorization |
//! |---------------|---------|---------------|
//! | LU            | [`lu`]  | `PA = LU`     |

pub mod lu;

pub use lu::LuDecomposition;
