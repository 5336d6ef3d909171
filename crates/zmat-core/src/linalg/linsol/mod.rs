//! Linear solvers for `A X = B`.
//!
//! A solver is factored once with [`LinearSolver::set_a`] and can then be
//! used for any number of [`solve`](LinearSolver::solve),
//! [`invert`](LinearSolver::invert) and
//! [`determinant`](LinearSolver::determinant) calls. Calling those before a
//! successful factorization returns [`CoreError::NotFactored`].
//!
//! Implementations are allowed to use `A` and `B` as scratch space and say
//! so through [`modifies_a`](LinearSolver::modifies_a) and
//! [`modifies_b`](LinearSolver::modifies_b). Wrap a solver in
//! [`SafeSolver`] when the caller's matrices must survive.
//!
//! [`CoreError::NotFactored`]: crate::CoreError::NotFactored

mod lu;
mod safe;

pub use lu::LinearSolverLu;
pub use safe::SafeSolver;

use crate::complex::Complex64;
use crate::error::Result;
use crate::matrix::CMatrix;
use crate::params::SOLVER_SPECIALIZE_MAX;

/// Factor-once, solve-many interface over a square coefficient matrix.
pub trait LinearSolver {
    /// Factor `a`. On failure the solver returns to the unfactored state.
    ///
    /// Returns [`SingularMatrix`](crate::CoreError::SingularMatrix) when
    /// `a` cannot be factored. Success does not imply a well-conditioned
    /// matrix; check [`quality`](Self::quality).
    fn set_a(&mut self, a: &mut CMatrix) -> Result<()>;

    /// Solve `A X = B` for every column of `b`, writing into `x`.
    fn solve(&mut self, b: &mut CMatrix, x: &mut CMatrix) -> Result<()>;

    /// Write `A^-1` into `a_inv`, which must be `n x n`.
    fn invert(&mut self, a_inv: &mut CMatrix) -> Result<()>;

    /// Determinant of the factored matrix.
    fn determinant(&self) -> Result<Complex64>;

    /// Conditioning indicator in `[0, 1]`; `0` when unfactored.
    fn quality(&self) -> f64;

    /// Whether [`set_a`](Self::set_a) may overwrite its argument.
    fn modifies_a(&self) -> bool;

    /// Whether [`solve`](Self::solve) may overwrite `b`.
    fn modifies_b(&self) -> bool;
}

impl<S: LinearSolver + ?Sized> LinearSolver for Box<S> {
    fn set_a(&mut self, a: &mut CMatrix) -> Result<()> {
        (**self).set_a(a)
    }

    fn solve(&mut self, b: &mut CMatrix, x: &mut CMatrix) -> Result<()> {
        (**self).solve(b, x)
    }

    fn invert(&mut self, a_inv: &mut CMatrix) -> Result<()> {
        (**self).invert(a_inv)
    }

    fn determinant(&self) -> Result<Complex64> {
        (**self).determinant()
    }

    fn quality(&self) -> f64 {
        (**self).quality()
    }

    fn modifies_a(&self) -> bool {
        (**self).modifies_a()
    }

    fn modifies_b(&self) -> bool {
        (**self).modifies_b()
    }
}

/// Pick a general-purpose solver for an `num_rows x num_rows` system.
///
/// Sizes up to [`SOLVER_SPECIALIZE_MAX`] are where fixed-size solvers would
/// be dispatched; none ship with this crate, so every size gets
/// [`LinearSolverLu`].
///
/// ```
/// # use zmat_core::matrix::CMatrix;
/// # use zmat_core::linalg::linsol::{linear, LinearSolver};
/// let mut solver = linear(2);
/// let mut a = CMatrix::identity(2);
/// solver.set_a(&mut a).unwrap();
/// assert_eq!(solver.quality(), 1.0);
/// ```
pub fn linear(num_rows: usize) -> Box<dyn LinearSolver> {
    log::debug!(
        "linear solver for {num_rows}x{num_rows}: general LU (specialized up to {SOLVER_SPECIALIZE_MAX})"
    );
    Box::new(LinearSolverLu::new())
}
