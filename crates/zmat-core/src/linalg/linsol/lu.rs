//! LU-backed implementation of [`LinearSolver`].

use super::LinearSolver;
use crate::complex::Complex64;
use crate::error::{CoreError, Result};
use crate::linalg::decomp::LuDecomposition;
use crate::linalg::decomp::lu::check_square;
use crate::matrix::CMatrix;

/// General square solver built on [`LuDecomposition`].
///
/// Starts unfactored. A successful [`set_a`](LinearSolver::set_a) stores
/// the factorization, a failed one drops any previous factorization.
///
/// `set_a` takes over the storage of a square `a` and factors it in place,
/// leaving `a` as an empty `0 x 0` matrix. A non-square `a` is rejected
/// before anything is taken. `b` is never modified.
#[derive(Debug, Clone, Default)]
pub struct LinearSolverLu {
    decomposition: Option<LuDecomposition>,
}

impl LinearSolverLu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a factorization is currently held.
    pub fn is_factored(&self) -> bool {
        self.decomposition.is_some()
    }

    /// The current factorization, if any.
    pub fn decomposition(&self) -> Option<&LuDecomposition> {
        self.decomposition.as_ref()
    }

    fn factored(&self) -> Result<&LuDecomposition> {
        self.decomposition.as_ref().ok_or(CoreError::NotFactored)
    }
}

impl LinearSolver for LinearSolverLu {
    fn set_a(&mut self, a: &mut CMatrix) -> Result<()> {
        self.decomposition = None;
        check_square(a)?;
        let owned = std::mem::take(a);
        self.decomposition = Some(LuDecomposition::decompose_owned(owned)?);
        Ok(())
    }

    fn solve(&mut self, b: &mut CMatrix, x: &mut CMatrix) -> Result<()> {
        self.factored()?.solve(b, x)
    }

    fn invert(&mut self, a_inv: &mut CMatrix) -> Result<()> {
        self.factored()?.inverse_into(a_inv)
    }

    fn determinant(&self) -> Result<Complex64> {
        Ok(self.factored()?.det())
    }

    fn quality(&self) -> f64 {
        self.decomposition
            .as_ref()
            .map_or(0.0, LuDecomposition::quality)
    }

    fn modifies_a(&self) -> bool {
        true
    }

    fn modifies_b(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn a2() -> CMatrix {
        // [[1+i, 2], [3, 4-i]]
        CMatrix::from_interleaved(vec![1.0, 1.0, 2.0, 0.0, 3.0, 0.0, 4.0, -1.0], 2, 2).unwrap()
    }

    #[test]
    fn test_unfactored_errors() {
        let mut solver = LinearSolverLu::new();
        let mut b = CMatrix::new(2, 1);
        let mut x = CMatrix::new(2, 1);
        assert_eq!(solver.solve(&mut b, &mut x), Err(CoreError::NotFactored));
        assert_eq!(
            solver.invert(&mut CMatrix::new(2, 2)),
            Err(CoreError::NotFactored)
        );
        assert_eq!(solver.determinant(), Err(CoreError::NotFactored));
        assert_eq!(solver.quality(), 0.0);
    }

    #[test]
    fn test_factor_solve_many() {
        let a = a2();
        let mut solver = LinearSolverLu::new();
        solver.set_a(&mut a.clone()).unwrap();
        assert!(solver.is_factored());
        for k in 0..3 {
            let mut b = CMatrix::from_fn(2, 1, |i, _| Complex64::new(k as f64, i as f64));
            let expected = b.clone();
            let mut x = CMatrix::new(2, 1);
            solver.solve(&mut b, &mut x).unwrap();
            let ax = a.matmul(&x).unwrap();
            for (p, q) in ax.as_slice().iter().zip(expected.as_slice()) {
                assert_abs_diff_eq!(*p, *q, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_set_a_takes_storage() {
        let mut a = a2();
        let mut solver = LinearSolverLu::new();
        assert!(solver.modifies_a());
        assert!(!solver.modifies_b());
        solver.set_a(&mut a).unwrap();
        assert_eq!(a.shape(), [0, 0]);
        let d = solver.determinant().unwrap();
        assert_abs_diff_eq!(d.re, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_set_a_not_square_keeps_input() {
        let mut a = CMatrix::new(2, 3);
        let mut solver = LinearSolverLu::new();
        assert!(matches!(
            solver.set_a(&mut a),
            Err(CoreError::DimensionMismatch { .. })
        ));
        assert_eq!(a.shape(), [2, 3]);
    }

    #[test]
    fn test_failed_factor_resets() {
        let mut solver = LinearSolverLu::new();
        solver.set_a(&mut a2()).unwrap();
        let mut singular =
            CMatrix::from_interleaved(vec![1.0, 0.0, 2.0, 0.0, 2.0, 0.0, 4.0, 0.0], 2, 2).unwrap();
        assert_eq!(solver.set_a(&mut singular), Err(CoreError::SingularMatrix));
        assert!(!solver.is_factored());
        assert_eq!(solver.determinant(), Err(CoreError::NotFactored));
    }

    #[test]
    fn test_invert_and_determinant() {
        let mut solver = LinearSolverLu::new();
        solver.set_a(&mut a2()).unwrap();
        let d = solver.determinant().unwrap();
        assert_abs_diff_eq!(d.re, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.im, 3.0, epsilon = 1e-12);

        let mut inv = CMatrix::new(2, 2);
        solver.invert(&mut inv).unwrap();
        let eye = a2().matmul(&inv).unwrap();
        for (p, q) in eye.as_slice().iter().zip(CMatrix::identity(2).as_slice()) {
            assert_abs_diff_eq!(*p, *q, epsilon = 1e-12);
        }
        assert!(solver.quality() > 0.0);
    }
}
