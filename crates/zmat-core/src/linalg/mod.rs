//! Linear algebra on complex matrices.
//!
//! All routines are implemented from scratch on interleaved storage; there
//! are no external BLAS/LAPACK bindings.
//!
//! | Area | Operations | Complexity |
//! |------|-----------|------------|
//! | Multiply | [`mult()`], [`mult_scaled`], [`mult_add`], [`mult_add_scaled`] | O(n^3) |
//! | Transpose | [`transpose()`], [`transpose_in_place`] | O(n^2) |
//! | Systems | [`solve`], [`invert`], [`invert_in_place`], [`det`] | O(n^3) |
//!
//! Decompositions: [`LuDecomposition`]. Reusable solvers live in
//! [`linsol`].

pub mod decomp;
pub mod linsol;
pub mod mult;
pub mod transpose;

pub use decomp::LuDecomposition;
pub use linsol::{LinearSolver, LinearSolverLu, SafeSolver, linear};
pub use mult::{mult, mult_add, mult_add_scaled, mult_scaled};
pub use transpose::{transpose, transpose_in_place};

use crate::complex::Complex64;
use crate::error::{CoreError, Result};
use crate::matrix::CMatrix;

/// Solve `A X = B` for a square matrix `A`, writing into `x`.
///
/// `a` and `b` are left untouched. Uses the solver from [`linear`] behind a
/// [`SafeSolver`].
///
/// ```
/// # use zmat_core::matrix::CMatrix;
/// # use zmat_core::linalg;
/// // [[2, 1], [1, 4]] x = [5, 6]  ->  x = [2, 1]
/// let a = CMatrix::from_interleaved(vec![2.0, 0.0, 1.0, 0.0, 1.0, 0.0, 4.0, 0.0], 2, 2).unwrap();
/// let b = CMatrix::from_interleaved(vec![5.0, 0.0, 6.0, 0.0], 2, 1).unwrap();
/// let mut x = CMatrix::new(2, 1);
/// linalg::solve(&a, &b, &mut x).unwrap();
/// assert!((x.get_real(0, 0).unwrap() - 2.0).abs() < 1e-10);
/// assert!((x.get_real(1, 0).unwrap() - 1.0).abs() < 1e-10);
/// ```
pub fn solve(a: &CMatrix, b: &CMatrix, x: &mut CMatrix) -> Result<()> {
    let mut solver = SafeSolver::new(linear(a.num_rows()));
    solver.set_a_from(a)?;
    solver.solve_from(b, x)
}

/// Write the inverse of `input` into `output`.
///
/// Returns [`CoreError::SingularMatrix`] if the matrix is singular and
/// [`CoreError::DimensionMismatch`] if `output` is not the same shape as
/// `input`.
///
/// ```
/// # use zmat_core::matrix::CMatrix;
/// # use zmat_core::linalg;
/// let a = CMatrix::from_interleaved(vec![0.0, 2.0], 1, 1).unwrap();
/// let mut inv = CMatrix::new(1, 1);
/// linalg::invert(&a, &mut inv).unwrap();
/// // 1 / 2i = -0.5i
/// assert!((inv.get_imag(0, 0).unwrap() + 0.5).abs() < 1e-12);
/// ```
pub fn invert(input: &CMatrix, output: &mut CMatrix) -> Result<()> {
    let mut solver = SafeSolver::new(linear(input.num_rows()));
    solver.set_a_from(input)?;
    solver.invert(output)
}

/// Replace `a` with its inverse.
///
/// `a` is left unchanged when the matrix is singular.
pub fn invert_in_place(a: &mut CMatrix) -> Result<()> {
    let lu = LuDecomposition::decompose(a)?;
    lu.inverse_into(a)
}

/// Compute the determinant of a square matrix.
///
/// A singular matrix has determinant zero, so a failed factorization yields
/// `0` rather than an error. Use [`try_det`] to tell the two apart.
///
/// ```
/// # use zmat_core::matrix::CMatrix;
/// # use zmat_core::linalg;
/// let a = CMatrix::from_interleaved(vec![1.0, 0.0, 2.0, 0.0, 2.0, 0.0, 4.0, 0.0], 2, 2).unwrap();
/// assert_eq!(linalg::det(&a).unwrap().re, 0.0);
/// ```
pub fn det(mat: &CMatrix) -> Result<Complex64> {
    match try_det(mat) {
        Err(CoreError::SingularMatrix) => Ok(Complex64::new(0.0, 0.0)),
        other => other,
    }
}

/// Like [`det`] but reports a singular matrix as
/// [`CoreError::SingularMatrix`].
pub fn try_det(mat: &CMatrix) -> Result<Complex64> {
    Ok(LuDecomposition::decompose(mat)?.det())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::ops;
    use approx::assert_abs_diff_eq;

    fn a3() -> CMatrix {
        CMatrix::from_fn(3, 3, |i, j| {
            Complex64::new((i + 2 * j) as f64 % 4.0, if i == j { 2.0 } else { -0.5 })
        })
    }

    fn assert_identity(m: &CMatrix, tol: f64) {
        let eye = CMatrix::identity(m.num_rows());
        for (p, q) in m.as_slice().iter().zip(eye.as_slice()) {
            assert_abs_diff_eq!(*p, *q, epsilon = tol);
        }
    }

    #[test]
    fn test_solve_preserves_inputs() {
        let a = a3();
        let b = CMatrix::from_fn(3, 2, |i, j| Complex64::new(1.0 + i as f64, j as f64));
        let (a0, b0) = (a.clone(), b.clone());
        let mut x = CMatrix::new(3, 2);
        solve(&a, &b, &mut x).unwrap();
        assert_eq!(a, a0);
        assert_eq!(b, b0);
        let ax = a.matmul(&x).unwrap();
        for (p, q) in ax.as_slice().iter().zip(b.as_slice()) {
            assert_abs_diff_eq!(*p, *q, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_solve_not_square() {
        let a = CMatrix::new(2, 3);
        let b = CMatrix::new(2, 1);
        let mut x = CMatrix::new(3, 1);
        assert!(matches!(
            solve(&a, &b, &mut x),
            Err(CoreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_invert() {
        let a = a3();
        let mut inv = CMatrix::new(3, 3);
        invert(&a, &mut inv).unwrap();
        assert_identity(&a.matmul(&inv).unwrap(), 1e-10);
        assert_identity(&inv.matmul(&a).unwrap(), 1e-10);
    }

    #[test]
    fn test_invert_wrong_output() {
        let mut inv = CMatrix::new(2, 2);
        assert!(matches!(
            invert(&a3(), &mut inv),
            Err(CoreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_invert_in_place() {
        let a = a3();
        let mut m = a.clone();
        invert_in_place(&mut m).unwrap();
        assert_identity(&a.matmul(&m).unwrap(), 1e-10);
    }

    #[test]
    fn test_invert_in_place_singular_untouched() {
        let mut m = CMatrix::from_interleaved(vec![1.0, 0.0, 2.0, 0.0, 2.0, 0.0, 4.0, 0.0], 2, 2)
            .unwrap();
        let before = m.clone();
        assert_eq!(invert_in_place(&mut m), Err(CoreError::SingularMatrix));
        assert_eq!(m, before);
    }

    #[test]
    fn test_invert_singular() {
        let a = CMatrix::new(3, 3);
        let mut inv = CMatrix::new(3, 3);
        assert_eq!(invert(&a, &mut inv), Err(CoreError::SingularMatrix));
    }

    #[test]
    fn test_det_diag() {
        let a = ops::diag(&[1.0, 0.0, 2.0, 0.0]).unwrap();
        assert_eq!(det(&a).unwrap(), Complex64::new(2.0, 0.0));
    }

    #[test]
    fn test_det_singular_is_zero() {
        let a = CMatrix::from_interleaved(vec![1.0, 0.0, 2.0, 0.0, 2.0, 0.0, 4.0, 0.0], 2, 2)
            .unwrap();
        assert_eq!(det(&a).unwrap(), Complex64::new(0.0, 0.0));
        assert_eq!(try_det(&a), Err(CoreError::SingularMatrix));
    }

    #[test]
    fn test_det_not_square() {
        assert!(matches!(
            det(&CMatrix::new(3, 2)),
            Err(CoreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_det_of_product() {
        // det(AB) = det(A) det(B)
        let a = a3();
        let b = a3().transposed();
        let ab = a.matmul(&b).unwrap();
        let lhs = det(&ab).unwrap();
        let rhs = det(&a).unwrap() * det(&b).unwrap();
        assert_abs_diff_eq!(lhs.re, rhs.re, epsilon = 1e-9);
        assert_abs_diff_eq!(lhs.im, rhs.im, epsilon = 1e-9);
    }
}
