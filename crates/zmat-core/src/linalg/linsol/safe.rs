//! Input-preserving wrapper around any [`LinearSolver`].

use super::LinearSolver;
use crate::complex::Complex64;
use crate::error::Result;
use crate::matrix::CMatrix;

/// Guarantees that the caller's `A` and `B` are never modified.
///
/// Through the [`LinearSolver`] impl, `a` is copied into a scratch matrix
/// owned by the wrapper only when the inner solver reports
/// [`modifies_a`](LinearSolver::modifies_a), and `b` only when it reports
/// [`modifies_b`](LinearSolver::modifies_b). Otherwise the caller's matrix
/// is handed straight through. The wrapper itself reports `false` for both.
///
/// [`set_a_from`](Self::set_a_from) and [`solve_from`](Self::solve_from)
/// accept shared references. They stage the input in scratch once and give
/// that copy to the inner solver.
///
/// ```
/// # use zmat_core::matrix::CMatrix;
/// # use zmat_core::linalg::linsol::{linear, SafeSolver};
/// let a = CMatrix::identity(3);
/// let b = CMatrix::new(3, 1);
/// let mut x = CMatrix::new(3, 1);
/// let mut solver = SafeSolver::new(linear(3));
/// solver.set_a_from(&a).unwrap();
/// solver.solve_from(&b, &mut x).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SafeSolver<S> {
    inner: S,
    a_copy: Option<CMatrix>,
    b_copy: Option<CMatrix>,
}

impl<S: LinearSolver> SafeSolver<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            a_copy: None,
            b_copy: None,
        }
    }

    /// Factor a copy of `a`.
    pub fn set_a_from(&mut self, a: &CMatrix) -> Result<()> {
        let scratch = reuse(&mut self.a_copy, a);
        self.inner.set_a(scratch)
    }

    /// Solve `A X = B` against a copy of `b`.
    pub fn solve_from(&mut self, b: &CMatrix, x: &mut CMatrix) -> Result<()> {
        let scratch = reuse(&mut self.b_copy, b);
        self.inner.solve(scratch, x)
    }

    /// The wrapped solver.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: LinearSolver> LinearSolver for SafeSolver<S> {
    fn set_a(&mut self, a: &mut CMatrix) -> Result<()> {
        if self.inner.modifies_a() {
            let scratch = reuse(&mut self.a_copy, a);
            self.inner.set_a(scratch)
        } else {
            self.inner.set_a(a)
        }
    }

    fn solve(&mut self, b: &mut CMatrix, x: &mut CMatrix) -> Result<()> {
        if self.inner.modifies_b() {
            let scratch = reuse(&mut self.b_copy, b);
            self.inner.solve(scratch, x)
        } else {
            self.inner.solve(b, x)
        }
    }

    fn invert(&mut self, a_inv: &mut CMatrix) -> Result<()> {
        self.inner.invert(a_inv)
    }

    fn determinant(&self) -> Result<Complex64> {
        self.inner.determinant()
    }

    fn quality(&self) -> f64 {
        self.inner.quality()
    }

    fn modifies_a(&self) -> bool {
        false
    }

    fn modifies_b(&self) -> bool {
        false
    }
}

/// Copy `src` into the scratch slot, growing it only when needed.
fn reuse<'a>(slot: &'a mut Option<CMatrix>, src: &CMatrix) -> &'a mut CMatrix {
    let scratch = slot.get_or_insert_with(CMatrix::default);
    scratch.set_from(src);
    scratch
}
