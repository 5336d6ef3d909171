//! LU decomposition with partial pivoting over the complex field.
//!
//! Decomposes a square matrix `A` into `PA = LU` where:
//! - `P` is a permutation matrix (stored as a pivot vector)
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular
//!
//! Pivot rows are chosen by largest squared magnitude `re^2 + im^2` in the
//! current column. All divisions go through [`complex::div`].

use crate::complex::{self, Complex64};
use crate::error::{CoreError, Result};
use crate::matrix::CMatrix;

/// Result of an LU decomposition with partial pivoting.
///
/// Stores the factorization `PA = LU` in compact form: `L` and `U` are
/// packed into a single complex matrix (the unit diagonal of `L` is
/// implicit), and the permutation is stored as a pivot index vector.
///
/// A value of this type only exists for a successfully factored matrix, so
/// [`solve`](Self::solve), [`inverse`](Self::inverse) and
/// [`det`](Self::det) never run against a missing factorization.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    /// Packed LU matrix: lower triangle holds L (without diagonal),
    /// upper triangle (including diagonal) holds U.
    lu: CMatrix,
    /// Row `i` of `PA` is row `pivots[i]` of `A`.
    pivots: Vec<usize>,
    /// Number of row interchanges performed.
    row_swaps: usize,
}

impl LuDecomposition {
    /// Perform LU decomposition with partial pivoting on a square matrix.
    /// `a` is copied and left untouched.
    ///
    /// Returns [`CoreError::DimensionMismatch`] for a non-square matrix and
    /// [`CoreError::SingularMatrix`] when a pivot column is entirely zero.
    /// Success does not imply a well-conditioned matrix; see
    /// [`quality`](Self::quality).
    ///
    /// ```
    /// # use zmat_core::matrix::CMatrix;
    /// # use zmat_core::linalg::decomp::LuDecomposition;
    /// // [[1+i, 2], [3, 4-i]] has determinant -1 + 3i
    /// let a = CMatrix::from_interleaved(vec![1.0, 1.0, 2.0, 0.0, 3.0, 0.0, 4.0, -1.0], 2, 2)
    ///     .unwrap();
    /// let det = LuDecomposition::decompose(&a).unwrap().det();
    /// assert!((det.re + 1.0).abs() < 1e-12);
    /// assert!((det.im - 3.0).abs() < 1e-12);
    /// ```
    pub fn decompose(a: &CMatrix) -> Result<Self> {
        check_square(a)?;
        Self::decompose_owned(a.copy())
    }

    /// Like [`decompose`](Self::decompose) but factors `a` in its own
    /// storage, avoiding the copy.
    pub fn decompose_owned(mut a: CMatrix) -> Result<Self> {
        check_square(&a)?;
        let n = a.num_rows();
        let stride = a.row_stride();
        let lu = a.as_mut_slice();
        let mut pivots: Vec<usize> = (0..n).collect();
        let mut row_swaps = 0;

        for k in 0..n {
            // Find pivot: row with largest |lu[i, k]|^2 for i >= k
            let mut max_val = complex::magnitude2(lu[k * stride + 2 * k], lu[k * stride + 2 * k + 1]);
            let mut max_row = k;
            for i in (k + 1)..n {
                let idx = i * stride + 2 * k;
                let val = complex::magnitude2(lu[idx], lu[idx + 1]);
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val == 0.0 {
                log::warn!("LU {n}x{n}: column {k} has no nonzero pivot candidate");
                return Err(CoreError::SingularMatrix);
            }

            // Swap rows if needed
            if max_row != k {
                for j in 0..2 * n {
                    lu.swap(k * stride + j, max_row * stride + j);
                }
                pivots.swap(k, max_row);
                row_swaps += 1;
            }

            let pr = lu[k * stride + 2 * k];
            let pi = lu[k * stride + 2 * k + 1];

            // Eliminate below the pivot
            for i in (k + 1)..n {
                let row = i * stride;
                let (fr, fi) = complex::div(lu[row + 2 * k], lu[row + 2 * k + 1], pr, pi);
                lu[row + 2 * k] = fr; // Store L factor
                lu[row + 2 * k + 1] = fi;

                for j in (k + 1)..n {
                    let (ur, ui) = (lu[k * stride + 2 * j], lu[k * stride + 2 * j + 1]);
                    let (mr, mi) = complex::mul(fr, fi, ur, ui);
                    lu[row + 2 * j] -= mr;
                    lu[row + 2 * j + 1] -= mi;
                }
            }
        }

        log::debug!("LU {n}x{n}: factored with {row_swaps} row swaps");
        Ok(Self {
            lu: a,
            pivots,
            row_swaps,
        })
    }

    /// Dimension `n` of the factored `n x n` matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.pivots.len()
    }

    /// The permutation pivot vector.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Number of row interchanges performed while pivoting.
    pub fn row_swaps(&self) -> usize {
        self.row_swaps
    }

    /// The packed `L\U` matrix.
    pub fn packed(&self) -> &CMatrix {
        &self.lu
    }

    /// Extract the lower triangular matrix `L` (with unit diagonal).
    pub fn lower(&self) -> CMatrix {
        let n = self.size();
        let mut l = CMatrix::new(n, n);
        for i in 0..n {
            let dst = l.row_mut(i);
            dst[2 * i] = 1.0; // Unit diagonal
            dst[..2 * i].copy_from_slice(&self.lu.row(i)[..2 * i]);
        }
        l
    }

    /// Extract the upper triangular matrix `U`.
    pub fn upper(&self) -> CMatrix {
        let n = self.size();
        let mut u = CMatrix::new(n, n);
        for i in 0..n {
            u.row_mut(i)[2 * i..].copy_from_slice(&self.lu.row(i)[2 * i..]);
        }
        u
    }

    /// Extract the permutation matrix `P`.
    pub fn permutation(&self) -> CMatrix {
        let n = self.size();
        let mut p = CMatrix::new(n, n);
        for (i, &pi) in self.pivots.iter().enumerate() {
            p.row_mut(i)[2 * pi] = 1.0;
        }
        p
    }

    /// Compute the determinant from the LU factorization.
    ///
    /// `det(A) = (-1)^swaps * product(diag(U))`
    pub fn det(&self) -> Complex64 {
        let mut d = Complex64::new(1.0, 0.0);
        for i in 0..self.size() {
            let idx = self.lu.index(i, i);
            let u = self.lu.as_slice();
            d *= Complex64::new(u[idx], u[idx + 1]);
        }
        if self.row_swaps % 2 == 1 { -d } else { d }
    }

    /// Conditioning indicator `prod(|u_ii| / max|u_ii|)`.
    ///
    /// `1` for a perfectly scaled diagonal, approaching `0` as the matrix
    /// approaches singularity.
    pub fn quality(&self) -> f64 {
        let n = self.size();
        let diag: Vec<f64> = (0..n)
            .map(|i| {
                let idx = self.lu.index(i, i);
                let u = self.lu.as_slice();
                complex::magnitude(u[idx], u[idx + 1])
            })
            .collect();
        let max = diag.iter().copied().fold(0.0, f64::max);
        if max == 0.0 {
            return 0.0;
        }
        diag.iter().map(|&d| d / max).product()
    }

    /// Solve `A X = B` for every column of `b`, writing the result into `x`.
    ///
    /// `b` must have `n` rows and `x` the same shape as `b`.
    pub fn solve(&self, b: &CMatrix, x: &mut CMatrix) -> Result<()> {
        self.check_rhs(b)?;
        b.check_same_shape(x.shape())?;
        let n = self.size();
        let mut col = vec![0.0; 2 * n];
        for c in 0..b.num_cols() {
            // Apply permutation: Pb
            for (i, &pi) in self.pivots.iter().enumerate() {
                let src = b.index(pi, c);
                col[2 * i] = b.as_slice()[src];
                col[2 * i + 1] = b.as_slice()[src + 1];
            }
            self.substitute(&mut col);
            scatter_column(&col, x, c);
        }
        Ok(())
    }

    /// Solve `A X = B` overwriting `bx` (holding `B`) with `X`.
    pub fn solve_in_place(&self, bx: &mut CMatrix) -> Result<()> {
        self.check_rhs(bx)?;
        let n = self.size();
        let mut col = vec![0.0; 2 * n];
        for c in 0..bx.num_cols() {
            for (i, &pi) in self.pivots.iter().enumerate() {
                let src = bx.index(pi, c);
                col[2 * i] = bx.as_slice()[src];
                col[2 * i + 1] = bx.as_slice()[src + 1];
            }
            self.substitute(&mut col);
            scatter_column(&col, bx, c);
        }
        Ok(())
    }

    /// Compute the inverse matrix using the LU factorization.
    ///
    /// Solves `AX = I` column by column.
    pub fn inverse(&self) -> CMatrix {
        let n = self.size();
        let mut inv = CMatrix::new(n, n);
        self.fill_inverse(&mut inv);
        inv
    }

    /// Write the inverse into `output`, which must be `n x n`.
    pub fn inverse_into(&self, output: &mut CMatrix) -> Result<()> {
        let n = self.size();
        if output.shape() != [n, n] {
            return Err(CoreError::DimensionMismatch {
                expected: vec![n, n],
                got: output.shape().to_vec(),
            });
        }
        self.fill_inverse(output);
        Ok(())
    }

    fn fill_inverse(&self, output: &mut CMatrix) {
        let n = self.size();
        let mut col = vec![0.0; 2 * n];
        for c in 0..n {
            // P e_c
            for (i, &pi) in self.pivots.iter().enumerate() {
                col[2 * i] = if pi == c { 1.0 } else { 0.0 };
                col[2 * i + 1] = 0.0;
            }
            self.substitute(&mut col);
            scatter_column(&col, output, c);
        }
    }

    /// Forward substitution with `L` then back substitution with `U` on one
    /// permuted interleaved column.
    fn substitute(&self, x: &mut [f64]) {
        let n = self.size();

        // Forward substitution: Ly = Pb
        for i in 1..n {
            let row = self.lu.row(i);
            let (mut sr, mut si) = (x[2 * i], x[2 * i + 1]);
            for j in 0..i {
                let (mr, mi) = complex::mul(row[2 * j], row[2 * j + 1], x[2 * j], x[2 * j + 1]);
                sr -= mr;
                si -= mi;
            }
            x[2 * i] = sr;
            x[2 * i + 1] = si;
        }

        // Back substitution: Ux = y
        for i in (0..n).rev() {
            let row = self.lu.row(i);
            let (mut sr, mut si) = (x[2 * i], x[2 * i + 1]);
            for j in (i + 1)..n {
                let (mr, mi) = complex::mul(row[2 * j], row[2 * j + 1], x[2 * j], x[2 * j + 1]);
                sr -= mr;
                si -= mi;
            }
            let (qr, qi) = complex::div(sr, si, row[2 * i], row[2 * i + 1]);
            x[2 * i] = qr;
            x[2 * i + 1] = qi;
        }
    }

    fn check_rhs(&self, b: &CMatrix) -> Result<()> {
        if b.num_rows() != self.size() {
            return Err(CoreError::DimensionMismatch {
                expected: vec![self.size(), b.num_cols()],
                got: b.shape().to_vec(),
            });
        }
        Ok(())
    }
}

pub(crate) fn check_square(a: &CMatrix) -> Result<()> {
    if !a.is_square() {
        return Err(CoreError::DimensionMismatch {
            expected: vec![a.num_rows(), a.num_rows()],
            got: a.shape().to_vec(),
        });
    }
    Ok(())
}

fn scatter_column(col: &[f64], x: &mut CMatrix, c: usize) {
    for (i, pair) in col.chunks_exact(2).enumerate() {
        let dst = x.index(i, c);
        let data = x.as_mut_slice();
        data[dst] = pair[0];
        data[dst + 1] = pair[1];
    }
}
