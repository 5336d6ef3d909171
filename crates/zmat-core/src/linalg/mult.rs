//! Complex matrix-matrix multiplication.
//!
//! Each operation comes in two algorithms that compute the same product:
//!
//! | Algorithm | Loop order | Best for |
//! |-----------|-----------|----------|
//! | [`MultAlgorithm::Small`] | `i, j, k` with a running sum per element | narrow `b` |
//! | [`MultAlgorithm::Reorder`] | `i, k, j` streaming rows of `b` and `c` | wide `b` |
//!
//! The dispatching entry points ([`mult`], [`mult_scaled`], [`mult_add`],
//! [`mult_add_scaled`]) pick one with [`MultAlgorithm::select`] on
//! `b.num_cols()`. The `*_small` / `*_reorder` functions force a choice.
//!
//! Floating-point sums are accumulated in a different order by the two
//! algorithms, so results agree to rounding, not bit for bit.

use crate::complex::{self, Complex64};
use crate::error::{CoreError, Result};
use crate::matrix::CMatrix;
use crate::params::MultAlgorithm;

// ======================================================================
// Dispatching entry points
// ======================================================================

/// `c = a * b`
///
/// - `a` must be `m x k`, `b` must be `k x n`, `c` must be `m x n`.
///
/// ```
/// # use zmat_core::matrix::CMatrix;
/// # use zmat_core::linalg::mult;
/// // [1+i] * [2-i] = 3 + i
/// let a = CMatrix::from_interleaved(vec![1.0, 1.0], 1, 1).unwrap();
/// let b = CMatrix::from_interleaved(vec![2.0, -1.0], 1, 1).unwrap();
/// let mut c = CMatrix::new(1, 1);
/// mult(&a, &b, &mut c).unwrap();
/// assert_eq!(c.as_slice(), &[3.0, 1.0]);
/// ```
pub fn mult(a: &CMatrix, b: &CMatrix, c: &mut CMatrix) -> Result<()> {
    gemm(MultAlgorithm::select(b.num_cols()), None, a, b, c, false)
}

/// `c = alpha * a * b`
pub fn mult_scaled(alpha: Complex64, a: &CMatrix, b: &CMatrix, c: &mut CMatrix) -> Result<()> {
    gemm(MultAlgorithm::select(b.num_cols()), Some(alpha), a, b, c, false)
}

/// `c = c + a * b`
pub fn mult_add(a: &CMatrix, b: &CMatrix, c: &mut CMatrix) -> Result<()> {
    gemm(MultAlgorithm::select(b.num_cols()), None, a, b, c, true)
}

/// `c = c + alpha * a * b`
pub fn mult_add_scaled(
    alpha: Complex64,
    a: &CMatrix,
    b: &CMatrix,
    c: &mut CMatrix,
) -> Result<()> {
    gemm(MultAlgorithm::select(b.num_cols()), Some(alpha), a, b, c, true)
}

// ======================================================================
// Forced-algorithm variants
// ======================================================================

/// [`mult`] using the small algorithm regardless of size.
pub fn mult_small(a: &CMatrix, b: &CMatrix, c: &mut CMatrix) -> Result<()> {
    gemm(MultAlgorithm::Small, None, a, b, c, false)
}

/// [`mult`] using the reorder algorithm regardless of size.
pub fn mult_reorder(a: &CMatrix, b: &CMatrix, c: &mut CMatrix) -> Result<()> {
    gemm(MultAlgorithm::Reorder, None, a, b, c, false)
}

/// [`mult_scaled`] using the small algorithm.
pub fn mult_scaled_small(
    alpha: Complex64,
    a: &CMatrix,
    b: &CMatrix,
    c: &mut CMatrix,
) -> Result<()> {
    gemm(MultAlgorithm::Small, Some(alpha), a, b, c, false)
}

/// [`mult_scaled`] using the reorder algorithm.
pub fn mult_scaled_reorder(
    alpha: Complex64,
    a: &CMatrix,
    b: &CMatrix,
    c: &mut CMatrix,
) -> Result<()> {
    gemm(MultAlgorithm::Reorder, Some(alpha), a, b, c, false)
}

/// [`mult_add`] using the small algorithm.
pub fn mult_add_small(a: &CMatrix, b: &CMatrix, c: &mut CMatrix) -> Result<()> {
    gemm(MultAlgorithm::Small, None, a, b, c, true)
}

/// [`mult_add`] using the reorder algorithm.
pub fn mult_add_reorder(a: &CMatrix, b: &CMatrix, c: &mut CMatrix) -> Result<()> {
    gemm(MultAlgorithm::Reorder, None, a, b, c, true)
}

/// [`mult_add_scaled`] using the small algorithm.
pub fn mult_add_scaled_small(
    alpha: Complex64,
    a: &CMatrix,
    b: &CMatrix,
    c: &mut CMatrix,
) -> Result<()> {
    gemm(MultAlgorithm::Small, Some(alpha), a, b, c, true)
}

/// [`mult_add_scaled`] using the reorder algorithm.
pub fn mult_add_scaled_reorder(
    alpha: Complex64,
    a: &CMatrix,
    b: &CMatrix,
    c: &mut CMatrix,
) -> Result<()> {
    gemm(MultAlgorithm::Reorder, Some(alpha), a, b, c, true)
}

// ======================================================================
// Kernels
// ======================================================================

fn gemm(
    algorithm: MultAlgorithm,
    alpha: Option<Complex64>,
    a: &CMatrix,
    b: &CMatrix,
    c: &mut CMatrix,
    accumulate: bool,
) -> Result<()> {
    check_shapes(a, b, c)?;
    log::trace!(
        "complex mult {:?} x {:?} using {algorithm:?} (accumulate={accumulate})",
        a.shape(),
        b.shape()
    );
    match algorithm {
        MultAlgorithm::Small => small_kernel(alpha, a, b, c, accumulate),
        MultAlgorithm::Reorder => reorder_kernel(alpha, a, b, c, accumulate),
    }
    Ok(())
}

fn check_shapes(a: &CMatrix, b: &CMatrix, c: &CMatrix) -> Result<()> {
    let m = a.num_rows();
    let k = a.num_cols();
    let n = b.num_cols();

    if b.num_rows() != k {
        return Err(CoreError::DimensionMismatch {
            expected: vec![k, n],
            got: b.shape().to_vec(),
        });
    }
    if c.num_rows() != m || c.num_cols() != n {
        return Err(CoreError::DimensionMismatch {
            expected: vec![m, n],
            got: c.shape().to_vec(),
        });
    }
    Ok(())
}

/// `i, j, k` order: one complex dot product per output element.
#[allow(clippy::many_single_char_names)]
fn small_kernel(
    alpha: Option<Complex64>,
    a: &CMatrix,
    b: &CMatrix,
    c: &mut CMatrix,
    accumulate: bool,
) {
    let m = a.num_rows();
    let k = a.num_cols();
    let n = b.num_cols();

    let (a_data, a_stride) = (a.as_slice(), a.row_stride());
    let (b_data, b_stride) = (b.as_slice(), b.row_stride());
    let c_stride = c.row_stride();
    let c_data = c.as_mut_slice();

    for i in 0..m {
        let a_row = i * a_stride;
        for j in 0..n {
            let mut sum_re = 0.0;
            let mut sum_im = 0.0;
            let mut b_idx = 2 * j;
            for p in 0..k {
                let ar = a_data[a_row + 2 * p];
                let ai = a_data[a_row + 2 * p + 1];
                let br = b_data[b_idx];
                let bi = b_data[b_idx + 1];
                sum_re += ar * br - ai * bi;
                sum_im += ar * bi + ai * br;
                b_idx += b_stride;
            }
            let (re, im) = match alpha {
                Some(s) => complex::mul(s.re, s.im, sum_re, sum_im),
                None => (sum_re, sum_im),
            };
            let c_idx = i * c_stride + 2 * j;
            if accumulate {
                c_data[c_idx] += re;
                c_data[c_idx + 1] += im;
            } else {
                c_data[c_idx] = re;
                c_data[c_idx + 1] = im;
            }
        }
    }
}

/// `i, k, j` order: each `a_ik` (pre-scaled by `alpha`) is broadcast across
/// row `k` of `b` into row `i` of `c`, so the inner loop walks both rows
/// sequentially.
#[allow(clippy::many_single_char_names)]
fn reorder_kernel(
    alpha: Option<Complex64>,
    a: &CMatrix,
    b: &CMatrix,
    c: &mut CMatrix,
    accumulate: bool,
) {
    let m = a.num_rows();
    let k = a.num_cols();
    let n = b.num_cols();

    if k == 0 {
        // empty inner dimension: the product is the zero matrix
        if !accumulate {
            c.zero();
        }
        return;
    }

    let (a_data, a_stride) = (a.as_slice(), a.row_stride());
    let (b_data, b_stride) = (b.as_slice(), b.row_stride());
    let c_stride = c.row_stride();
    let c_data = c.as_mut_slice();

    for i in 0..m {
        let a_row = i * a_stride;
        let c_row = &mut c_data[i * c_stride..i * c_stride + 2 * n];
        for p in 0..k {
            let (ar, ai) = (a_data[a_row + 2 * p], a_data[a_row + 2 * p + 1]);
            let (ar, ai) = match alpha {
                Some(s) => complex::mul(s.re, s.im, ar, ai),
                None => (ar, ai),
            };
            let b_row = &b_data[p * b_stride..p * b_stride + 2 * n];
            let overwrite = p == 0 && !accumulate;
            for (cv, bv) in c_row.chunks_exact_mut(2).zip(b_row.chunks_exact(2)) {
                let re = ar * bv[0] - ai * bv[1];
                let im = ar * bv[1] + ai * bv[0];
                if overwrite {
                    cv[0] = re;
                    cv[1] = im;
                } else {
                    cv[0] += re;
                    cv[1] += im;
                }
            }
        }
    }
}

// ======================================================================
// Convenience methods on CMatrix
// ======================================================================

impl CMatrix {
    /// Matrix-matrix multiply: returns `self * other` as a new matrix.
    pub fn matmul(&self, other: &CMatrix) -> Result<CMatrix> {
        let mut c = CMatrix::new(self.num_rows(), other.num_cols());
        mult(self, other, &mut c)?;
        Ok(c)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::params::CMULT_COLUMN_SWITCH;
    use approx::assert_abs_diff_eq;

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn cmat(data: &[f64], rows: usize, cols: usize) -> CMatrix {
        CMatrix::from_slice(data, rows, cols).unwrap()
    }

    /// Deterministic, non-trivial fill.
    fn sample(rows: usize, cols: usize, seed: f64) -> CMatrix {
        CMatrix::from_fn(rows, cols, |i, j| {
            let x = (i * cols + j) as f64 + seed;
            Complex64::new((x * 0.37).sin() * 2.0, (x * 0.91).cos() - 0.25)
        })
    }

    fn assert_close(a: &CMatrix, b: &CMatrix, tol: f64) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert_abs_diff_eq!(*x, *y, epsilon = tol);
        }
    }

    /// Reference product computed element by element with `Complex64`.
    fn naive(a: &CMatrix, b: &CMatrix) -> CMatrix {
        CMatrix::from_fn(a.num_rows(), b.num_cols(), |i, j| {
            (0..a.num_cols())
                .map(|p| a.get(i, p).unwrap() * b.get(p, j).unwrap())
                .sum()
        })
    }

    // ------------------------------------------------------------------
    // mult
    // ------------------------------------------------------------------

    #[test]
    fn test_mult_2x2() {
        // A = [[1+i, 2], [0, 1-i]]
        // B = [[1, i], [1, 1]]
        // AB = [[1+i+2, (1+i)i+2], [1-i, 1-i]] = [[3+i, 1+i], [1-i, 1-i]]
        let a = cmat(&[1.0, 1.0, 2.0, 0.0, 0.0, 0.0, 1.0, -1.0], 2, 2);
        let b = cmat(&[1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0], 2, 2);
        let mut c = CMatrix::new(2, 2);
        mult(&a, &b, &mut c).unwrap();
        assert_eq!(
            c.as_slice(),
            &[3.0, 1.0, 1.0, 1.0, 1.0, -1.0, 1.0, -1.0]
        );
    }

    #[test]
    fn test_mult_rectangular_matches_naive() {
        let a = sample(3, 4, 0.0);
        let b = sample(4, 2, 5.0);
        let mut c = CMatrix::new(3, 2);
        mult(&a, &b, &mut c).unwrap();
        assert_close(&c, &naive(&a, &b), 1e-12);
    }

    #[test]
    fn test_small_and_reorder_agree() {
        for &n in &[1, CMULT_COLUMN_SWITCH - 1, CMULT_COLUMN_SWITCH, 13] {
            let a = sample(5, 6, 1.0);
            let b = sample(6, n, 2.0);
            let mut c1 = CMatrix::new(5, n);
            let mut c2 = CMatrix::new(5, n);
            mult_small(&a, &b, &mut c1).unwrap();
            mult_reorder(&a, &b, &mut c2).unwrap();
            assert_close(&c1, &c2, 1e-12);
            assert_close(&c1, &naive(&a, &b), 1e-12);
        }
    }

    #[test]
    fn test_dispatch_wide_b_uses_reorder_result() {
        let a = sample(2, 3, 0.5);
        let b = sample(3, CMULT_COLUMN_SWITCH + 2, 0.25);
        let mut c = CMatrix::new(2, CMULT_COLUMN_SWITCH + 2);
        mult(&a, &b, &mut c).unwrap();
        assert_close(&c, &naive(&a, &b), 1e-12);
    }

    #[test]
    fn test_mult_overwrites_output() {
        let a = sample(2, 2, 0.0);
        let b = sample(2, 2, 1.0);
        let mut c1 = CMatrix::full(2, 2, Complex64::new(100.0, -100.0));
        let mut c2 = c1.clone();
        mult_small(&a, &b, &mut c1).unwrap();
        mult_reorder(&a, &b, &mut c2).unwrap();
        assert_close(&c1, &naive(&a, &b), 1e-12);
        assert_close(&c2, &naive(&a, &b), 1e-12);
    }

    #[test]
    fn test_mult_identity() {
        let a = sample(4, 4, 3.0);
        let eye = CMatrix::identity(4);
        let mut c = CMatrix::new(4, 4);
        mult(&a, &eye, &mut c).unwrap();
        assert_eq!(c, a);
    }

    #[test]
    fn test_mult_empty_inner_dimension() {
        let a = CMatrix::new(2, 0);
        let b = CMatrix::new(0, 9);
        let mut c = CMatrix::full(2, 9, Complex64::new(1.0, 1.0));
        mult(&a, &b, &mut c).unwrap();
        assert!(c.as_slice().iter().all(|&x| x == 0.0));

        let b = CMatrix::new(0, 2);
        let mut c = CMatrix::full(2, 2, Complex64::new(1.0, 1.0));
        mult(&a, &b, &mut c).unwrap();
        assert!(c.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_mult_strided_operands() {
        let a_packed = cmat(&[1.0, 2.0, 3.0, 4.0], 1, 2);
        let a = CMatrix::from_interleaved_with_stride(
            vec![1.0, 2.0, 3.0, 4.0, 0.0, 0.0],
            1,
            2,
            6,
        )
        .unwrap();
        let b = sample(2, 3, 0.0);
        let mut c = CMatrix::from_interleaved_with_stride(vec![9.0; 16], 1, 3, 16).unwrap();
        mult(&a, &b, &mut c).unwrap();
        assert_close(&c.copy(), &naive(&a_packed, &b), 1e-12);
        // padding untouched
        assert!(c.into_vec()[6..].iter().all(|&x| x == 9.0));
    }

    // ------------------------------------------------------------------
    // Scaled and accumulating variants
    // ------------------------------------------------------------------

    #[test]
    fn test_mult_scaled() {
        let alpha = Complex64::new(0.5, -2.0);
        let a = sample(3, 3, 0.0);
        let b = sample(3, 3, 7.0);
        let mut expected = naive(&a, &b);
        crate::ops::element_multiply_in_place(&mut expected, alpha.re, alpha.im);

        let mut c = CMatrix::new(3, 3);
        mult_scaled(alpha, &a, &b, &mut c).unwrap();
        assert_close(&c, &expected, 1e-12);
        mult_scaled_small(alpha, &a, &b, &mut c).unwrap();
        assert_close(&c, &expected, 1e-12);
        mult_scaled_reorder(alpha, &a, &b, &mut c).unwrap();
        assert_close(&c, &expected, 1e-12);
    }

    #[test]
    fn test_mult_add() {
        let a = sample(2, 3, 0.0);
        let b = sample(3, 4, 1.0);
        let start = sample(2, 4, 9.0);
        let mut expected = naive(&a, &b);
        crate::ops::add_in_place(&mut expected, &start).unwrap();

        for f in [mult_add, mult_add_small, mult_add_reorder] {
            let mut c = start.clone();
            f(&a, &b, &mut c).unwrap();
            assert_close(&c, &expected, 1e-12);
        }
    }

    #[test]
    fn test_mult_add_scaled() {
        let alpha = Complex64::new(-1.0, 0.5);
        let a = sample(4, 2, 0.0);
        let b = sample(2, 8, 3.0);
        let start = sample(4, 8, 4.0);
        let mut expected = naive(&a, &b);
        crate::ops::element_multiply_in_place(&mut expected, alpha.re, alpha.im);
        crate::ops::add_in_place(&mut expected, &start).unwrap();

        for f in [mult_add_scaled, mult_add_scaled_small, mult_add_scaled_reorder] {
            let mut c = start.clone();
            f(alpha, &a, &b, &mut c).unwrap();
            assert_close(&c, &expected, 1e-12);
        }
    }

    #[test]
    fn test_mult_add_empty_inner_keeps_c() {
        let a = CMatrix::new(2, 0);
        let b = CMatrix::new(0, 8);
        let start = sample(2, 8, 0.0);
        let mut c = start.clone();
        mult_add_reorder(&a, &b, &mut c).unwrap();
        assert_eq!(c, start);
    }

    // ------------------------------------------------------------------
    // Shape validation
    // ------------------------------------------------------------------

    #[test]
    fn test_mult_inner_mismatch() {
        let a = CMatrix::new(2, 2);
        let b = CMatrix::new(3, 2);
        let mut c = CMatrix::new(2, 2);
        assert!(matches!(
            mult(&a, &b, &mut c),
            Err(CoreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_mult_output_mismatch() {
        let a = CMatrix::new(2, 2);
        let b = CMatrix::new(2, 2);
        let mut c = CMatrix::new(3, 3);
        assert!(mult(&a, &b, &mut c).is_err());
        assert!(mult_add(&a, &b, &mut c).is_err());
        assert!(mult_scaled(Complex64::new(1.0, 0.0), &a, &b, &mut c).is_err());
    }

    #[test]
    fn test_matmul() {
        let a = sample(2, 3, 0.0);
        let b = sample(3, 2, 1.0);
        let c = a.matmul(&b).unwrap();
        assert_close(&c, &naive(&a, &b), 1e-12);
    }
}
