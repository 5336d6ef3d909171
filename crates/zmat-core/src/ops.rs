//! Element-wise operations on [`CMatrix`].
//!
//! Every function validates shapes and returns
//! [`CoreError::DimensionMismatch`] when operands disagree. Complex products
//! and quotients go through [`complex::mul`] and [`complex::div`], so the
//! same division formula is used here as everywhere else in the crate.
//!
//! Rust does not allow an output to alias an input, so the cases where the
//! operation may legitimately run in place have explicit `_in_place`
//! variants.

use crate::complex;
use crate::error::{CoreError, Result};
use crate::matrix::{CMatrix, RealMatrix};

// ======================================================================
// Construction and conversion
// ======================================================================

/// Square matrix with `values` on the diagonal, taken pairwise as
/// `(real, imaginary)`, and zero elsewhere.
///
/// Returns [`CoreError::InvalidArgument`] if `values` has odd length.
///
/// ```
/// # use zmat_core::ops::diag;
/// let m = diag(&[1.0, 0.0, 2.0, 0.0]).unwrap();
/// assert_eq!(m.shape(), [2, 2]);
/// assert_eq!(m.get(1, 1).unwrap().re, 2.0);
/// ```
pub fn diag(values: &[f64]) -> Result<CMatrix> {
    if values.len() % 2 == 1 {
        return Err(CoreError::InvalidArgument {
            reason: "diag: must be an even number of values",
        });
    }
    let n = values.len() / 2;
    let mut m = CMatrix::new(n, n);
    for (i, pair) in values.chunks_exact(2).enumerate() {
        let idx = m.index(i, i);
        let data = m.as_mut_slice();
        data[idx] = pair[0];
        data[idx + 1] = pair[1];
    }
    Ok(m)
}

/// Copy a real matrix into the real parts of `output`, zeroing every
/// imaginary part.
pub fn convert(input: &RealMatrix, output: &mut CMatrix) -> Result<()> {
    output.check_same_shape(input.shape())?;
    let cols = input.num_cols();
    for (i, row) in output.rows_mut().enumerate() {
        let src = &input.as_slice()[i * cols..(i + 1) * cols];
        for (pair, &v) in row.chunks_exact_mut(2).zip(src) {
            pair[0] = v;
            pair[1] = 0.0;
        }
    }
    Ok(())
}

/// Extract the real parts of `input`.
///
/// Writes into `output` when given (it must have the same shape) or into a
/// freshly allocated matrix otherwise, and returns it.
pub fn strip_real(input: &CMatrix, output: Option<RealMatrix>) -> Result<RealMatrix> {
    strip_component(input, output, 0)
}

/// Extract the imaginary parts of `input`. See [`strip_real`].
pub fn strip_imaginary(input: &CMatrix, output: Option<RealMatrix>) -> Result<RealMatrix> {
    strip_component(input, output, 1)
}

fn strip_component(
    input: &CMatrix,
    output: Option<RealMatrix>,
    component: usize,
) -> Result<RealMatrix> {
    let mut output = match output {
        Some(out) => {
            input.check_same_shape(out.shape())?;
            out
        }
        None => RealMatrix::new(input.num_rows(), input.num_cols()),
    };
    let dst = output.as_mut_slice().iter_mut();
    let src = input.rows().flat_map(|row| row.chunks_exact(2));
    for (d, pair) in dst.zip(src) {
        *d = pair[component];
    }
    Ok(output)
}

/// `output_ij = sqrt(re_ij^2 + im_ij^2)`
pub fn magnitude(input: &CMatrix, output: &mut RealMatrix) -> Result<()> {
    input.check_same_shape(output.shape())?;
    let src = input.rows().flat_map(|row| row.chunks_exact(2));
    for (d, pair) in output.as_mut_slice().iter_mut().zip(src) {
        *d = complex::magnitude(pair[0], pair[1]);
    }
    Ok(())
}

/// Set every element of `a` to `real + imaginary i`.
pub fn fill(a: &mut CMatrix, real: f64, imaginary: f64) {
    for row in a.rows_mut() {
        for pair in row.chunks_exact_mut(2) {
            pair[0] = real;
            pair[1] = imaginary;
        }
    }
}

/// Zero `mat` and put `1 + 0i` on its diagonal.
///
/// For a non-square matrix only the first `min(rows, cols)` diagonal
/// positions are set.
pub fn set_identity(mat: &mut CMatrix) {
    mat.zero();
    let width = mat.num_rows().min(mat.num_cols());
    for i in 0..width {
        let idx = mat.index(i, i);
        mat.as_mut_slice()[idx] = 1.0;
    }
}

// ======================================================================
// Matrix-matrix element-wise arithmetic
// ======================================================================

/// `c = a + b`
///
/// ```
/// # use zmat_core::matrix::CMatrix;
/// # use zmat_core::ops::add;
/// let a = CMatrix::from_interleaved(vec![1.0, 2.0], 1, 1).unwrap();
/// let b = CMatrix::from_interleaved(vec![3.0, -1.0], 1, 1).unwrap();
/// let mut c = CMatrix::new(1, 1);
/// add(&a, &b, &mut c).unwrap();
/// assert_eq!(c.as_slice(), &[4.0, 1.0]);
/// ```
pub fn add(a: &CMatrix, b: &CMatrix, c: &mut CMatrix) -> Result<()> {
    zip_into(a, b, c, |x, y| x + y)
}

/// `c = a - b`
pub fn subtract(a: &CMatrix, b: &CMatrix, c: &mut CMatrix) -> Result<()> {
    zip_into(a, b, c, |x, y| x - y)
}

/// `a = a + b`
pub fn add_in_place(a: &mut CMatrix, b: &CMatrix) -> Result<()> {
    zip_in_place(a, b, |x, y| x + y)
}

/// `a = a - b`
pub fn subtract_in_place(a: &mut CMatrix, b: &CMatrix) -> Result<()> {
    zip_in_place(a, b, |x, y| x - y)
}

fn zip_into<F>(a: &CMatrix, b: &CMatrix, c: &mut CMatrix, f: F) -> Result<()>
where
    F: Fn(f64, f64) -> f64,
{
    a.check_same_shape(b.shape())?;
    a.check_same_shape(c.shape())?;
    for ((ra, rb), rc) in a.rows().zip(b.rows()).zip(c.rows_mut()) {
        for ((&x, &y), z) in ra.iter().zip(rb).zip(rc.iter_mut()) {
            *z = f(x, y);
        }
    }
    Ok(())
}

fn zip_in_place<F>(a: &mut CMatrix, b: &CMatrix, f: F) -> Result<()>
where
    F: Fn(f64, f64) -> f64,
{
    a.check_same_shape(b.shape())?;
    for (ra, rb) in a.rows_mut().zip(b.rows()) {
        for (x, &y) in ra.iter_mut().zip(rb) {
            *x = f(*x, y);
        }
    }
    Ok(())
}

// ======================================================================
// Element-wise scaling by a complex scalar
// ======================================================================

/// `output_ij = input_ij * (real + imaginary i)`
pub fn element_multiply(
    input: &CMatrix,
    real: f64,
    imaginary: f64,
    output: &mut CMatrix,
) -> Result<()> {
    map_into(input, output, |re, im| complex::mul(re, im, real, imaginary))
}

/// `a_ij = a_ij * (real + imaginary i)`
pub fn element_multiply_in_place(a: &mut CMatrix, real: f64, imaginary: f64) {
    map_in_place(a, |re, im| complex::mul(re, im, real, imaginary));
}

/// `output_ij = input_ij / (real + imaginary i)`
///
/// A zero divisor is not trapped: the output fills with `NaN`/`inf`.
pub fn element_divide(
    input: &CMatrix,
    real: f64,
    imaginary: f64,
    output: &mut CMatrix,
) -> Result<()> {
    map_into(input, output, |re, im| complex::div(re, im, real, imaginary))
}

/// `a_ij = a_ij / (real + imaginary i)`
pub fn element_divide_in_place(a: &mut CMatrix, real: f64, imaginary: f64) {
    map_in_place(a, |re, im| complex::div(re, im, real, imaginary));
}

/// `output_ij = (real + imaginary i) / input_ij`
///
/// Zero elements of `input` produce `NaN`/`inf` in the matching output slot.
pub fn scalar_element_divide(
    real: f64,
    imaginary: f64,
    input: &CMatrix,
    output: &mut CMatrix,
) -> Result<()> {
    map_into(input, output, |re, im| complex::div(real, imaginary, re, im))
}

fn map_into<F>(input: &CMatrix, output: &mut CMatrix, f: F) -> Result<()>
where
    F: Fn(f64, f64) -> (f64, f64),
{
    input.check_same_shape(output.shape())?;
    for (src, dst) in input.rows().zip(output.rows_mut()) {
        for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact_mut(2)) {
            let (re, im) = f(s[0], s[1]);
            d[0] = re;
            d[1] = im;
        }
    }
    Ok(())
}

fn map_in_place<F>(a: &mut CMatrix, f: F)
where
    F: Fn(f64, f64) -> (f64, f64),
{
    for row in a.rows_mut() {
        for pair in row.chunks_exact_mut(2) {
            let (re, im) = f(pair[0], pair[1]);
            pair[0] = re;
            pair[1] = im;
        }
    }
}

// ======================================================================
// Reductions
// ======================================================================
//
// The min/max scans seed from element (0, 0) and therefore require a
// non-empty matrix.

/// Smallest real part.
///
/// # Panics
///
/// Panics if `a` has no elements.
pub fn element_min_real(a: &CMatrix) -> f64 {
    scan_component(a, 0, |v, best| v < best)
}

/// Largest real part.
///
/// # Panics
///
/// Panics if `a` has no elements.
pub fn element_max_real(a: &CMatrix) -> f64 {
    scan_component(a, 0, |v, best| v > best)
}

/// Smallest imaginary part.
///
/// # Panics
///
/// Panics if `a` has no elements.
pub fn element_min_imaginary(a: &CMatrix) -> f64 {
    scan_component(a, 1, |v, best| v < best)
}

/// Largest imaginary part.
///
/// # Panics
///
/// Panics if `a` has no elements.
pub fn element_max_imaginary(a: &CMatrix) -> f64 {
    scan_component(a, 1, |v, best| v > best)
}

/// Largest squared magnitude `re^2 + im^2`. Returns `0.0` for an empty
/// matrix.
pub fn element_max_magnitude2(a: &CMatrix) -> f64 {
    let mut max = 0.0;
    for pair in a.rows().flat_map(|row| row.chunks_exact(2)) {
        let m = complex::magnitude2(pair[0], pair[1]);
        if m > max {
            max = m;
        }
    }
    max
}

fn scan_component<F>(a: &CMatrix, component: usize, better: F) -> f64
where
    F: Fn(f64, f64) -> bool,
{
    let mut best = a.row(0)[component];
    for pair in a.rows().flat_map(|row| row.chunks_exact(2)) {
        let v = pair[component];
        if better(v, best) {
            best = v;
        }
    }
    best
}
