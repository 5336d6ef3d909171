//! Complex scalar arithmetic on `(real, imaginary)` pairs.
//!
//! The scalar type is [`num_complex::Complex64`]. The helpers below work on
//! raw `f64` pairs so the kernels can read straight out of interleaved
//! storage without building temporaries, and so that every division in the
//! crate goes through the same formula:
//!
//! ```text
//! x / y = x * conj(y) / |y|^2
//! ```
//!
//! A zero-norm divisor is not trapped; the result is whatever IEEE-754
//! produces (`inf` / `NaN`).

pub use num_complex::Complex64;

/// `(ar + ai i) * (br + bi i)`
#[inline]
pub fn mul(ar: f64, ai: f64, br: f64, bi: f64) -> (f64, f64) {
    (ar * br - ai * bi, ar * bi + ai * br)
}

/// `(xr + xi i) / (yr + yi i)` by conjugate normalization.
#[inline]
pub fn div(xr: f64, xi: f64, yr: f64, yi: f64) -> (f64, f64) {
    let norm = yr * yr + yi * yi;
    ((xr * yr + xi * yi) / norm, (xi * yr - xr * yi) / norm)
}

/// Squared magnitude `re^2 + im^2`.
#[inline]
pub fn magnitude2(re: f64, im: f64) -> f64 {
    re * re + im * im
}

/// Magnitude `sqrt(re^2 + im^2)`.
#[inline]
pub fn magnitude(re: f64, im: f64) -> f64 {
    magnitude2(re, im).sqrt()
}

/// [`div`] on [`Complex64`] values.
#[inline]
pub fn divide(x: Complex64, y: Complex64) -> Complex64 {
    let (re, im) = div(x.re, x.im, y.re, y.im);
    Complex64::new(re, im)
}
