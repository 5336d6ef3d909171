//! `Display` formatting for [`CMatrix`] and [`RealMatrix`].

use core::fmt;

use super::{CMatrix, RealMatrix};

#[allow(clippy::float_cmp)]
fn write_complex(f: &mut fmt::Formatter<'_>, re: f64, im: f64) -> fmt::Result {
    if im < 0.0 {
        write!(f, "{re}-{}i", -im)
    } else {
        // -0.0 prints as "+0i"
        write!(f, "{re}+{}i", if im == 0.0 { 0.0 } else { im })
    }
}

impl fmt::Display for CMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "cmatrix([], shape={:?})", self.shape());
        }
        writeln!(f, "cmatrix([")?;
        for (r, row) in self.rows().enumerate() {
            write!(f, "  [")?;
            for (c, pair) in row.chunks_exact(2).enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write_complex(f, pair[0], pair[1])?;
            }
            if r + 1 < self.num_rows {
                writeln!(f, "],")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        write!(f, "])")
    }
}

impl fmt::Display for RealMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.as_slice().is_empty() {
            return write!(f, "matrix([], shape={:?})", self.shape());
        }
        let cols = self.num_cols();
        writeln!(f, "matrix([")?;
        for (r, row) in self.as_slice().chunks(cols).enumerate() {
            write!(f, "  [")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            if r + 1 < self.num_rows() {
                writeln!(f, "],")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        write!(f, "])")
    }
}
