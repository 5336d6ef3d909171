//! Matrix transpose.

use crate::error::{CoreError, Result};
use crate::matrix::CMatrix;

/// Transpose `mat` in place.
///
/// Square matrices are transposed by swapping `(i, j)` with `(j, i)` and
/// need no extra memory. Other shapes are transposed into a scratch matrix
/// which is then copied back after reshaping `mat`.
pub fn transpose_in_place(mat: &mut CMatrix) {
    if mat.is_square() {
        square_in_place(mat);
    } else {
        let mut scratch = CMatrix::new(mat.num_cols(), mat.num_rows());
        standard(mat, &mut scratch);
        mat.set_from(&scratch);
    }
}

/// `output_ji = input_ij`
///
/// Writes into `output` when given (it must be `cols x rows`) or into a
/// freshly allocated matrix otherwise, and returns it.
///
/// ```
/// # use zmat_core::matrix::CMatrix;
/// # use zmat_core::linalg::transpose;
/// let a = CMatrix::from_interleaved(vec![1.0, 2.0, 3.0, 4.0], 1, 2).unwrap();
/// let t = transpose(&a, None).unwrap();
/// assert_eq!(t.shape(), [2, 1]);
/// assert_eq!(t.get(1, 0).unwrap().re, 3.0);
/// ```
pub fn transpose(input: &CMatrix, output: Option<CMatrix>) -> Result<CMatrix> {
    let mut output = match output {
        Some(out) => {
            if out.num_rows() != input.num_cols() || out.num_cols() != input.num_rows() {
                return Err(CoreError::DimensionMismatch {
                    expected: vec![input.num_cols(), input.num_rows()],
                    got: out.shape().to_vec(),
                });
            }
            out
        }
        None => CMatrix::new(input.num_cols(), input.num_rows()),
    };
    standard(input, &mut output);
    Ok(output)
}

fn square_in_place(mat: &mut CMatrix) {
    let n = mat.num_rows();
    let stride = mat.row_stride();
    let data = mat.as_mut_slice();
    for i in 0..n {
        for j in (i + 1)..n {
            let ij = i * stride + 2 * j;
            let ji = j * stride + 2 * i;
            data.swap(ij, ji);
            data.swap(ij + 1, ji + 1);
        }
    }
}

fn standard(input: &CMatrix, output: &mut CMatrix) {
    let out_stride = output.row_stride();
    let out = output.as_mut_slice();
    for (i, row) in input.rows().enumerate() {
        for (j, pair) in row.chunks_exact(2).enumerate() {
            let idx = j * out_stride + 2 * i;
            out[idx] = pair[0];
            out[idx + 1] = pair[1];
        }
    }
}

impl CMatrix {
    /// Returns the transpose as a new matrix.
    pub fn transposed(&self) -> CMatrix {
        let mut out = CMatrix::new(self.num_cols(), self.num_rows());
        standard(self, &mut out);
        out
    }
}
