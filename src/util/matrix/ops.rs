/* ************************************************************************ **
** This file is part of matscratch, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::ShapeMismatch;
use crate::matrix::Matrix;
use itertools::zip_eq;
use num_traits::Zero;
use std::ops::Mul;

/// Product of two 4x4 matrices.
///
/// Anything that is not exactly 4x4 on either side is a `ShapeMismatch`,
/// even if the product would otherwise be well-defined.
pub fn mult<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, ShapeMismatch>
where T: Zero + Clone + Mul<Output=T>,
{
    if a.dims() != (4, 4) || b.dims() != (4, 4) {
        return Err(ShapeMismatch {
            op: "mult",
            required: "can only multiply 4x4 matrices",
            left: a.dims(),
            right: b.dims(),
        });
    }
    matmul(a, b)
}

/// General matrix product of an `r x k` and a `k x c` matrix.
pub fn matmul<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, ShapeMismatch>
where T: Zero + Clone + Mul<Output=T>,
{
    if a.num_cols() != b.num_rows() {
        return Err(ShapeMismatch {
            op: "matmul",
            required: "inner dimensions must agree",
            left: a.dims(),
            right: b.dims(),
        });
    }

    let mut out = Matrix::zeros((a.num_rows(), b.num_cols()));

    // this is suboptimal.  who cares.
    let b_t = b.to_transpose();
    for (out_row, a_row) in zip_eq(out.rows_mut(), a.rows()) {
        for (out, b_col) in zip_eq(out_row, b_t.rows()) {
            let mut acc = T::zero();
            for (x, y) in zip_eq(a_row, b_col) {
                acc = acc + x.clone() * y.clone();
            }
            *out = acc;
        }
    }
    Ok(out)
}

impl<'a, 'b, T> Mul<&'b Matrix<T>> for &'a Matrix<T>
where T: Zero + Clone + Mul<Output=T>,
{
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the inner dimensions differ. Use `matmul` to get an error instead.
    fn mul(self, rhs: &'b Matrix<T>) -> Matrix<T>
    {
        match matmul(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}
