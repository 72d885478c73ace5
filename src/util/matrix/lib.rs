/* ************************************************************************ **
** This file is part of matscratch, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small owned matrices.
//!
//! Everything here is row-major and rectangular by construction;
//! there is no way to build a `Matrix` with rows of unequal length.

#[macro_use]
extern crate failure;
#[cfg_attr(test, macro_use)]
extern crate matscratch_assert_close;

pub use crate::errors::{ShapeMismatch, InvalidArgument};
pub use crate::matrix::{Matrix, Dims, Rows, RowsMut, mat, identity};
pub use crate::ops::{mult, matmul};

mod errors;
mod matrix;
mod ops;
#[cfg(feature = "serde-support")]
mod serde_impls;
