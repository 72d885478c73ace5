/* ************************************************************************ **
** This file is part of matscratch, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::matrix::Dims;
use std::fmt;

/// An operation received matrices whose dimensions it cannot work with.
#[derive(Debug, Fail)]
pub struct ShapeMismatch {
    pub op: &'static str,
    /// Human-readable statement of what the operation needed.
    pub required: &'static str,
    pub left: Dims,
    pub right: Dims,
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ShapeMismatch { op, required, left, right } = *self;
        write!(f, "{}: {} (got {}x{} and {}x{})", op, required, left.0, left.1, right.0, right.1)
    }
}

/// Input data that cannot be arranged into a rectangular matrix.
#[derive(Debug, Fail)]
#[fail(display = "invalid argument: {}", message)]
pub struct InvalidArgument {
    pub message: String,
}

impl InvalidArgument {
    pub(crate) fn new<S: Into<String>>(message: S) -> Self
    { InvalidArgument { message: message.into() } }
}
