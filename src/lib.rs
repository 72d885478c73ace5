/* ************************************************************************ **
** This file is part of matscratch, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Some matrix functions, and a binary that checks them.
//!
//! ```
//! use matscratch::{Matrix, identity, mult};
//!
//! let m = Matrix::from_rows(vec![
//!     vec![5.0, 2.0, 4.0, 5.0],
//!     vec![3.0, 4.0, 1.0, 1.0],
//!     vec![1.0, 2.0, 3.0, 4.0],
//!     vec![4.0, 3.0, 2.0, 1.0],
//! ]).unwrap();
//! assert_eq!(mult(&m, &identity(4)).unwrap(), m);
//! ```

pub use matscratch_matrix::{Matrix, Dims, mat, identity, mult, matmul};
pub use matscratch_matrix::{ShapeMismatch, InvalidArgument};
pub use matscratch_assert_close::{CheckClose, Tolerances};

pub use matscratch_tasks::entry_points;
pub use matscratch_tasks::{Settings, SelfTest, Report, run_self_tests};
