/* ************************************************************************ **
** This file is part of matscratch, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Equality checks with tolerances.
//!
//! `assert_close!` panics, `CheckClose` reports. The self-test runner uses the
//! latter so that one bad cell doesn't take down the whole process.

use std::fmt;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// `assert_eq!`, but with tolerances.
///
/// ```
/// # #[macro_use] extern crate matscratch_assert_close;
/// # fn main() {
/// assert_close!(1.0, 1.0 + 1e-12);
/// assert_close!(abs=1e-3, 0.0, 1e-4);
/// assert_close!(rel=0.0, abs=0.0, 2.0, 2.0, "exact comparison of {}", "twos");
/// # }
/// ```
#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::assert_close_impl!{@parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]]);
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut abs;
            let mut rel;
            $(
                $crate::assert_close_impl!{@stmt::assign [abs, rel] $assignment}
            )*

            if let Err(e) = $crate::CheckClose::check_close(&a, &b, $crate::Tolerances { abs, rel }) {
                panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                 format!($($fmt)*), rel, abs, a, b, e);
            }
        }
    };
    (@stmt::assign [$abs:ident, $rel:ident] [@abs $tol:expr]) => { $abs = $tol; };
    (@stmt::assign [$abs:ident, $rel:ident] [@rel $tol:expr]) => { $rel = $tol; };
}

#[doc(hidden)]
#[inline]
pub fn __is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    // Same formula as Python's math.isclose.
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign, and exact comparisons
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // case for general values and NaN.
    (a - b).abs() < abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances<T = f64> {
    pub abs: T,
    pub rel: T
}

impl Tolerances {
    /// Zero tolerances; only values that compare `==` will pass.
    pub fn exact() -> Self
    { Tolerances { abs: 0.0, rel: 0.0 } }
}

impl Default for Tolerances {
    fn default() -> Self
    { Tolerances { abs: 0.0, rel: DEFAULT_NONZERO_TOL } }
}

#[derive(Debug)]
pub struct CheckCloseError<T = f64> {
    pub values: (T, T),
    pub tol: Tolerances<T>,
    /// Position of the first offending element, for sequences.
    pub index: Option<usize>,
}

impl<T: fmt::Debug> fmt::Display for CheckCloseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (ref left, ref right) = self.values;
        if let Some(index) = self.index {
            writeln!(f, "failed at index {}:", index)?;
        } else {
            writeln!(f, "failed at:")?;
        }
        write!(f, "  left: {:?}
 right: {:?}
   tol: {:?}", left, right, self.tol)
    }
}

impl<T> failure::Fail for CheckCloseError<T>
where T: fmt::Debug + Send + Sync + 'static,
{}

pub trait CheckClose<Rhs: ?Sized = Self> {
    type Scalar;

    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>;
}

impl CheckClose for f64 {
    type Scalar = f64;

    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    {
        match __is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError {
                values: (*self, *other),
                tol,
                index: None,
            }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    {
        assert_eq!(self.len(), other.len());
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| CheckCloseError {
                index: e.index.or(Some(i)),
                ..e
            })?;
        }
        Ok(())
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}
