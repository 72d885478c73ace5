/* ************************************************************************ **
** This file is part of matscratch, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Checks of `identity` and `mult` that can be run from a binary.
//!
//! Each test stops at its first mismatch and reports it as an error;
//! `run_self_tests` carries on with the remaining tests regardless.

use crate::FailResult;
use crate::config::Settings;
use crate::ui::color::paint;
use ansi_term::Colour;
use failure::Error;
use matscratch_assert_close::{CheckClose, Tolerances};
use matscratch_matrix::{Matrix, Dims, mat, identity, mult};
use std::fmt;
use std::str::FromStr;

/// A cell that is not equal (within tolerance) to what was expected.
#[derive(Debug, Fail)]
#[fail(display = "{}: cell ({}, {}) is {}, expected {}", what, row, col, actual, expected)]
pub struct Mismatch {
    pub what: String,
    pub row: usize,
    pub col: usize,
    pub expected: f64,
    pub actual: f64,
}

/// A matrix of the wrong shape.
#[derive(Debug, Fail)]
pub struct DimsMismatch {
    pub what: String,
    pub expected: Dims,
    pub actual: Dims,
}

impl fmt::Display for DimsMismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let DimsMismatch { ref what, expected, actual } = *self;
        write!(f, "{}: expected a {}x{} matrix, got {}x{}", what, expected.0, expected.1, actual.0, actual.1)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelfTest {
    Identity,
    Mult,
}

impl SelfTest {
    pub const ALL: &'static [SelfTest] = &[SelfTest::Identity, SelfTest::Mult];

    pub fn name(self) -> &'static str
    { match self {
        SelfTest::Identity => "identity",
        SelfTest::Mult => "mult",
    }}

    pub fn run(self, settings: &Settings) -> FailResult<()>
    {
        // settings built in code never went through `Settings::load`
        let tol = settings.tolerances()?;
        match self {
            SelfTest::Identity => test_identity(settings.identity_size, tol),
            SelfTest::Mult => test_mult(&settings.fixture, tol),
        }
    }
}

impl fmt::Display for SelfTest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { f.write_str(self.name()) }
}

impl FromStr for SelfTest {
    type Err = Error;

    fn from_str(s: &str) -> FailResult<SelfTest>
    {
        match SelfTest::ALL.iter().find(|test| test.name() == s) {
            Some(&test) => Ok(test),
            None => bail!("unknown self-test: {:?}", s),
        }
    }
}

/// Compare two matrices cell by cell, failing on the first difference.
pub fn assert_equal(what: &str, expected: &Matrix, actual: &Matrix, tol: Tolerances) -> FailResult<()>
{
    if expected.dims() != actual.dims() {
        throw!(DimsMismatch {
            what: what.to_string(),
            expected: expected.dims(),
            actual: actual.dims(),
        });
    }

    let (rows, cols) = expected.dims();
    for row in 0..rows {
        for col in 0..cols {
            check_cell(what, (row, col), expected[(row, col)], actual[(row, col)], tol)?;
        }
    }
    Ok(())
}

fn check_cell(what: &str, (row, col): (usize, usize), expected: f64, actual: f64, tol: Tolerances) -> FailResult<()>
{
    if let Err(e) = expected.check_close(&actual, tol) {
        let (expected, actual) = e.values;
        throw!(Mismatch { what: what.to_string(), row, col, expected, actual });
    }
    Ok(())
}

/// `identity(n)` has ones on the diagonal and zeros everywhere else.
pub fn test_identity(n: usize, tol: Tolerances) -> FailResult<()>
{
    let what = format!("identity({})", n);
    let m: Matrix = identity(n);
    if m.dims() != (n, n) {
        throw!(DimsMismatch { what, expected: (n, n), actual: m.dims() });
    }

    for (i, row) in m.rows().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            let expected = if i == j { 1.0 } else { 0.0 };
            check_cell(&what, (i, j), expected, x, tol)?;
        }
    }
    debug!("checked {} cells of {}", n * n, what);
    Ok(())
}

/// `mult` maps zeros to zeros, and `fixture` is unchanged by a right identity.
pub fn test_mult(fixture: &Matrix, tol: Tolerances) -> FailResult<()>
{
    let zero: Matrix = mat(4, 4);
    assert_equal("zero * zero", &zero, &mult(&zero, &zero)?, tol)?;
    debug!("zero * zero is zero");

    assert_equal("fixture * identity", fixture, &mult(fixture, &identity(4))?, tol)?;
    debug!("fixture * identity is fixture");
    Ok(())
}

/// Outcome of a batch of self-tests.
#[derive(Debug, Default)]
pub struct Report {
    pub passed: Vec<SelfTest>,
    pub failed: Vec<(SelfTest, Error)>,
}

impl Report {
    pub fn is_success(&self) -> bool
    { self.failed.is_empty() }

    pub fn num_run(&self) -> usize
    { self.passed.len() + self.failed.len() }
}

/// Run the given tests (or all of them, if `which` is empty) and log the outcomes.
pub fn run_self_tests(settings: &Settings, which: &[SelfTest]) -> Report
{
    let which = match which {
        [] => SelfTest::ALL,
        _ => which,
    };

    let mut report = Report::default();
    for &test in which {
        match test.run(settings) {
            Ok(()) => {
                info!("{} {}", paint(Colour::Green.bold(), "PASS"), test);
                report.passed.push(test);
            },
            Err(e) => {
                error!("{} {}", paint(Colour::Red.bold(), "FAIL"), test);
                for cause in e.iter_chain() {
                    error!("    {}", cause);
                }
                report.failed.push((test, e));
            },
        }
    }

    info!("{} of {} self-tests passed", report.passed.len(), report.num_run());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use matscratch_matrix::ShapeMismatch;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_pass() {
        let report = run_self_tests(&Settings::default(), &[]);
        assert!(report.is_success(), "{:?}", report);
        assert_eq!(report.passed, vec![SelfTest::Identity, SelfTest::Mult]);
    }

    #[test]
    fn identity_sizes() {
        for n in 0..10 {
            test_identity(n, Tolerances::exact()).unwrap();
        }
    }

    #[test]
    fn fixture_of_wrong_shape_fails() {
        let settings = Settings { fixture: identity(3), ..Default::default() };
        let report = run_self_tests(&settings, &[SelfTest::Mult, SelfTest::Identity]);
        assert_eq!(report.passed, vec![SelfTest::Identity]);

        let (test, err) = &report.failed[0];
        assert_eq!(*test, SelfTest::Mult);
        let err = err.downcast_ref::<ShapeMismatch>().expect("wrong error type");
        assert_eq!((err.left, err.right), ((3, 3), (4, 4)));
    }

    #[test]
    fn mismatch_reports_first_cell() {
        let expected: Matrix = identity(4);
        let mut actual = expected.clone();
        actual[(2, 1)] = 0.5;
        actual[(3, 3)] = 7.0;

        let err = assert_equal("test", &expected, &actual, Tolerances::exact()).unwrap_err();
        let err = err.downcast::<Mismatch>().unwrap();
        assert_eq!((err.row, err.col), (2, 1));
        assert_eq!((err.expected, err.actual), (0.0, 0.5));
    }

    #[test]
    fn tolerance_is_honored() {
        let expected: Matrix = identity(2);
        let mut actual = expected.clone();
        actual[(0, 0)] += 1e-13;

        assert!(assert_equal("test", &expected, &actual, Tolerances::exact()).is_err());
        let tol = Tolerances { abs: 1e-12, rel: 0.0 };
        assert!(assert_equal("test", &expected, &actual, tol).is_ok());
    }

    #[test]
    fn dims_are_checked_first() {
        let err = assert_equal("test", &identity(2), &identity(3), Tolerances::exact()).unwrap_err();
        let err = err.downcast::<DimsMismatch>().unwrap();
        assert_eq!((err.expected, err.actual), ((2, 2), (3, 3)));
    }

    #[test]
    fn bad_tolerance_is_a_failure() {
        let settings = Settings {
            tolerance: crate::config::Tolerance { abs: 0.0, rel: -1.0 },
            ..Default::default()
        };
        let report = run_self_tests(&settings, &[]);
        assert!(report.passed.is_empty());
        assert_eq!(report.failed.len(), 2);
        for (_, err) in &report.failed {
            assert!(err.to_string().contains("tolerance.rel"), "{}", err);
        }
    }

    #[test]
    fn names() {
        for &test in SelfTest::ALL {
            assert_eq!(test.name().parse::<SelfTest>().unwrap(), test);
        }
        assert!("transpose".parse::<SelfTest>().is_err());
    }
}
