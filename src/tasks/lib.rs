/* ************************************************************************ **
** This file is part of matscratch, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! High-level code behind the matscratch binaries.
//!
//! The matrix functions themselves live in `matscratch-matrix`; this crate runs
//! the self-tests against them and provides everything a binary needs around
//! that (config, logging, CLI).

#![allow(non_snake_case)] // serde default fns

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;

// FIXME copied from failure 1.0 prerelease; remove once actually released
macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e));
    }
}

pub type FailResult<T> = Result<T, failure::Error>;

pub mod config;
pub mod self_test;
pub mod entry_points;
mod ui;

pub use crate::config::{Settings, YamlRead};
pub use crate::self_test::{SelfTest, Report, run_self_tests};
pub use crate::ui::logging::GlobalLogger;
