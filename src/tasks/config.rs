/* ************************************************************************ **
** This file is part of matscratch, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// NOTE: Please make sure to use the YamlRead trait when deserializing these types!
//
//       Going through serde_yaml::from_reader directly skips the warnings
//       about unused keys, and typos then silently fall back to defaults.

use crate::FailResult;
use failure::ResultExt;
use matscratch_assert_close::Tolerances;
use matscratch_matrix::Matrix;
use std::io::Read;
use std::path::Path;

/// Provides an alternative to serde_yaml::from_reader that warns about
/// unrecognized keys.
pub trait YamlRead: for<'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, serde_yaml::Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, serde_yaml::Error> {
        // serde_ignored needs a Deserializer, and serde_yaml doesn't expose one
        // that can be built from a Read... but it does impl Deserialize for Value.
        Self::from_value(serde_yaml::from_reader(r)?)
    }

    fn from_value(value: serde_yaml::Value) -> Result<Self, serde_yaml::Error>;
}

macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl YamlRead for $Type {
            fn from_value(value: serde_yaml::Value) -> Result<$Type, serde_yaml::Error> {
                serde_ignored::deserialize(
                    value,
                    |path| warn!("Unused config item (possible typo?): {}", path),
                )
            }
        }
    };
}

/// Root settings object for the self-tests.
///
/// Every field has a default, so an empty mapping (or no file at all) is valid.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Size of the identity matrix checked by the identity test.
    #[serde(default = "_settings__identity_size")]
    pub identity_size: usize,

    /// Matrix used for the right-identity check in the multiplication test.
    ///
    /// This is written as a list of rows. It should be 4x4; anything else
    /// makes the multiplication test fail.
    ///
    /// # Example:
    ///
    /// ```yaml
    /// fixture: [[5, 2, 4, 5], [3, 4, 1, 1], [1, 2, 3, 4], [4, 3, 2, 1]]
    /// ```
    #[serde(default = "_settings__fixture")]
    pub fixture: Matrix,

    /// How close cells must be to count as equal. Exact by default.
    #[serde(default)]
    pub tolerance: Tolerance,
}
derive_yaml_read!{Settings}

fn _settings__identity_size() -> usize { 5 }
fn _settings__fixture() -> Matrix {
    let rows = vec![
        vec![5.0, 2.0, 4.0, 5.0],
        vec![3.0, 4.0, 1.0, 1.0],
        vec![1.0, 2.0, 3.0, 4.0],
        vec![4.0, 3.0, 2.0, 1.0],
    ];
    match Matrix::from_rows(rows) {
        Ok(m) => m,
        Err(e) => unreachable!("{}", e),
    }
}

impl Default for Settings {
    fn default() -> Self
    { Settings {
        identity_size: _settings__identity_size(),
        fixture: _settings__fixture(),
        tolerance: Default::default(),
    }}
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Tolerance {
    #[serde(default)]
    pub abs: f64,
    #[serde(default)]
    pub rel: f64,
}

impl From<Tolerance> for Tolerances {
    fn from(Tolerance { abs, rel }: Tolerance) -> Tolerances
    { Tolerances { abs, rel } }
}

impl Settings {
    /// Read and validate a YAML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> FailResult<Settings>
    {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|_| format!("while opening config file: '{}'", path.display()))?;
        let settings: Settings = YamlRead::from_reader(file)
            .with_context(|_| format!("while parsing config file: '{}'", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> FailResult<()>
    {
        self.tolerances()?;
        if self.fixture.dims() != (4, 4) {
            warn!(
                "fixture is {}x{}; the multiplication test only accepts 4x4",
                self.fixture.num_rows(), self.fixture.num_cols(),
            );
        }
        Ok(())
    }

    /// The configured tolerance, checked for use with `CheckClose`.
    pub fn tolerances(&self) -> FailResult<Tolerances>
    {
        let Tolerance { abs, rel } = self.tolerance;
        for &(name, value) in &[("abs", abs), ("rel", rel)] {
            if !(value >= 0.0 && value.is_finite()) {
                bail!("tolerance.{} must be finite and non-negative (got {})", name, value);
            }
        }
        Ok(self.tolerance.into())
    }
}
