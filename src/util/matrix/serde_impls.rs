/* ************************************************************************ **
** This file is part of matscratch, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! A matrix is written as a list of rows, e.g. `[[1, 0], [0, 1]]`.

use crate::matrix::Matrix;
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de::Error as _;
use serde::ser::SerializeSeq;

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    {
        let mut seq = serializer.serialize_seq(Some(self.num_rows()))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error>
    {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(D::Error::custom)
    }
}
