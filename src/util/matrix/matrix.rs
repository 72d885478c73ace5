/* ************************************************************************ **
** This file is part of matscratch, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::InvalidArgument;
use std::ops::{Index, IndexMut};
use num_traits::{Zero, One};
use matscratch_assert_close::{CheckClose, CheckCloseError, Tolerances};

/// `(rows, cols)`
pub type Dims = (usize, usize);

/// Owned matrix type with C layout.
// please resist the urge to go n-dimensional
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    // c-contiguous, row-contiguous data
    data: Vec<T>,
    // invariant: height * width == data.len()
    height: usize,
    width: usize,
}

/// Iterator over the rows of a [`Matrix`], as slices.
///
/// Always yields `num_rows()` items, even when the rows are empty.
#[derive(Debug, Clone)]
pub struct Rows<'a, T> {
    rest: &'a [T],
    width: usize,
    remaining: usize,
}

#[derive(Debug)]
pub struct RowsMut<'a, T> {
    rest: &'a mut [T],
    width: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]>
    {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (row, rest) = self.rest.split_at(self.width);
        self.rest = rest;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    { (self.remaining, Some(self.remaining)) }
}

impl<'a, T> Iterator for RowsMut<'a, T> {
    type Item = &'a mut [T];

    fn next(&mut self) -> Option<&'a mut [T]>
    {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (row, rest) = std::mem::take(&mut self.rest).split_at_mut(self.width);
        self.rest = rest;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    { (self.remaining, Some(self.remaining)) }
}

impl<'a, T> ExactSizeIterator for Rows<'a, T> {}
impl<'a, T> ExactSizeIterator for RowsMut<'a, T> {}

/// A zero-filled matrix with the given number of rows and columns.
pub fn mat<T: Zero + Clone>(rows: usize, cols: usize) -> Matrix<T>
{ Matrix::zeros((rows, cols)) }

/// The `n x n` identity matrix.
pub fn identity<T: Zero + One + Clone>(n: usize) -> Matrix<T>
{ Matrix::eye(n) }

impl<T> Matrix<T> {
    pub fn from_row_major_data((height, width): Dims, data: Vec<T>) -> Result<Self, InvalidArgument>
    {
        if data.len() != height * width {
            return Err(InvalidArgument::new(format!(
                "{} elements cannot fill a {}x{} matrix", data.len(), height, width,
            )));
        }
        Ok(Matrix { data, height, width })
    }

    /// Build from a list of rows, which must all have the same length.
    ///
    /// An empty list produces a `0x0` matrix.
    pub fn from_rows<R>(rows: Vec<R>) -> Result<Self, InvalidArgument>
    where R: IntoIterator<Item=T>,
    {
        let height = rows.len();
        let mut width = None;
        let mut data = vec![];
        for (r, row) in rows.into_iter().enumerate() {
            let old_len = data.len();
            data.extend(row);
            let len = data.len() - old_len;
            match width {
                None => width = Some(len),
                Some(w) if w == len => {},
                Some(w) => return Err(InvalidArgument::new(format!(
                    "row {} has length {}, but row 0 has length {}", r, len, w,
                ))),
            }
        }
        let width = width.unwrap_or(0);
        Ok(Matrix { data, height, width })
    }

    pub fn from_fn<F>((height, width): Dims, mut f: F) -> Self
    where F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(height * width);
        for r in 0..height {
            for c in 0..width {
                data.push(f(r, c));
            }
        }
        Matrix { data, height, width }
    }

    pub fn dims(&self) -> Dims { (self.height, self.width) }
    pub fn num_rows(&self) -> usize { self.height }
    pub fn num_cols(&self) -> usize { self.width }
    pub fn is_square(&self) -> bool { self.height == self.width }

    pub fn row_major_data(&self) -> &[T] { &self.data }
    pub fn row_major_data_mut(&mut self) -> &mut [T] { &mut self.data }
    pub fn into_row_major_data(self) -> Vec<T> { self.data }

    pub fn rows(&self) -> Rows<'_, T>
    { Rows { rest: &self.data, width: self.width, remaining: self.height } }

    pub fn rows_mut(&mut self) -> RowsMut<'_, T>
    { RowsMut { rest: &mut self.data, width: self.width, remaining: self.height } }

    pub fn into_rows(self) -> Vec<Vec<T>>
    {
        let Matrix { data, height, width } = self;
        let mut iter = data.into_iter();
        (0..height).map(|_| iter.by_ref().take(width).collect()).collect()
    }
}

impl<T: Clone> Matrix<T> {
    pub fn new_filled((height, width): Dims, fill: &T) -> Self
    { Matrix {
        data: vec![fill.clone(); height * width],
        height,
        width,
    }}

    pub fn to_transpose(&self) -> Self
    { Matrix::from_fn((self.width, self.height), |r, c| self[(c, r)].clone()) }
}

impl<T: Zero + Clone> Matrix<T> {
    /// Zero-filled matrix.
    pub fn zeros(dims: Dims) -> Self
    { Matrix::new_filled(dims, &T::zero()) }

    pub fn is_zero(&self) -> bool
    { self.data.iter().all(Zero::is_zero) }
}

impl<T: Zero + One + Clone> Matrix<T> {
    pub fn eye(n: usize) -> Self
    {
        let mut m = Matrix::zeros((n, n));
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, (r, c): (usize, usize)) -> &Self::Output
    {
        assert!(r < self.height && c < self.width, "index {:?} out of bounds for {:?}", (r, c), self.dims());
        &self.data[r * self.width + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Self::Output
    {
        assert!(r < self.height && c < self.width, "index {:?} out of bounds for {:?}", (r, c), self.dims());
        &mut self.data[r * self.width + c]
    }
}

impl<T: CheckClose> CheckClose for Matrix<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    {
        assert_eq!(self.dims(), other.dims(), "cannot compare matrices of different shape");
        self.data.check_close(&other.data, tol)
    }
}
