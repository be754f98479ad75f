//! Owned dense matrices with column-major storage
//!
//! The external simulation writes matrices Fortran-style: the row index
//! varies fastest. The position mapping lives in two small functions here
//! instead of being left to some array library's default layout.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::WfullError;
use crate::traits::{DenseMatrix, MatrixOperations, RecordElement};
use crate::validation::checked_shape;

/// Matrix position `(row, col)` of flat element `index`
///
/// Column 0 is filled top to bottom first, then column 1, and so on.
/// `nrows` must be non-zero.
pub const fn column_major_position(index: usize, nrows: usize) -> (usize, usize) {
    (index % nrows, index / nrows)
}

/// Flat index of matrix position `(row, col)`
pub const fn column_major_index(row: usize, col: usize, nrows: usize) -> usize {
    col * nrows + row
}

/// Dense matrix stored in column-major order
///
/// Always holds exactly `nrows * ncols` elements, including when
/// deserialized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "UncheckedMatrix<T>",
        bound(deserialize = "T: RecordElement + serde::Deserialize<'de>")
    )
)]
pub struct ColumnMajorMatrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

/// Wire form of a matrix before its length is checked
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedMatrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: RecordElement> TryFrom<UncheckedMatrix<T>> for ColumnMajorMatrix<T> {
    type Error = WfullError;

    fn try_from(raw: UncheckedMatrix<T>) -> Result<Self, Self::Error> {
        Self::checked(raw.data, raw.nrows, raw.ncols)
    }
}

impl<T: RecordElement> ColumnMajorMatrix<T> {
    /// Reshape a flat column-major buffer into an `nrows x ncols` matrix
    ///
    /// Returns the buffer back unchanged if its length is not exactly
    /// `nrows * ncols`. Nothing is truncated or padded.
    pub fn from_column_major(
        data: Vec<T>,
        nrows: usize,
        ncols: usize,
    ) -> core::result::Result<Self, Vec<T>> {
        match nrows.checked_mul(ncols) {
            Some(len) if len == data.len() => Ok(Self { nrows, ncols, data }),
            _ => Err(data),
        }
    }

    /// Like [`from_column_major`](Self::from_column_major), reporting the
    /// failure as an error instead of handing the buffer back
    pub fn checked(data: Vec<T>, nrows: usize, ncols: usize) -> Result<Self, WfullError> {
        let expected = checked_shape(nrows, ncols)?;
        if expected != data.len() {
            return Err(WfullError::MatrixLengthMismatch {
                nrows,
                ncols,
                found: data.len(),
            });
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Elements in storage order
    pub fn as_column_major(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning its storage
    pub fn into_column_major(self) -> Vec<T> {
        self.data
    }

    /// Row-major nested copy, `rows[row][col]`
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.nrows).map(|row| self.get_row(row)).collect()
    }

    /// Top-left block of at most `rows x cols` elements, row-major nested
    pub fn block(&self, rows: usize, cols: usize) -> Vec<Vec<T>> {
        let cols = cols.min(self.ncols);
        (0..rows.min(self.nrows))
            .map(|row| {
                (0..cols)
                    .map(|col| self.data[column_major_index(row, col, self.nrows)])
                    .collect()
            })
            .collect()
    }

    /// Iterate `(row, col, value)` in storage order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let nrows = self.nrows;
        self.data.iter().enumerate().map(move |(index, &value)| {
            let (row, col) = column_major_position(index, nrows);
            (row, col, value)
        })
    }
}

impl<T: RecordElement> DenseMatrix for ColumnMajorMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        self.data
            .get(column_major_index(row, col, self.nrows))
            .copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: RecordElement> MatrixOperations for ColumnMajorMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<T> {
        if row_index >= self.nrows {
            return Vec::new();
        }
        (0..self.ncols)
            .map(|col| self.data[column_major_index(row_index, col, self.nrows)])
            .collect()
    }

    fn get_col(&self, col_index: usize) -> Vec<T> {
        if col_index >= self.ncols {
            return Vec::new();
        }
        let start = col_index * self.nrows;
        self.data[start..start + self.nrows].to_vec()
    }
}
