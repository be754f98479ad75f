//! Dense matrix abstraction traits
//!
//! Decoded WFULL matrices are dense and stored column-major. These traits
//! give format-agnostic access to them.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::RecordElement;

/// Core dense matrix trait
pub trait DenseMatrix {
    /// The element type stored in this matrix
    type Element: RecordElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Total number of stored elements
    fn len(&self) -> usize {
        let (nrows, ncols) = self.dimensions();
        nrows * ncols
    }

    /// Whether the matrix has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: DenseMatrix {
    /// Get all elements in a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<Self::Element>;

    /// Get all elements in a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<Self::Element>;
}
