//! Abstract interfaces for WFULL data
//!
//! This module defines the trait abstractions shared by the core and I/O
//! crates: what a payload element is and how a dense matrix is accessed.

pub mod element;
pub mod matrix;

pub use element::{ElementType, RecordElement};
pub use matrix::DenseMatrix;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
