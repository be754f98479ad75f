#![no_std]

//! WFULL Core - record framing and layout definitions
//!
//! This crate provides the format knowledge for `WFULLnnnn.tmp` files:
//! sequential records bracketed by little-endian length markers, holding a
//! dimension record, an 18-value header, two wing matrices and a square
//! response matrix. Everything here is pure; reading from a byte source lives
//! in the `wfull` crate.

pub mod error;
pub mod format;
#[cfg(feature = "alloc")]
pub mod matrix;
pub mod traits;
#[cfg(feature = "alloc")]
pub mod typed;
pub mod validation;

pub use error::*;
pub use format::*;
#[cfg(feature = "alloc")]
pub use matrix::{column_major_index, column_major_position, ColumnMajorMatrix};
pub use traits::*;
#[cfg(feature = "alloc")]
pub use typed::{decode_elements, encode_elements};
pub use validation::*;

pub use num_complex::Complex64;
