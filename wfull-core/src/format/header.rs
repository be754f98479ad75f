//! Dimension and header record definitions
//!
//! Records 1 and 2 of a WFULL file: the basis-set sizes that gate every
//! reshape, and a fixed block of 18 metadata values.

use super::constants::{DIMENSION_FIELDS, HEADER_LEN, WING_COLUMNS};
use crate::error::{Result, WfullError};

/// Basis-set sizes read from record 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedDimensions"))]
pub struct Dimensions {
    /// Number of G-vectors; square extent of the response matrix
    pub ngvector: u32,
    /// Secondary size carried alongside `ngvector`
    pub ngvector2: u32,
    /// Number of integers the record actually held (at least 2)
    pub field_count: usize,
}

impl Dimensions {
    /// Build dimensions from the integers of record 1
    ///
    /// The first two fields are taken as `ngvector` and `ngvector2`, any
    /// further fields are ignored. Both sizes must be positive.
    pub fn from_fields(fields: &[i32]) -> Result<Self> {
        if fields.len() < DIMENSION_FIELDS {
            return Err(WfullError::InsufficientDimensionFields {
                found: fields.len(),
            });
        }

        let (ngvector, ngvector2) = (fields[0], fields[1]);
        if ngvector <= 0 || ngvector2 <= 0 {
            return Err(WfullError::InvalidDimensions {
                ngvector,
                ngvector2,
            });
        }

        Ok(Self {
            ngvector: ngvector as u32,
            ngvector2: ngvector2 as u32,
            field_count: fields.len(),
        })
    }

    /// `ngvector` as an index extent
    pub const fn rows(&self) -> usize {
        self.ngvector as usize
    }

    /// Shape of the wing and conjugate wing matrices
    pub const fn wing_shape(&self) -> (usize, usize) {
        (self.rows(), WING_COLUMNS)
    }

    /// Shape of the square response matrix
    pub const fn response_shape(&self) -> (usize, usize) {
        (self.rows(), self.rows())
    }
}

/// Wire form of [`Dimensions`] before validation
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedDimensions {
    ngvector: u32,
    ngvector2: u32,
    field_count: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedDimensions> for Dimensions {
    type Error = WfullError;

    fn try_from(raw: UncheckedDimensions) -> Result<Self> {
        let to_field = |size: u32| i32::try_from(size).map_err(|_| WfullError::ArraySizeOverflow);
        let dims = Self::from_fields(&[to_field(raw.ngvector)?, to_field(raw.ngvector2)?])?;
        if raw.field_count < DIMENSION_FIELDS {
            return Err(WfullError::InsufficientDimensionFields {
                found: raw.field_count,
            });
        }

        Ok(Self {
            field_count: raw.field_count,
            ..dims
        })
    }
}

/// The 18-value metadata record
///
/// Values are exposed verbatim. Slot 0 is conventionally taken to be the
/// frequency point of the file, but nothing in the format guarantees it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderBlock {
    values: [f64; HEADER_LEN],
}

impl HeaderBlock {
    /// Number of values in every header block
    pub const LEN: usize = HEADER_LEN;

    /// Build a header from the decoded values of record 2
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let fixed = values
            .try_into()
            .map_err(|_| WfullError::HeaderLengthMismatch {
                expected: HEADER_LEN,
                found: values.len(),
            })?;
        Ok(Self { values: fixed })
    }

    /// All header values in stored order
    pub fn values(&self) -> &[f64; HEADER_LEN] {
        &self.values
    }

    /// Get a single slot
    pub fn get(&self, slot: usize) -> Option<f64> {
        self.values.get(slot).copied()
    }

    /// Slot 0, which may hold the frequency point
    pub fn possible_frequency(&self) -> f64 {
        self.values[0]
    }
}
