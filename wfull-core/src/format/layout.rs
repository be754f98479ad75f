//! Fixed record layout of a WFULL file
//!
//! The format carries no schema beyond record lengths, so the meaning of each
//! record comes from its position alone. This table is that knowledge.

use super::constants::RECORD_COUNT;
use crate::error::WfullError;
use crate::traits::ElementType;

/// The five records a decoder consumes, in stream order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RecordKind {
    /// Record 1: `ngvector`, `ngvector2`, ...
    Dimensions = 1,
    /// Record 2: 18 metadata values
    Header = 2,
    /// Record 3: wing matrix
    Wing = 3,
    /// Record 4: conjugate wing matrix
    ConjugateWing = 4,
    /// Record 5: response matrix W(G,G')
    Response = 5,
}

impl RecordKind {
    /// Records in the order they appear in a file
    pub const SEQUENCE: [RecordKind; RECORD_COUNT] = [
        RecordKind::Dimensions,
        RecordKind::Header,
        RecordKind::Wing,
        RecordKind::ConjugateWing,
        RecordKind::Response,
    ];

    /// 1-based position in the stream
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Element type the payload is reinterpreted as
    pub const fn element_type(&self) -> ElementType {
        match self {
            RecordKind::Dimensions => ElementType::I32,
            RecordKind::Header => ElementType::F64,
            RecordKind::Wing | RecordKind::ConjugateWing | RecordKind::Response => {
                ElementType::Complex128
            }
        }
    }

    /// Error raised when the stream ends before this record
    pub const fn missing(&self) -> WfullError {
        match self {
            RecordKind::Dimensions => WfullError::MissingDimensions,
            RecordKind::Header => WfullError::MissingHeader,
            RecordKind::Wing => WfullError::MissingWing,
            RecordKind::ConjugateWing => WfullError::MissingCWing,
            RecordKind::Response => WfullError::MissingResponse,
        }
    }

    /// Error raised when this record holds the wrong number of elements
    pub const fn length_mismatch(&self, expected: usize, found: usize) -> WfullError {
        match self {
            RecordKind::Dimensions => WfullError::InsufficientDimensionFields { found },
            RecordKind::Header => WfullError::HeaderLengthMismatch { expected, found },
            RecordKind::Wing => WfullError::WingShapeMismatch { expected, found },
            RecordKind::ConjugateWing => WfullError::CWingShapeMismatch { expected, found },
            RecordKind::Response => WfullError::ResponseShapeMismatch { expected, found },
        }
    }
}

impl core::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RecordKind::Dimensions => write!(f, "dimensions"),
            RecordKind::Header => write!(f, "header"),
            RecordKind::Wing => write!(f, "WING"),
            RecordKind::ConjugateWing => write!(f, "CWING"),
            RecordKind::Response => write!(f, "response"),
        }
    }
}
