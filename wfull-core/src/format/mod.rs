//! Binary format definitions for WFULL files
//!
//! This module contains pure data structure definitions for the record
//! stream. No I/O operations, only format knowledge.

pub mod constants;
pub mod header;
pub mod layout;

// Re-export format definitions
pub use header::{Dimensions, HeaderBlock};
pub use layout::RecordKind;
