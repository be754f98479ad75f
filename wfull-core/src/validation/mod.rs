//! Validation utilities for WFULL record streams
//!
//! This module contains pure validation functions with no I/O dependencies:
//! marker agreement, payload sizing and file-name conventions.

pub mod bounds;
pub mod format;
pub mod parsing;

pub use bounds::{checked_shape, validate_payload_size};
pub use format::{decode_marker, record_span, validate_markers};
pub use parsing::{matches_file_pattern, parse_kpoint_index};
