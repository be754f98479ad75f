//! Format constants for WFULL record streams

/// Size of one record length marker in bytes
pub const MARKER_SIZE: usize = 4;

/// Bytes of framing around every payload (leading + trailing marker)
pub const FRAMING_OVERHEAD: usize = 2 * MARKER_SIZE;

/// Minimum number of integers in the dimension record
pub const DIMENSION_FIELDS: usize = 2;

/// Number of f64 values in the header record
pub const HEADER_LEN: usize = 18;

/// Column count of the wing and conjugate wing matrices
pub const WING_COLUMNS: usize = 3;

/// Number of records consumed by the decoder
pub const RECORD_COUNT: usize = 5;

/// File naming convention: `WFULLnnnn.tmp`
pub mod file_name {
    /// Leading part of every WFULL file name
    pub const PREFIX: &str = "WFULL";

    /// Trailing extension of every WFULL file name
    pub const SUFFIX: &str = ".tmp";

    /// Number of decimal digits holding the k-point index
    pub const INDEX_DIGITS: usize = 4;
}
