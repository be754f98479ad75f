//! Error types for WFULL decoding operations

/// Errors that can occur while framing or decoding a WFULL record stream
///
/// Record indices are 1-based positions in the stream. Sizes are in bytes
/// unless the variant talks about element counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WfullError {
    /// The stream ended inside a length marker or a payload
    TruncatedRecord {
        record: usize,
        expected: u64,
        available: u64,
    },
    /// Leading and trailing length markers of a record disagree
    RecordSizeMismatch {
        record: usize,
        leading: u32,
        trailing: u32,
    },
    /// Payload length is not a multiple of the requested element size
    MalformedPayloadSize {
        record: usize,
        length: usize,
        element_size: usize,
    },
    /// The stream ended before the dimension record
    MissingDimensions,
    /// The dimension record holds fewer than two integers
    InsufficientDimensionFields { found: usize },
    /// A dimension read from record 1 is not positive
    InvalidDimensions { ngvector: i32, ngvector2: i32 },
    /// The stream ended before the header record
    MissingHeader,
    /// The header record does not hold exactly 18 values
    HeaderLengthMismatch { expected: usize, found: usize },
    /// The stream ended before the wing record
    MissingWing,
    /// Wing element count disagrees with `ngvector * 3`
    WingShapeMismatch { expected: usize, found: usize },
    /// The stream ended before the conjugate wing record
    MissingCWing,
    /// Conjugate wing element count disagrees with `ngvector * 3`
    CWingShapeMismatch { expected: usize, found: usize },
    /// The stream ended before the response record
    MissingResponse,
    /// Response element count disagrees with `ngvector * ngvector`
    ResponseShapeMismatch { expected: usize, found: usize },
    /// Matrix storage does not hold exactly `nrows * ncols` elements
    MatrixLengthMismatch {
        nrows: usize,
        ncols: usize,
        found: usize,
    },
    /// A matrix record's shape disagrees with the dimension record
    MatrixShapeMismatch {
        record: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A size calculation would overflow `usize`
    ArraySizeOverflow,
    /// File name does not follow the `WFULLnnnn.tmp` convention
    InvalidFileName,
}

impl core::fmt::Display for WfullError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WfullError::TruncatedRecord {
                record,
                expected,
                available,
            } => write!(
                f,
                "Truncated record {record}: expected {expected} bytes, only {available} available"
            ),
            WfullError::RecordSizeMismatch {
                record,
                leading,
                trailing,
            } => write!(
                f,
                "Record {record} size mismatch: leading marker {leading} != trailing marker {trailing}"
            ),
            WfullError::MalformedPayloadSize {
                record,
                length,
                element_size,
            } => write!(
                f,
                "Record {record} payload of {length} bytes is not a multiple of element size {element_size}"
            ),
            WfullError::MissingDimensions => write!(f, "Could not read dimensions"),
            WfullError::InsufficientDimensionFields { found } => write!(
                f,
                "Dimension record holds {found} integers, at least 2 required"
            ),
            WfullError::InvalidDimensions {
                ngvector,
                ngvector2,
            } => write!(
                f,
                "Invalid dimensions: ngvector={ngvector}, ngvector2={ngvector2}"
            ),
            WfullError::MissingHeader => write!(f, "Could not read header"),
            WfullError::HeaderLengthMismatch { expected, found } => write!(
                f,
                "Header holds {found} values, expected {expected}"
            ),
            WfullError::MissingWing => write!(f, "Could not read WING matrix"),
            WfullError::WingShapeMismatch { expected, found } => write!(
                f,
                "WING matrix holds {found} elements, expected {expected}"
            ),
            WfullError::MissingCWing => write!(f, "Could not read CWING matrix"),
            WfullError::CWingShapeMismatch { expected, found } => write!(
                f,
                "CWING matrix holds {found} elements, expected {expected}"
            ),
            WfullError::MissingResponse => write!(f, "Could not read response matrix"),
            WfullError::ResponseShapeMismatch { expected, found } => write!(
                f,
                "Response matrix holds {found} elements, expected {expected}"
            ),
            WfullError::MatrixLengthMismatch { nrows, ncols, found } => write!(
                f,
                "Matrix of shape {nrows} x {ncols} cannot hold {found} elements"
            ),
            WfullError::MatrixShapeMismatch {
                record,
                expected,
                found,
            } => write!(
                f,
                "Record {record} matrix shape {found:?} does not match expected {expected:?}"
            ),
            WfullError::ArraySizeOverflow => write!(f, "Array size calculation overflow"),
            WfullError::InvalidFileName => write!(f, "Invalid WFULL file name"),
        }
    }
}

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for WfullError {}

/// Result type for WFULL core operations
pub type Result<T> = core::result::Result<T, WfullError>;
