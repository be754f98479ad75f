//! Record framing validation
//!
//! Pure checks on the length markers that bracket every record.

use crate::format::constants::FRAMING_OVERHEAD;
use crate::WfullError;

/// Validate that the trailing marker repeats the leading one
///
/// This is the only corruption self-check the container format offers.
pub const fn validate_markers(
    record: usize,
    leading: u32,
    trailing: u32,
) -> Result<(), WfullError> {
    if leading != trailing {
        return Err(WfullError::RecordSizeMismatch {
            record,
            leading,
            trailing,
        });
    }
    Ok(())
}

/// Total bytes a record with a `payload_len` payload occupies on disk
pub const fn record_span(payload_len: u32) -> u64 {
    payload_len as u64 + FRAMING_OVERHEAD as u64
}

/// Decode a length marker from its four little-endian bytes
pub const fn decode_marker(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}
