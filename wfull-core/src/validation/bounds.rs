//! Payload size and shape validation
//!
//! Pure arithmetic checks on payload lengths and matrix extents with
//! overflow protection. No I/O.

use crate::WfullError;

/// Validate that a payload of `byte_len` bytes holds whole elements
///
/// Returns the element count. Elements are tightly packed, so the only
/// requirement is that the length is an exact multiple of the element size.
pub const fn validate_payload_size(
    record: usize,
    byte_len: usize,
    element_size: usize,
) -> Result<usize, WfullError> {
    if element_size == 0 || byte_len % element_size != 0 {
        return Err(WfullError::MalformedPayloadSize {
            record,
            length: byte_len,
            element_size,
        });
    }

    Ok(byte_len / element_size)
}

/// Element count of an `nrows x ncols` matrix, rejecting overflow
pub const fn checked_shape(nrows: usize, ncols: usize) -> Result<usize, WfullError> {
    match nrows.checked_mul(ncols) {
        Some(count) => Ok(count),
        None => Err(WfullError::ArraySizeOverflow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_payload_size() {
        assert_eq!(validate_payload_size(1, 16, 4), Ok(4));
        assert_eq!(validate_payload_size(2, 144, 8), Ok(18));
        assert_eq!(validate_payload_size(3, 96, 16), Ok(6));

        // Empty payloads hold zero elements
        assert_eq!(validate_payload_size(1, 0, 16), Ok(0));

        assert_eq!(
            validate_payload_size(3, 17, 16),
            Err(WfullError::MalformedPayloadSize {
                record: 3,
                length: 17,
                element_size: 16
            })
        );
        assert_eq!(
            validate_payload_size(1, 6, 4),
            Err(WfullError::MalformedPayloadSize {
                record: 1,
                length: 6,
                element_size: 4
            })
        );
    }

    #[test]
    fn test_checked_shape() {
        assert_eq!(checked_shape(2, 3), Ok(6));
        assert_eq!(checked_shape(0, 3), Ok(0));
        assert_eq!(checked_shape(usize::MAX, 2), Err(WfullError::ArraySizeOverflow));
    }
}
