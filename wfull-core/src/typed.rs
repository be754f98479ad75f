//! Typed reinterpretation of record payloads

extern crate alloc;
use alloc::vec::Vec;

use crate::error::Result;
use crate::traits::RecordElement;
use crate::validation::validate_payload_size;

/// Reinterpret a payload as a flat sequence of `T`
///
/// `record` is only used to label a `MalformedPayloadSize` failure.
pub fn decode_elements<T: RecordElement>(record: usize, payload: &[u8]) -> Result<Vec<T>> {
    let count = validate_payload_size(record, payload.len(), T::SIZE)?;

    let mut elements = Vec::with_capacity(count);
    elements.extend(payload.chunks_exact(T::SIZE).map(T::from_le_slice));
    Ok(elements)
}

/// Flatten elements back to their little-endian byte form
pub fn encode_elements<T: RecordElement>(elements: &[T]) -> Vec<u8> {
    let mut bytes = alloc::vec![0u8; elements.len() * T::SIZE];
    for (element, chunk) in elements.iter().zip(bytes.chunks_exact_mut(T::SIZE)) {
        element.write_le(chunk);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WfullError;
    use alloc::vec;
    use num_complex::Complex64;

    #[test]
    fn test_decode_i32() {
        let payload = [2u8, 0, 0, 0, 5, 0, 0, 0];
        assert_eq!(decode_elements::<i32>(1, &payload), Ok(vec![2, 5]));
    }

    #[test]
    fn test_decode_complex() {
        let values = vec![Complex64::new(1.0, -1.0), Complex64::new(0.5, 2.5)];
        let payload = encode_elements(&values);
        assert_eq!(payload.len(), 32);
        assert_eq!(decode_elements::<Complex64>(3, &payload), Ok(values));
    }

    #[test]
    fn test_decode_rejects_partial_element() {
        let payload = [0u8; 20];
        assert_eq!(
            decode_elements::<Complex64>(5, &payload),
            Err(WfullError::MalformedPayloadSize {
                record: 5,
                length: 20,
                element_size: 16
            })
        );
    }

    #[test]
    fn test_bytes_round_trip_for_every_width() {
        // 48 bytes divides evenly by 4, 8 and 16
        let payload: Vec<u8> = (0u8..48).map(|b| b.wrapping_mul(37)).collect();

        let ints = decode_elements::<i32>(1, &payload).unwrap();
        assert_eq!(encode_elements(&ints), payload);

        let floats = decode_elements::<f64>(2, &payload).unwrap();
        assert_eq!(floats.len(), 6);
        assert_eq!(encode_elements(&floats), payload);

        let complex = decode_elements::<Complex64>(3, &payload).unwrap();
        assert_eq!(complex.len(), 3);
        assert_eq!(encode_elements(&complex), payload);
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(decode_elements::<f64>(2, &[]), Ok(vec![]));
    }
}
