//! Record-level inspection of a stream
//!
//! Walks the records of any sequential file without applying the WFULL
//! layout, reporting where each record sits and what element counts its
//! payload would give. Useful for files the decoder rejects.

use crate::error::Result;
use crate::record::RecordReader;
use std::fmt::Write as _;
use std::io::Read;
use wfull_core::{validate_payload_size, ElementType, RecordKind};

/// What the probe learned about one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInfo {
    /// 1-based position in the stream
    pub index: usize,
    /// Byte offset of the leading marker
    pub offset: u64,
    /// Payload length in bytes
    pub length: u32,
    /// Element counts per type, `None` where the length doesn't divide
    pub counts: [(ElementType, Option<usize>); 3],
    /// The first bytes of the payload
    pub preview: Vec<u8>,
}

impl RecordInfo {
    /// The role this position plays in a WFULL file, if any
    pub fn expected_kind(&self) -> Option<RecordKind> {
        self.index
            .checked_sub(1)
            .and_then(|i| RecordKind::SEQUENCE.get(i).copied())
    }

    /// Element count under the type this position holds in a WFULL file
    pub fn expected_count(&self) -> Option<usize> {
        self.expected_kind()
            .and_then(|kind| self.count(kind.element_type()))
    }

    /// Element count for one type
    pub fn count(&self, element_type: ElementType) -> Option<usize> {
        self.counts
            .iter()
            .find(|(t, _)| *t == element_type)
            .and_then(|(_, count)| *count)
    }
}

/// Read up to `limit` records, keeping `preview_bytes` of each payload
///
/// Stops cleanly at end of stream; framing errors are returned as-is.
pub fn probe_records<R: Read>(
    source: R,
    limit: Option<usize>,
    preview_bytes: usize,
) -> Result<Vec<RecordInfo>> {
    let mut reader = RecordReader::new(source);
    let mut records = Vec::new();

    while limit.map_or(true, |limit| records.len() < limit) {
        let Some(record) = reader.read_record()? else {
            break;
        };

        let payload = record.payload();
        let counts = ElementType::ALL.map(|element_type| {
            let count =
                validate_payload_size(record.index(), payload.len(), element_type.size_bytes())
                    .ok();
            (element_type, count)
        });

        records.push(RecordInfo {
            index: record.index(),
            offset: record.offset(),
            length: record.declared_len(),
            counts,
            preview: payload[..preview_bytes.min(payload.len())].to_vec(),
        });
    }

    Ok(records)
}

/// Lowercase hex of the first `n` bytes
pub fn hex_preview(bytes: &[u8], n: usize) -> String {
    let mut out = String::with_capacity(2 * n.min(bytes.len()));
    for byte in bytes.iter().take(n) {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn frame(payload: &[u8]) -> Vec<u8> {
        let len = (payload.len() as u32).to_le_bytes();
        let mut bytes = len.to_vec();
        bytes.extend_from_slice(payload);
        bytes.extend_from_slice(&len);
        bytes
    }

    #[test]
    fn test_probe_counts_and_offsets() {
        let mut bytes = frame(&[0; 8]);
        bytes.extend(frame(&[0xde, 0xad, 0xbe, 0xef, 0, 0]));
        bytes.extend(frame(&[1; 32]));

        let records = probe_records(Cursor::new(bytes), None, 4).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].offset, 0);
        assert_eq!(records[0].count(ElementType::I32), Some(2));
        assert_eq!(records[0].count(ElementType::F64), Some(1));
        assert_eq!(records[0].count(ElementType::Complex128), None);
        assert_eq!(records[0].expected_kind(), Some(RecordKind::Dimensions));
        assert_eq!(records[0].expected_count(), Some(2));

        assert_eq!(records[1].offset, 16);
        assert_eq!(records[1].length, 6);
        assert_eq!(records[1].count(ElementType::I32), None);
        assert_eq!(hex_preview(&records[1].preview, 16), "deadbeef");

        assert_eq!(records[2].count(ElementType::Complex128), Some(2));
        assert_eq!(records[2].expected_kind(), Some(RecordKind::Wing));
        assert_eq!(records[2].expected_count(), Some(2));

        // Six bytes hold no whole float64 values, as a header would need
        assert_eq!(records[1].expected_kind(), Some(RecordKind::Header));
        assert_eq!(records[1].expected_count(), None);
    }

    #[test]
    fn test_probe_limit() {
        let bytes: Vec<u8> = (0..7).flat_map(|_| frame(&[0; 4])).collect();
        let records = probe_records(Cursor::new(bytes.clone()), Some(3), 0).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0].preview.is_empty());

        let records = probe_records(Cursor::new(bytes), None, 0).unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[6].expected_kind(), None);
    }

    #[test]
    fn test_probe_surfaces_corruption() {
        let mut bytes = frame(&[0; 4]);
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(&[0; 4]);
        bytes.extend_from_slice(&5u32.to_le_bytes());

        assert!(probe_records(Cursor::new(bytes), None, 0).is_err());
    }

    #[test]
    fn test_hex_preview() {
        assert_eq!(hex_preview(&[0x00, 0x0f, 0xa0], 2), "000f");
        assert_eq!(hex_preview(&[], 4), "");
    }
}
