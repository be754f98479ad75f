//! Sequential record reader
//!
//! Reads the length-delimited records of a Fortran-style sequential file:
//! `[u32 LE length][payload][u32 LE length]`. The reader checks that both
//! markers agree and that the payload is complete, and can reinterpret a
//! payload as typed elements.

use crate::error::Result;
use log::debug;
use std::io::{ErrorKind, Read};
use wfull_core::{
    decode_elements, decode_marker, format::constants::MARKER_SIZE, record_span,
    validate_markers, Complex64, ElementType, RecordElement, WfullError,
};

/// One record's payload, as read from the stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    index: usize,
    offset: u64,
    payload: Vec<u8>,
}

impl RawRecord {
    /// 1-based position of the record in its stream
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of the leading marker
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Length declared by both markers
    pub fn declared_len(&self) -> u32 {
        self.payload.len() as u32
    }

    /// Payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Reinterpret the payload as a flat sequence of `T`
    pub fn decode<T: RecordElement>(&self) -> Result<Vec<T>> {
        Ok(decode_elements(self.index, &self.payload)?)
    }

    /// Reinterpret the payload according to a runtime element type
    pub fn decode_as(self, element_type: Option<ElementType>) -> Result<TypedRecord> {
        Ok(match element_type {
            None => TypedRecord::Raw(self.payload),
            Some(ElementType::I32) => TypedRecord::I32(self.decode()?),
            Some(ElementType::F64) => TypedRecord::F64(self.decode()?),
            Some(ElementType::Complex128) => TypedRecord::Complex128(self.decode()?),
        })
    }
}

/// A record payload reinterpreted with a runtime-selected element type
#[derive(Debug, Clone, PartialEq)]
pub enum TypedRecord {
    Raw(Vec<u8>),
    I32(Vec<i32>),
    F64(Vec<f64>),
    Complex128(Vec<Complex64>),
}

impl TypedRecord {
    /// Number of elements (bytes for a raw record)
    pub fn len(&self) -> usize {
        match self {
            TypedRecord::Raw(v) => v.len(),
            TypedRecord::I32(v) => v.len(),
            TypedRecord::F64(v) => v.len(),
            TypedRecord::Complex128(v) => v.len(),
        }
    }

    /// Whether the record holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type, `None` for raw bytes
    pub fn element_type(&self) -> Option<ElementType> {
        match self {
            TypedRecord::Raw(_) => None,
            TypedRecord::I32(_) => Some(ElementType::I32),
            TypedRecord::F64(_) => Some(ElementType::F64),
            TypedRecord::Complex128(_) => Some(ElementType::Complex128),
        }
    }
}

/// Reader over a sequential record stream
///
/// Owns its source for the duration of reading. After any error the source
/// position is wherever the failing read stopped, and further reads are
/// meaningless.
pub struct RecordReader<R> {
    inner: R,
    records_read: usize,
    position: u64,
}

impl<R: Read> RecordReader<R> {
    /// Wrap a byte source positioned at the start of a record
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            records_read: 0,
            position: 0,
        }
    }

    /// Number of records read successfully so far
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Bytes consumed from the source so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read the next record's payload
    ///
    /// Returns `Ok(None)` if the source is exhausted exactly at a record
    /// boundary; this is the only clean way for a stream to end.
    pub fn read_record(&mut self) -> Result<Option<RawRecord>> {
        let index = self.records_read + 1;
        let offset = self.position;

        let leading = match self.read_marker(index)? {
            Some(marker) => marker,
            None => {
                debug!("End of stream after {} records", self.records_read);
                return Ok(None);
            }
        };

        // Read through `take` so a corrupted marker can't force a huge allocation up front
        let mut payload = Vec::new();
        let available = (&mut self.inner)
            .take(leading as u64)
            .read_to_end(&mut payload)? as u64;
        self.position += available;
        if available < leading as u64 {
            return Err(WfullError::TruncatedRecord {
                record: index,
                expected: leading as u64,
                available,
            }
            .into());
        }

        let trailing = self.read_marker(index)?.ok_or(WfullError::TruncatedRecord {
            record: index,
            expected: MARKER_SIZE as u64,
            available: 0,
        })?;
        validate_markers(index, leading, trailing)?;

        debug!(
            "Record {index}: {leading} bytes at offset {offset} ({} bytes on disk)",
            record_span(leading)
        );
        self.records_read = index;

        Ok(Some(RawRecord {
            index,
            offset,
            payload,
        }))
    }

    /// Read the next record as a flat sequence of `T`
    pub fn read_elements<T: RecordElement>(&mut self) -> Result<Option<Vec<T>>> {
        match self.read_record()? {
            Some(record) => record.decode().map(Some),
            None => Ok(None),
        }
    }

    /// Read the next record, optionally reinterpreting it
    pub fn read_as(&mut self, element_type: Option<ElementType>) -> Result<Option<TypedRecord>> {
        match self.read_record()? {
            Some(record) => record.decode_as(element_type).map(Some),
            None => Ok(None),
        }
    }

    /// Read one length marker; `None` if the source had no bytes left at all
    fn read_marker(&mut self, record: usize) -> Result<Option<u32>> {
        let mut buf = [0u8; MARKER_SIZE];
        let mut filled = 0;

        while filled < MARKER_SIZE {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.position += filled as u64;

        match filled {
            0 => Ok(None),
            MARKER_SIZE => Ok(Some(decode_marker(buf))),
            partial => Err(WfullError::TruncatedRecord {
                record,
                expected: MARKER_SIZE as u64,
                available: partial as u64,
            }
            .into()),
        }
    }
}
