//! Structural decoder for WFULL files
//!
//! A WFULL file is five records in a fixed order with no schema beyond the
//! length markers. The decoder walks that sequence once, reinterprets each
//! payload and reshapes the matrix records column-major. Any failure ends
//! the decode; no partial result is produced.

use crate::error::Result;
use crate::record::RecordReader;
use log::debug;
use std::io::Read;
use wfull_core::{
    checked_shape, ColumnMajorMatrix, Complex64, Dimensions, HeaderBlock, RecordElement,
    RecordKind, WfullError,
};

/// Complex matrix as stored in records 3 to 5
pub type ComplexMatrix = ColumnMajorMatrix<Complex64>;

/// Fully decoded contents of one WFULL file
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedParsedFile"))]
pub struct ParsedFile {
    /// Caller-supplied label, e.g. the file name
    pub source: String,
    /// Record 1
    pub dimensions: Dimensions,
    /// Record 2
    pub header: HeaderBlock,
    /// Record 3, `(ngvector, 3)`
    pub wing: ComplexMatrix,
    /// Record 4, `(ngvector, 3)`
    pub cwing: ComplexMatrix,
    /// Record 5, `(ngvector, ngvector)`
    pub response: ComplexMatrix,
}

impl ParsedFile {
    /// Number of G-vectors
    pub fn ngvector(&self) -> usize {
        self.dimensions.rows()
    }

    /// Check that every matrix has the shape record 1 calls for
    pub fn validate(&self) -> std::result::Result<(), WfullError> {
        let matrices = [
            (RecordKind::Wing, &self.wing, self.dimensions.wing_shape()),
            (RecordKind::ConjugateWing, &self.cwing, self.dimensions.wing_shape()),
            (RecordKind::Response, &self.response, self.dimensions.response_shape()),
        ];
        for (kind, matrix, expected) in matrices {
            let found = (matrix.nrows(), matrix.ncols());
            if found != expected {
                return Err(WfullError::MatrixShapeMismatch {
                    record: kind.index(),
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}

/// Wire form of [`ParsedFile`] before the shapes are cross-checked
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedParsedFile {
    source: String,
    dimensions: Dimensions,
    header: HeaderBlock,
    wing: ComplexMatrix,
    cwing: ComplexMatrix,
    response: ComplexMatrix,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedParsedFile> for ParsedFile {
    type Error = WfullError;

    fn try_from(raw: UncheckedParsedFile) -> std::result::Result<Self, WfullError> {
        let parsed = ParsedFile {
            source: raw.source,
            dimensions: raw.dimensions,
            header: raw.header,
            wing: raw.wing,
            cwing: raw.cwing,
            response: raw.response,
        };
        parsed.validate()?;
        Ok(parsed)
    }
}

/// Decode one WFULL file from a byte source
///
/// `source_id` is threaded through unchanged for provenance. Records after
/// the fifth are never read.
pub fn decode<R: Read>(source: R, source_id: impl Into<String>) -> Result<ParsedFile> {
    let source_id = source_id.into();
    let mut decoder = Decoder::new(source);

    let dimensions = decoder.read_dimensions()?;
    debug!(
        "{source_id}: ngvector={}, ngvector2={}",
        dimensions.ngvector, dimensions.ngvector2
    );

    let header = decoder.read_header()?;
    let wing = decoder.read_matrix(RecordKind::Wing, dimensions.wing_shape())?;
    let cwing = decoder.read_matrix(RecordKind::ConjugateWing, dimensions.wing_shape())?;
    let response = decoder.read_matrix(RecordKind::Response, dimensions.response_shape())?;

    Ok(ParsedFile {
        source: source_id,
        dimensions,
        header,
        wing,
        cwing,
        response,
    })
}

/// Drives the record reader through the fixed record sequence
struct Decoder<R> {
    reader: RecordReader<R>,
}

impl<R: Read> Decoder<R> {
    fn new(source: R) -> Self {
        Self {
            reader: RecordReader::new(source),
        }
    }

    /// Next record as `T`, mapping end of stream to the record's own error
    fn next_record<T: RecordElement>(&mut self, kind: RecordKind) -> Result<Vec<T>> {
        debug_assert_eq!(self.reader.records_read() + 1, kind.index());
        debug_assert_eq!(T::ELEMENT_TYPE, kind.element_type());
        match self.reader.read_elements::<T>()? {
            Some(elements) => Ok(elements),
            None => Err(kind.missing().into()),
        }
    }

    fn read_dimensions(&mut self) -> Result<Dimensions> {
        let fields = self.next_record::<i32>(RecordKind::Dimensions)?;
        Ok(Dimensions::from_fields(&fields)?)
    }

    fn read_header(&mut self) -> Result<HeaderBlock> {
        let values = self.next_record::<f64>(RecordKind::Header)?;
        let header = HeaderBlock::from_values(&values)?;
        debug!("Read header block");
        Ok(header)
    }

    fn read_matrix(
        &mut self,
        kind: RecordKind,
        (nrows, ncols): (usize, usize),
    ) -> Result<ComplexMatrix> {
        let data = self.next_record::<Complex64>(kind)?;

        let expected = checked_shape(nrows, ncols)?;
        let found = data.len();

        let matrix = ColumnMajorMatrix::from_column_major(data, nrows, ncols)
            .map_err(|_| kind.length_mismatch(expected, found))?;
        debug!("Read {kind} matrix ({nrows} x {ncols})");
        Ok(matrix)
    }
}
