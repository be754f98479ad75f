//! WFULL - reader for screened Coulomb interaction files
//!
//! Decodes `WFULLnnnn.tmp` files: sequential Fortran-style records holding
//! the screened interaction W(G,G') of one k-point at one frequency, plus
//! the wing corrections and an 18-value header.
//!
//! ## Architecture
//!
//! - **wfull-core**: pure format definitions, element types, column-major
//!   matrices and validation (no I/O)
//! - **wfull**: record reader and decoder over `std::io::Read`, file opening,
//!   batch processing, reports and the `wfull` command-line tool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wfull::{DenseMatrix, WfullFile};
//!
//! fn example() -> wfull::Result<()> {
//!     let file = WfullFile::open("WFULL0001.tmp")?;
//!     let response = &file.data.response;
//!
//!     let (nrows, ncols) = response.dimensions();
//!     println!("W(G,G') is {nrows} x {ncols}");
//!     if let Some(value) = response.get_element(0, 0) {
//!         println!("W(0,0) = {value}");
//!     }
//!     Ok(())
//! }
//! ```

// Re-export core abstractions, format definitions and validation utilities
pub use wfull_core::{
    column_major_index, column_major_position, matches_file_pattern, parse_kpoint_index,
    ColumnMajorMatrix, Complex64, DenseMatrix, Dimensions, ElementType, HeaderBlock,
    MatrixOperations, RecordElement, RecordKind, WfullError,
};

pub mod batch;
pub mod decoder;
pub mod error;
pub mod file_io;
pub mod probe;
pub mod record;
pub mod report;

pub use batch::{process_directory, scan_directory, BatchConfig, FileOutcome, FileStatus};
pub use decoder::{decode, ComplexMatrix, ParsedFile};
pub use error::{Error, Result};
pub use file_io::WfullFile;
pub use probe::{hex_preview, probe_records, RecordInfo};
pub use record::{RawRecord, RecordReader, TypedRecord};
pub use report::{render_report, FileSummary, MatrixStats, PartStats, ReportConfig};
