//! Error type for WFULL I/O operations

use std::path::PathBuf;
use thiserror::Error;
use wfull_core::WfullError;

/// The error type for reading, decoding and batch processing
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying byte source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream is not a well-formed WFULL file
    #[error(transparent)]
    Format(#[from] WfullError),

    /// A batch was pointed at a directory that does not exist
    #[error("Directory {} not found", .0.display())]
    DirectoryNotFound(PathBuf),
}

/// A convenience `Result` alias using the crate's `Error` type
pub type Result<T> = std::result::Result<T, Error>;
