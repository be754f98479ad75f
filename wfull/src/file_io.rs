//! File I/O for WFULL files
//!
//! Opens `WFULLnnnn.tmp` files from disk and decodes them. The k-point a file
//! belongs to is recovered from its name.

use crate::decoder::{decode, ParsedFile};
use crate::error::Result;
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};
use wfull_core::{parse_kpoint_index, WfullError};

/// A decoded WFULL file together with where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct WfullFile {
    pub path: PathBuf,
    /// K-point index from the file name, if the name follows the convention
    pub kpoint_index: Option<u32>,
    pub data: ParsedFile,
}

impl WfullFile {
    /// Open and decode a file named `WFULLnnnn.tmp`
    ///
    /// Fails with `InvalidFileName` before touching the file if the name
    /// does not carry a k-point index.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = file_name(path).ok_or(WfullError::InvalidFileName)?;
        parse_kpoint_index(&name)?;
        Self::open_with_id(path, name)
    }

    /// Open and decode a file whatever its name
    ///
    /// The file name is the source identifier, as with [`open`](Self::open),
    /// and the k-point index is `None` if the name does not carry one.
    pub fn open_lenient<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = file_name(path).unwrap_or_else(|| path.display().to_string());
        Self::open_with_id(path, name)
    }

    /// Open and decode a file under an explicit source identifier
    ///
    /// The k-point index is still taken from the file name when possible.
    pub fn open_with_id<P: AsRef<Path>>(path: P, source_id: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let kpoint_index = file_name(path).and_then(|name| parse_kpoint_index(&name).ok());

        info!("Opening WFULL file: {}", path.display());
        let data = decode_path(path, source_id.into())?;
        info!(
            "Decoded {}: ngvector={}, k-point {:?}",
            path.display(),
            data.dimensions.ngvector,
            kpoint_index
        );

        Ok(Self {
            path: path.to_path_buf(),
            kpoint_index,
            data,
        })
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Decode straight from a memory map of the file
#[cfg(feature = "mmap")]
fn decode_path(path: &Path, source_id: String) -> Result<ParsedFile> {
    use memmap2::MmapOptions;

    let file = File::open(path)?;
    // Mapping an empty file fails on some platforms
    if file.metadata()?.len() == 0 {
        return decode(std::io::empty(), source_id);
    }

    // SAFETY: the map is read-only and dropped before this function returns
    let mmap = unsafe { MmapOptions::new().map(&file)? };
    decode(&mmap[..], source_id)
}

#[cfg(not(feature = "mmap"))]
fn decode_path(path: &Path, source_id: String) -> Result<ParsedFile> {
    let file = File::open(path)?;
    decode(std::io::BufReader::new(file), source_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use wfull_core::{encode_elements, Complex64};

    fn frame(payload: &[u8]) -> Vec<u8> {
        let len = (payload.len() as u32).to_le_bytes();
        let mut bytes = len.to_vec();
        bytes.extend_from_slice(payload);
        bytes.extend_from_slice(&len);
        bytes
    }

    fn sample_bytes() -> Vec<u8> {
        let zero = Complex64::new(0.0, 0.0);
        let mut header = [0.0f64; 18];
        header[0] = 0.125;
        [
            encode_elements(&[1i32, 1]),
            encode_elements(&header),
            encode_elements(&[zero; 3]),
            encode_elements(&[zero; 3]),
            encode_elements(&[Complex64::new(4.0, -1.0)]),
        ]
        .iter()
        .flat_map(|r| frame(r))
        .collect()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wfull-file-io-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_open_named_file() {
        let dir = scratch_dir("named");
        let path = dir.join("WFULL0003.tmp");
        fs::write(&path, sample_bytes()).unwrap();

        let file = WfullFile::open(&path).unwrap();
        assert_eq!(file.kpoint_index, Some(3));
        assert_eq!(file.data.source, "WFULL0003.tmp");
        assert_eq!(WfullFile::open_lenient(&path).unwrap(), file);
        assert_eq!(file.data.header.possible_frequency(), 0.125);
        assert_eq!(file.data.response.as_column_major(), &[Complex64::new(4.0, -1.0)]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_rejects_unconventional_name() {
        let dir = scratch_dir("badname");
        let path = dir.join("screened.bin");
        fs::write(&path, sample_bytes()).unwrap();

        match WfullFile::open(&path) {
            Err(Error::Format(WfullError::InvalidFileName)) => {}
            other => panic!("expected invalid file name, got {other:?}"),
        }

        // Lenient opening labels the file the same way `open` would
        let file = WfullFile::open_lenient(&path).unwrap();
        assert_eq!(file.kpoint_index, None);
        assert_eq!(file.data.source, "screened.bin");

        // An explicit identifier bypasses the naming convention
        let file = WfullFile::open_with_id(&path, "custom").unwrap();
        assert_eq!(file.kpoint_index, None);
        assert_eq!(file.data.source, "custom");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_empty_file() {
        let dir = scratch_dir("empty");
        let path = dir.join("WFULL0001.tmp");
        fs::write(&path, b"").unwrap();

        match WfullFile::open(&path) {
            Err(Error::Format(WfullError::MissingDimensions)) => {}
            other => panic!("expected missing dimensions, got {other:?}"),
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_missing_file() {
        let dir = scratch_dir("missing");
        match WfullFile::open(dir.join("WFULL0009.tmp")) {
            Err(Error::Io(_)) => {}
            other => panic!("expected I/O error, got {other:?}"),
        }
        fs::remove_dir_all(&dir).unwrap();
    }
}
