//! Shared fixtures: hand-framed WFULL byte streams

#![allow(dead_code)]

use wfull::Complex64;
use wfull_core::encode_elements;

/// Frame a payload with matching leading and trailing markers
pub fn frame(payload: &[u8]) -> Vec<u8> {
    let len = (payload.len() as u32).to_le_bytes();
    let mut bytes = len.to_vec();
    bytes.extend_from_slice(payload);
    bytes.extend_from_slice(&len);
    bytes
}

/// Payloads of the five records of a synthetic file
pub struct Fixture {
    pub records: Vec<Vec<u8>>,
}

impl Fixture {
    /// A file whose values encode their own positions
    pub fn with_ngvector(ngvector: i32) -> Self {
        let n = ngvector as usize;
        let mut header = [0.0f64; 18];
        for (slot, value) in header.iter_mut().enumerate() {
            *value = slot as f64 * 0.5;
        }
        let wing: Vec<Complex64> = (0..n * 3)
            .map(|i| Complex64::new(i as f64, 100.0 + i as f64))
            .collect();
        let cwing: Vec<Complex64> = wing.iter().map(|v| v.conj()).collect();
        let response: Vec<Complex64> = (0..n * n)
            .map(|i| Complex64::new(1.0 / (i as f64 + 1.0), -(i as f64)))
            .collect();

        Self {
            records: vec![
                encode_elements(&[ngvector, ngvector + 1]),
                encode_elements(&header),
                encode_elements(&wing),
                encode_elements(&cwing),
                encode_elements(&response),
            ],
        }
    }

    /// Byte offsets where each record's leading marker starts
    pub fn record_offsets(&self) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(self.records.len());
        let mut offset = 0;
        for record in &self.records {
            offsets.push(offset);
            offset += record.len() + 8;
        }
        offsets
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.records.iter().flat_map(|r| frame(r)).collect()
    }
}

/// A fresh directory under the system temp dir
pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("wfull-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
