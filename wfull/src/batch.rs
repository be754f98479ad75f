//! Directory-level batch processing
//!
//! Finds every `WFULL????.tmp` file in a directory and decodes them in
//! parallel, one file per task. A file that fails to decode is recorded in
//! its outcome and does not stop the rest of the batch.

use crate::error::{Error, Result};
use crate::file_io::WfullFile;
use crate::report::{write_report_file, FileSummary, ReportConfig};
use log::{info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use wfull_core::matches_file_pattern;

/// Configuration for a batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Sub-directory of the input directory that receives reports
    pub output_dir_name: String,
    /// Whether readable reports are written at all
    pub write_reports: bool,
    pub report: ReportConfig,
}

impl BatchConfig {
    /// Set the report sub-directory name
    pub fn with_output_dir_name(mut self, name: impl Into<String>) -> Self {
        self.output_dir_name = name.into();
        self
    }

    /// Enable or disable report writing
    pub fn with_write_reports(mut self, write_reports: bool) -> Self {
        self.write_reports = write_reports;
        self
    }

    /// Set the report layout
    pub fn with_report_config(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir_name: "readable".to_string(),
            write_reports: true,
            report: ReportConfig::default(),
        }
    }
}

/// Result of processing one file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug)]
pub enum FileStatus {
    Decoded {
        summary: FileSummary,
        report_path: Option<PathBuf>,
    },
    Failed(Error),
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Decoded { .. })
    }
}

/// List the WFULL files in `dir`, sorted by name
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if entry.file_type()?.is_file() && matches_file_pattern(&name.to_string_lossy()) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Decode every WFULL file in `dir`, optionally writing readable reports
///
/// Outcomes come back in file-name order.
pub fn process_directory(dir: &Path, config: &BatchConfig) -> Result<Vec<FileOutcome>> {
    let files = scan_directory(dir)?;
    info!("Found {} WFULL files in {}", files.len(), dir.display());

    let output_dir = dir.join(&config.output_dir_name);
    if config.write_reports && !files.is_empty() {
        fs::create_dir_all(&output_dir)?;
    }

    let outcomes = files
        .into_par_iter()
        .map(|path| {
            let status = match process_file(&path, &output_dir, config) {
                Ok((summary, report_path)) => FileStatus::Decoded {
                    summary,
                    report_path,
                },
                Err(e) => {
                    warn!("Skipping {}: {e}", path.display());
                    FileStatus::Failed(e)
                }
            };
            FileOutcome { path, status }
        })
        .collect();

    Ok(outcomes)
}

fn process_file(
    path: &Path,
    output_dir: &Path,
    config: &BatchConfig,
) -> Result<(FileSummary, Option<PathBuf>)> {
    let file = WfullFile::open(path)?;
    let summary = FileSummary::from(&file);

    if !config.write_reports {
        return Ok((summary, None));
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let report_path = output_dir.join(format!("{stem}_readable.txt"));
    write_report_file(&report_path, &file.data, file.kpoint_index, &config.report)?;
    info!("Data written to {}", report_path.display());

    Ok((summary, Some(report_path)))
}
