//! Human-readable reports and summary statistics
//!
//! Renders a decoded file as plain text: provenance, dimensions, the header
//! block, matrix shapes, the top-left corner of each matrix and per-matrix
//! statistics over finite values.

use crate::decoder::{ComplexMatrix, ParsedFile};
use crate::error::Result;
use crate::file_io::WfullFile;
use std::fmt::{self, Write as _};
use std::path::Path;
use wfull_core::{Complex64, DenseMatrix, HeaderBlock};

/// Controls how much of each matrix a report shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Rows shown from each matrix
    pub preview_rows: usize,
    /// Columns shown from the response matrix
    pub preview_cols: usize,
    /// Header values listed as "possible metadata"
    pub header_preview: usize,
}

impl ReportConfig {
    /// Set the number of preview rows
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Set the number of preview columns for the response matrix
    pub fn with_preview_cols(mut self, cols: usize) -> Self {
        self.preview_cols = cols;
        self
    }

    /// Set how many header values get the metadata listing
    pub fn with_header_preview(mut self, count: usize) -> Self {
        self.header_preview = count;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            preview_cols: 5,
            header_preview: 8,
        }
    }
}

/// Statistics over the finite values of one real-valued part
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartStats {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl PartStats {
    /// Compute over finite values only; `None` if there are none
    pub fn from_values(values: impl Iterator<Item = f64>) -> Option<Self> {
        let finite: Vec<f64> = values.filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }

        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }
}

/// Statistics of a complex matrix, real and imaginary parts separately
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixStats {
    pub real: Option<PartStats>,
    pub imag: Option<PartStats>,
}

impl MatrixStats {
    pub fn of(matrix: &ComplexMatrix) -> Self {
        let values = matrix.as_column_major();
        Self {
            real: PartStats::from_values(values.iter().map(|v| v.re)),
            imag: PartStats::from_values(values.iter().map(|v| v.im)),
        }
    }
}

/// Compact machine-readable description of a decoded file
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSummary {
    pub source: String,
    pub kpoint_index: Option<u32>,
    pub ngvector: u32,
    pub ngvector2: u32,
    pub possible_frequency: f64,
    pub header: Vec<f64>,
    pub wing_shape: (usize, usize),
    pub cwing_shape: (usize, usize),
    pub response_shape: (usize, usize),
    pub wing_stats: MatrixStats,
    pub cwing_stats: MatrixStats,
    pub response_stats: MatrixStats,
}

impl FileSummary {
    pub fn new(data: &ParsedFile, kpoint_index: Option<u32>) -> Self {
        Self {
            source: data.source.clone(),
            kpoint_index,
            ngvector: data.dimensions.ngvector,
            ngvector2: data.dimensions.ngvector2,
            possible_frequency: data.header.possible_frequency(),
            header: data.header.values().to_vec(),
            wing_shape: data.wing.dimensions(),
            cwing_shape: data.cwing.dimensions(),
            response_shape: data.response.dimensions(),
            wing_stats: MatrixStats::of(&data.wing),
            cwing_stats: MatrixStats::of(&data.cwing),
            response_stats: MatrixStats::of(&data.response),
        }
    }
}

impl From<&WfullFile> for FileSummary {
    fn from(file: &WfullFile) -> Self {
        Self::new(&file.data, file.kpoint_index)
    }
}

/// Render a decoded file as a plain-text report
pub fn render_report(
    data: &ParsedFile,
    kpoint_index: Option<u32>,
    config: &ReportConfig,
) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    let _ = write_report(&mut out, data, kpoint_index, config);
    out
}

/// Render a report and write it to `path`
pub fn write_report_file(
    path: &Path,
    data: &ParsedFile,
    kpoint_index: Option<u32>,
    config: &ReportConfig,
) -> Result<()> {
    std::fs::write(path, render_report(data, kpoint_index, config))?;
    Ok(())
}

fn write_report(
    out: &mut impl fmt::Write,
    data: &ParsedFile,
    kpoint_index: Option<u32>,
    config: &ReportConfig,
) -> fmt::Result {
    writeln!(out, "WFULL File Contents")?;
    writeln!(out, "=================\n")?;

    section(out, "File Information")?;
    writeln!(out, "Source: {}", data.source)?;
    match kpoint_index {
        Some(index) => writeln!(out, "K-point index: {index}")?,
        None => writeln!(out, "K-point index: unknown")?,
    }
    writeln!(
        out,
        "Possible frequency point: {:.6}\n",
        data.header.possible_frequency()
    )?;

    section(out, "Dimensions")?;
    writeln!(out, "ngvector: {}", data.dimensions.ngvector)?;
    writeln!(out, "ngvector2: {}\n", data.dimensions.ngvector2)?;

    section(out, &format!("Header Block ({} values)", HeaderBlock::LEN))?;
    for value in data.header.values() {
        write!(out, " {value:12.6}")?;
    }
    writeln!(out, "\n\nPossible metadata from header:")?;
    let preview: Vec<String> = data
        .header
        .values()
        .iter()
        .take(config.header_preview)
        .map(|v| format!("{v:.6}"))
        .collect();
    writeln!(
        out,
        "First {} values: {}\n",
        preview.len(),
        preview.join(", ")
    )?;

    section(out, "Matrix Shapes")?;
    for (name, matrix) in matrices(data) {
        let (nrows, ncols) = matrix.dimensions();
        writeln!(out, "{name} matrix shape: ({nrows}, {ncols})")?;
    }
    writeln!(out)?;

    for (name, matrix) in matrices(data) {
        let cols = if name == "Response" {
            config.preview_cols
        } else {
            matrix.ncols()
        };
        write_block(out, name, matrix, config.preview_rows, cols)?;
    }

    for (name, matrix) in matrices(data) {
        write_stats(out, name, &MatrixStats::of(matrix))?;
    }

    Ok(())
}

fn matrices(data: &ParsedFile) -> [(&'static str, &ComplexMatrix); 3] {
    [
        ("WING", &data.wing),
        ("CWING", &data.cwing),
        ("Response", &data.response),
    ]
}

fn section(out: &mut impl fmt::Write, title: &str) -> fmt::Result {
    writeln!(out, "{title}:")?;
    writeln!(out, "{}", "-".repeat(title.len() + 1))
}

fn write_block(
    out: &mut impl fmt::Write,
    name: &str,
    matrix: &ComplexMatrix,
    rows: usize,
    cols: usize,
) -> fmt::Result {
    let block = matrix.block(rows, cols);
    let shown_rows = block.len();
    let shown_cols = block.first().map_or(0, Vec::len);

    section(out, &format!("{name} Matrix (first {shown_rows}x{shown_cols} block)"))?;
    writeln!(out, "Real part:")?;
    write_part(out, &block, |v| v.re)?;
    writeln!(out, "\nImaginary part:")?;
    write_part(out, &block, |v| v.im)?;
    writeln!(out)
}

fn write_part(
    out: &mut impl fmt::Write,
    block: &[Vec<Complex64>],
    part: impl Fn(&Complex64) -> f64,
) -> fmt::Result {
    for row in block {
        let line: Vec<String> = row.iter().map(|v| format_scientific(part(v))).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

fn write_stats(out: &mut impl fmt::Write, name: &str, stats: &MatrixStats) -> fmt::Result {
    writeln!(out, "\n{name} Matrix Statistics:")?;
    writeln!(out, "{}", "-".repeat(name.len() + 18))?;

    for (label, part) in [("Real part", &stats.real), ("Imaginary part", &stats.imag)] {
        match part {
            Some(s) => {
                writeln!(out, "{label}:")?;
                writeln!(out, "Mean value: {}", format_scientific(s.mean).trim())?;
                writeln!(out, "Standard deviation: {}", format_scientific(s.std_dev).trim())?;
                writeln!(out, "Minimum value: {}", format_scientific(s.min).trim())?;
                writeln!(out, "Maximum value: {}", format_scientific(s.max).trim())?;
            }
            None => writeln!(
                out,
                "No finite values found in the {} part",
                if label == "Real part" { "real" } else { "imaginary" }
            )?,
        }
    }
    Ok(())
}

/// Format like C's `%12.6e`: six decimals, signed two-digit exponent
pub fn format_scientific(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:>12}");
    }

    let raw = format!("{value:.6e}");
    let formatted = match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => raw,
    };
    format!("{formatted:>12}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wfull_core::{ColumnMajorMatrix, Dimensions};

    fn sample() -> ParsedFile {
        let c = Complex64::new;
        let mut header = [0.0f64; 18];
        header[0] = 1.5;
        ParsedFile {
            source: "WFULL0002.tmp".into(),
            dimensions: Dimensions::from_fields(&[2, 2]).unwrap(),
            header: HeaderBlock::from_values(&header).unwrap(),
            wing: ColumnMajorMatrix::from_column_major(
                (1..=6).map(|v| c(v as f64, 0.0)).collect(),
                2,
                3,
            )
            .unwrap(),
            cwing: ColumnMajorMatrix::from_column_major(vec![c(0.0, f64::NAN); 6], 2, 3).unwrap(),
            response: ColumnMajorMatrix::from_column_major(
                vec![c(10.0, 1.0), c(20.0, 2.0), c(30.0, 3.0), c(40.0, 4.0)],
                2,
                2,
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(1.0), "1.000000e+00");
        assert_eq!(format_scientific(-0.00012345), "-1.234500e-04");
        assert_eq!(format_scientific(12345.0), "1.234500e+04");
        assert_eq!(format_scientific(0.0), "0.000000e+00");
        assert_eq!(format_scientific(1e-300).len(), 13);
        assert_eq!(format_scientific(f64::NAN).trim(), "NaN");
    }

    #[test]
    fn test_part_stats() {
        let values = [1.0, 2.0, 3.0, 4.0, f64::NAN, f64::INFINITY];
        let stats = PartStats::from_values(values.into_iter()).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.5);
        assert!((stats.std_dev - 1.118_033_988_749_895).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);

        assert_eq!(PartStats::from_values([f64::NAN].into_iter()), None);
        assert_eq!(PartStats::from_values(std::iter::empty()), None);
    }

    #[test]
    fn test_matrix_stats() {
        let data = sample();
        let stats = MatrixStats::of(&data.cwing);
        assert_eq!(stats.real.map(|s| s.mean), Some(0.0));
        assert_eq!(stats.imag, None);

        let stats = MatrixStats::of(&data.response);
        assert_eq!(stats.real.map(|s| s.max), Some(40.0));
        assert_eq!(stats.imag.map(|s| s.min), Some(1.0));
    }

    #[test]
    fn test_render_report() {
        let report = render_report(&sample(), Some(2), &ReportConfig::default());

        assert!(report.starts_with("WFULL File Contents\n"));
        assert!(report.contains("K-point index: 2\n"));
        assert!(report.contains("Possible frequency point: 1.500000\n"));
        assert!(report.contains("ngvector: 2\n"));
        assert!(report.contains("Header Block (18 values):\n"));
        assert!(report.contains("First 8 values: 1.500000, 0.000000"));
        assert!(report.contains("WING matrix shape: (2, 3)\n"));
        assert!(report.contains("Response matrix shape: (2, 2)\n"));
        assert!(report.contains("WING Matrix (first 2x3 block):\n"));
        // Row 0 of the wing holds 1, 3, 5
        assert!(report.contains("1.000000e+00 3.000000e+00 5.000000e+00\n"));
        assert!(report.contains("Response Matrix (first 2x2 block):\n"));
        assert!(report.contains("No finite values found in the imaginary part"));
        assert!(report.contains("Maximum value: 4.000000e+01"));
    }

    #[test]
    fn test_report_config_limits_preview() {
        let config = ReportConfig::default()
            .with_preview_rows(1)
            .with_preview_cols(1)
            .with_header_preview(2);
        let report = render_report(&sample(), None, &config);

        assert!(report.contains("K-point index: unknown\n"));
        assert!(report.contains("First 2 values: 1.500000, 0.000000\n"));
        assert!(report.contains("WING Matrix (first 1x3 block):\n"));
        assert!(report.contains("Response Matrix (first 1x1 block):\n"));
    }

    #[test]
    fn test_summary() {
        let summary = FileSummary::new(&sample(), Some(2));
        assert_eq!(summary.kpoint_index, Some(2));
        assert_eq!(summary.ngvector, 2);
        assert_eq!(summary.possible_frequency, 1.5);
        assert_eq!(summary.header.len(), 18);
        assert_eq!(summary.wing_shape, (2, 3));
        assert_eq!(summary.response_shape, (2, 2));
    }
}
