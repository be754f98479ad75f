use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use wfull::{
    hex_preview, probe_records, process_directory, render_report, BatchConfig, ElementType,
    FileStatus, FileSummary, ReportConfig, WfullFile,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "WFULL CLI - Inspect and convert screened Coulomb interaction files")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one file and print a report
    Inspect {
        /// Path to a WFULLnnnn.tmp file
        file: PathBuf,

        /// Print a JSON summary instead of the text report
        #[arg(long)]
        json: bool,

        /// Matrix rows to preview
        #[arg(long, default_value_t = 5)]
        rows: usize,

        /// Response matrix columns to preview
        #[arg(long, default_value_t = 5)]
        cols: usize,
    },
    /// Decode every WFULL????.tmp file in a directory
    Convert {
        /// Directory containing WFULL files
        dir: PathBuf,

        /// Decode only, don't write readable reports
        #[arg(long)]
        no_write: bool,
    },
    /// List the raw records of any sequential file
    Records {
        /// File to walk
        file: PathBuf,

        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,

        /// Payload bytes to show as hex
        #[arg(long, default_value_t = 16)]
        hex: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        Commands::Inspect {
            file,
            json,
            rows,
            cols,
        } => handle_inspect(file, *json, *rows, *cols),
        Commands::Convert { dir, no_write } => handle_convert(dir, !*no_write),
        Commands::Records { file, limit, hex } => handle_records(file, *limit, *hex),
    }
}

fn handle_inspect(path: &Path, json: bool, rows: usize, cols: usize) -> Result<()> {
    // Files renamed away from WFULLnnnn.tmp are still readable, just without a k-point
    let file = WfullFile::open_lenient(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if json {
        let summary = FileSummary::from(&file);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let config = ReportConfig::default()
            .with_preview_rows(rows)
            .with_preview_cols(cols);
        print!("{}", render_report(&file.data, file.kpoint_index, &config));
    }

    Ok(())
}

fn handle_convert(dir: &Path, write_reports: bool) -> Result<()> {
    let config = BatchConfig::default().with_write_reports(write_reports);
    let outcomes = process_directory(dir, &config)
        .with_context(|| format!("Failed to process {}", dir.display()))?;

    if outcomes.is_empty() {
        bail!("No WFULLXXXX.tmp files found in {}", dir.display());
    }

    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.status {
            FileStatus::Decoded {
                summary,
                report_path,
            } => {
                print!(
                    "OK    {}  ngvector={}",
                    outcome.path.display(),
                    summary.ngvector
                );
                match report_path {
                    Some(report) => println!("  -> {}", report.display()),
                    None => println!(),
                }
            }
            FileStatus::Failed(e) => {
                failed += 1;
                println!("FAIL  {}  {e}", outcome.path.display());
            }
        }
    }

    println!(
        "\n{} of {} files decoded",
        outcomes.len() - failed,
        outcomes.len()
    );
    Ok(())
}

fn handle_records(path: &Path, limit: Option<usize>, hex: usize) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let records = probe_records(BufReader::new(file), limit, hex)
        .with_context(|| format!("Failed to walk records of {}", path.display()))?;

    for record in &records {
        let role = match record.expected_kind() {
            Some(kind) => match record.expected_count() {
                Some(n) => format!("{kind}: {n} x {}", kind.element_type()),
                None => format!("{kind}: not whole {}", kind.element_type()),
            },
            None => "-".to_string(),
        };
        let counts: Vec<String> = ElementType::ALL
            .iter()
            .map(|&t| match record.count(t) {
                Some(n) => format!("{t}={n}"),
                None => format!("{t}=-"),
            })
            .collect();

        println!(
            "Record {:>3} @ {:>10}  {:>10} bytes  [{role}]  {}",
            record.index,
            record.offset,
            record.length,
            counts.join(" ")
        );
        if hex > 0 {
            println!("    {}", hex_preview(&record.preview, hex));
        }
    }
    println!("{} records", records.len());

    Ok(())
}
