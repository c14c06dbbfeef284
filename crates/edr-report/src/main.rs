mod bootstrap;
mod prompt;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use report_core::error::ReportError;
use report_data::store::EventStore;
use report_render::{console, file};

// ── Options ────────────────────────────────────────────────────────────────────

/// Group endpoint security events by process and render a report
#[derive(Parser, Debug)]
#[command(
    name = "edr-report",
    about = "Group endpoint security events by process and render a report",
    version
)]
struct Options {
    /// Path to the newline-delimited JSON log file (prompted for when omitted)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Report destination (prompted for when omitted)
    #[arg(long, value_enum)]
    output: Option<OutputTarget>,

    /// Base name for the report file; ".txt" is appended
    #[arg(long)]
    name: Option<String>,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    log_level: String,
}

/// Where the rendered report goes.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputTarget {
    /// Fixed-width table on stdout
    Console,
    /// Fixed-width table in a `.txt` file
    File,
}

// ── Pipeline ───────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let options = Options::parse();
    bootstrap::setup_logging(&options.log_level)?;

    tracing::info!("edr-report v{} starting", env!("CARGO_PKG_VERSION"));

    let source = match &options.file {
        Some(path) => path.clone(),
        None => prompt::ask_log_path()?,
    };

    // An unreadable source is fatal: nothing has been processed yet.
    let reader = open_source(&source)?;

    let mut store = EventStore::new();
    store.ingest_lines(reader);
    tracing::info!(
        "{}: {} events retained, {} lines skipped",
        source.display(),
        store.len(),
        store.skipped()
    );

    let grouped = store.finalize();

    let target = match options.output {
        Some(target) => target,
        None => prompt::ask_output_target()?,
    };

    match target {
        OutputTarget::Console => console::print_report(&grouped)?,
        OutputTarget::File => {
            let name = match options.name {
                Some(name) => name,
                None => prompt::ask_file_name()?,
            };
            let path = PathBuf::from(format!("{}.txt", name));
            file::save_report(&path, &grouped)?;
            tracing::info!("Report written to {}", path.display());
        }
    }

    Ok(())
}

/// Open the input log, mapping failure to the fatal
/// [`ReportError::UnreadableSource`].
fn open_source(path: &Path) -> Result<BufReader<File>, ReportError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ReportError::UnreadableSource {
            path: path.to_path_buf(),
            source,
        })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
