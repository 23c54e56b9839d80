//! Paperscan CLI: extract titles and abstracts from a directory of text files.
//!
//! Usage:
//!   paperscan [--authors] [--summary txt|xml] <source_dir>
//!
//! Results go to `<source_dir>/parsed_texts/`, which is rebuilt on every run.
//! Log verbosity is read from `PAPERSCAN_LOG` (e.g. `PAPERSCAN_LOG=paperscan=debug`).
//! Skipped documents and artifact name collisions are printed whatever the
//! log filter says.

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use paperscan::{run_directory, PipelineConfig, RunReport, SummaryFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "paperscan",
    version,
    about = "Extract titles and abstracts from plain-text papers"
)]
struct Cli {
    /// Directory containing the .txt documents
    source_dir: PathBuf,

    /// Append the author block as a fourth line of every artifact
    #[arg(long)]
    authors: bool,

    /// Also write a combined summary of the run
    #[arg(long, value_enum)]
    summary: Option<SummaryArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SummaryArg {
    /// summary.txt with one block per document
    Txt,
    /// articles.xml with one <article> per document
    Xml,
}

impl From<SummaryArg> for SummaryFormat {
    fn from(arg: SummaryArg) -> Self {
        match arg {
            SummaryArg::Txt => SummaryFormat::Text,
            SummaryArg::Xml => SummaryFormat::Xml,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("PAPERSCAN_LOG")
        .unwrap_or_else(|_| EnvFilter::new("paperscan=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &RunReport) {
    for skipped in &report.skipped {
        eprintln!(
            "Skipped {}: {}",
            skipped.file.to_string_lossy(),
            skipped.reason
        );
    }

    println!(
        "Processing complete. Parsed files written to: {}",
        report.destination.display()
    );
    if let Some(summary) = &report.summary {
        println!("Summary written to: {}", summary.display());
    }
    for collision in &report.collisions {
        println!(
            "Note: {} and {} both map to {}; it holds the result for {}",
            collision.earlier.to_string_lossy(),
            collision.later.to_string_lossy(),
            collision.artifact.to_string_lossy(),
            collision.later.to_string_lossy(),
        );
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    init_logging();

    let mut config = PipelineConfig::new(cli.source_dir).with_authors(cli.authors);
    if let Some(summary) = cli.summary {
        config = config.with_summary(summary.into());
    }

    match run_directory(&config) {
        Ok(report) => print_report(&report),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
