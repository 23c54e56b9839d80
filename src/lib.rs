//! Paperscan: title and abstract extraction for plain-text papers
//!
//! Reads a directory of text files converted from scientific-paper PDFs and
//! writes one three-line record per file: normalized filename, title, abstract.
//! Content is handled as raw bytes, so any ASCII-compatible encoding passes
//! through unchanged.
//!
//! # Core Concepts
//!
//! - **Extractor**: pure line scanning that finds the title (first non-empty
//!   line) and the abstract (marker line up to the next empty line)
//! - **Sources and sinks**: traits for loading documents and writing records,
//!   with filesystem and in-memory implementations
//! - **Pipeline**: resets the destination once, then processes each document
//!   independently
//!
//! # Example
//!
//! ```
//! use paperscan::{extract, render_record};
//!
//! let record = extract("my paper.txt", &["Title", "Abstract: Body."]);
//! assert_eq!(render_record(&record), b"my_paper.txt\nTitle\nBody.\n");
//! ```

pub mod extract;
pub mod pipeline;
pub mod storage;

pub use extract::{extract, extract_authors, normalize_filename, ExtractionRecord};
pub use pipeline::{
    run_directory, Pipeline, PipelineConfig, PipelineError, RunReport, SummaryFormat,
};
pub use storage::{
    render_record, DocumentSource, ParsedTextsDir, RecordSink, StorageError, TextDirectory,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
