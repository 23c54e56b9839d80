//! Directory-to-directory extraction pipeline
//!
//! One run resets the destination once, then takes every eligible document
//! through load -> extract -> write independently of the others. Optionally
//! the author block is appended to each artifact and a combined summary of the
//! run is written next to the artifacts.
//!
//! # Example
//!
//! ```no_run
//! use paperscan::pipeline::{run_directory, PipelineConfig};
//!
//! let report = run_directory(&PipelineConfig::new("papers"))?;
//! println!("{} written to {}", report.written, report.destination.display());
//! # Ok::<(), paperscan::pipeline::PipelineError>(())
//! ```

mod orchestrator;
mod summary;
mod types;

pub use orchestrator::{run_directory, Pipeline};
pub use summary::{render_summary, SummaryEntry};
pub use types::{
    ArtifactCollision, PipelineConfig, PipelineError, PipelineResult, RunReport, SkippedDocument,
    SummaryFormat, DEFAULT_ARTIFACT_SUFFIX, DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIR,
};
