//! Configuration, report and error types for a pipeline run

use crate::extract::normalize_filename;
use crate::storage::names::{name_bytes, name_from_bytes};
use crate::storage::StorageError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default name of the destination subdirectory
pub const DEFAULT_OUTPUT_DIR: &str = "parsed_texts";
/// Default extension of eligible documents
pub const DEFAULT_EXTENSION: &str = "txt";
/// Default suffix appended to the input stem to name an artifact
pub const DEFAULT_ARTIFACT_SUFFIX: &str = "_parsed";

/// Layout of the optional run summary written next to the artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    /// One labelled block per document, then run totals (`summary.txt`)
    Text,
    /// One `<article>` element per document (`articles.xml`)
    Xml,
}

impl SummaryFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            SummaryFormat::Text => "summary.txt",
            SummaryFormat::Xml => "articles.xml",
        }
    }
}

/// Configuration for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory holding the input documents
    pub source_dir: PathBuf,
    /// Name of the destination directory, created inside `source_dir`
    pub output_dir_name: String,
    /// Extension (without dot) of eligible documents
    pub extension: String,
    /// Suffix appended to each input stem to name its artifact
    pub artifact_suffix: String,
    /// Append the author block as a fourth artifact line
    pub include_authors: bool,
    /// Also write a combined summary of every parsed document
    pub summary: Option<SummaryFormat>,
}

impl PipelineConfig {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir_name: DEFAULT_OUTPUT_DIR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            artifact_suffix: DEFAULT_ARTIFACT_SUFFIX.to_string(),
            include_authors: false,
            summary: None,
        }
    }

    pub fn with_output_dir_name(mut self, name: impl Into<String>) -> Self {
        self.output_dir_name = name.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_artifact_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.artifact_suffix = suffix.into();
        self
    }

    pub fn with_authors(mut self, include: bool) -> Self {
        self.include_authors = include;
        self
    }

    pub fn with_summary(mut self, format: SummaryFormat) -> Self {
        self.summary = Some(format);
        self
    }

    /// Whether the author pass has to run for this configuration
    pub fn needs_authors(&self) -> bool {
        self.include_authors || self.summary.is_some()
    }

    /// Destination directory for this run
    pub fn output_dir(&self) -> PathBuf {
        self.source_dir.join(&self.output_dir_name)
    }

    /// Artifact name for an input file: normalized stem, suffix, `.txt`
    ///
    /// `paper 1.txt` becomes `paper_1_parsed.txt`. The stem keeps its bytes,
    /// so a non-UTF-8 filename yields a non-UTF-8 artifact name. Distinct
    /// inputs can map to one name (`a b.txt` and `a_b.txt`).
    pub fn artifact_name(&self, file_name: impl AsRef<OsStr>) -> OsString {
        let file_name = file_name.as_ref();
        let stem = Path::new(file_name).file_stem().unwrap_or(file_name);

        let mut name = normalize_filename(&name_bytes(stem));
        name.extend_from_slice(self.artifact_suffix.as_bytes());
        name.extend_from_slice(b".txt");
        name_from_bytes(name)
    }
}

/// A document that produced no artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub file: OsString,
    /// Display form of the load or write error
    pub reason: String,
}

/// Two inputs of one run that share an artifact name
///
/// The later document's artifact replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCollision {
    pub artifact: OsString,
    /// Document whose artifact was replaced
    pub earlier: OsString,
    /// Document written last
    pub later: OsString,
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Where the artifacts were written
    pub destination: PathBuf,
    /// Eligible documents enumerated
    pub documents_seen: usize,
    /// Artifacts written
    pub written: usize,
    /// Documents skipped because they could not be read or written
    pub skipped: Vec<SkippedDocument>,
    /// Artifact names claimed by more than one document
    pub collisions: Vec<ArtifactCollision>,
    /// Combined summary file, when one was requested
    pub summary: Option<PathBuf>,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl RunReport {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            documents_seen: 0,
            written: 0,
            skipped: Vec::new(),
            collisions: Vec::new(),
            summary: None,
            elapsed: Duration::ZERO,
        }
    }
}

/// Fatal errors that stop a run before or during enumeration
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Invalid source: {0}")]
    InvalidSource(#[source] StorageError),

    #[error("Cannot prepare destination: {0}")]
    Destination(#[source] StorageError),

    #[error("Cannot list documents: {0}")]
    Enumeration(#[source] StorageError),

    #[error("Cannot write summary: {0}")]
    Summary(#[source] StorageError),
}

/// Result type for pipeline runs
pub type PipelineResult<T> = Result<T, PipelineError>;
