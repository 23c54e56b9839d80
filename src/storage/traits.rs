//! Storage trait definitions

use crate::extract::ExtractionRecord;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading documents or writing records
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Source directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document not found: {0}")]
    MissingDocument(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// An eligible document found during enumeration, not yet loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Original filename, used as the document's identity
    pub name: OsString,
    /// Location used to load the document
    pub path: PathBuf,
}

impl DocumentRef {
    pub fn new(name: impl Into<OsString>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Filename for log lines and diagnostics
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// A loaded document: its filename and terminator-stripped lines
///
/// Lines are raw bytes as read from the source, with no decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    pub name: OsString,
    pub lines: Vec<Vec<u8>>,
}

impl InputDocument {
    pub fn new(name: impl Into<OsString>, lines: Vec<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Split content into lines on `\n`, stripping a `\r` right before it.
    ///
    /// A final terminator does not start an extra empty line, and a last line
    /// without terminator is kept.
    pub fn from_bytes(name: impl Into<OsString>, content: &[u8]) -> Self {
        let lines = content
            .split_inclusive(|&b| b == b'\n')
            .map(|line| match line.strip_suffix(b"\n") {
                Some(line) => line.strip_suffix(b"\r").unwrap_or(line).to_vec(),
                None => line.to_vec(),
            })
            .collect();
        Self::new(name, lines)
    }
}

/// Trait for document sources
///
/// Enumeration order is implementation-defined; callers must not rely on it.
pub trait DocumentSource {
    /// List the eligible documents
    fn documents(&self) -> StorageResult<Vec<DocumentRef>>;

    /// Load the full line sequence of one document
    fn load(&self, doc: &DocumentRef) -> StorageResult<InputDocument>;
}

/// Trait for record destinations
pub trait RecordSink {
    /// Where records end up, for diagnostics and completion messages
    fn location(&self) -> &Path;

    /// Clear the destination namespace, leaving it empty and ready for writes
    ///
    /// Calling it twice in a row leaves the same empty destination.
    fn reset(&mut self) -> StorageResult<()>;

    /// Write one record as an artifact, replacing any previous content
    fn write(&mut self, artifact_name: &OsStr, record: &ExtractionRecord) -> StorageResult<()>;

    /// Write a run-level file next to the artifacts, replacing any previous content
    fn write_summary(&mut self, file_name: &OsStr, contents: &[u8]) -> StorageResult<()>;
}

/// Render a record in the artifact format: name, title and abstract,
/// each on its own newline-terminated line, with no escaping. Bytes are
/// copied unchanged. A record carrying authors gets them as a fourth line.
pub fn render_record(record: &ExtractionRecord) -> Vec<u8> {
    let mut out = Vec::with_capacity(
        record.normalized_name.len() + record.title.len() + record.abstract_text.len() + 3,
    );
    for field in [&record.normalized_name, &record.title, &record.abstract_text] {
        out.extend_from_slice(field);
        out.push(b'\n');
    }
    if let Some(authors) = &record.authors {
        out.extend_from_slice(authors);
        out.push(b'\n');
    }
    out
}
