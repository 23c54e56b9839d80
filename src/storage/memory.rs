//! In-memory source and sink, for tests and embedding

use super::traits::{
    render_record, DocumentRef, DocumentSource, InputDocument, RecordSink, StorageError,
    StorageResult,
};
use crate::extract::ExtractionRecord;
use std::collections::{BTreeMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

/// Source holding documents as bytes, with optional simulated read failures
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<(OsString, Option<Vec<u8>>)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a readable document
    pub fn with_document(mut self, name: impl Into<OsString>, content: impl Into<Vec<u8>>) -> Self {
        self.documents.push((name.into(), Some(content.into())));
        self
    }

    /// Add a document that is listed but fails to load
    pub fn with_unreadable(mut self, name: impl Into<OsString>) -> Self {
        self.documents.push((name.into(), None));
        self
    }
}

impl DocumentSource for MemorySource {
    fn documents(&self) -> StorageResult<Vec<DocumentRef>> {
        Ok(self
            .documents
            .iter()
            .map(|(name, _)| DocumentRef::new(name.clone(), name))
            .collect())
    }

    fn load(&self, doc: &DocumentRef) -> StorageResult<InputDocument> {
        let (_, content) = self
            .documents
            .iter()
            .find(|(name, _)| *name == doc.name)
            .ok_or_else(|| StorageError::MissingDocument(doc.display_name().into_owned()))?;

        match content {
            Some(content) => Ok(InputDocument::from_bytes(doc.name.clone(), content)),
            None => Err(StorageError::io(
                &doc.path,
                io::Error::new(io::ErrorKind::PermissionDenied, "simulated read failure"),
            )),
        }
    }
}

/// Sink keeping rendered artifacts in a map keyed by artifact name
#[derive(Debug, Clone)]
pub struct MemorySink {
    location: PathBuf,
    artifacts: BTreeMap<OsString, Vec<u8>>,
    failing: HashSet<OsString>,
    resets: usize,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            location: PathBuf::from("memory"),
            artifacts: BTreeMap::new(),
            failing: HashSet::new(),
            resets: 0,
        }
    }

    /// Make writes to the given artifact name fail
    pub fn with_failing_write(mut self, artifact_name: impl Into<OsString>) -> Self {
        self.failing.insert(artifact_name.into());
        self
    }

    /// Seed an artifact, as if left over from an earlier run
    pub fn with_artifact(mut self, name: impl Into<OsString>, content: impl Into<Vec<u8>>) -> Self {
        self.artifacts.insert(name.into(), content.into());
        self
    }

    pub fn artifacts(&self) -> &BTreeMap<OsString, Vec<u8>> {
        &self.artifacts
    }

    pub fn get(&self, artifact_name: impl AsRef<OsStr>) -> Option<&[u8]> {
        self.artifacts
            .get(artifact_name.as_ref())
            .map(Vec::as_slice)
    }

    /// Number of times `reset` has been called
    pub fn resets(&self) -> usize {
        self.resets
    }

    fn check_writable(&self, name: &OsStr) -> StorageResult<()> {
        if self.failing.contains(name) {
            return Err(StorageError::io(
                self.location.join(name),
                io::Error::new(io::ErrorKind::Other, "simulated write failure"),
            ));
        }
        Ok(())
    }
}

impl RecordSink for MemorySink {
    fn location(&self) -> &Path {
        &self.location
    }

    fn reset(&mut self) -> StorageResult<()> {
        self.artifacts.clear();
        self.resets += 1;
        Ok(())
    }

    fn write(&mut self, artifact_name: &OsStr, record: &ExtractionRecord) -> StorageResult<()> {
        self.check_writable(artifact_name)?;
        self.artifacts
            .insert(artifact_name.to_os_string(), render_record(record));
        Ok(())
    }

    fn write_summary(&mut self, file_name: &OsStr, contents: &[u8]) -> StorageResult<()> {
        self.check_writable(file_name)?;
        self.artifacts
            .insert(file_name.to_os_string(), contents.to_vec());
        Ok(())
    }
}
