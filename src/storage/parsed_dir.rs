//! Output directory sink

use super::traits::{render_record, RecordSink, StorageError, StorageResult};
use crate::extract::ExtractionRecord;
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Sink writing one text artifact per record into a dedicated directory
///
/// The directory is owned by the sink: `reset` deletes it with everything
/// inside and recreates it empty.
#[derive(Debug, Clone)]
pub struct ParsedTextsDir {
    dir: PathBuf,
}

impl ParsedTextsDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the artifact with the given name
    pub fn artifact_path(&self, artifact_name: impl AsRef<OsStr>) -> PathBuf {
        self.dir.join(artifact_name.as_ref())
    }
}

impl RecordSink for ParsedTextsDir {
    fn location(&self) -> &Path {
        &self.dir
    }

    fn reset(&mut self) -> StorageResult<()> {
        // symlink_metadata so a symlinked destination is unlinked, not followed
        let removed = match fs::symlink_metadata(&self.dir) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&self.dir),
            Ok(_) => fs::remove_file(&self.dir),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        };
        removed.map_err(|e| StorageError::io(&self.dir, e))?;

        fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;
        tracing::debug!(dir = %self.dir.display(), "destination reset");
        Ok(())
    }

    fn write(&mut self, artifact_name: &OsStr, record: &ExtractionRecord) -> StorageResult<()> {
        let path = self.artifact_path(artifact_name);
        fs::write(&path, render_record(record)).map_err(|e| StorageError::io(&path, e))
    }

    fn write_summary(&mut self, file_name: &OsStr, contents: &[u8]) -> StorageResult<()> {
        let path = self.artifact_path(file_name);
        fs::write(&path, contents).map_err(|e| StorageError::io(&path, e))?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "summary written");
        Ok(())
    }
}
