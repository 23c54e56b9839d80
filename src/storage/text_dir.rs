//! Plain-text directory source

use super::traits::{DocumentRef, DocumentSource, InputDocument, StorageError, StorageResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Source backed by the regular files of one directory
///
/// Only files directly inside the directory (no recursion) whose extension
/// equals the configured one are eligible. Everything else is skipped silently.
/// Documents are listed in filename order so repeated runs see the same sequence.
#[derive(Debug, Clone)]
pub struct TextDirectory {
    root: PathBuf,
    extension: String,
}

impl TextDirectory {
    /// Open a source directory, checking that it exists and is a directory
    pub fn open(root: impl AsRef<Path>, extension: impl Into<String>) -> StorageResult<Self> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(StorageError::NotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(StorageError::NotADirectory(root.to_path_buf()));
        }

        Ok(Self {
            root: root.to_path_buf(),
            extension: extension.into(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn is_eligible(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .extension()
                .map_or(false, |ext| ext == self.extension.as_str())
    }
}

impl DocumentSource for TextDirectory {
    fn documents(&self) -> StorageResult<Vec<DocumentRef>> {
        let entries = fs::read_dir(&self.root).map_err(|e| StorageError::io(&self.root, e))?;

        let mut docs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::io(&self.root, e))?;
            let path = entry.path();

            if !self.is_eligible(&path) {
                tracing::trace!(path = %path.display(), "skipping non-eligible entry");
                continue;
            }

            docs.push(DocumentRef::new(entry.file_name(), path));
        }

        docs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(docs)
    }

    fn load(&self, doc: &DocumentRef) -> StorageResult<InputDocument> {
        let bytes = fs::read(&doc.path).map_err(|e| StorageError::io(&doc.path, e))?;
        Ok(InputDocument::from_bytes(doc.name.clone(), &bytes))
    }
}
