//! Temporary corpus fixtures

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A source directory living in a temporary location
pub struct TestCorpus {
    dir: TempDir,
}

impl TestCorpus {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Add a text document to the corpus root
    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.write(name, content.as_bytes());
        self
    }

    /// Add a document from a list of lines, each terminated by `\n`
    pub fn with_lines(self, name: &str, lines: &[&str]) -> Self {
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        self.with_file(name, &content)
    }

    pub fn write(&self, name: &str, content: &[u8]) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(path, content).expect("failed to write corpus file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("parsed_texts")
    }

    /// Read one artifact from the destination directory
    pub fn artifact(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir().join(name))
            .unwrap_or_else(|e| panic!("artifact {} missing: {}", name, e))
    }

    /// Read one artifact as raw bytes
    pub fn artifact_bytes(&self, name: &str) -> Vec<u8> {
        fs::read(self.output_dir().join(name))
            .unwrap_or_else(|e| panic!("artifact {} missing: {}", name, e))
    }

    /// Names of every entry in the destination directory
    pub fn artifact_names(&self) -> BTreeSet<String> {
        fs::read_dir(self.output_dir())
            .expect("destination should exist")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }
}
