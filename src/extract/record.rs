//! Extraction output types

/// Metadata extracted from one document
///
/// Fields hold the document's bytes exactly as read; no decoding happens
/// anywhere between the input file and the artifact. A section that could not
/// be located is empty, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionRecord {
    /// Original filename with spaces replaced by underscores
    pub normalized_name: Vec<u8>,
    /// First non-empty line of the document
    pub title: Vec<u8>,
    /// Text following the abstract marker, up to the first empty line
    pub abstract_text: Vec<u8>,
    /// Author block below the title, only filled in when requested
    pub authors: Option<Vec<u8>>,
}

impl ExtractionRecord {
    /// Create a record, normalizing the filename
    pub fn new(
        file_name: impl AsRef<[u8]>,
        title: impl Into<Vec<u8>>,
        abstract_text: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            normalized_name: normalize_filename(file_name.as_ref()),
            title: title.into(),
            abstract_text: abstract_text.into(),
            authors: None,
        }
    }

    pub fn with_authors(mut self, authors: impl Into<Vec<u8>>) -> Self {
        self.authors = Some(authors.into());
        self
    }

    /// True when neither a title nor an abstract was found
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.abstract_text.is_empty()
    }
}

/// Line counts gathered while scanning one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Number of lines in the input document
    pub line_count: usize,
    /// Number of lines that contributed text to the abstract
    pub abstract_line_count: usize,
}

/// A record together with the statistics of the scan that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub record: ExtractionRecord,
    pub stats: ExtractionStats,
}

/// Replace every space (0x20) in a filename with an underscore.
///
/// No other byte is touched, so the result is idempotent and keeps its length.
pub fn normalize_filename(file_name: &[u8]) -> Vec<u8> {
    file_name
        .iter()
        .map(|&b| if b == b' ' { b'_' } else { b })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_replaces_spaces_only() {
        assert_eq!(normalize_filename(b"paper 1.txt"), b"paper_1.txt");
        assert_eq!(normalize_filename(b"a  b_c.txt"), b"a__b_c.txt");
        assert_eq!(normalize_filename(b"tab\there.txt"), b"tab\there.txt");
        assert_eq!(normalize_filename(b"caf\xe9 1.txt"), b"caf\xe9_1.txt");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize_filename(b" lead and trail .txt");
        assert_eq!(normalize_filename(&once), once);
    }

    #[test]
    fn test_record_new_normalizes_name() {
        let record = ExtractionRecord::new("my paper.txt", "Title", "");
        assert_eq!(record.normalized_name, b"my_paper.txt");
        assert_eq!(record.authors, None);
        assert!(!record.is_blank());
        assert!(ExtractionRecord::new("x.txt", "", "").is_blank());
    }

    #[test]
    fn test_with_authors_does_not_change_blankness() {
        let record = ExtractionRecord::new("x.txt", "", "").with_authors("J. Doe");
        assert_eq!(record.authors.as_deref(), Some(&b"J. Doe"[..]));
        assert!(record.is_blank());
    }
}
