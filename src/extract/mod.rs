//! Title and abstract extraction from plain-text papers
//!
//! The extractor is a pure function of a document's line sequence. Lines are
//! raw bytes; nothing is decoded, so text in any ASCII-compatible encoding
//! comes out exactly as it went in. It never fails: a missing title or
//! abstract is an empty field in the record.
//!
//! Two independent passes run over the same lines:
//!
//! - **Title**: the first non-empty line, verbatim.
//! - **Abstract**: a two-state scan (`OutsideAbstract` -> `InsideAbstract`)
//!   opened by the first marker line and closed by the first empty line after it.
//!
//! An optional third pass, [`extract_authors`], picks up the author block
//! between the title and the first section.
//!
//! # Example
//!
//! ```
//! use paperscan::extract::extract;
//!
//! let lines = ["", "A Study of Things", "", "Abstract: Short.", "Longer.", ""];
//! let record = extract("paper 1.txt", &lines);
//!
//! assert_eq!(record.normalized_name, b"paper_1.txt");
//! assert_eq!(record.title, b"A Study of Things");
//! assert_eq!(record.abstract_text, b"Short. Longer.");
//! ```

mod authors;
mod marker;
mod record;
mod scanner;


pub use authors::extract_authors;
pub use marker::match_abstract_marker;
pub use record::{normalize_filename, Extraction, ExtractionRecord, ExtractionStats};
pub use scanner::{extract, extract_abstract, extract_title, extract_with_stats};
