//! Line scanning for title and abstract

use super::marker::match_abstract_marker;
use super::record::{Extraction, ExtractionRecord, ExtractionStats};

/// Position of the abstract scan relative to the marker line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideAbstract,
    InsideAbstract,
}

/// Index of the first non-empty line
pub(crate) fn title_index<S: AsRef<[u8]>>(lines: &[S]) -> Option<usize> {
    lines.iter().position(|line| !line.as_ref().is_empty())
}

/// First non-empty line, verbatim, or empty when every line is empty.
///
/// A whitespace-only line counts as non-empty.
pub fn extract_title<S: AsRef<[u8]>>(lines: &[S]) -> &[u8] {
    match title_index(lines) {
        Some(index) => lines[index].as_ref(),
        None => &[],
    }
}

/// Collect the non-empty chunks that make up the abstract.
///
/// The marker line contributes its trailing content when that is non-empty.
/// Every following line is a chunk until the first empty line, which ends
/// the scan for good.
fn scan_abstract<S: AsRef<[u8]>>(lines: &[S]) -> Vec<&[u8]> {
    let mut state = ScanState::OutsideAbstract;
    let mut chunks = Vec::new();

    for line in lines {
        let line: &[u8] = line.as_ref();
        match state {
            ScanState::OutsideAbstract => {
                if let Some(trailing) = match_abstract_marker(line) {
                    state = ScanState::InsideAbstract;
                    if !trailing.is_empty() {
                        chunks.push(trailing);
                    }
                }
            }
            ScanState::InsideAbstract => {
                if line.is_empty() {
                    break;
                }
                chunks.push(line);
            }
        }
    }

    chunks
}

/// Abstract text joined with single spaces, or empty without a marker line.
pub fn extract_abstract<S: AsRef<[u8]>>(lines: &[S]) -> Vec<u8> {
    scan_abstract(lines).join(&b' ')
}

/// Extract a record and the scan statistics for one document.
///
/// Title and abstract are computed by independent passes, so a marker on the
/// first line yields that whole line as the title as well.
pub fn extract_with_stats<S: AsRef<[u8]>>(
    file_name: impl AsRef<[u8]>,
    lines: &[S],
) -> Extraction {
    let chunks = scan_abstract(lines);
    let stats = ExtractionStats {
        line_count: lines.len(),
        abstract_line_count: chunks.len(),
    };

    Extraction {
        record: ExtractionRecord::new(file_name, extract_title(lines), chunks.join(&b' ')),
        stats,
    }
}

/// Extract the metadata record for one document.
pub fn extract<S: AsRef<[u8]>>(file_name: impl AsRef<[u8]>, lines: &[S]) -> ExtractionRecord {
    extract_with_stats(file_name, lines).record
}
