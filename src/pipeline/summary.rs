//! Combined run summary in text or XML form
//!
//! Field values are copied as raw bytes, like the artifacts. The XML form only
//! escapes markup characters and carries no encoding declaration.

use super::types::SummaryFormat;
use crate::extract::ExtractionStats;
use std::time::Duration;

const RULE: &[u8] = b"==============================\n";

/// Everything the summary reports about one parsed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub normalized_name: Vec<u8>,
    pub title: Vec<u8>,
    pub authors: Vec<u8>,
    pub abstract_text: Vec<u8>,
    pub stats: ExtractionStats,
    pub elapsed: Duration,
}

/// Render the summary of a run in the requested format
pub fn render_summary(
    format: SummaryFormat,
    entries: &[SummaryEntry],
    elapsed: Duration,
) -> Vec<u8> {
    match format {
        SummaryFormat::Text => render_text(entries, elapsed),
        SummaryFormat::Xml => render_xml(entries),
    }
}

fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

fn saturating_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn field(out: &mut Vec<u8>, label: &str, value: &[u8]) {
    out.extend_from_slice(format!("{:<15}: ", label).as_bytes());
    out.extend_from_slice(value);
    out.push(b'\n');
}

fn render_text(entries: &[SummaryEntry], elapsed: Duration) -> Vec<u8> {
    let mut out = Vec::new();

    for entry in entries {
        out.extend_from_slice(RULE);
        field(&mut out, "File", &entry.normalized_name);
        field(&mut out, "Title", &entry.title);
        field(&mut out, "Authors", &entry.authors);
        field(&mut out, "Abstract", &entry.abstract_text);
        field(&mut out, "Total lines", entry.stats.line_count.to_string().as_bytes());
        field(
            &mut out,
            "Abstract lines",
            entry.stats.abstract_line_count.to_string().as_bytes(),
        );
        field(
            &mut out,
            "Abstract bytes",
            entry.abstract_text.len().to_string().as_bytes(),
        );
        field(
            &mut out,
            "Parse time",
            format!("{} us", saturating_micros(entry.elapsed)).as_bytes(),
        );
    }

    out.extend_from_slice(RULE);
    field(&mut out, "Documents", entries.len().to_string().as_bytes());
    field(
        &mut out,
        "Processed in",
        format!("{} ms", saturating_millis(elapsed)).as_bytes(),
    );
    out
}

/// Escape the five XML markup characters, leaving every other byte as is
fn escape_xml(out: &mut Vec<u8>, value: &[u8]) {
    for &byte in value {
        match byte {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'>' => out.extend_from_slice(b"&gt;"),
            b'"' => out.extend_from_slice(b"&quot;"),
            b'\'' => out.extend_from_slice(b"&apos;"),
            _ => out.push(byte),
        }
    }
}

fn element(out: &mut Vec<u8>, tag: &str, value: &[u8]) {
    out.extend_from_slice(format!("\t\t<{}>", tag).as_bytes());
    escape_xml(out, value);
    out.extend_from_slice(format!("</{}>\n", tag).as_bytes());
}

fn render_xml(entries: &[SummaryEntry]) -> Vec<u8> {
    let mut out = b"<articles>\n".to_vec();

    for entry in entries {
        out.extend_from_slice(b"\t<article>\n");
        element(&mut out, "preamble", &entry.normalized_name);
        element(&mut out, "title", &entry.title);
        element(&mut out, "authors", &entry.authors);
        element(&mut out, "abstract", &entry.abstract_text);
        out.extend_from_slice(b"\t</article>\n");
    }

    out.extend_from_slice(b"</articles>\n");
    out
}
