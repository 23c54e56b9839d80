//! Author block detection below the title

use super::marker::{trim, trim_start};
use super::scanner::title_index;

/// Most lines taken into the author block when no section follows the title
const MAX_AUTHOR_LINES: usize = 6;

const INTRODUCTION: &[u8] = b"introduction";
const ABSTRACT: &[u8] = b"abstract";

/// Author block: the non-empty lines right after the title, trimmed and
/// joined with single spaces.
///
/// The block ends at the first line mentioning the word `abstract`, at an
/// introduction heading (`Introduction`, `1. Introduction`, `I) INTRODUCTION`),
/// or at a line that starts lowercase once at least one author line has been
/// taken. Empty when the document has no title or nothing qualifies.
pub fn extract_authors<S: AsRef<[u8]>>(lines: &[S]) -> Vec<u8> {
    let Some(title) = title_index(lines) else {
        return Vec::new();
    };

    let mut parts: Vec<&[u8]> = Vec::new();
    for line in &lines[title + 1..] {
        let line = trim(line.as_ref());
        if line.is_empty() {
            continue;
        }
        if contains_word(line, ABSTRACT) || is_introduction_heading(line) {
            break;
        }
        if !parts.is_empty() && starts_lowercase(line) {
            break;
        }

        parts.push(line);
        if parts.len() == MAX_AUTHOR_LINES {
            break;
        }
    }

    parts.join(&b' ')
}

fn starts_lowercase(line: &[u8]) -> bool {
    line.first().map_or(false, u8::is_ascii_lowercase)
}

/// Case-insensitive match of `word` delimited by non-alphanumeric bytes
fn contains_word(line: &[u8], word: &[u8]) -> bool {
    line.windows(word.len()).enumerate().any(|(at, window)| {
        window.eq_ignore_ascii_case(word)
            && (at == 0 || !line[at - 1].is_ascii_alphanumeric())
            && line
                .get(at + word.len())
                .map_or(true, |b| !b.is_ascii_alphanumeric())
    })
}

fn starts_with_word(line: &[u8], word: &[u8]) -> bool {
    line.get(..word.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(word))
        && line
            .get(word.len())
            .map_or(true, |b| !b.is_ascii_alphabetic())
}

fn is_introduction_heading(line: &[u8]) -> bool {
    if starts_with_word(line, INTRODUCTION) {
        return true;
    }

    // Arabic or roman section number
    let numbering = line
        .iter()
        .take_while(|b| b.is_ascii_digit() || matches!(b.to_ascii_lowercase(), b'i' | b'v' | b'x'))
        .count();
    if numbering == 0 {
        return false;
    }

    let rest = &line[numbering..];
    let rest = rest
        .strip_prefix(b".")
        .or_else(|| rest.strip_prefix(b")"))
        .unwrap_or(rest);
    starts_with_word(trim_start(rest), INTRODUCTION)
}
