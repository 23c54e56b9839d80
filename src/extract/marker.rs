//! Abstract marker detection

/// Keyword that opens an abstract section, compared case-insensitively.
const MARKER: &[u8] = b"abstract";

/// ASCII whitespace, including vertical tab
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

pub(crate) fn trim_start(bytes: &[u8]) -> &[u8] {
    let skip = bytes.iter().take_while(|b| is_space(**b)).count();
    &bytes[skip..]
}

pub(crate) fn trim(bytes: &[u8]) -> &[u8] {
    let bytes = trim_start(bytes);
    let keep = bytes.len() - bytes.iter().rev().take_while(|b| is_space(**b)).count();
    &bytes[..keep]
}

/// Match a line against the abstract marker.
///
/// A marker line is optional leading whitespace, the word `abstract` in any
/// ASCII letter case, then an optional separator made of whitespace, at most
/// one colon, and more whitespace. Anything after the separator is the
/// trailing content of the line, returned byte for byte.
///
/// Returns `Some(trailing)` for a marker line (possibly empty), `None` otherwise.
/// The keyword is matched as a prefix only, so `Abstraction` also matches with
/// trailing content `ion`.
pub fn match_abstract_marker(line: &[u8]) -> Option<&[u8]> {
    let rest = trim_start(line);
    let head = rest.get(..MARKER.len())?;
    if !head.eq_ignore_ascii_case(MARKER) {
        return None;
    }

    let after = trim_start(&rest[MARKER.len()..]);
    let after = after.strip_prefix(b":").unwrap_or(after);
    Some(trim_start(after))
}
