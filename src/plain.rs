//! Plain-text pipeline: length limiting, line-aware excerpts and
//! first-N-lines views.
//!
//! This pipeline is markup-agnostic and counts Unicode codepoints. Any
//! edge that receives a truncation marker is first stripped of
//! "connector" characters (spaces and common punctuation) so the marker
//! never glues onto a dangling comma or open bracket.

/// Connector characters trimmed from a leading edge before a start marker
const LEADING_CONNECT: &[char] = &[
    ' ', '.', ',', ':', ';', '!', '?', '-', '&', '(', '<', '[', '_', '+', '\'',
];

/// Connector characters trimmed from a trailing edge before an end marker
const TRAILING_CONNECT: &[char] = &[
    ' ', '.', ',', ':', ';', '!', '?', '-', '&', ')', '>', ']', '_', '+', '\'',
];

/// Byte offset at which the first `n` codepoints of `text` end.
fn codepoint_offset(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(idx, _)| idx)
}

/// Attach markers to the edges that were cut, trimming connector
/// characters from each marked edge first. Unmarked edges are left
/// untouched.
fn connect(text: &str, start: Option<&str>, end: Option<&str>) -> String {
    let mut body = text;
    if start.is_some() {
        body = body.trim_start_matches(LEADING_CONNECT);
    }
    if end.is_some() {
        body = body.trim_end_matches(TRAILING_CONNECT);
    }
    format!("{}{}{}", start.unwrap_or(""), body, end.unwrap_or(""))
}

/// Truncate `text` to at most `length` codepoints, trimming the cut
/// edge and appending `end`. Text within the budget is returned
/// unchanged, byte for byte.
pub fn limit(text: &str, length: usize, end: &str) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let cut = codepoint_offset(text, length);
    connect(&text[..cut], None, Some(end))
}

/// Extract a leading excerpt built from whole lines.
///
/// Lines are accumulated starting from the first line at least
/// `min_line_length` codepoints long, until the accumulated length
/// exceeds `length`. When no line is long enough the threshold is
/// halved and the search retried, down toward zero. The `start` and
/// `end` markers are suppressed on any side where the kept region
/// touches the true boundary of the source.
pub fn excerpt(text: &str, length: usize, min_line_length: usize, start: &str, end: &str) -> String {
    if text.is_empty() {
        return text.to_string();
    }
    let parts: Vec<&str> = text.split('\n').collect();

    let mut kept: Vec<(usize, &str)> = Vec::new();
    let mut kept_length = 0;

    for (index, part) in parts.iter().enumerate() {
        let part_length = part.chars().count();

        if kept.is_empty() && part_length < min_line_length {
            continue;
        }
        kept.push((index, part));
        kept_length += part_length;

        if kept_length > length {
            break;
        }
    }

    if kept.is_empty() {
        // No line reached the threshold; relax it and retry.
        return excerpt(text, length, min_line_length / 2, start, end);
    }

    let joined = kept
        .iter()
        .map(|(_, part)| *part)
        .collect::<Vec<_>>()
        .join("\n");

    // A marker belongs only to a side that was actually cut.
    let first_kept = kept[0].0;
    let last_kept = kept[kept.len() - 1].0;
    let start = (first_kept != 0).then_some(start);
    let end = (last_kept != parts.len() - 1).then_some(end);

    connect(joined.trim(), start, end)
}

/// Keep the first `n` newline-delimited lines of `text`. When nothing
/// was dropped the input is returned unchanged; otherwise the cut edge
/// is trimmed and `end` appended.
pub fn lines(text: &str, n: usize, end: &str) -> String {
    let parts: Vec<&str> = text.split('\n').collect();
    if parts.len() <= n {
        return text.to_string();
    }
    connect(&parts[..n].join("\n"), None, Some(end))
}
