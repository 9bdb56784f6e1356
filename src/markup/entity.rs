//! Character-entity recognition and visible-length accounting
//!
//! Three entity shapes are recognized, case-insensitively: named
//! (`&word;`, 2–8 alphanumerics), decimal (`&#digits;`, 1–7 digits) and
//! hex (`&#xhex;`, 1–6 hex digits). Each counts as a single visible
//! character regardless of its raw length, and a cut point can never
//! land inside one.

use regex::Regex;
use std::sync::LazyLock;

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&[0-9a-z]{2,8};|&#[0-9]{1,7};|&#x[0-9a-f]{1,6};")
        .expect("ENTITY_RE: hardcoded regex is valid")
});

/// Visible length of a text run: one per codepoint, with each entity
/// reference collapsed to one.
pub fn visible_len(run: &str) -> usize {
    let mut len = run.chars().count();
    for entity in ENTITY_RE.find_iter(run) {
        // Entities are pure ASCII, so their byte length is their
        // codepoint count.
        len -= entity.len() - 1;
    }
    len
}

/// Byte offset in `run` at which exactly `left` visible characters end.
///
/// Entities are consumed atomically: an entity that starts within the
/// budget is either taken whole (for one unit of budget) or, when the
/// budget is already spent, excluded entirely.
pub fn budget_offset(run: &str, left: usize) -> usize {
    let mut entities = ENTITY_RE.find_iter(run).peekable();
    let mut offset = 0;
    let mut remaining = left;

    while offset < run.len() && remaining > 0 {
        if let Some(entity) = entities.peek() {
            if entity.start() == offset {
                offset = entity.end();
                entities.next();
                remaining -= 1;
                continue;
            }
        }
        match run[offset..].chars().next() {
            Some(ch) => {
                offset += ch.len_utf8();
                remaining -= 1;
            }
            None => break,
        }
    }
    offset
}
