//! Tag classification and open-tag tracking
//!
//! The open "stack" is not a strict stack: closing tags remove the
//! nearest matching name wherever it sits in the sequence, so
//! interleaved or mismatched markup is tolerated instead of corrupting
//! the tracking state.

use std::collections::{HashSet, VecDeque};
use std::sync::LazyLock;

/// Elements with no closing counterpart; never tracked on the stack.
static VOID_ELEMENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "img", "br", "input", "hr", "area", "base", "basefont", "col", "frame", "isindex", "link",
        "meta", "param",
    ]
    .into_iter()
    .collect()
});

/// Classification of a raw tag fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Opening,
    Closing,
    /// Void element or explicit `<name/>`; opens and closes in place
    SelfClosing,
}

/// Classify a raw `<...>` fragment with a known tag name.
pub fn classify(raw: &str, name: &str) -> TagKind {
    if VOID_ELEMENTS.contains(name.to_ascii_lowercase().as_str()) {
        return TagKind::SelfClosing;
    }
    if raw.starts_with("</") {
        return TagKind::Closing;
    }
    if raw.ends_with("/>") {
        return TagKind::SelfClosing;
    }
    TagKind::Opening
}

/// Ordered sequence of currently-open tag names, most recently opened
/// first.
#[derive(Debug, Default, Clone)]
pub struct OpenTagStack {
    open: VecDeque<String>,
}

impl OpenTagStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw tag fragment through the tracker.
    pub fn observe(&mut self, raw: &str, name: &str) {
        match classify(raw, name) {
            TagKind::Opening => self.push_front(name),
            TagKind::Closing => self.close(name),
            TagKind::SelfClosing => {}
        }
    }

    /// Record `name` as opened (most recent).
    pub fn push_front(&mut self, name: &str) {
        self.open.push_front(name.to_ascii_lowercase());
    }

    /// Remove the nearest occurrence of `name`; unmatched closers are a
    /// no-op.
    pub fn close(&mut self, name: &str) {
        let name = name.to_ascii_lowercase();
        if let Some(pos) = self.open.iter().position(|open| *open == name) {
            self.open.remove(pos);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Open names in closing order (last-opened first).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}
