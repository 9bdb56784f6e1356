//! Option structs for the dispatch surface
//!
//! Each transformation picks between the plain-text and markup-aware
//! pipelines through an `html` flag, mirroring the closed two-adapter
//! strategy set. All options carry `Default` impls with the documented
//! defaults.

/// Default visible-length budget for `limit` and `excerpt`
pub const DEFAULT_LENGTH: usize = 50;

/// Default line count for `lines`
pub const DEFAULT_LINES: usize = 15;

/// Default truncation marker
pub const DEFAULT_END: &str = "\u{2026}";

/// Default minimum line length for plain-text excerpts
pub const DEFAULT_MIN_LINE_LENGTH: usize = 100;

/// Default replacement template for `highlight` (`$1` is the match)
pub const DEFAULT_HIGHLIGHT_FORMAT: &str = "<span class=\"highlight\">$1</span>";

/// Options for [`limit`](crate::limit)
#[derive(Debug, Clone)]
pub struct LimitOptions {
    /// Use the markup-aware pipeline (tag balance, entity accounting)
    pub html: bool,
    /// Cut exactly at the budget; when false, back off to a word boundary.
    /// Only the markup pipeline distinguishes the two: the plain pipeline's
    /// connector trimming already keeps cuts off punctuation runs.
    pub exact: bool,
    /// Marker appended when truncation occurred
    pub end: String,
}

impl Default for LimitOptions {
    fn default() -> Self {
        Self {
            html: false,
            exact: true,
            end: DEFAULT_END.to_string(),
        }
    }
}

/// Options for [`excerpt`](crate::excerpt)
#[derive(Debug, Clone)]
pub struct ExcerptOptions {
    /// Use the markup-aware pipeline (requires `phrase`)
    pub html: bool,
    /// Marker appended when the excerpt does not reach the end of the source
    pub end: String,
    /// Marker prepended when the excerpt does not start at the source start
    /// (plain mode only)
    pub start: String,
    /// Minimum length a line must have to start a plain-mode excerpt
    pub min_line_length: usize,
    /// Pivot phrase for markup-mode excerpts
    pub phrase: Option<String>,
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        Self {
            html: false,
            end: DEFAULT_END.to_string(),
            start: DEFAULT_END.to_string(),
            min_line_length: DEFAULT_MIN_LINE_LENGTH,
            phrase: None,
        }
    }
}

/// Options for [`highlight`](crate::highlight)
#[derive(Debug, Clone)]
pub struct HighlightOptions {
    /// Use the markup-aware pipeline; the plain pipeline has no
    /// highlight implementation and the call errors when this is false
    pub html: bool,
    /// Replacement template applied to phrases without their own format.
    /// `$1` expands to the matched text.
    pub format: String,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            html: false,
            format: DEFAULT_HIGHLIGHT_FORMAT.to_string(),
        }
    }
}

/// A phrase to highlight, optionally with its own replacement template
#[derive(Debug, Clone)]
pub struct HighlightPhrase {
    /// Literal text searched for case-insensitively
    pub phrase: String,
    /// Per-phrase template overriding [`HighlightOptions::format`]
    pub format: Option<String>,
}

impl HighlightPhrase {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            format: None,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

impl From<&str> for HighlightPhrase {
    fn from(phrase: &str) -> Self {
        Self::new(phrase)
    }
}
