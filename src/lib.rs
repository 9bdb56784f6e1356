//! textcutter: length-bounded, structure-preserving text transformations.
//!
//! Two parallel pipelines sit behind a small dispatch surface: a
//! plain-text pipeline ([`plain`]) that counts codepoints and trims
//! connector punctuation at cut edges, and a markup-aware pipeline
//! ([`markup`]) that never splits a tag pair or a character entity.
//! Every operation is a pure function over `&str`; there is no shared
//! state and nothing performs I/O.
//!
//! ```
//! use textcutter::{LimitOptions, limit};
//!
//! let options = LimitOptions { html: true, ..Default::default() };
//! let cut = limit("<p>Hello <b>World</b>, this is a test</p>", 10, &options);
//! assert_eq!(cut, "<p>Hello <b>Wor…</b></p>");
//! ```

pub mod errors;
pub mod list;
pub mod markup;
pub mod options;
pub mod plain;

pub use errors::{TextError, TextResult};
pub use list::to_list;
pub use options::{
    DEFAULT_END, DEFAULT_HIGHLIGHT_FORMAT, DEFAULT_LENGTH, DEFAULT_LINES, DEFAULT_MIN_LINE_LENGTH,
    ExcerptOptions, HighlightOptions, HighlightPhrase, LimitOptions,
};

/// Truncate `text` to at most `max_length` visible characters.
///
/// `options.html` picks the pipeline: the markup path counts entities
/// as one character, spends the budget on the marker, and closes any
/// tags the cut leaves open; the plain path counts codepoints and
/// trims connector punctuation before the marker. Text already within
/// the budget is returned unchanged.
pub fn limit(text: &str, max_length: usize, options: &LimitOptions) -> String {
    if options.html {
        markup::limit(text, max_length, &options.end, options.exact)
    } else {
        plain::limit(text, max_length, &options.end)
    }
}

/// Extract an excerpt of roughly `length` visible characters.
///
/// Markup mode centers a window on `options.phrase` and requires one;
/// a missing or empty phrase degrades to returning the input unchanged
/// with a warning, never an error. Plain mode accumulates whole lines,
/// skipping short leading ones per `options.min_line_length`.
pub fn excerpt(text: &str, length: usize, options: &ExcerptOptions) -> String {
    if options.html {
        match options.phrase.as_deref() {
            Some(phrase) if !phrase.is_empty() => {
                markup::excerpt(text, phrase, length, &options.end)
            }
            _ => {
                tracing::warn!("markup excerpt requires a phrase; returning input unchanged");
                text.to_string()
            }
        }
    } else {
        plain::excerpt(
            text,
            length,
            options.min_line_length,
            &options.start,
            &options.end,
        )
    }
}

/// Highlight each phrase in `text` with its replacement template.
///
/// Markup mode only; plain mode has no highlight implementation and
/// returns [`TextError::Unsupported`].
pub fn highlight(
    text: &str,
    phrases: &[HighlightPhrase],
    options: &HighlightOptions,
) -> TextResult<String> {
    if !options.html {
        return Err(TextError::unsupported("highlight", "plain-text"));
    }
    Ok(markup::highlight(text, phrases, &options.format))
}

/// Keep the first `n` newline-delimited lines of `text` (plain-text
/// only).
pub fn lines(text: &str, n: usize, end: &str) -> String {
    plain::lines(text, n, end)
}

/// Autolink URLs, then email addresses (markup mode).
pub fn auto_link(text: &str) -> String {
    markup::auto_link(text)
}

/// Wrap bare `http(s)/ftp/nntp` URLs and `www.` spans in anchors
/// (markup mode).
pub fn auto_link_urls(text: &str) -> String {
    markup::auto_link_urls(text)
}

/// Replace email addresses with obfuscated `mailto:` anchors (markup
/// mode).
pub fn auto_link_emails(text: &str) -> String {
    markup::auto_link_emails(text)
}
