//! Phrase highlighting in markup
//!
//! Each phrase is wrapped by a replacement template (`$1` expands to
//! the matched text). Look-ahead guards keep matches out of tag
//! syntax, so highlighting "class" never rewrites a `class=` attribute.

use fancy_regex::Regex;

use crate::options::HighlightPhrase;

/// Highlight every occurrence of each phrase in `text`.
///
/// Phrases are applied in order; each uses its own template when it
/// carries one, otherwise `default_format`. Empty phrases are skipped.
pub fn highlight(text: &str, phrases: &[HighlightPhrase], default_format: &str) -> String {
    let mut result = text.to_string();

    for entry in phrases {
        if entry.phrase.is_empty() {
            continue;
        }
        // The guards reject positions inside a tag: text that runs into
        // a '>' without passing a '<' first.
        let pattern = format!(
            "(?i)(?![^<]+>)({})(?![^<]+>)",
            regex::escape(&entry.phrase)
        );
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(error) => {
                tracing::debug!(phrase = %entry.phrase, %error, "phrase not highlightable, skipping");
                continue;
            }
        };
        let format = entry.format.as_deref().unwrap_or(default_format);
        result = re.replace_all(&result, format).into_owned();
    }
    result
}
