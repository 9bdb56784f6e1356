//! Phrase-centered excerpt windows
//!
//! The phrase is located case-insensitively and a window of `radius`
//! codepoints on each side is returned. A marker appears only on a
//! side that was actually clamped away from the true text boundary.

use super::truncate;

/// First-codepoint lowercase fold; offsets stay codepoint-exact.
fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Codepoint offset of the first case-insensitive occurrence of
/// `needle` in `hay`.
fn find_phrase(hay: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - needle.len()).find(|&pos| {
        hay[pos..pos + needle.len()]
            .iter()
            .zip(needle)
            .all(|(a, b)| fold(*a) == fold(*b))
    })
}

/// Extract the window of `radius` codepoints around the first
/// case-insensitive occurrence of `phrase`.
///
/// An absent phrase yields the first `radius` codepoints plus `end`.
/// Empty text or an empty phrase delegates to plain markup truncation
/// at twice the radius.
pub fn excerpt(text: &str, phrase: &str, radius: usize, end: &str) -> String {
    if text.is_empty() || phrase.is_empty() {
        return truncate::limit(text, radius * 2, end, true);
    }

    let hay: Vec<char> = text.chars().collect();
    let needle: Vec<char> = phrase.chars().collect();

    let Some(pos) = find_phrase(&hay, &needle) else {
        let prefix: String = hay.iter().take(radius).collect();
        return format!("{prefix}{end}");
    };

    let (window_start, prepend) = if pos <= radius {
        (0, "")
    } else {
        (pos - radius, end)
    };
    let window_end = pos + needle.len() + radius;
    let (window_end, append) = if window_end >= hay.len() {
        (hay.len(), "")
    } else {
        (window_end, end)
    };

    let window: String = hay[window_start..window_end].iter().collect();
    format!("{prepend}{window}{append}")
}
