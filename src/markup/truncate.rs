//! Markup-aware truncation
//!
//! Walks the input as alternating tag-fragment / text-run pairs,
//! spending a visible-length budget only on text (entities count as
//! one), and closes whatever tags are still open when the budget runs
//! out. With `exact == false` the cut backs off to the preceding word
//! boundary, relocating past the last complete tag if the space it
//! found sits inside one, and rebuilds the open stack from the tags
//! that survive the back-off.

use regex::Regex;
use std::sync::LazyLock;

use super::entity;
use super::tag_stack::OpenTagStack;

/// One optional tag fragment followed by the text run up to the next
/// angle bracket. Mirrors the fragment grammar: `</?name attrs>` then
/// `[^<>]*`. Anything that cannot be read as a tag degrades to text.
static FRAGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(</?(\w+)[^>]*>)?([^<>]*)").expect("FRAGMENT_RE: hardcoded regex is valid")
});

static STRIP_TAGS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("STRIP_TAGS_RE: hardcoded regex is valid"));

/// Fully-formed opening tags, used to relocate a back-off cut that
/// landed inside a tag.
static OPENING_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(\w+)[^>]*>").expect("OPENING_TAG_RE: hardcoded regex is valid")
});

/// Any tag fragment with its name, for replaying the kept buffer
/// through a fresh stack after a back-off.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)</?(\w+)[^>]*>").expect("TAG_RE: hardcoded regex is valid")
});

/// Truncate markup to at most `max_length` visible characters.
///
/// Tag syntax is free; each entity reference costs one. The budget
/// includes the visible length of `end`. Text already within the
/// budget is returned unchanged and never receives the marker. Every
/// tag left open at the cut point is closed after the marker, last
/// opened first.
pub fn limit(text: &str, max_length: usize, end: &str, exact: bool) -> String {
    let stripped = STRIP_TAGS_RE.replace_all(text, "");
    if entity::visible_len(&stripped) <= max_length {
        return text.to_string();
    }

    let end_stripped = STRIP_TAGS_RE.replace_all(end, "");
    let mut total = entity::visible_len(&end_stripped);
    let mut open_tags = OpenTagStack::new();
    let mut truncate = String::with_capacity(text.len());

    for caps in FRAGMENT_RE.captures_iter(text) {
        if caps.get(0).is_none_or(|m| m.as_str().is_empty()) {
            continue;
        }
        if let (Some(raw), Some(name)) = (caps.get(1), caps.get(2)) {
            open_tags.observe(raw.as_str(), name.as_str());
            truncate.push_str(raw.as_str());
        }

        let run = caps.get(3).map_or("", |m| m.as_str());
        let run_len = entity::visible_len(run);

        if total + run_len > max_length {
            let left = max_length.saturating_sub(total);
            let cut = entity::budget_offset(run, left);
            truncate.push_str(&run[..cut]);
            break;
        }
        truncate.push_str(run);
        total += run_len;
        if total >= max_length {
            break;
        }
    }

    if !exact {
        back_off(&mut truncate, &mut open_tags);
    }

    truncate.push_str(end);
    for name in open_tags.iter() {
        truncate.push_str("</");
        truncate.push_str(name);
        truncate.push('>');
    }
    truncate
}

/// Move the truncation point back to the last space, keeping it out of
/// tag syntax, and rebuild `open_tags` from the kept buffer.
fn back_off(truncate: &mut String, open_tags: &mut OpenTagStack) {
    // No word boundary to back off to: the exact cut stands.
    let Some(space_pos) = truncate.rfind(' ') else {
        return;
    };
    let mut cut = space_pos;

    // A '<' after the last '>' means the space sits inside a tag's
    // attribute list; relocate the cut to just past the last complete
    // opening tag instead.
    let kept = &truncate[..cut];
    if kept.rfind('<') > kept.rfind('>') {
        match OPENING_TAG_RE.find_iter(truncate).last() {
            Some(last_tag) => cut = last_tag.end(),
            None => return,
        }
    }

    truncate.truncate(cut);

    // Tags in the discarded tail already passed through the stack
    // during the main walk; replaying the kept buffer yields the stack
    // the walk would have produced had it stopped at the cut.
    *open_tags = OpenTagStack::new();
    for caps in TAG_RE.captures_iter(truncate) {
        open_tags.observe(&caps[0], &caps[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_budget_is_identity() {
        let text = "<p>Hello <b>World</b></p>";
        assert_eq!(limit(text, 50, "…", true), text);
    }

    #[test]
    fn test_exact_cut_closes_open_tags() {
        let result = limit("<p>Hello <b>World</b>, this is a test</p>", 10, "…", true);
        assert_eq!(result, "<p>Hello <b>Wor…</b></p>");
    }

    #[test]
    fn test_word_boundary_back_off() {
        // The back-off drops the partial word together with the <b>
        // opener, so only <p> is left to close.
        let result = limit("<p>Hello <b>World</b>, this is a test</p>", 10, "…", false);
        assert_eq!(result, "<p>Hello…</p>");
    }

    #[test]
    fn test_back_off_recovers_closer_dropped_with_tail() {
        // The back-off discards " two</b>x"; replaying the kept buffer
        // leaves <b> open again, so it still gets closed.
        let result = limit("<b>one two</b>x rest", 9, "…", false);
        assert_eq!(result, "<b>one…</b>");
    }

    #[test]
    fn test_back_off_closes_every_kept_opener() {
        // Two kept <b> openers whose closers fall into the tail both
        // get closed.
        let result = limit("<b>ab cd<b>ef gh</b>ij kl</b>", 12, "…", false);
        assert_eq!(result, "<b>ab cd<b>ef…</b></b>");
    }

    #[test]
    fn test_entities_count_as_one() {
        // Budget 4: marker costs 1, leaving 3 for "A", "&amp;" and "B".
        let result = limit("<i>A&amp;BCD</i>", 4, "…", true);
        assert_eq!(result, "<i>A&amp;B…</i>");
    }

    #[test]
    fn test_cut_never_splits_entity() {
        let result = limit("ab&amp;cd", 3, "…", true);
        assert_eq!(result, "ab…");
    }

    #[test]
    fn test_void_elements_not_closed() {
        let result = limit("<p>one<br>two three four five</p>", 8, "…", true);
        assert!(result.ends_with("…</p>"));
        assert!(!result.contains("</br>"));
    }

    #[test]
    fn test_unmatched_closer_tolerated() {
        let result = limit("<p>alpha</b> beta gamma delta</p>", 8, "…", true);
        assert!(result.ends_with("…</p>"));
    }

    #[test]
    fn test_back_off_inside_attribute_space() {
        // The only space in the kept buffer sits inside the <a> tag;
        // the cut must relocate past the tag, not into it.
        let result = limit("<a href=\"x y\">abcdefghij</a>", 5, "…", false);
        assert!(!result.contains("<a href=\"x…"));
        assert!(result.ends_with("</a>"));
    }

    #[test]
    fn test_marker_length_spends_budget() {
        // "...." strips to visible length 4, leaving 2 of the budget 6.
        let result = limit("<p>abcdefghijk</p>", 6, "....", true);
        assert_eq!(result, "<p>ab....</p>");
    }

    #[test]
    fn test_tagless_text() {
        assert_eq!(limit("one two three", 7, "…", true), "one tw…");
        assert_eq!(limit("one two three", 7, "…", false), "one…");
    }

    #[test]
    fn test_zero_budget() {
        let result = limit("<p>abc</p>", 0, "…", true);
        assert_eq!(result, "<p>…</p>");
    }
}
