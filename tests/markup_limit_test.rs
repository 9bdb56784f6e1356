use textcutter::{LimitOptions, limit};

fn html_options() -> LimitOptions {
    LimitOptions {
        html: true,
        ..Default::default()
    }
}

#[test]
fn test_fast_path_returns_input_byte_for_byte() {
    let text = "<p>short &amp; sweet</p>";
    // Visible length is 13 ("short & sweet" with the entity as one).
    assert_eq!(limit(text, 13, &html_options()), text);
    assert_eq!(limit(text, 50, &html_options()), text);
}

#[test]
fn test_fast_path_never_appends_marker() {
    let result = limit("<b>hi</b>", 10, &html_options());
    assert!(!result.contains('…'));
}

#[test]
fn test_nested_tags_closed_in_order() {
    let result = limit(
        "<div><p><b>alpha beta gamma delta</b></p></div>",
        8,
        &html_options(),
    );
    assert!(result.ends_with("…</b></p></div>"));
}

#[test]
fn test_nested_tags_closed_after_marker() {
    let result = limit("<p>Hello <b>World</b>, this is a test</p>", 10, &html_options());
    assert_eq!(result, "<p>Hello <b>Wor…</b></p>");
}

#[test]
fn test_word_back_off_drops_partial_word() {
    let options = LimitOptions {
        html: true,
        exact: false,
        ..Default::default()
    };
    // "World" and its <b> opener both fall to the back-off, so only
    // the <p> is left to close.
    let result = limit("<p>Hello <b>World</b>, this is a test</p>", 10, &options);
    assert_eq!(result, "<p>Hello…</p>");
}

#[test]
fn test_entity_never_split() {
    for budget in 0..8 {
        let result = limit("ab&amp;cd&#x26;ef", budget, &html_options());
        // Every ampersand in the output starts a complete reference.
        let entities = regex::Regex::new(r"&(?:amp|#x26);").expect("test regex");
        let amp_count = result.matches('&').count();
        assert_eq!(
            entities.find_iter(&result).count(),
            amp_count,
            "partial entity in {result:?} at budget {budget}"
        );
    }
}

#[test]
fn test_visible_length_bound() {
    let text = "<p>one <b>two &amp; three</b> four five six seven</p>";
    let strip = regex::Regex::new(r"(?s)<.*?>").expect("test regex");
    for budget in 0..30 {
        let result = limit(text, budget, &html_options());
        let stripped = strip.replace_all(&result, "");
        let visible = textcutter::markup::entity::visible_len(&stripped);
        // The budget includes the one-character end marker.
        assert!(
            visible <= budget.max(1),
            "visible length {visible} exceeds budget {budget}: {result:?}"
        );
    }
}

#[test]
fn test_interleaved_close_tolerated() {
    // </div> closes a tag that is not on top of the stack.
    let result = limit("<div><p>alpha beta</div> gamma</p> delta", 7, &html_options());
    assert!(result.contains('…'));
    // Whatever remains open is closed by the end of the string.
    let opens = result.matches("<p>").count() + result.matches("<div>").count();
    let closes = result.matches("</p>").count() + result.matches("</div>").count();
    assert!(closes >= opens);
}

#[test]
fn test_empty_input() {
    assert_eq!(limit("", 10, &html_options()), "");
    assert_eq!(limit("", 0, &html_options()), "");
}

#[test]
fn test_custom_marker() {
    let options = LimitOptions {
        html: true,
        end: " [more]".to_string(),
        ..Default::default()
    };
    let result = limit("<p>alpha beta gamma delta epsilon</p>", 12, &options);
    assert!(result.ends_with(" [more]</p>"));
}
