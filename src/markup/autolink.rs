//! URL and email autolinking
//!
//! Bare URLs and `www.` spans are wrapped in anchors; email addresses
//! are additionally obfuscated. Each URL match is first swapped for an
//! opaque placeholder key and only substituted with its anchor after
//! both passes have run, so the `www.` pass can never re-match inside
//! an anchor the scheme pass already produced.

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use xxhash_rust::xxh3::xxh3_64;

use super::obfuscate::obfuscate_email;

/// Scheme-prefixed URLs not already sitting in an href/src attribute or
/// anchor body.
static SCHEME_URL_RE: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(
        r#"(?i)(?<!href=")(?<!src=")(?<!">)((?:https?|ftp|nntp)://[a-z0-9.\-:]+(?:/[^\s]*)?)"#,
    )
    .expect("SCHEME_URL_RE: hardcoded regex is valid")
});

/// Bare `www.` spans; the lookbehinds reject attribute positions,
/// word-attached punctuation and spans already covered by the scheme
/// pass, and the trailing guard keeps a closing paren out of the link.
static WWW_URL_RE: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(
        r#"(?i)(?<!href=")(?<!">)(?<!\w[[:punct:]])(?<!http://)(?<!https://)(?<!ftp://)(?<!nntp://)www\.[^\n% <]+[^<\n%,\. <](?<!\))"#,
    )
    .expect("WWW_URL_RE: hardcoded regex is valid")
});

static SCHEME_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+://").expect("SCHEME_PREFIX_RE: hardcoded regex is valid")
});

/// Dot-separated atoms, `@`, dot-separated domain labels.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-z0-9-]+(?:\.[a-z0-9-]+)+",
    )
    .expect("EMAIL_RE: hardcoded regex is valid")
});

fn stash(placeholders: &mut HashMap<String, String>, span: &str) -> String {
    let key = format!("{:016x}", xxh3_64(span.as_bytes()));
    placeholders.insert(key.clone(), span.to_string());
    key
}

/// Wrap bare URLs and `www.` spans in `<a href="...">` anchors.
pub fn auto_link_urls(text: &str) -> String {
    let mut placeholders: HashMap<String, String> = HashMap::new();

    let pass = SCHEME_URL_RE.replace_all(text, |caps: &fancy_regex::Captures| {
        stash(&mut placeholders, &caps[0])
    });
    let pass = WWW_URL_RE.replace_all(&pass, |caps: &fancy_regex::Captures| {
        stash(&mut placeholders, &caps[0])
    });

    let mut result = pass.into_owned();
    for (key, span) in &placeholders {
        let href = if SCHEME_PREFIX_RE.is_match(&span.to_ascii_lowercase()) {
            span.clone()
        } else {
            format!("http://{span}")
        };
        result = result.replace(key, &format!("<a href=\"{href}\">{span}</a>"));
    }
    result
}

/// Replace email-address spans with obfuscated `mailto:` anchors.
pub fn auto_link_emails(text: &str) -> String {
    EMAIL_RE
        .replace_all(text, |caps: &regex::Captures| obfuscate_email(&caps[0]))
        .into_owned()
}

/// URL pass followed by the email pass.
pub fn auto_link(text: &str) -> String {
    auto_link_emails(&auto_link_urls(text))
}
