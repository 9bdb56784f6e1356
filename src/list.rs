//! Natural-language list joining

/// Join a list into natural English: every item but the last joined
/// with `separator`, the last attached with `and`.
///
/// `to_list(&["a", "b", "c"], "and", ", ")` yields `"a, b and c"`.
/// A single item is returned unchanged; an empty list yields `""`.
pub fn to_list<S: AsRef<str>>(items: &[S], and: &str, separator: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(separator);
            format!("{head} {and} {}", last.as_ref())
        }
    }
}
