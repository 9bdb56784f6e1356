//! Deterministic email obfuscation
//!
//! Encodes a `mailto:` link character by character as decimal and hex
//! entity references, keyed off a CRC-32 of the address so the same
//! address always encodes the same way. This defeats naive address
//! scrapers only; it is not cryptography.

use flate2::Crc;

/// Render `address` as an anchor with a per-character entity-encoded
/// `mailto:` href and display text.
///
/// For each ASCII character at index `i`, `r = (seed * (i+1)) % 100`
/// selects the encoding: `r > 90` leaves it raw (except `@`, which is
/// always encoded), `r < 45` uses a hex reference, anything else a
/// decimal reference. Non-ASCII characters pass through untouched. The
/// seed is the CRC-32 of the full mailto string, integer-divided by
/// its byte length.
pub fn obfuscate_email(address: &str) -> String {
    let mailto = format!("mailto:{address}");

    let mut crc = Crc::new();
    crc.update(mailto.as_bytes());
    let seed = u64::from(crc.sum()) / mailto.len() as u64;

    let encoded: Vec<String> = mailto
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            let ord = ch as u32;
            if ord >= 128 {
                return ch.to_string();
            }
            let r = (seed * (index as u64 + 1)) % 100;
            if r > 90 && ch != '@' {
                ch.to_string()
            } else if r < 45 {
                format!("&#x{ord:x};")
            } else {
                format!("&#{ord};")
            }
        })
        .collect();

    // "mailto:" is seven characters; the display text drops them.
    let href = encoded.concat();
    let display = encoded[7..].concat();
    format!("<a href=\"{href}\">{display}</a>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_across_calls() {
        let first = obfuscate_email("user@example.com");
        let second = obfuscate_email("user@example.com");
        assert_eq!(first, second);
    }

    #[test]
    fn test_at_sign_always_encoded() {
        let result = obfuscate_email("user@example.com");
        assert!(!result.contains('@'));
        // '@' is 0x40 / 64.
        assert!(result.contains("&#x40;") || result.contains("&#64;"));
    }

    #[test]
    fn test_anchor_shape() {
        let result = obfuscate_email("a@b.cd");
        assert!(result.starts_with("<a href=\""));
        assert!(result.ends_with("</a>"));
    }

    #[test]
    fn test_display_drops_mailto_prefix() {
        let result = obfuscate_email("a@b.cd");
        let display_start = result
            .find('>')
            .map(|pos| &result[pos + 1..])
            .unwrap_or_default();
        // The href keeps the mailto: units, the display text does not:
        // it is strictly shorter.
        let href_end = result.find("\">").unwrap_or(result.len());
        let href = &result["<a href=\"".len()..href_end];
        assert!(display_start.len() < href.len());
        assert!(href.len() > "mailto:".len());
    }

    #[test]
    fn test_only_entities_and_raw_ascii() {
        // Every encoded unit is either a single raw character or a
        // well-formed numeric reference.
        let result = obfuscate_email("spam.trap@mail-host.org");
        let href_end = result.find("\">").unwrap_or(result.len());
        let mut rest = &result["<a href=\"".len()..href_end];
        while !rest.is_empty() {
            if let Some(stripped) = rest.strip_prefix("&#") {
                let semi = stripped.find(';').expect("unterminated entity");
                rest = &stripped[semi + 1..];
            } else {
                rest = &rest[1..];
            }
        }
    }
}
