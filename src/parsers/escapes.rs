//! Repair of JSON string escapes that serde_json refuses to decode.
//!
//! Claude Code writes its logs from JavaScript, where a string cut in the
//! middle of an emoji keeps half of a UTF-16 surrogate pair. Such a line holds
//! an escape like `\ud83d` with no partner, and decoding it into a `String`
//! fails. Every such escape is rewritten to `\ufffd` before decoding, which is
//! what most JSON decoders produce for it.

use std::borrow::Cow;

const REPLACEMENT_ESCAPE: &[u8] = br"\ufffd";
const UNICODE_ESCAPE_LEN: usize = 6;

/// Replace `\uXXXX` escapes naming an unpaired surrogate with `\ufffd`.
///
/// Lines without such escapes are returned borrowed and unchanged. Paired
/// surrogates and every other escape are kept as written.
pub fn replace_lone_surrogates(line: &[u8]) -> Cow<'_, [u8]> {
    let mut repaired = Vec::new();
    let mut copied = 0;
    let mut i = 0;

    while i < line.len() {
        if line[i] != b'\\' {
            i += 1;
            continue;
        }

        match unicode_escape_at(line, i) {
            Some(unit) if is_high_surrogate(unit) => {
                let paired = unicode_escape_at(line, i + UNICODE_ESCAPE_LEN).is_some_and(is_low_surrogate);
                if paired {
                    i += 2 * UNICODE_ESCAPE_LEN;
                    continue;
                }
            }
            Some(unit) if is_low_surrogate(unit) => {}
            Some(_) => {
                i += UNICODE_ESCAPE_LEN;
                continue;
            }
            // Two-byte escape such as `\\` or `\n`
            None => {
                i += 2;
                continue;
            }
        }

        repaired.extend_from_slice(&line[copied..i]);
        repaired.extend_from_slice(REPLACEMENT_ESCAPE);
        i += UNICODE_ESCAPE_LEN;
        copied = i;
    }

    if repaired.is_empty() {
        return Cow::Borrowed(line);
    }
    repaired.extend_from_slice(&line[copied..]);
    Cow::Owned(repaired)
}

/// Code unit of a `\uXXXX` escape starting at `at`
fn unicode_escape_at(line: &[u8], at: usize) -> Option<u16> {
    let escape = line.get(at..at + UNICODE_ESCAPE_LEN)?;
    if !escape.starts_with(br"\u") || !escape[2..].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let hex = std::str::from_utf8(&escape[2..]).ok()?;
    u16::from_str_radix(hex, 16).ok()
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repair(line: &str) -> String {
        String::from_utf8(replace_lone_surrogates(line.as_bytes()).into_owned()).unwrap()
    }

    #[test]
    fn test_clean_lines_are_borrowed() {
        let line = br#"{"text":"plain \n \"quoted\" \u00e9"}"#;
        assert!(matches!(replace_lone_surrogates(line), Cow::Borrowed(_)));
    }

    #[test]
    fn test_lone_high_surrogate_is_replaced() {
        assert_eq!(repair(r#"{"text":"cut \ud83d"}"#), r#"{"text":"cut \ufffd"}"#);
    }

    #[test]
    fn test_lone_low_surrogate_is_replaced() {
        assert_eq!(repair(r#"{"text":"\ude00 tail"}"#), r#"{"text":"\ufffd tail"}"#);
    }

    #[test]
    fn test_high_surrogate_followed_by_high_surrogate() {
        assert_eq!(repair(r#""\ud83d\ud83d\ude00""#), r#""\ufffd\ud83d\ude00""#);
    }

    #[test]
    fn test_valid_pair_is_kept() {
        let line = br#"{"text":"smile \ud83d\ude00"}"#;
        assert!(matches!(replace_lone_surrogates(line), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escaped_backslash_is_not_an_escape_start() {
        // A literal backslash followed by the text "ud83d"
        let line = br#"{"text":"C:\\ud83d"}"#;
        assert!(matches!(replace_lone_surrogates(line), Cow::Borrowed(_)));
    }

    #[test]
    fn test_repaired_line_decodes() {
        let repaired = replace_lone_surrogates(br#"{"text":"ok \uD83D"}"#);
        let value: serde_json::Value = serde_json::from_slice(&repaired).unwrap();
        assert_eq!(value["text"], "ok \u{FFFD}");
    }
}
