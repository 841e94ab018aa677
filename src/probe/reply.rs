use std::sync::LazyLock;

use regex::Regex;

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[0-9]{3}").expect("response-code pattern is valid"));

/// Extract the leading 3-digit SMTP response code from a reply.
///
/// The scan runs across every line of a (possibly multi-line) reply and
/// returns the first match. A reply carrying no code yields `0`, which
/// matches neither `220` nor any configured accept code, so absence of a
/// code uniformly reads as rejection.
pub fn response_code(reply: &str) -> u16 {
    CODE_RE
        .find(reply)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// True when a `HELO` reply echoes `250 localhost`: the MX record resolved
/// to a local or misconfigured relay, not a genuine external mail server.
pub(crate) fn mentions_loopback(reply: &str) -> bool {
    reply.to_ascii_lowercase().contains("250 localhost")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{mentions_loopback, response_code};

    #[test]
    fn reads_code_from_multiline_reply() {
        assert_eq!(response_code("250-hello\r\n250 world\r\n"), 250);
    }

    #[test]
    fn empty_reply_yields_zero() {
        assert_eq!(response_code(""), 0);
    }

    #[test]
    fn reply_without_leading_digits_yields_zero() {
        assert_eq!(response_code("hello there\r\n"), 0);
    }

    #[test]
    fn code_on_a_later_line_is_found() {
        assert_eq!(response_code("banner text\r\n220 ready\r\n"), 220);
    }

    #[test]
    fn mid_line_digits_do_not_count() {
        assert_eq!(response_code("status is 250 apparently"), 0);
    }

    #[test]
    fn loopback_detection_is_case_insensitive() {
        assert!(mentions_loopback("250 LOCALHOST at your service\r\n"));
        assert!(!mentions_loopback("250 mx1.example\r\n"));
    }

    proptest! {
        #[test]
        fn never_panics(reply in ".*") {
            let _ = response_code(&reply);
        }

        #[test]
        fn leading_code_is_extracted(code in 100u16..=599, text in "[- ][a-zA-Z .]{0,40}") {
            let reply = format!("{code}{text}\r\n");
            prop_assert_eq!(response_code(&reply), code);
        }
    }
}
