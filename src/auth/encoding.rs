//! RFC 3986 percent-encoding as required by OAuth 1.0a (RFC 5849 §3.6).
//!
//! ALPHA, DIGIT, `-`, `.`, `_` and `~` are left alone; every other byte of
//! the UTF-8 input is written as `%XX` with uppercase hex. A space becomes
//! `%20`, never `+`.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters that must be escaped in OAuth parameter names and values.
pub const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string for use in a signature base string, signing key
/// or transmitted query string.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, OAUTH_ENCODE_SET).to_string()
}

/// Decode a percent-encoded string the way a receiving server does.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn percent_decode(input: &str) -> Cow<'_, str> {
    percent_decode_str(input).decode_utf8_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_untouched() {
        let unreserved = "ABCxyz0189-._~";
        assert_eq!(percent_encode(unreserved), unreserved);
    }

    #[test]
    fn test_reserved_encoded_uppercase() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("/"), "%2F");
        assert_eq!(percent_encode("a+b=c&d"), "a%2Bb%3Dc%26d");
        assert_eq!(percent_encode("*"), "%2A");
        assert_eq!(percent_encode("!'()"), "%21%27%28%29");
        assert_eq!(percent_encode("="), "%3D");
    }

    #[test]
    fn test_unicode_encoded_as_utf8_bytes() {
        assert_eq!(percent_encode("é"), "%C3%A9");
        assert_eq!(percent_encode("☃"), "%E2%98%83");
    }

    #[test]
    fn test_rfc5849_examples() {
        assert_eq!(
            percent_encode("Hello Ladies + Gentlemen, a signed OAuth request!"),
            "Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21"
        );
        assert_eq!(
            percent_encode("http://printer.example.com/ready"),
            "http%3A%2F%2Fprinter.example.com%2Fready"
        );
    }

    #[test]
    fn test_printable_ascii_survives_server_decoding() {
        let printable: String = (0x20u8..=0x7e).map(char::from).collect();
        let encoded = percent_encode(&printable);
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('='));
        assert_eq!(percent_decode(&encoded), printable);
    }

    #[test]
    fn test_unicode_survives_server_decoding() {
        let original = "名前=テスト & café/ünïcode";
        assert_eq!(percent_decode(&percent_encode(original)), original);
    }
}
