//! Percent-encoding for URL components.
//!
//! Two families:
//! - path codecs (RFC 3986 §3.3): `pchar` characters stay literal, `+` is
//!   just a plus sign and space becomes `%20`;
//! - form codecs (`application/x-www-form-urlencoded`): space is `+` and a
//!   literal plus is `%2B`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};
use url::form_urlencoded;

/// Everything outside `pchar = unreserved / sub-delims / ":" / "@"`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// [`SEGMENT`] with `/` allowed between segments.
const PATH: &AsciiSet = &SEGMENT.remove(b'/');

/// Characters a filesystem path may contain that would end or corrupt a
/// URL path: delimiters, the escape character itself and whitespace.
const FILE_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Escapes `s` for use as a URL path. `/` separators are kept.
pub fn path_encode(s: &str) -> String {
    utf8_percent_encode(s, PATH).to_string()
}

/// Escapes `s` for use as a single path segment, `/` included.
pub fn segment_encode(s: &str) -> String {
    utf8_percent_encode(s, SEGMENT).to_string()
}

/// Escapes a filesystem path for a `file` URL. Unlike [`path_encode`] this
/// leaves reserved punctuation alone and only touches what would change how
/// the URL parses.
pub(crate) fn file_path_encode(s: &str) -> String {
    utf8_percent_encode(s, FILE_PATH).to_string()
}

/// Reverses [`path_encode`]. `+` is left alone.
pub fn path_decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Form-encodes `s`: space → `+`, `+` → `%2B`.
pub fn url_encode(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Reverses [`url_encode`]: `+` → space, `%XX` → byte. Reserved punctuation
/// passes through unchanged.
pub fn decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_codec_plus_and_space() {
        assert_eq!(decode("%2B+"), "+ ");
        assert_eq!(url_encode("+ "), "%2B+");
    }

    #[test]
    fn form_decode_leaves_reserved_alone() {
        assert_eq!(decode("!$&'()*,;="), "!$&'()*,;=");
    }

    #[test]
    fn path_encode_keeps_pchars() {
        let pchars = ":@!$&'()*+,;=-._~";
        assert_eq!(path_encode(pchars), pchars);
    }

    #[test]
    fn path_encode_plus_and_space() {
        assert_eq!(path_encode("+ "), "+%20");
    }

    #[test]
    fn path_encode_keeps_separators_segment_encode_does_not() {
        assert_eq!(path_encode("/a b/c"), "/a%20b/c");
        assert_eq!(segment_encode("a/b c"), "a%2Fb%20c");
        assert_eq!(path_encode("100%"), "100%25");
    }

    #[test]
    fn path_decode_keeps_plus() {
        assert_eq!(path_decode("+%2B+"), "+++");
        assert_eq!(path_decode("the%20file.txt"), "the file.txt");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(path_encode("café"), "caf%C3%A9");
        assert_eq!(path_decode("caf%C3%A9"), "café");
        assert_eq!(url_encode("café au lait"), "caf%C3%A9+au+lait");
        assert_eq!(decode("caf%C3%A9+au+lait"), "café au lait");
    }

    #[test]
    fn file_path_encode_escapes_delimiters_only() {
        assert_eq!(file_path_encode("/tmp/a#b?c"), "/tmp/a%23b%3Fc");
        assert_eq!(file_path_encode("/tmp/50%41 x.txt"), "/tmp/50%2541%20x.txt");
        assert_eq!(file_path_encode("/c:/a+b;c=d"), "/c:/a+b;c=d");
        assert_eq!(path_decode(&file_path_encode("/tmp/50%41 #.txt")), "/tmp/50%41 #.txt");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(path_decode("%FF"), "\u{FFFD}");
    }
}
