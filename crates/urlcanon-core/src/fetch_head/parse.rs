//! Parse HTTP response header lines into HeadResult.

use super::HeadResult;

/// Parse collected header lines into HeadResult.
///
/// When redirects are followed libcurl reports one header block per hop;
/// each status line starts a new block so the last response wins.
pub(crate) fn parse_headers(lines: &[String]) -> HeadResult {
    let mut result = HeadResult::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            result = HeadResult::default();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.parse::<u64>() {
                    result.content_length = Some(n);
                }
            }
            if name.eq_ignore_ascii_case("etag") {
                result.etag = Some(value.trim_matches('"').to_string());
            }
            if name.eq_ignore_ascii_case("last-modified") {
                result.last_modified = Some(value.to_string());
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_headers_content_length() {
        let r = parse_headers(&lines(&["HTTP/1.1 200 OK", "Content-Length: 12345"]));
        assert_eq!(r.content_length, Some(12345));
        assert!(r.etag.is_none());
        assert!(r.last_modified.is_none());
    }

    #[test]
    fn parse_headers_etag_and_last_modified() {
        let r = parse_headers(&lines(&[
            "ETag: \"abc-123\"",
            "Last-Modified: Wed, 21 Oct 2015 07:28:00 GMT",
        ]));
        assert_eq!(r.etag.as_deref(), Some("abc-123"));
        assert_eq!(
            r.last_modified.as_deref(),
            Some("Wed, 21 Oct 2015 07:28:00 GMT")
        );
    }

    #[test]
    fn parse_headers_last_redirect_hop_wins() {
        let r = parse_headers(&lines(&[
            "HTTP/1.1 301 Moved Permanently",
            "Location: /hq/roadinfo/Hourly",
            "Last-Modified: Mon, 01 Jan 2001 00:00:00 GMT",
            "",
            "HTTP/1.1 200 OK",
            "Content-Length: 7",
        ]));
        assert_eq!(r.content_length, Some(7));
        assert!(r.last_modified.is_none());
    }

    #[test]
    fn parse_headers_ignores_garbage() {
        let r = parse_headers(&lines(&["not a header", "Content-Length: lots"]));
        assert_eq!(r, HeadResult::default());
    }
}
