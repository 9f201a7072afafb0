//! HEAD / metadata probing for remote URLs.
//!
//! Uses the curl crate (libcurl) to ask the server whether a resource exists
//! and when it was last modified, without downloading the body.

mod parse;

use anyhow::{Context, Result};
use std::str;

use crate::config::ProbeConfig;

/// Result of a HEAD request: the headers needed for existence and freshness checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadResult {
    /// Final response code (after redirects when they are followed).
    pub response_code: u32,
    /// Total size in bytes, if `Content-Length` is present.
    pub content_length: Option<u64>,
    /// `ETag` value if present.
    pub etag: Option<String>,
    /// Raw `Last-Modified` value if present.
    pub last_modified: Option<String>,
    /// Remote modification time in seconds since the Unix epoch, as parsed by libcurl.
    pub file_time: Option<i64>,
}

/// Performs a HEAD request and returns parsed metadata.
///
/// HTTP(S) responses outside 2xx are errors. For other protocols (e.g. FTP)
/// a completed transfer is success. Runs in the current thread and is
/// bounded by the timeouts in `cfg`.
pub fn probe(url: &str, cfg: &ProbeConfig) -> Result<HeadResult> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(cfg.follow_redirects)?;
    easy.connect_timeout(cfg.connect_timeout())?;
    easy.timeout(cfg.timeout())?;
    easy.fetch_filetime(true)?;
    if let Some(agent) = &cfg.user_agent {
        easy.useragent(agent)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform().context("HEAD request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    let is_http = url.starts_with("http:") || url.starts_with("https:");
    if is_http && !(200..300).contains(&code) {
        anyhow::bail!("HEAD {} returned HTTP {}", url, code);
    }

    let mut result = parse::parse_headers(&headers);
    result.response_code = code;
    result.file_time = easy.filetime().context("no file time")?;
    tracing::debug!("HEAD {} -> {} (file_time={:?})", url, code, result.file_time);
    Ok(result)
}
