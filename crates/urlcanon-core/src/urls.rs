//! One-call helpers over the default [`Canonicalizer`] and [`Resources`].
//!
//! The canonicalization family takes and returns `Option`: `None` in gives
//! `None` out and is never an error. `is_absolute` is the exception and
//! reports a missing argument as [`UrlError::NullArgument`].

use crate::canonical::Canonicalizer;
use crate::config::ProbeConfig;
use crate::error::UrlError;
use crate::locator::Url;
use crate::resource::Resources;

pub use crate::encode::{decode, path_decode, path_encode, segment_encode, url_encode};
pub use crate::resource::UNKNOWN_LAST_MODIFIED;

/// True if `path` is rooted, starts with a drive letter, or is a URL.
pub fn is_absolute(path: Option<&str>) -> Result<bool, UrlError> {
    let path = path.ok_or(UrlError::NullArgument("path"))?;
    Ok(Canonicalizer::default().is_absolute(path))
}

/// True for host-less `file` URLs and `jar:` URLs wrapping one.
pub fn is_local(url: &Url) -> bool {
    url.is_local()
}

/// Canonical URL for a single path or URL string.
pub fn make_canonical_url_from_path(path: &str) -> Result<Url, UrlError> {
    Canonicalizer::default().make_canonical_url_from_path(path)
}

/// Canonical URL for `relative` resolved against `base`.
pub fn make_canonical_url_from_base(base: &str, relative: &str) -> Result<Url, UrlError> {
    Canonicalizer::default().make_canonical_url_from_base(base, relative)
}

pub fn canonicalize_url(url: Option<&Url>) -> Option<Url> {
    url.map(Url::canonicalize)
}

pub fn parent(url: Option<&Url>) -> Option<Url> {
    url.and_then(Url::parent)
}

pub fn canonical_parent(url: Option<&Url>) -> Option<Url> {
    url.and_then(Url::canonical_parent)
}

pub fn name(url: &Url) -> String {
    url.name()
}

pub fn short_name(url: &Url) -> String {
    url.short_name()
}

pub fn to_external_form(url: &Url) -> String {
    url.to_external_form()
}

/// Parses `input` and serializes it again; fails for missing or unknown schemes.
pub fn to_external_form_str(input: &str) -> Result<String, UrlError> {
    Ok(Url::parse(input)?.to_external_form())
}

/// Probes with the default timeouts. Never fails.
pub fn exists(url: &Url) -> bool {
    Resources::new(ProbeConfig::default()).exists(url)
}

/// Milliseconds since the epoch, `0` if unreported, [`UNKNOWN_LAST_MODIFIED`] if unreachable.
pub fn last_modified(url: &Url) -> i64 {
    Resources::new(ProbeConfig::default()).last_modified(url)
}
