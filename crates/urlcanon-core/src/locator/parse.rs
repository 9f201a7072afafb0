//! Lenient, structure-preserving URL parsing.
//!
//! Unlike a WHATWG parser this never rewrites the path, so `..` segments and
//! a `localhost` authority survive until someone asks for canonicalization.

use super::scheme::{split_scheme, SchemeRegistry};
use super::Url;
use crate::error::UrlError;

/// Separator between the archive URL and the entry of a `jar:` URL.
pub(crate) const JAR_SEPARATOR: &str = "!/";

/// Parses `input`. With `registry` set, the scheme (and the scheme of a
/// nested `jar:` URL) must be registered.
pub(super) fn parse(input: &str, registry: Option<&SchemeRegistry>) -> Result<Url, UrlError> {
    let trimmed = input.trim();
    let (scheme, rest) =
        split_scheme(trimmed).ok_or_else(|| UrlError::malformed(input, "no scheme"))?;
    let scheme = scheme.to_ascii_lowercase();
    if let Some(registry) = registry {
        if !registry.contains(&scheme) {
            return Err(UrlError::UnknownScheme { scheme });
        }
    }

    let (rest, fragment) = match rest.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment.to_string())),
        None => (rest, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((rest, query)) => (rest, Some(query.to_string())),
        None => (rest, None),
    };

    let (mut authority, path) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find('/').unwrap_or(after.len());
            (Some(after[..end].to_string()), after[end..].to_string())
        }
        None => (None, rest.to_string()),
    };

    // `file:/etc` and `file:///etc` name the same local file.
    if scheme == "file" && authority.is_none() && path.starts_with('/') {
        authority = Some(String::new());
    }

    if scheme == "jar" {
        let (inner, _) = path
            .split_once(JAR_SEPARATOR)
            .ok_or_else(|| UrlError::malformed(input, "no !/ in jar URL"))?;
        parse(inner, registry)?;
    }

    Ok(Url {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}
