//! CLI command handlers. Each command is in its own file.

mod canonicalize;
mod classify;
mod codec;
mod join;
mod name;
mod parent;
mod probe;

pub use canonicalize::run_canonicalize;
pub use classify::{run_is_absolute, run_is_local};
pub use codec::{run_decode, run_encode};
pub use join::run_join;
pub use name::run_name;
pub use parent::run_parent;
pub use probe::{run_exists, run_last_modified};

use anyhow::Result;
use urlcanon_core::{Canonicalizer, Url, UrlError};

/// Parses `input` as a URL, or as a platform path when it has no scheme.
///
/// Paths go through the canonicalizer, so `/usr/../etc` arrives already
/// resolved; URLs are kept exactly as written.
pub(crate) fn locate(canon: &Canonicalizer, input: &str) -> Result<Url> {
    match canon.parse(input) {
        Ok(url) => Ok(url),
        Err(UrlError::Malformed { .. }) => Ok(canon.make_canonical_url_from_path(input)?),
        Err(e) => Err(e.into()),
    }
}
