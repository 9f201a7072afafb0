//! Existence and last-modified queries.
//!
//! Local URLs are answered from filesystem metadata; remote ones go through a
//! [`Prober`]. Nothing here returns an error: failures are logged and turned
//! into `false` or [`UNKNOWN_LAST_MODIFIED`].

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::ProbeConfig;
use crate::fetch_head::{self, HeadResult};
use crate::locator::Url;

/// Returned by [`Resources::last_modified`] when the resource cannot be reached.
pub const UNKNOWN_LAST_MODIFIED: i64 = -1;

/// Answers metadata questions about remote URLs.
pub trait Prober {
    fn head(&self, url: &Url) -> Result<HeadResult>;
}

/// [`Prober`] backed by a libcurl HEAD request.
#[derive(Debug, Clone, Default)]
pub struct CurlProber {
    config: ProbeConfig,
}

impl CurlProber {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }
}

impl Prober for CurlProber {
    fn head(&self, url: &Url) -> Result<HeadResult> {
        fetch_head::probe(&url.to_external_form(), &self.config)
    }
}

/// Where a URL can be looked up.
enum Target {
    Local(PathBuf),
    Remote(Url),
    Unsupported,
}

fn target(url: &Url) -> Target {
    if url.is_local() {
        return match url.to_file_path() {
            Ok(path) => Target::Local(path),
            Err(e) => {
                tracing::debug!("{}: {}", url, e);
                Target::Unsupported
            }
        };
    }
    match url.scheme() {
        "http" | "https" | "ftp" | "file" => Target::Remote(url.clone()),
        "jar" => match url.nested() {
            Some((inner, _)) => target(&inner),
            None => Target::Unsupported,
        },
        _ => Target::Unsupported,
    }
}

/// Outcome of a modification-time lookup.
enum Modified {
    Unreachable,
    Unknown,
    At(SystemTime),
}

/// Existence and last-modified queries over a [`Prober`].
#[derive(Debug, Clone, Default)]
pub struct Resources<P = CurlProber> {
    prober: P,
}

impl Resources<CurlProber> {
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_prober(CurlProber::new(config))
    }
}

impl<P: Prober> Resources<P> {
    pub fn with_prober(prober: P) -> Self {
        Self { prober }
    }

    /// True if the resource behind `url` exists. Never fails: unresolvable
    /// hosts, refused connections and missing files all give `false`.
    ///
    /// For `jar:` URLs only the archive is checked.
    pub fn exists(&self, url: &Url) -> bool {
        match target(url) {
            Target::Local(path) => path.exists(),
            Target::Remote(remote) => match self.prober.head(&remote) {
                Ok(_) => true,
                Err(e) => {
                    tracing::debug!("exists {}: {:#}", remote, e);
                    false
                }
            },
            Target::Unsupported => false,
        }
    }

    /// Modification time of the resource, if it is reachable and reports one.
    pub fn last_modified_time(&self, url: &Url) -> Option<SystemTime> {
        match self.lookup(url) {
            Modified::At(time) => Some(time),
            Modified::Unknown | Modified::Unreachable => None,
        }
    }

    /// Modification time in milliseconds since the Unix epoch.
    ///
    /// `0` when the resource answered without a modification time,
    /// [`UNKNOWN_LAST_MODIFIED`] when it could not be reached at all.
    pub fn last_modified(&self, url: &Url) -> i64 {
        match self.lookup(url) {
            Modified::At(time) => time
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX)),
            Modified::Unknown => 0,
            Modified::Unreachable => UNKNOWN_LAST_MODIFIED,
        }
    }

    fn lookup(&self, url: &Url) -> Modified {
        match target(url) {
            Target::Local(path) => match fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(time) => Modified::At(time),
                Err(e) => {
                    tracing::debug!("last-modified {}: {}", path.display(), e);
                    Modified::Unreachable
                }
            },
            Target::Remote(remote) => match self.prober.head(&remote) {
                Ok(head) => match head.file_time {
                    Some(secs) if secs >= 0 => {
                        Modified::At(UNIX_EPOCH + Duration::from_secs(secs as u64))
                    }
                    _ => Modified::Unknown,
                },
                Err(e) => {
                    tracing::debug!("last-modified {}: {:#}", remote, e);
                    Modified::Unreachable
                }
            },
            Target::Unsupported => Modified::Unreachable,
        }
    }
}
