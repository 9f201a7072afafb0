//! The `Url` locator type.
//!
//! A `Url` keeps the exact structure it was parsed from. Two values compare
//! equal when their serialized forms are equal, so `file:/etc` and
//! `file:///etc` are the same locator but `file:///usr/share/..` and
//! `file:///usr` are not until canonicalized.

mod parse;
mod scheme;

pub(crate) use parse::JAR_SEPARATOR;
pub use scheme::{is_scheme, split_scheme, SchemeRegistry, DEFAULT_SCHEMES};

use crate::encode::file_path_encode;
use crate::error::UrlError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// An absolute resource locator: scheme, optional authority, path, and
/// optional query and fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url {
    scheme: String,
    authority: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl Url {
    /// Parses `input` against the default scheme registry.
    pub fn parse(input: &str) -> Result<Url, UrlError> {
        parse::parse(input, Some(&SchemeRegistry::default()))
    }

    /// Parses `input` against `registry`.
    pub fn parse_with(input: &str, registry: &SchemeRegistry) -> Result<Url, UrlError> {
        parse::parse(input, Some(registry))
    }

    /// A local `file` URL for `path`, which is made absolute if it is not.
    ///
    /// `path` is a filesystem path: `%`, `#`, `?` and whitespace are escaped
    /// so they stay part of the path.
    pub fn file(path: &str) -> Url {
        let mut path = file_path_encode(path);
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        Url {
            scheme: "file".to_string(),
            authority: Some(String::new()),
            path,
            query: None,
            fragment: None,
        }
    }

    /// Local `file` URL for an absolute filesystem path, percent-encoding
    /// whatever the path syntax does not allow.
    pub fn from_file_path(path: &Path) -> Result<Url, UrlError> {
        let converted = url::Url::from_file_path(path).map_err(|()| {
            UrlError::malformed(&path.display().to_string(), "not an absolute path")
        })?;
        Url::parse(converted.as_str())
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// `user@host:port` part, `Some("")` for local files, `None` for opaque URLs.
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Host without userinfo or port.
    pub fn host(&self) -> Option<&str> {
        let authority = self.authority.as_deref()?;
        let host_port = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);
        if host_port.starts_with('[') {
            return Some(host_port.find(']').map_or(host_port, |end| &host_port[..=end]));
        }
        Some(host_port.split_once(':').map_or(host_port, |(host, _)| host))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// True for URLs of the form `scheme:opaque` (no `//authority`, no
    /// rooted path), e.g. `mailto:` and `jar:`.
    pub fn is_opaque(&self) -> bool {
        self.authority.is_none() && !self.path.starts_with('/')
    }

    /// For `jar:<inner>!/<entry>`, the inner URL and the entry path.
    pub fn nested(&self) -> Option<(Url, &str)> {
        if self.scheme != "jar" {
            return None;
        }
        let (inner, entry) = self.path.split_once(JAR_SEPARATOR)?;
        let inner = parse::parse(inner, None).ok()?;
        Some((inner, entry))
    }

    /// True for `file` URLs without a host, and for `jar:` URLs whose archive
    /// is such a file. `file://localhost/...` is not local.
    pub fn is_local(&self) -> bool {
        match self.scheme.as_str() {
            "file" => self.authority.as_deref().map_or(false, str::is_empty),
            "jar" => self.nested().map_or(false, |(inner, _)| inner.is_local()),
            _ => false,
        }
    }

    /// Filesystem path of a local URL (the archive, for `jar:` URLs).
    ///
    /// Percent-escapes in the path are decoded and drive letters are mapped
    /// by the `url` crate according to the host platform.
    pub fn to_file_path(&self) -> Result<PathBuf, UrlError> {
        if let Some((inner, _)) = self.nested() {
            return inner.to_file_path();
        }
        let external = self.to_external_form();
        if !self.is_local() {
            return Err(UrlError::NotLocal { url: external });
        }
        let parsed = url::Url::parse(&external)
            .map_err(|e| UrlError::malformed(&external, e.to_string()))?;
        parsed
            .to_file_path()
            .map_err(|()| UrlError::NotLocal { url: external })
    }

    /// Serialized form: `scheme:[//authority]path[?query][#fragment]`.
    pub fn to_external_form(&self) -> String {
        let mut out = String::with_capacity(
            self.scheme.len() + self.path.len() + self.authority.as_ref().map_or(0, String::len) + 8,
        );
        out.push_str(&self.scheme);
        out.push(':');
        if let Some(authority) = &self.authority {
            out.push_str("//");
            out.push_str(authority);
        }
        out.push_str(&self.path);
        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }

    pub(crate) fn with_path(&self, path: String) -> Url {
        Url {
            path,
            ..self.clone()
        }
    }

    pub(crate) fn without_query(mut self) -> Url {
        self.query = None;
        self.fragment = None;
        self
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_external_form())
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s)
    }
}

impl Serialize for Url {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Url {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
