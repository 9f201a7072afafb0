//! Canonicalization: `.`/`..` resolution on URLs, parent and name lookup,
//! and turning (base, relative) path fragments into canonical URLs.

use crate::config::UrlcanonConfig;
use crate::error::UrlError;
use crate::locator::{split_scheme, SchemeRegistry, Url, JAR_SEPARATOR};
use crate::path::{has_drive_prefix, join, normalize_path, split_last, PathStyle};

impl Url {
    /// Resolves `.` and `..` segments and drops empty ones. Scheme,
    /// authority, query and fragment are kept. For `jar:` URLs the archive
    /// URL and the entry are resolved separately. Idempotent.
    pub fn canonicalize(&self) -> Url {
        if let Some((inner, entry)) = self.nested() {
            let entry = normalize_path(entry, PathStyle::Unix);
            let path = format!("{}{}{}", inner.canonicalize(), JAR_SEPARATOR, entry);
            return self.with_path(path);
        }
        if self.is_opaque() {
            return self.clone();
        }
        let mut path = normalize_path(self.path(), PathStyle::Unix);
        if !path.is_empty() && !path.starts_with('/') {
            path.insert(0, '/');
        }
        self.with_path(path)
    }

    /// Drops the last path segment without resolving anything else:
    /// `file:///usr/share/../share` → `file:///usr/share/..`.
    ///
    /// Returns `None` when there is no segment to drop.
    pub fn parent(&self) -> Option<Url> {
        if self.scheme() == "jar" {
            let (archive, entry) = self.path().split_once(JAR_SEPARATOR)?;
            let (parent, _) = split_last(entry, PathStyle::Unix)?;
            return Some(self.with_path(format!("{}{}{}", archive, JAR_SEPARATOR, parent)));
        }
        if self.is_opaque() {
            return None;
        }
        let (parent, _) = split_last(self.path(), PathStyle::Unix)?;
        Some(self.with_path(parent.to_string()))
    }

    /// Parent of the canonical form: `file:///usr/share/../share` → `file:///usr`.
    pub fn canonical_parent(&self) -> Option<Url> {
        self.canonicalize().parent()
    }

    /// Last segment of the canonical path, extension included. Empty for
    /// the root.
    pub fn name(&self) -> String {
        let canonical = self.canonicalize();
        let path = match canonical.nested() {
            Some((_, entry)) => entry.to_string(),
            None => canonical.path().to_string(),
        };
        split_last(&path, PathStyle::Unix)
            .map(|(_, name)| name.to_string())
            .unwrap_or_default()
    }

    /// [`Url::name`] without its final `.ext`. Dot files such as `.bashrc`
    /// are returned whole.
    pub fn short_name(&self) -> String {
        strip_extension(&self.name()).to_string()
    }
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => name,
        Some(dot) => &name[..dot],
    }
}

/// Turns platform paths and URL strings into canonical URLs.
///
/// Holds the separator style used for platform paths and the schemes that
/// mark a string as a URL rather than a path.
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    style: PathStyle,
    schemes: SchemeRegistry,
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(PathStyle::native(), SchemeRegistry::default())
    }
}

impl Canonicalizer {
    pub fn new(style: PathStyle, schemes: SchemeRegistry) -> Self {
        Self { style, schemes }
    }

    pub fn from_config(cfg: &UrlcanonConfig) -> Self {
        Self::new(
            cfg.path_style.resolve(),
            SchemeRegistry::with_extra(&cfg.extra_schemes),
        )
    }

    pub fn parse(&self, input: &str) -> Result<Url, UrlError> {
        Url::parse_with(input, &self.schemes)
    }

    /// True if `path` is rooted, starts with a drive letter, or is a URL.
    pub fn is_absolute(&self, path: &str) -> bool {
        self.style.is_rooted(path) || has_drive_prefix(path) || self.url_scheme(path).is_some()
    }

    /// Canonical URL for a single path or URL string. Relative paths are
    /// taken from the filesystem root: `initrd.img` → `file:///initrd.img`.
    pub fn make_canonical_url_from_path(&self, path: &str) -> Result<Url, UrlError> {
        self.make_canonical_url_from_base(path, "")
    }

    /// Joins `base` and `relative` and canonicalizes the result.
    ///
    /// A `relative` that is itself a URL wins outright. A URL `base` gets
    /// `relative` appended to its path; the base's query and fragment are
    /// dropped and any `?query` or `#fragment` on `relative` takes their place.
    /// Otherwise both are platform paths and the result is a local `file`
    /// URL. Leading and trailing separators on either side do not matter.
    pub fn make_canonical_url_from_base(&self, base: &str, relative: &str) -> Result<Url, UrlError> {
        if self.url_scheme(relative).is_some() {
            return Ok(self.parse(relative)?.canonicalize());
        }
        if self.url_scheme(base).is_some() {
            let base = self.parse(base)?;
            if base.is_opaque() {
                return Err(UrlError::malformed(
                    &base.to_external_form(),
                    "cannot append a path to an opaque URL",
                ));
            }
            let (relative, suffix) = match relative.find(|c: char| c == '?' || c == '#') {
                Some(idx) => relative.split_at(idx),
                None => (relative, ""),
            };
            let joined = join(base.path(), relative, self.style);
            let path = normalize_path(&joined, self.style);
            let external = format!("{}{}", base.without_query().with_path(path), suffix);
            return Ok(self.parse(&external)?.canonicalize());
        }

        let joined = join(base, relative, self.style);
        let path = normalize_path(&joined, self.style);
        tracing::trace!("joined {:?} + {:?} -> {:?}", base, relative, path);
        Ok(Url::file(&path).canonicalize())
    }

    /// The scheme of `input` when it reads as a URL: a registered scheme, or
    /// any well-formed scheme followed by `//`.
    fn url_scheme<'a>(&self, input: &'a str) -> Option<&'a str> {
        let (scheme, rest) = split_scheme(input)?;
        (self.schemes.contains(scheme) || rest.starts_with("//")).then_some(scheme)
    }
}
