//! Scheme syntax and the set of recognised schemes.

use std::collections::BTreeSet;

/// Schemes understood out of the box.
pub const DEFAULT_SCHEMES: &[&str] = &["file", "ftp", "http", "https", "jar", "mailto", "urn"];

/// Set of schemes the parser accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeRegistry {
    schemes: BTreeSet<String>,
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self {
            schemes: DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SchemeRegistry {
    /// Default schemes plus `extra` (matched case-insensitively).
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::default();
        for scheme in extra {
            registry.insert(scheme.as_ref());
        }
        registry
    }

    /// Registers `scheme`. Returns false if it is not valid scheme syntax.
    pub fn insert(&mut self, scheme: &str) -> bool {
        if !is_scheme(scheme) {
            tracing::debug!("ignoring invalid scheme {:?}", scheme);
            return false;
        }
        self.schemes.insert(scheme.to_ascii_lowercase());
        true
    }

    pub fn contains(&self, scheme: &str) -> bool {
        self.schemes.contains(&scheme.to_ascii_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(String::as_str)
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`, at least two characters.
///
/// One-letter schemes are rejected so drive letters such as `c:` never read
/// as a scheme.
pub fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    s.len() >= 2
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
}

/// Splits `input` into `(scheme, rest)` at the first `:` when the prefix is
/// valid scheme syntax.
pub fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = input.split_once(':')?;
    is_scheme(scheme).then_some((scheme, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_syntax() {
        assert!(is_scheme("http"));
        assert!(is_scheme("svn+ssh"));
        assert!(is_scheme("x-custom.v2"));
        assert!(!is_scheme("c"));
        assert!(!is_scheme("1http"));
        assert!(!is_scheme("ht tp"));
        assert!(!is_scheme(""));
    }

    #[test]
    fn split_scheme_skips_drive_letters() {
        assert_eq!(
            split_scheme("http://www.google.com/"),
            Some(("http", "//www.google.com/"))
        );
        assert_eq!(
            split_scheme("jar:file:/root/app.jar!/x"),
            Some(("jar", "file:/root/app.jar!/x"))
        );
        assert_eq!(split_scheme("c:\\Windows"), None);
        assert_eq!(split_scheme("fbiy384ehd"), None);
        assert_eq!(split_scheme("/usr/share"), None);
    }

    #[test]
    fn registry_defaults_and_extras() {
        let registry = SchemeRegistry::default();
        assert!(registry.contains("file"));
        assert!(registry.contains("HTTPS"));
        assert!(!registry.contains("s3"));

        let registry = SchemeRegistry::with_extra(["S3", "not a scheme"]);
        assert!(registry.contains("s3"));
        assert!(!registry.contains("not a scheme"));
        assert_eq!(registry.iter().count(), DEFAULT_SCHEMES.len() + 1);
    }
}
