//! Separator sets for Unix and Windows style paths.

/// Which characters separate path segments.
///
/// URL paths are always [`PathStyle::Unix`]. Platform paths handed to the
/// canonicalizer use whatever style it was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    /// `/` only.
    #[default]
    Unix,
    /// `/` and `\`.
    Windows,
}

impl PathStyle {
    /// Style of the host the binary was built for.
    pub fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Unix
        }
    }

    pub fn separators(self) -> &'static [char] {
        match self {
            PathStyle::Unix => &['/'],
            PathStyle::Windows => &['/', '\\'],
        }
    }

    pub fn is_separator(self, c: char) -> bool {
        self.separators().contains(&c)
    }

    /// True if `path` begins with a separator of this style.
    pub fn is_rooted(self, path: &str) -> bool {
        path.starts_with(|c| self.is_separator(c))
    }
}

/// True for `X:`, `X:\...` and `X:/...` where `X` is an ASCII letter.
///
/// Drive prefixes are recognised under both styles so a Windows path can be
/// classified on any host.
pub fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    match bytes {
        [letter, b':'] => letter.is_ascii_alphabetic(),
        [letter, b':', sep, ..] => letter.is_ascii_alphabetic() && (*sep == b'/' || *sep == b'\\'),
        _ => false,
    }
}
