//! Lexical segment resolution and joining.

use super::PathStyle;

/// Resolves `.` and `..` segments and drops empty ones.
///
/// The input is split on the separators of `style` and rejoined with `/`.
/// A leading separator keeps the result absolute; a trailing separator is
/// kept when at least one segment survives.
///
/// In an absolute path a `..` that would climb above the root is discarded,
/// so `/usr/share/../share/../lib/../../var` becomes `/var` and `/../etc`
/// becomes `/etc`. In a relative path unresolvable leading `..` segments stay.
///
/// A leading drive segment (`c:`) belongs to the root: `/c:/..` is `/c:/`.
pub fn normalize_path(path: &str, style: PathStyle) -> String {
    let rooted = style.is_rooted(path);
    let trailing = path.ends_with(|c| style.is_separator(c));

    let mut segments = path
        .split(|c| style.is_separator(c))
        .filter(|s| !s.is_empty() && *s != ".")
        .peekable();
    let drive = segments.next_if(|s| is_drive_segment(s));
    let absolute = rooted || drive.is_some();

    let mut stack: Vec<&str> = Vec::new();
    for segment in segments {
        match segment {
            ".." => match stack.last() {
                Some(&last) if last != ".." => {
                    stack.pop();
                }
                _ if absolute => {}
                _ => stack.push(".."),
            },
            name => stack.push(name),
        }
    }

    let mut out = String::with_capacity(path.len());
    if rooted {
        out.push('/');
    }
    if let Some(drive) = drive {
        out.push_str(drive);
        out.push('/');
    }
    out.push_str(&stack.join("/"));
    if trailing && !stack.is_empty() {
        out.push('/');
    }
    out
}

fn is_drive_segment(segment: &str) -> bool {
    matches!(segment.as_bytes(), [letter, b':'] if letter.is_ascii_alphabetic())
}

/// Joins two path fragments with exactly one `/` between them.
///
/// Separators at the end of `base` and at the start of `relative` are
/// collapsed, so `etc` + `resolv.conf`, `etc/` + `/resolv.conf` and every
/// other combination give `etc/resolv.conf`. An empty side yields the other
/// side unchanged.
pub fn join(base: &str, relative: &str, style: PathStyle) -> String {
    if base.is_empty() {
        return relative.to_string();
    }
    if relative.is_empty() {
        return base.to_string();
    }
    let base = base.trim_end_matches(|c| style.is_separator(c));
    let relative = relative.trim_start_matches(|c| style.is_separator(c));
    format!("{}/{}", base, relative)
}

/// Splits off the last segment of `path`, ignoring one trailing separator.
///
/// Returns `(parent, name)`. The parent of a top-level segment in an absolute
/// path is the root separator itself. Returns `None` when there is no segment
/// to remove (empty path or bare root).
pub fn split_last(path: &str, style: PathStyle) -> Option<(&str, &str)> {
    let trimmed = path
        .strip_suffix(|c| style.is_separator(c))
        .unwrap_or(path);
    match trimmed.rfind(|c| style.is_separator(c)) {
        Some(idx) => {
            let name = &trimmed[idx + 1..];
            if name.is_empty() {
                return None;
            }
            let parent = if idx == 0 {
                &trimmed[..1]
            } else {
                &trimmed[..idx]
            };
            Some((parent, name))
        }
        None if !trimmed.is_empty() => Some(("", trimmed)),
        None => None,
    }
}
