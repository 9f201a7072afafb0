//! Path segment handling: separator styles, `.`/`..` resolution and joining.
//!
//! Everything here is lexical. Nothing touches the filesystem, so the same
//! routines serve URL paths and platform paths of either style.

mod normalize;
mod style;

pub use normalize::{join, normalize_path, split_last};
pub use style::{has_drive_prefix, PathStyle};
