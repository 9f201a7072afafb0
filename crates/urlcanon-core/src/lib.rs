pub mod config;
pub mod logging;

pub mod canonical;
pub mod encode;
pub mod error;
pub mod fetch_head;
pub mod locator;
pub mod path;
pub mod resource;
pub mod urls;

pub use canonical::Canonicalizer;
pub use error::UrlError;
pub use locator::{SchemeRegistry, Url};
pub use path::PathStyle;
pub use resource::{CurlProber, Prober, Resources, UNKNOWN_LAST_MODIFIED};
