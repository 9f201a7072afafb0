//! `urlcanon parent` – drop the last path segment.

use anyhow::Result;
use urlcanon_core::Canonicalizer;

use super::locate;

pub fn run_parent(canon: &Canonicalizer, input: &str, canonical: bool) -> Result<()> {
    let url = locate(canon, input)?;
    let parent = if canonical {
        url.canonical_parent()
    } else {
        url.parent()
    };
    match parent {
        Some(parent) => println!("{}", parent),
        None => anyhow::bail!("{} has no parent", url),
    }
    Ok(())
}
