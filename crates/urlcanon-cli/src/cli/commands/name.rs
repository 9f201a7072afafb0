//! `urlcanon name` – last path segment, optionally without extension.

use anyhow::Result;
use urlcanon_core::Canonicalizer;

use super::locate;

pub fn run_name(canon: &Canonicalizer, input: &str, short: bool) -> Result<()> {
    let url = locate(canon, input)?;
    let name = if short { url.short_name() } else { url.name() };
    println!("{}", name);
    Ok(())
}
