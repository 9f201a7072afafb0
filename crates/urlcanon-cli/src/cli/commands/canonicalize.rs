//! `urlcanon canonicalize` – resolve `.` and `..` segments.

use anyhow::Result;
use urlcanon_core::Canonicalizer;

pub fn run_canonicalize(canon: &Canonicalizer, input: &str) -> Result<()> {
    let url = canon.make_canonical_url_from_path(input)?;
    println!("{}", url);
    Ok(())
}
