//! `urlcanon is-local` / `urlcanon is-absolute`.

use anyhow::Result;
use urlcanon_core::Canonicalizer;

use super::locate;

pub fn run_is_local(canon: &Canonicalizer, input: &str) -> Result<()> {
    let url = locate(canon, input)?;
    println!("{}", url.is_local());
    Ok(())
}

pub fn run_is_absolute(canon: &Canonicalizer, path: &str) {
    println!("{}", canon.is_absolute(path));
}
