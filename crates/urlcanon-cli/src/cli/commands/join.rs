//! `urlcanon join` – resolve a relative path against a base.

use anyhow::Result;
use urlcanon_core::Canonicalizer;

pub fn run_join(canon: &Canonicalizer, base: &str, relative: &str) -> Result<()> {
    let url = canon.make_canonical_url_from_base(base, relative)?;
    tracing::debug!("join {:?} + {:?} = {}", base, relative, url);
    println!("{}", url);
    Ok(())
}
