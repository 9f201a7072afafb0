//! `urlcanon exists` / `urlcanon last-modified` – stat or HEAD the resource.

use anyhow::Result;
use urlcanon_core::{Canonicalizer, Prober, Resources};

use super::locate;

pub fn run_exists<P: Prober>(
    canon: &Canonicalizer,
    resources: &Resources<P>,
    input: &str,
) -> Result<()> {
    let url = locate(canon, input)?;
    println!("{}", resources.exists(&url));
    Ok(())
}

pub fn run_last_modified<P: Prober>(
    canon: &Canonicalizer,
    resources: &Resources<P>,
    input: &str,
) -> Result<()> {
    let url = locate(canon, input)?;
    println!("{}", resources.last_modified(&url));
    Ok(())
}
