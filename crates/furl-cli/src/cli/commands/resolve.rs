//! Resolve command: show where a location points without reading it.

use super::expand_tildes;
use anyhow::Result;

pub fn run_resolve(location: &str, base: Option<&str>) -> Result<()> {
    let (location, base) = expand_tildes(location, base)?;
    let target = furl_core::resolve(&location, &base)?;
    println!("{}", target);
    Ok(())
}
