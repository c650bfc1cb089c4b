//! Cat command: write a location's bytes to stdout.

use super::expand_tildes;
use anyhow::Result;
use furl_core::LocationReader;
use std::io::{self, Write};

pub fn run_cat(reader: &LocationReader, location: &str, base: Option<&str>) -> Result<()> {
    let (location, base) = expand_tildes(location, base)?;
    let content = reader.read(&location, &base)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&content)?;
    stdout.flush()?;
    Ok(())
}
