//! Checksum command: SHA-256 of whatever a location serves.

use super::expand_tildes;
use anyhow::Result;
use furl_core::{checksum, LocationReader};

/// Read the location and print `<sha256>  <location>`.
pub fn run_checksum(reader: &LocationReader, location: &str, base: Option<&str>) -> Result<()> {
    let (expanded, base) = expand_tildes(location, base)?;
    let content = reader.read(&expanded, &base)?;
    println!("{}  {}", checksum::sha256_hex(&content), location);
    Ok(())
}
