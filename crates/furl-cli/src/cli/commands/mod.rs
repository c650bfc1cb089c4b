//! CLI command handlers. Each command is in its own file.

mod cat;
mod checksum;
mod resolve;

pub use cat::run_cat;
pub use checksum::run_checksum;
pub use resolve::run_resolve;

use anyhow::Result;
use furl_core::resolve_tilde;

/// Expands `~/` in the location and the base; a missing base becomes empty.
fn expand_tildes(location: &str, base: Option<&str>) -> Result<(String, String)> {
    let location = resolve_tilde(location)?;
    let base = match base {
        Some(b) => resolve_tilde(b)?,
        None => String::new(),
    };
    Ok((location, base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_tildes_leaves_plain_values() {
        let (location, base) = expand_tildes("file.txt", Some("fixtures")).unwrap();
        assert_eq!(location, "file.txt");
        assert_eq!(base, "fixtures");
    }

    #[test]
    fn expand_tildes_missing_base_is_empty() {
        let (_, base) = expand_tildes("https://example.com/x", None).unwrap();
        assert!(base.is_empty());
    }

    #[test]
    fn expand_tildes_expands_both() {
        let (location, base) = expand_tildes("~/a.txt", Some("~/dir")).unwrap();
        assert!(!location.contains('~'));
        assert!(!base.contains('~'));
        assert!(location.ends_with("a.txt"));
        assert!(base.ends_with("dir"));
    }
}
