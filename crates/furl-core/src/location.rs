//! Classify a location string relative to a base and resolve it to a canonical target.
//!
//! Decision order:
//! 1. `location` is a URL with a scheme: use it, ignore `base`.
//! 2. `location` is an absolute path: use it, ignore `base`.
//! 3. `location` is relative:
//!    - empty `base`: join onto the current directory;
//!    - `base` is a URL: append `location` to the URL path;
//!    - `base` is an absolute path: join onto it;
//!    - `base` is relative: join `base` onto the current directory, then `location`.
//!
//! Nothing here reads content; see [`crate::fetch`].

use crate::error::{FurlError, Result};
use std::env;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Canonical form of a location, ready to be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Url(Url),
    /// Always absolute.
    Path(PathBuf),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Url(url) => write!(f, "{}", url),
            Target::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parses `s` as a URL with a non-empty scheme.
///
/// A one-letter scheme on a string that is also an absolute path is a Windows
/// drive letter (`C:\data`), not a URL.
pub fn parse_url(s: &str) -> Option<Url> {
    let url = Url::parse(s).ok()?;
    if url.scheme().is_empty() {
        return None;
    }
    if url.scheme().len() == 1 && Path::new(s).is_absolute() {
        return None;
    }
    Some(url)
}

/// Resolves `location` against `base`, using the process working directory
/// for relative paths.
pub fn resolve(location: &str, base: &str) -> Result<Target> {
    resolve_with(location, base, || {
        env::current_dir().map_err(FurlError::CurrentDir)
    })
}

/// Resolves `location` against `base` with an explicit working directory.
pub fn resolve_in(location: &str, base: &str, cwd: &Path) -> Result<Target> {
    resolve_with(location, base, || Ok(cwd.to_path_buf()))
}

fn resolve_with<F>(location: &str, base: &str, cwd: F) -> Result<Target>
where
    F: FnOnce() -> Result<PathBuf>,
{
    let target = if let Some(url) = parse_url(location) {
        Target::Url(url)
    } else if Path::new(location).is_absolute() {
        Target::Path(normalize(Path::new(location)))
    } else if base.is_empty() {
        Target::Path(normalize(&cwd()?.join(location)))
    } else if let Some(base_url) = parse_url(base) {
        Target::Url(join_url(base_url, location)?)
    } else if Path::new(base).is_absolute() {
        Target::Path(normalize(&Path::new(base).join(location)))
    } else {
        Target::Path(normalize(&cwd()?.join(base).join(location)))
    };

    tracing::debug!(location, base, resolved = %target, "resolved location");
    Ok(target)
}

/// Appends a relative path to the path of `base`.
///
/// This is a path join, not RFC 3986 reference resolution: the last segment of
/// the base path is kept (`file:///srv/data` + `a.txt` is `file:///srv/data/a.txt`).
/// Segments of `location` are file names, so `%` in them is encoded, never decoded.
fn join_url(mut base: Url, location: &str) -> Result<Url> {
    if base.cannot_be_a_base() {
        return Err(FurlError::InvalidBaseUrl {
            base: base.to_string(),
            location: location.to_string(),
        });
    }

    if let Ok(mut segments) = base.path_segments_mut() {
        segments.pop_if_empty();
        for component in Path::new(location).components() {
            match component {
                Component::Normal(segment) => {
                    segments.push(&segment.to_string_lossy());
                }
                Component::ParentDir => {
                    segments.pop();
                }
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }
    }
    Ok(base)
}

/// Drops `.` components; `..` is left for the filesystem to interpret.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
