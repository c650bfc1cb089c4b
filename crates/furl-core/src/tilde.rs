//! Home-directory shorthand (`~/`, and `~\` on Windows) detection and expansion.
//!
//! Platform rules are passed explicitly as a [`Platform`]; only
//! [`resolve_tilde`] looks at the platform it runs on, via [`Platform::current`].

use crate::error::{FurlError, Result};
use std::path::PathBuf;

/// Platform families that differ in which tilde shorthands they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS and other Darwin systems.
    Darwin,
    Windows,
    /// Linux, the BSDs and any other Unix-like system.
    Unix,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Darwin
        } else {
            Platform::Unix
        }
    }

    /// Parses a platform name such as `"darwin"` or `"windows"`.
    /// Unknown names are treated as Unix-like.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "windows" => Platform::Windows,
            "darwin" | "macos" => Platform::Darwin,
            _ => Platform::Unix,
        }
    }

    /// True if `c` separates path components on this platform.
    pub fn is_separator(self, c: char) -> bool {
        match self {
            Platform::Windows => c == '/' || c == '\\',
            Platform::Darwin | Platform::Unix => c == '/',
        }
    }
}

impl From<&str> for Platform {
    fn from(name: &str) -> Self {
        Platform::from_name(name)
    }
}

/// Returns true if `path` starts with the home-directory shorthand for `platform`.
///
/// The shorthand is exactly two characters: `~` followed by a separator the
/// platform accepts. `~` alone, `~user/...` or a `~` later in the string do not count.
pub fn starts_with_home_dir_as_tilde(path: &str, platform: impl Into<Platform>) -> bool {
    let platform = platform.into();
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('~'), Some(sep)) if platform.is_separator(sep)
    )
}

/// Expands a leading `~/` (or `~\` on Windows) into the current user's home directory.
///
/// Paths without the shorthand are returned unchanged. Fails only when the
/// home directory cannot be determined.
pub fn resolve_tilde(path: &str) -> Result<String> {
    resolve_tilde_with(path, Platform::current(), home::home_dir)
}

/// Like [`resolve_tilde`] with the platform and home-directory lookup supplied by the caller.
pub fn resolve_tilde_with<F>(path: &str, platform: Platform, home_dir: F) -> Result<String>
where
    F: FnOnce() -> Option<PathBuf>,
{
    if !starts_with_home_dir_as_tilde(path, platform) {
        return Ok(path.to_string());
    }

    let mut resolved = home_dir()
        .filter(|home| !home.as_os_str().is_empty())
        .ok_or(FurlError::HomeDirectoryUnavailable)?;

    // Both shorthand characters are ASCII.
    let remainder = &path[2..];
    for segment in remainder
        .split(|c| platform.is_separator(c))
        .filter(|s| !s.is_empty())
    {
        resolved.push(segment);
    }

    tracing::debug!(from = path, to = %resolved.display(), "expanded tilde");
    Ok(resolved.to_string_lossy().into_owned())
}
