//! Error type for location resolution and reads.
//!
//! Library callers match on `FurlError` to tell a slow server (`Timeout`)
//! apart from an unreachable one (`Network`), or a missing file apart from
//! other filesystem failures.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, FurlError>;

#[derive(Debug, thiserror::Error)]
pub enum FurlError {
    /// The current user's home directory could not be determined.
    #[error("cannot determine the current user's home directory")]
    HomeDirectoryUnavailable,

    /// URL scheme outside `file`, `http` and `https`. No I/O was attempted.
    #[error("unsupported URL scheme {scheme} in {url}")]
    UnsupportedScheme { scheme: String, url: String },

    /// Reading a resolved local path failed.
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The HTTP fetch did not complete within the deadline.
    #[error("GET {url} timed out after {}ms", .timeout.as_millis())]
    Timeout { url: String, timeout: Duration },

    /// Transport-level HTTP failure other than a timeout (DNS, refused, TLS).
    #[error("GET {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Non-success HTTP status; only produced when strict status checking is enabled.
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },

    /// The current working directory was needed to resolve a relative location.
    #[error("cannot determine the current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// A `file` URL that does not name a local path (e.g. a remote host).
    #[error("file URL {url} does not name a local path")]
    InvalidFileUrl { url: String },

    /// Joining a relative location onto a base URL did not yield a valid URL.
    #[error("cannot join {location} onto base URL {base}")]
    InvalidBaseUrl { base: String, location: String },
}

impl FurlError {
    /// True for a local read that failed because the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FurlError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// True when an HTTP fetch exceeded its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FurlError::Timeout { .. })
    }

    pub(crate) fn from_curl(url: &str, timeout: Duration, e: curl::Error) -> Self {
        if e.is_operation_timedout() {
            FurlError::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else {
            FurlError::Network {
                url: url.to_string(),
                source: e,
            }
        }
    }
}
