//! Read the bytes behind a resolved location.
//!
//! Local paths and `file` URLs are read from disk. `http`/`https` URLs are
//! fetched with a single libcurl GET whose deadline is enforced by libcurl
//! itself (`CURLOPT_TIMEOUT` and `CURLOPT_CONNECTTIMEOUT`), so an expired
//! request is torn down rather than left running. Nothing is retried.

use crate::error::{FurlError, Result};
use crate::location::{self, Target};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Deadline for HTTP fetches when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const MAX_REDIRECTS: u32 = 10;

/// libcurl reads a zero timeout as "no timeout".
const MIN_TIMEOUT: Duration = Duration::from_millis(1);

/// libcurl takes milliseconds as a C `long`, which is 32 bits on Windows.
const MAX_TIMEOUT: Duration = Duration::from_millis(i32::MAX as u64);

/// Knobs for the HTTP path. Local reads ignore all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Total deadline for an HTTP fetch, connection setup included.
    pub timeout: Duration,
    /// Optional tighter deadline for connection setup. Capped at `timeout`.
    pub connect_timeout: Option<Duration>,
    pub follow_redirects: bool,
    /// Fail with [`FurlError::HttpStatus`] on status >= 400 instead of returning the body.
    pub fail_on_http_error: bool,
    pub user_agent: Option<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: None,
            follow_redirects: true,
            fail_on_http_error: false,
            user_agent: None,
        }
    }
}

impl ReadOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    fn effective_timeouts(&self) -> (Duration, Duration) {
        let total = self.timeout.clamp(MIN_TIMEOUT, MAX_TIMEOUT);
        let connect = self
            .connect_timeout
            .map_or(total, |c| c.min(total))
            .max(MIN_TIMEOUT);
        (total, connect)
    }
}

/// Resolves locations and reads their content. Holds no state besides its options.
#[derive(Debug, Clone, Default)]
pub struct LocationReader {
    options: ReadOptions,
}

impl LocationReader {
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }

    /// Resolves `location` against `base` (see [`location::resolve`]) and reads it.
    ///
    /// An unsupported scheme in `location` itself is reported with `location`
    /// exactly as given, not its normalized URL form.
    pub fn read(&self, location: &str, base: &str) -> Result<Vec<u8>> {
        let target = location::resolve(location, base)?;
        self.read_target(&target).map_err(|e| match e {
            FurlError::UnsupportedScheme { scheme, .. }
                if location::parse_url(location).is_some() =>
            {
                FurlError::UnsupportedScheme {
                    scheme,
                    url: location.to_string(),
                }
            }
            e => e,
        })
    }

    pub fn read_target(&self, target: &Target) -> Result<Vec<u8>> {
        match target {
            Target::Path(path) => read_file(path),
            Target::Url(url) => self.read_url(url),
        }
    }

    /// Reads a URL, dispatching on its scheme. Unsupported schemes fail before any I/O.
    pub fn read_url(&self, url: &Url) -> Result<Vec<u8>> {
        match url.scheme() {
            "file" => {
                let path = file_url_path(url)?;
                tracing::debug!(url = %url, path = %path.display(), "reading file URL");
                read_file(&path)
            }
            "http" | "https" => http_get(url, &self.options),
            scheme => Err(FurlError::UnsupportedScheme {
                scheme: scheme.to_string(),
                url: url.to_string(),
            }),
        }
    }
}

/// Reads `location` resolved against `base` with default options.
pub fn read(location: &str, base: &str) -> Result<Vec<u8>> {
    LocationReader::default().read(location, base)
}

/// Reads `url` with the given HTTP deadline. `file` URLs ignore the deadline.
pub fn read_url(url: &Url, timeout: Duration) -> Result<Vec<u8>> {
    LocationReader::new(ReadOptions::with_timeout(timeout)).read_url(url)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| FurlError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn file_url_path(url: &Url) -> Result<PathBuf> {
    url.to_file_path().map_err(|()| FurlError::InvalidFileUrl {
        url: url.to_string(),
    })
}

/// Single GET; returns the body whatever the status unless `fail_on_http_error` is set.
fn http_get(url: &Url, options: &ReadOptions) -> Result<Vec<u8>> {
    let (timeout, connect_timeout) = options.effective_timeouts();
    let url_str = url.as_str();
    let curl_err = |e: curl::Error| FurlError::from_curl(url_str, timeout, e);

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url_str).map_err(curl_err)?;
    easy.get(true).map_err(curl_err)?;
    easy.follow_location(options.follow_redirects).map_err(curl_err)?;
    easy.max_redirections(MAX_REDIRECTS).map_err(curl_err)?;
    easy.timeout(timeout).map_err(curl_err)?;
    easy.connect_timeout(connect_timeout).map_err(curl_err)?;
    if let Some(agent) = &options.user_agent {
        easy.useragent(agent).map_err(curl_err)?;
    }

    tracing::debug!(url = url_str, timeout = ?timeout, "GET");
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let status = easy.response_code().map_err(curl_err)?;
    tracing::debug!(url = url_str, status, bytes = body.len(), "GET complete");

    if options.fail_on_http_error && status >= 400 {
        return Err(FurlError::HttpStatus {
            url: url_str.to_string(),
            status,
        });
    }
    Ok(body)
}
