//! Read a location without caring whether it is a local path or a URL.
//!
//! [`tilde`] expands `~/` into the home directory; [`location`] classifies a
//! location against an optional base; [`fetch`] reads the result from disk or
//! over HTTP with a bounded deadline. Callers compose the two: expand tildes
//! first, then read.

pub mod checksum;
pub mod config;
pub mod error;
pub mod fetch;
pub mod location;
pub mod logging;
pub mod tilde;

pub use error::{FurlError, Result};
pub use fetch::{read, read_url, LocationReader, ReadOptions, DEFAULT_TIMEOUT};
pub use location::{resolve, Target};
pub use tilde::{resolve_tilde, starts_with_home_dir_as_tilde, Platform};
