//! CLI for furl: read local paths and URLs through one code path.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use furl_core::config::{self, FurlConfig};
use furl_core::{LocationReader, ReadOptions};
use std::time::Duration;

use commands::{run_cat, run_checksum, run_resolve};

/// Top-level CLI for furl.
#[derive(Debug, Parser)]
#[command(name = "furl")]
#[command(about = "furl: read a local path, ~/path or URL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Write the content of a location to stdout.
    Cat {
        /// Path, ~/path or URL to read.
        location: String,
        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Print the absolute path or URL a location resolves to, without reading it.
    Resolve {
        /// Path, ~/path or URL to resolve.
        location: String,
        /// Directory or URL that relative locations are resolved against.
        #[arg(long, value_name = "BASE")]
        base: Option<String>,
    },

    /// Print the SHA-256 of a location's content.
    Checksum {
        /// Path, ~/path or URL to read.
        location: String,
        #[command(flatten)]
        fetch: FetchArgs,
    },
}

/// Options shared by commands that read content.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Directory or URL that relative locations are resolved against.
    #[arg(long, value_name = "BASE")]
    pub base: Option<String>,
    /// HTTP deadline in milliseconds (overrides config).
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
    /// Fail on HTTP status >= 400 instead of printing the error body.
    #[arg(long)]
    pub fail: bool,
}

impl FetchArgs {
    /// Config-derived options with command-line overrides applied.
    fn read_options(&self, cfg: &FurlConfig) -> ReadOptions {
        let mut options = cfg.read_options();
        if let Some(ms) = self.timeout_ms {
            options.timeout = Duration::from_millis(ms);
        }
        if self.fail {
            options.fail_on_http_error = true;
        }
        options
    }

    fn reader(&self, cfg: &FurlConfig) -> LocationReader {
        LocationReader::new(self.read_options(cfg))
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Cat { location, fetch } => {
                run_cat(&fetch.reader(&cfg), &location, fetch.base.as_deref())?
            }
            CliCommand::Resolve { location, base } => run_resolve(&location, base.as_deref())?,
            CliCommand::Checksum { location, fetch } => {
                run_checksum(&fetch.reader(&cfg), &location, fetch.base.as_deref())?
            }
        }

        Ok(())
    }
}
