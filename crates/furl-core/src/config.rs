use crate::fetch::ReadOptions;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/furl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurlConfig {
    /// Total deadline for an HTTP fetch, in milliseconds.
    pub timeout_ms: u64,
    /// Optional tighter deadline for connection setup, in milliseconds.
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
    /// Treat HTTP status >= 400 as an error instead of returning the body.
    #[serde(default)]
    pub fail_on_http_error: bool,
    /// Follow HTTP redirects (up to 10).
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
    /// Optional User-Agent header for HTTP requests.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_follow_redirects() -> bool {
    true
}

impl Default for FurlConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            connect_timeout_ms: None,
            fail_on_http_error: false,
            follow_redirects: true,
            user_agent: None,
        }
    }
}

impl FurlConfig {
    /// Options for [`crate::LocationReader`] derived from this config.
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            timeout: Duration::from_millis(self.timeout_ms),
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            follow_redirects: self.follow_redirects,
            fail_on_http_error: self.fail_on_http_error,
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("furl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FurlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FurlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
