use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default User-Agent sent with page and installer requests.
pub const DEFAULT_USER_AGENT: &str = concat!("instdl/", env!("CARGO_PKG_VERSION"));

/// Timeouts and identity for one class of HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

/// Global configuration loaded from `~/.config/instdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstdlConfig {
    /// Root directory for `<app>/<version>/<file>` output (None = current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// User-Agent header for all requests.
    pub user_agent: String,
    /// Connect timeout in seconds for vendor page and version lookups.
    pub page_connect_timeout_secs: u64,
    /// Total timeout in seconds for vendor page and version lookups.
    pub page_timeout_secs: u64,
    /// Connect timeout in seconds for installer downloads.
    pub download_connect_timeout_secs: u64,
    /// Total timeout in seconds for installer downloads.
    pub download_timeout_secs: u64,
}

impl Default for InstdlConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_connect_timeout_secs: 15,
            page_timeout_secs: 30,
            download_connect_timeout_secs: 30,
            download_timeout_secs: 3600,
        }
    }
}

impl InstdlConfig {
    pub fn page_http(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: Duration::from_secs(self.page_connect_timeout_secs),
            timeout: Duration::from_secs(self.page_timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn download_http(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: Duration::from_secs(self.download_connect_timeout_secs),
            timeout: Duration::from_secs(self.download_timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("instdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<InstdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = InstdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: InstdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
