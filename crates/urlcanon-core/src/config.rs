use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::path::PathStyle;

/// HEAD probe parameters (optional `[probe]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Seconds allowed for the TCP/TLS connect.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request.
    pub timeout_secs: u64,
    /// Follow HTTP redirects before judging the response.
    pub follow_redirects: bool,
    /// Optional `User-Agent` header; libcurl sends none by default.
    pub user_agent: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            timeout_secs: 20,
            follow_redirects: true,
            user_agent: None,
        }
    }
}

impl ProbeConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Separator style for platform paths: "native" (default), "unix" or "windows".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyleSetting {
    #[default]
    Native,
    Unix,
    Windows,
}

impl PathStyleSetting {
    pub fn resolve(self) -> PathStyle {
        match self {
            PathStyleSetting::Native => PathStyle::native(),
            PathStyleSetting::Unix => PathStyle::Unix,
            PathStyleSetting::Windows => PathStyle::Windows,
        }
    }
}

/// Global configuration loaded from `~/.config/urlcanon/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UrlcanonConfig {
    /// How platform paths given to `join` are split.
    #[serde(default)]
    pub path_style: PathStyleSetting,
    /// Schemes recognised on top of the built-in set (file, http, https, ftp, jar, ...).
    #[serde(default)]
    pub extra_schemes: Vec<String>,
    /// Remote existence / Last-Modified probing.
    #[serde(default)]
    pub probe: ProbeConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcanon")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlcanonConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlcanonConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlcanonConfig = toml::from_str(&data)?;
    Ok(cfg)
}
