//! Optional configuration read from `~/.config/logpuzzle/config.toml`.
//!
//! The file is never created or rewritten by the tool; when it is absent the
//! built-in defaults apply.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// HTTP knobs for image downloads (`[http]` section).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpOptions {
    /// Connect timeout in seconds. None = libcurl default.
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds. None = no timeout.
    pub timeout_secs: Option<u64>,
    /// Maximum redirects followed per image.
    pub max_redirections: u32,
    /// `User-Agent` header sent with each GET.
    pub user_agent: Option<String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout_secs: None,
            timeout_secs: None,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

/// Global configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PuzzleConfig {
    #[serde(default)]
    pub http: HttpOptions,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("logpuzzle")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from the default XDG location, or defaults if there is no file.
pub fn load() -> Result<PuzzleConfig> {
    load_from_path(&config_path()?)
}

/// Load configuration from `path`, or defaults if it does not exist.
pub fn load_from_path(path: &Path) -> Result<PuzzleConfig> {
    if !path.exists() {
        return Ok(PuzzleConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: PuzzleConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
