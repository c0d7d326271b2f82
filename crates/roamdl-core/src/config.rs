use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Browser identification sent instead of libcurl's default; the storage host
/// rejects requests that look automated.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Global configuration loaded from `~/.config/roamdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoamdlConfig {
    /// Value of the `User-Agent` header sent with every image request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Attempts allowed for each interactive yes/no prompt before giving up.
    #[serde(default = "default_prompt_attempts")]
    pub prompt_attempts: u32,
    /// Extension given to every downloaded image (without the dot).
    #[serde(default = "default_image_extension")]
    pub image_extension: String,
    /// Inserted between a non-empty `--base-name` and the sequence number.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_prompt_attempts() -> u32 {
    3
}

fn default_image_extension() -> String {
    "png".to_string()
}

fn default_separator() -> String {
    "-".to_string()
}

impl Default for RoamdlConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            prompt_attempts: default_prompt_attempts(),
            image_extension: default_image_extension(),
            separator: default_separator(),
        }
    }
}

impl RoamdlConfig {
    /// Prompt budget, never below one attempt.
    pub fn attempts(&self) -> u32 {
        self.prompt_attempts.max(1)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("roamdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RoamdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RoamdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<RoamdlConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RoamdlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
