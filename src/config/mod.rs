use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::facts::DEFAULT_ENDPOINT;

/// Optional colour overrides, as `#RRGGBB` or `#RGB`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_empty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Where random facts come from
    #[serde(default = "default_endpoint")]
    pub fact_endpoint: String,

    /// Per-request timeout for the fact endpoint
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// Fetch a fact as soon as the view opens
    #[serde(default = "default_true")]
    pub fetch_on_start: bool,

    /// Log file (defaults to the cache directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    #[serde(default)]
    pub theme: ThemeConfig,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    10
}

/// Shortest request timeout; zero would fail every fetch immediately
const MIN_TIMEOUT_SECS: u64 = 1;

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fact_endpoint: default_endpoint(),
            request_timeout_secs: default_timeout(),
            fetch_on_start: true,
            log_file: None,
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("purrview");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Log file for the TUI: the flag, then the config, then the cache
    /// directory, then the system temp directory. Always a file, since the
    /// TUI owns the terminal.
    pub fn tui_log_file(&self, flag: Option<PathBuf>) -> PathBuf {
        resolve_log_file(flag, self.log_file.clone(), dirs::cache_dir())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(MIN_TIMEOUT_SECS))
    }

    /// Load config from the user config directory, or create default
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(AppConfig::default()),
        }
    }

    /// Load config from `path`; a missing or broken file yields defaults
    /// (and a fresh default file on disk when none existed)
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<AppConfig>(&content) {
                    Ok(mut config) => {
                        if config.request_timeout_secs < MIN_TIMEOUT_SECS {
                            tracing::warn!(
                                "request_timeout_secs = {} is too short, using {}",
                                config.request_timeout_secs,
                                MIN_TIMEOUT_SECS
                            );
                            config.request_timeout_secs = MIN_TIMEOUT_SECS;
                        }
                        return Ok(config);
                    }
                    Err(e) => tracing::warn!("Failed to parse config: {}", e),
                },
                Err(e) => tracing::warn!("Failed to read config: {}", e),
            }
            return Ok(AppConfig::default());
        }

        let config = AppConfig::default();
        if let Err(e) = config.save_to(path) {
            tracing::warn!("Could not write default config: {}", e);
        }
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let mut clean_config = self.clone();

        // Blank overrides mean "use the built-in colour"
        for value in [
            &mut clean_config.theme.title,
            &mut clean_config.theme.accent,
            &mut clean_config.theme.star,
            &mut clean_config.theme.star_empty,
            &mut clean_config.theme.text,
        ] {
            if value.as_ref().map(|s| s.trim().is_empty()).unwrap_or(false) {
                *value = None;
            }
        }

        let content = toml::to_string_pretty(&clean_config)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn resolve_log_file(flag: Option<PathBuf>, configured: Option<PathBuf>, cache_dir: Option<PathBuf>) -> PathBuf {
    flag.or(configured)
        .or_else(|| cache_dir.map(|d| d.join("purrview").join("purrview.log")))
        .unwrap_or_else(|| std::env::temp_dir().join("purrview.log"))
}
