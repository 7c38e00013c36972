use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Simulated delays, in milliseconds.
///
/// `login_ms` is awaited inside the login controller; the redirect values
/// are handed back to the host as navigation delays. Tests set them to zero.
#[derive(Debug, Clone, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,
    #[serde(default = "default_register_redirect_ms")]
    pub register_redirect_ms: u64,
    #[serde(default = "default_login_redirect_ms")]
    pub login_redirect_ms: u64,
    #[serde(default = "default_dashboard_redirect_ms")]
    pub dashboard_redirect_ms: u64,
    #[serde(default = "default_logout_redirect_ms")]
    pub logout_redirect_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    /// Path of the durable JSON blob file. In-memory storage when absent.
    pub data_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_login_ms() -> u64 {
    2000
}

fn default_register_redirect_ms() -> u64 {
    1200
}

fn default_login_redirect_ms() -> u64 {
    900
}

fn default_dashboard_redirect_ms() -> u64 {
    800
}

fn default_logout_redirect_ms() -> u64 {
    700
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: default_login_ms(),
            register_redirect_ms: default_register_redirect_ms(),
            login_redirect_ms: default_login_redirect_ms(),
            dashboard_redirect_ms: default_dashboard_redirect_ms(),
            logout_redirect_ms: default_logout_redirect_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.storage.data_path {
            if path.as_os_str().is_empty() {
                bail!("data_path must not be empty");
            }
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}
