//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Booking backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    5000 // 5 seconds
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// Dashboard behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_auto_refresh_enabled")]
    pub auto_refresh_enabled: bool,

    #[serde(default = "default_auto_refresh_secs")]
    pub auto_refresh_secs: u64,

    #[serde(default = "default_sidebar_breakpoint")]
    pub sidebar_breakpoint_px: u32,
}

fn default_auto_refresh_enabled() -> bool {
    false
}

fn default_auto_refresh_secs() -> u64 {
    60
}

fn default_sidebar_breakpoint() -> u32 {
    1024
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            auto_refresh_enabled: default_auto_refresh_enabled(),
            auto_refresh_secs: default_auto_refresh_secs(),
            sidebar_breakpoint_px: default_sidebar_breakpoint(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        // Try default config locations
        let config_paths = [
            dirs::config_dir().map(|p| p.join("medidesk").join("config.toml")),
            Some(PathBuf::from("/etc/medidesk/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        // Fall back to environment-only config
        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Backend overrides
        if let Ok(url) = std::env::var("MEDIDESK_BACKEND_URL") {
            self.backend.base_url = url;
        }
        if let Ok(timeout) = std::env::var("MEDIDESK_REQUEST_TIMEOUT_MS") {
            if let Ok(t) = timeout.parse() {
                self.backend.request_timeout_ms = t;
            }
        }

        // Dashboard overrides
        if let Ok(secs) = std::env::var("MEDIDESK_AUTO_REFRESH_SECS") {
            if let Ok(s) = secs.parse() {
                self.dashboard.auto_refresh_secs = s;
                self.dashboard.auto_refresh_enabled = true;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("MEDIDESK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("MEDIDESK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            dashboard: DashboardConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Medidesk Configuration
#
# Environment variables override these settings:
# - MEDIDESK_BACKEND_URL
# - MEDIDESK_REQUEST_TIMEOUT_MS
# - MEDIDESK_AUTO_REFRESH_SECS
# - MEDIDESK_LOG_LEVEL
# - MEDIDESK_LOG_FORMAT

[backend]
# Base URL of the booking backend
base_url = "http://localhost:8000"

# Request timeout in milliseconds
request_timeout_ms = 5000

[dashboard]
# Re-fetch statistics on a fixed interval
auto_refresh_enabled = false

# Interval between automatic refreshes (seconds)
auto_refresh_secs = 60

# Below this viewport width the sidebar collapses
sidebar_breakpoint_px = 1024

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/medidesk/medidesk.log"
"#
    .to_string()
}
