//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `ENERGIYA_*` environment overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// File the configuration was read from; `None` for defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Where the content and the compiled UI live
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Output directory of the UI build (contains `index.html`)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/site.json")
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("energiya-ui/dist")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            dist_dir: default_dist_dir(),
        }
    }
}

/// Static host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
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
        }
    }
}

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        format!("energiya={},tower_http=debug", self.level)
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let mut config = Self::from_toml(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from the first default location that exists, or from the
    /// environment alone.
    ///
    /// A config file that exists but cannot be read is an error, never a
    /// silent fallback to defaults. Runs before logging is set up, so it
    /// logs nothing; `source` tells the caller what was used.
    pub fn load_default() -> Result<Self, ConfigError> {
        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("energiya").join("config.toml")),
            Some(PathBuf::from("/etc/energiya/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&candidates, |key| std::env::var(key).ok())
    }

    fn load_first(
        candidates: &[PathBuf],
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match candidates.iter().find(|path| path.exists()) {
            Some(path) => Self::load(path)?,
            None => Config::default(),
        };
        config.apply_overrides(var)?;
        Ok(config)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(data_file) = var("ENERGIYA_DATA_FILE") {
            self.site.data_file = PathBuf::from(data_file);
        }
        if let Some(dist_dir) = var("ENERGIYA_DIST_DIR") {
            self.site.dist_dir = PathBuf::from(dist_dir);
        }

        if let Some(host) = var("ENERGIYA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("ENERGIYA_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "ENERGIYA_PORT",
                value: port,
            })?;
        }

        if let Some(level) = var("ENERGIYA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("ENERGIYA_LOG_FORMAT") {
            self.logging.format = format;
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Studio Energiya Configuration
#
# Environment variables override these settings:
# - ENERGIYA_DATA_FILE
# - ENERGIYA_DIST_DIR
# - ENERGIYA_HOST
# - ENERGIYA_PORT
# - ENERGIYA_LOG_LEVEL
# - ENERGIYA_LOG_FORMAT

[site]
# Site document (trainers, lessons, gallery)
data_file = "data/site.json"

# Output directory of the UI build
dist_dir = "energiya-ui/dist"

[server]
# Static host bind address
host = "0.0.0.0"
port = 8080

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
