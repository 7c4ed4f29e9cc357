//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. With no
//! file and no variables the server binds `127.0.0.1:8050`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::ApiConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_max_sessions() -> usize {
    64
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_sessions: default_max_sessions(),
        }
    }
}

impl From<&ServerConfig> for ApiConfig {
    fn from(server: &ServerConfig) -> Self {
        ApiConfig {
            host: server.host.clone(),
            port: server.port,
            max_sessions: server.max_sessions,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development
    Pretty,
    /// One JSON object per line
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid(format!("unknown log format: {}", other))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "weighmark=info,tower_http=info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
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
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
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
        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Candidate config files: user config dir, then working directory
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("weighmark").join("config.toml"));
        }
        paths.push(PathBuf::from("./weighmark.toml"));
        paths
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("WEIGHMARK_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("WEIGHMARK_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid WEIGHMARK_PORT"),
            }
        }
        if let Some(level) = lookup("WEIGHMARK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("WEIGHMARK_LOG_FORMAT") {
            match format.parse() {
                Ok(f) => self.logging.format = f,
                Err(e) => tracing::warn!(error = %e, "Ignoring WEIGHMARK_LOG_FORMAT"),
            }
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

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Weighmark Configuration
#
# Environment variables override these settings:
# - WEIGHMARK_HOST
# - WEIGHMARK_PORT
# - WEIGHMARK_LOG_LEVEL
# - WEIGHMARK_LOG_FORMAT

[server]
# Address the dashboard binds to
host = "127.0.0.1"
port = 8050

# Maximum concurrent dashboard sessions (browser tabs)
max_sessions = 64

[logging]
# Filter directive: trace, debug, info, warn, error, or per-target
level = "weighmark=info,tower_http=info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.server.max_sessions, 64);
        assert_eq!(config.logging.level, "weighmark=info,tower_http=info");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"not a number\"").unwrap();

        match Config::load(file.path()).unwrap_err() {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("Expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WEIGHMARK_HOST", "0.0.0.0"),
            ("WEIGHMARK_PORT", "8123"),
            ("WEIGHMARK_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "WEIGHMARK_PORT").then(|| "abc".to_string()));
        assert_eq!(config.server.port, 8050);
    }

    #[test]
    fn test_api_config_from_server() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 1234,
            max_sessions: 3,
        };
        let api = ApiConfig::from(&server);
        assert_eq!(api.addr(), "0.0.0.0:1234");
        assert_eq!(api.max_sessions, 3);
    }

    #[test]
    fn test_default_paths_check_config_dir_first() {
        let paths = Config::default_paths();
        assert_eq!(paths.last(), Some(&PathBuf::from("./weighmark.toml")));
        if let Some(dir) = dirs::config_dir() {
            assert_eq!(paths[0], dir.join("weighmark").join("config.toml"));
            assert_eq!(paths.len(), 2);
        }
    }
}
