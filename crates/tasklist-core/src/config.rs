// Rust guideline compliant 2026-10-12

//! Configuration management for Tasklist.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Configuration for Tasklist behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Socket address the HTTP transport binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Task file name, relative to the data directory unless absolute.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Maximum log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log line format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Largest accepted request body in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_data_file() -> String {
    "todos.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            data_file: default_data_file(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<data_dir>/config.toml`
    /// 3. Environment variables with `TASKLIST_` prefix (and `PORT`)
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the data directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = data_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PORT` - Listen on `0.0.0.0:<PORT>`
    /// - `TASKLIST_BIND_ADDR` - Full bind address (wins over `PORT`)
    /// - `TASKLIST_DATA_FILE` - Task file name or path
    /// - `TASKLIST_LOG_LEVEL` - Log level
    /// - `TASKLIST_LOG_FORMAT` - Log format (plain/json)
    /// - `TASKLIST_MAX_BODY_BYTES` - Request body limit
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PORT") {
            let port: u16 = val
                .parse()
                .map_err(|_| Error::InvalidConfig("PORT must be a port number".to_string()))?;
            self.bind_addr = format!("0.0.0.0:{}", port);
        }

        if let Ok(val) = std::env::var("TASKLIST_BIND_ADDR") {
            self.bind_addr = val;
        }

        if let Ok(val) = std::env::var("TASKLIST_DATA_FILE") {
            self.data_file = val;
        }

        if let Ok(val) = std::env::var("TASKLIST_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("TASKLIST_LOG_FORMAT") {
            self.log_format = match val.to_lowercase().as_str() {
                "plain" => LogFormat::Plain,
                "json" => LogFormat::Json,
                _ => {
                    return Err(Error::InvalidConfig(
                        "TASKLIST_LOG_FORMAT must be plain or json".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("TASKLIST_MAX_BODY_BYTES") {
            self.max_body_bytes = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "TASKLIST_MAX_BODY_BYTES must be a positive number".to_string(),
                )
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - bind_addr is not a socket address
    /// - data_file is empty
    /// - log_level is not recognised
    /// - max_body_bytes is zero
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.data_file.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "data_file cannot be empty".to_string(),
            ));
        }

        if !matches!(
            self.log_level.as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be error, warn, info, debug or trace, got {}",
                self.log_level
            )));
        }

        if self.max_body_bytes == 0 {
            return Err(Error::InvalidConfig(
                "max_body_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Parses `bind_addr`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not parse.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr.parse().map_err(|e| {
            Error::InvalidConfig(format!("invalid bind_addr {}: {}", self.bind_addr, e))
        })
    }
}
