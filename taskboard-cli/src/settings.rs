//! Configuration file for the taskboard CLI
//!
//! Loaded from `~/.taskboard/config.toml` (or `$TASKBOARD_CONFIG`). The
//! file is optional; every field falls back to a default.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "TASKBOARD_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskboardConfig {
    pub server: ServerSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address to bind, e.g. "127.0.0.1:8080"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<SocketAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_permissive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Default tracing filter when RUST_LOG is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl TaskboardConfig {
    /// Config file path: `$TASKBOARD_CONFIG` or `~/.taskboard/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".taskboard/config.toml")
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&content).context("Failed to parse config file (invalid TOML)")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
