//! Tracing setup for the taskboard CLI
//!
//! Usage:
//!   taskboard --debug serve                 # Debug logging to console
//!   RUST_LOG=taskboard_server=debug taskboard serve
//!
//! Filter precedence: RUST_LOG, then `--debug`, then `[logging] level`
//! from the config file, then `info`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (used when RUST_LOG is not set)
    pub debug: bool,
    /// Default filter from the config file
    pub level: Option<String>,
}

impl TracingConfig {
    fn default_directive(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            self.level.as_deref().unwrap_or("info")
        }
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.default_directive()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
