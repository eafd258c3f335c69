//! HTTP server command
//!
//! Runs the taskboard API over a fresh in-memory store.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use taskboard_server::{run_server, ServerConfig, Store};

use crate::settings::TaskboardConfig;

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8080)
    #[arg(long, short = 'b', env = "TASKBOARD_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution.
    /// `--cors-permissive=false` overrides the config file.
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true
    )]
    pub cors_permissive: Option<bool>,

    /// Request timeout in seconds (default: 30)
    #[arg(long, env = "TASKBOARD_TIMEOUT_SECS")]
    pub timeout: Option<u64>,
}

/// Merge flags/env over the config file over defaults.
pub fn resolve(args: &ServeArgs, file: &TaskboardConfig) -> ServerConfig {
    let defaults = ServerConfig::default();

    ServerConfig {
        bind_addr: args.bind.or(file.server.bind).unwrap_or(defaults.bind_addr),
        cors_permissive: args
            .cors_permissive
            .or(file.server.cors_permissive)
            .unwrap_or(defaults.cors_permissive),
        request_timeout: args
            .timeout
            .or(file.server.timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, file: &TaskboardConfig) -> Result<()> {
    let config = resolve(&args, file);

    tracing::info!(
        bind = %config.bind_addr,
        timeout_secs = config.request_timeout.as_secs(),
        "Starting taskboard server"
    );

    let store = Arc::new(Store::new());

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
