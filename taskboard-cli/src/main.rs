//! taskboard CLI - run and configure the task-board API server
//!
//! - `serve`: HTTP API for boards, lists and cards (in-memory)
//! - `config`: inspect or create `~/.taskboard/config.toml`

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod settings;
mod tracing_setup;

use settings::TaskboardConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "taskboard",
    author,
    version,
    about = "Minimal task-board API: boards, lists and cards over HTTP/JSON"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Manage taskboard configuration (init, show, path)
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // A broken config file must not block `config init --force`
    let file_config = TaskboardConfig::load();

    let tracing_config = TracingConfig {
        debug: cli.debug,
        level: file_config
            .as_ref()
            .ok()
            .and_then(|cfg| cfg.logging.level.clone()),
    };
    if let Err(e) = tracing_setup::init(&tracing_config) {
        eprintln!("warning: logging disabled: {e:#}");
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &file_config?).await?,
        Commands::Config(args) => config::run_config(args)?,
    }
    Ok(())
}
