use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::settings::TaskboardConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a default config file
    Init(InitArgs),
    /// Print the effective configuration as TOML
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = TaskboardConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let template_content = include_str!("../config.template.toml");
    std::fs::write(&config_path, template_content)
        .context(format!("Failed to write config file: {:?}", config_path))?;

    println!("Created config at: {:?}", config_path);
    Ok(())
}

fn run_show() -> Result<()> {
    print!("{}", TaskboardConfig::load()?.to_toml()?);
    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", TaskboardConfig::config_path().display());
    Ok(())
}
