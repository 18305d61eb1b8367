#![allow(clippy::doc_markdown)]
//! GraphPath CLI - interactive shell for weighted directed graphs.

mod repl;
mod repl_commands;
mod table;

use std::path::{Path, PathBuf};

use clap::Parser;
use graphpath_core::config::CONFIG_FILE_NAME;
use graphpath_core::{GraphPathConfig, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::repl::ReplConfig;

/// GraphPath - build weighted graphs and query shortest paths
#[derive(Parser, Debug)]
#[command(name = "graphpath")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, env = "GRAPHPATH_CONFIG")]
    config: Option<PathBuf>,

    /// Output format: table or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log filter used when RUST_LOG is unset (e.g. info, graphpath_core=debug)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

/// Explicit path, else the per-user config file when it exists.
fn resolve_config_path(explicit: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }
    Ok(dirs::config_dir()
        .map(|dir| dir.join("graphpath").join(CONFIG_FILE_NAME))
        .filter(|path| path.exists()))
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = resolve_config_path(args.config.as_deref())?;
    let mut config = GraphPathConfig::load(config_path.as_deref())?;

    init_tracing(args.log_level.as_deref().unwrap_or(&config.log_level));
    if let Some(path) = &config_path {
        tracing::info!("Loaded configuration from {}", path.display());
    }

    if let Some(format) = args.format {
        config.display.format = format;
    }
    if args.no_color {
        config.display.color = false;
    }
    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let display = config.display;
    if !display.color {
        colored::control::set_override(false);
    }

    repl::run(ReplConfig::new(display))
}
