//! Veneer - terminal driver for the headless widget gallery
//!
//! Mounts the demo components, routes typed commands to them and prints
//! their rendered text whenever something changes.

mod command;
mod config;
mod driver;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::VeneerConfig;

/// Terminal driver for the Veneer widget gallery
#[derive(Parser, Debug)]
#[command(name = "veneer")]
#[command(about = "Drive headless UI components from the terminal")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read commands from stdin while timers tick in real time
    Run {
        /// Config file (defaults to ./veneer.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override driver.fps
        #[arg(long)]
        fps: Option<u32>,
    },

    /// Print the initial render of every component and exit
    Render {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Replay a command script on a simulated clock
    Script {
        /// Script file, one command per line
        file: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run { config, fps } => {
            let config = VeneerConfig::load(config.as_deref())?;
            let fps = fps.unwrap_or(config.driver.fps);
            if fps == 0 {
                anyhow::bail!("--fps must be at least 1");
            }
            driver::run_interactive(&config, fps).await
        }
        Commands::Render { config } => {
            let config = VeneerConfig::load(config.as_deref())?;
            print!("{}", driver::Session::manual(&config)?.render());
            Ok(())
        }
        Commands::Script { file, config } => {
            let config = VeneerConfig::load(config.as_deref())?;
            let script = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            print!("{}", driver::run_script(&script, &config)?);
            Ok(())
        }
    }
}
