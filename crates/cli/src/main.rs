mod scenario;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::scenario::{Scenario, replay};

#[derive(Debug, Parser)]
#[command(name = "wavdrop", version, about = "Replay file picker gestures against a headless widget")]
struct Cli {
    /// Widget config file (defaults to $WAVDROP_CONFIG_PATH or the config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a JSON gesture script and print the state after every step
    Replay {
        /// Path to the script, e.g. {"steps": [{"event": "drop", "files": [...]}]}
        script: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the effective widget configuration
    Config,
}

fn main() -> Result<()> {
    wavdrop_util::init_tracing();
    let cli = Cli::parse();
    let config = wavdrop_util::load_widget_config(cli.config.as_deref()).context("failed to load widget config")?;

    match cli.command {
        Command::Replay { script, pretty } => {
            let raw = fs::read_to_string(&script).with_context(|| format!("failed to read {}", script.display()))?;
            let scenario: Scenario =
                serde_json::from_str(&raw).with_context(|| format!("invalid gesture script {}", script.display()))?;
            let reports = replay(config, &scenario)?;
            info!(steps = reports.len(), "replay finished");
            let out = if pretty {
                serde_json::to_string_pretty(&reports)?
            } else {
                serde_json::to_string(&reports)?
            };
            println!("{out}");
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
