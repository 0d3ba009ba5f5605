//! Campaign authoring tool.
//!
//! Run with: `campaign <command>`

mod commands;
mod input;
mod logging;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use client_bootstrap::SessionConfig;
use commands::{Author, Maps, Reroot, Show};

/// Author, inspect and rebuild map campaigns
#[derive(Parser)]
#[command(name = "campaign")]
#[command(about = "Link stored maps into replayable campaigns", long_about = None)]
#[command(version)]
struct Cli {
    /// Corpus and campaign directory (overrides CAMPAIGN_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Write logs to this directory instead of stderr (overrides CAMPAIGN_LOG_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Build a new campaign by answering door prompts
    Author(Author),

    /// Print the topology of a stored campaign
    Show(Show),

    /// Replace a campaign's starting map and link it again
    Reroot(Reroot),

    /// List the stored map corpus
    Maps(Maps),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = SessionConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(dir) = cli.log_dir {
        config.log_dir = Some(dir);
    }

    let _guard = logging::init(config.log_dir.as_deref())?;

    match cli.command {
        Command::Author(cmd) => cmd.execute(config),
        Command::Show(cmd) => cmd.execute(config),
        Command::Reroot(cmd) => cmd.execute(config),
        Command::Maps(cmd) => cmd.execute(config),
    }
}
