//! Command-line surface.

use clap::{Args, Parser, Subcommand};
use pawtrainer_core::{CueStatus, DogId};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pawtrainer")]
#[command(about = "Track dog training cues, practice them and time sessions")]
pub struct Cli {
    /// SQLite file holding the tracker document
    #[arg(long, env = "PAWTRAINER_DB", value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "PAWTRAINER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files (logging off when unset)
    #[arg(long, env = "PAWTRAINER_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Timer presets, e.g. `0:30,1:00,1:30`
    #[arg(long, env = "PAWTRAINER_TIMERS")]
    pub timers: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage dogs
    #[command(subcommand)]
    Dog(DogCommand),
    /// Manage the active dog's cues
    #[command(subcommand)]
    Cue(CueCommand),
    /// Pick a random cue of the active dog and mark it practiced
    Pick,
    /// Run a countdown preset to completion
    Timer(TimerArgs),
    /// Play the clicker
    Click,
    /// Print the core version
    Version,
}

#[derive(Subcommand)]
pub enum DogCommand {
    /// Add a dog and make it active
    Add {
        name: String,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// List dogs, marking the active one
    List,
    /// Make a dog active
    Select { id: DogId },
}

#[derive(Subcommand)]
pub enum CueCommand {
    /// Add a cue for the active dog
    Add { name: String },
    /// Show the active dog's cues grouped by status
    List,
    /// Move a cue to another status
    Status {
        id: i64,
        #[arg(value_parser = parse_status)]
        status: CueStatus,
    },
    /// Delete a cue
    Delete { id: i64 },
    /// Mark a cue as practiced now
    Practice { id: i64 },
}

#[derive(Args)]
pub struct TimerArgs {
    /// Preset index as shown by `timer --list`
    #[arg(default_value_t = 0)]
    pub index: usize,

    /// List configured presets instead of running one
    #[arg(long)]
    pub list: bool,
}

fn parse_status(value: &str) -> Result<CueStatus, String> {
    value.parse::<CueStatus>().map_err(|err| err.to_string())
}
