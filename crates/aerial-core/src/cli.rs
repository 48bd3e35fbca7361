//! CLI argument parsing for the signup wizard
//!
//! Makes the TUI the default entry point when no subcommand is provided.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const LOG_FILE_NAME: &str = "aerial-signup.log";

#[derive(Parser, Debug)]
#[command(name = "aerial-signup")]
#[command(about = "Red Aerial Systems account signup")]
#[command(long_about = "Red Aerial Systems account signup\n\n\
    A five-step terminal wizard: account, profile, team members, documents, review.\n\n\
    Progress is saved after every step and restored on the next run.\n\
    Run without arguments to launch the wizard.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding saved progress (and an optional aerial-signup.toml)
    #[arg(long, default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Wizard config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the default location
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Dump every step's render text to the log and exit
    #[arg(long, global = true)]
    pub dump_tui: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show saved progress (passwords redacted)
    Status,

    /// Delete saved progress
    Reset,
}

impl Cli {
    /// Where logs go: `--log-file`, else a file in the data directory.
    pub fn resolved_log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(LOG_FILE_NAME))
    }
}
