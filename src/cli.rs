//! Command-line interface for strictly_katas.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Katas - bowling scorer and hex connection judge
#[derive(Parser, Debug)]
#[command(name = "strictly_katas")]
#[command(about = "Score bowling games and judge hex connection boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "strictly_katas.toml")]
    pub config: PathBuf,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a sequence of rolls
    Bowl {
        /// Pins knocked down by each roll, in order
        #[arg(required = true, allow_negative_numbers = true)]
        rolls: Vec<i32>,
    },

    /// Judge a hex connection board
    Connect {
        /// Board file, or `-` for stdin
        board: PathBuf,

        /// Also print the winning chain of cells
        #[arg(long)]
        path: bool,
    },
}
