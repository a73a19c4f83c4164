//! Strictly Katas - Unified CLI
//!
//! Scores bowling games and judges hex connection boards.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Read;
use std::path::Path;
use strictly_katas::{BowlingReport, ConnectReport, KataConfig};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = KataConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Bowl { rolls } => run_bowl(&rolls, &config, cli.json),
        Command::Connect { board, path } => run_connect(&board, config.with_show_path(path), cli.json),
    }
}

/// Score a sequence of rolls
#[instrument(skip(config))]
fn run_bowl(rolls: &[i32], config: &KataConfig, json: bool) -> Result<()> {
    info!(rolls = rolls.len(), "Scoring bowling game");
    let report = BowlingReport::from_rolls(rolls)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render(config.bowling()));
    }
    Ok(())
}

/// Judge a hex connection board
#[instrument(skip(config))]
fn run_connect(board: &Path, config: KataConfig, json: bool) -> Result<()> {
    let text = read_board(board)?;
    info!(bytes = text.len(), "Judging connection board");
    let report = ConnectReport::from_text(&text, config.connect())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}

/// Reads a board from a file, or stdin for `-`.
fn read_board(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read board from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file {}", path.display()))
    }
}
