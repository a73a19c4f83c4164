//! Strictly Katas library - bowling scoring and hex connection judging
//!
//! Re-exports the two game crates and adds the pieces the command-line
//! driver needs: configuration and reports.
//!
//! # Architecture
//!
//! - **Bowling**: [`BowlingGame`], a frame state machine over raw rolls
//! - **Connect**: [`Board`], an immutable hex board with winner detection
//! - **Config**: [`KataConfig`], loaded from TOML
//! - **Reports**: [`BowlingReport`] and [`ConnectReport`], rendered as text or JSON
//!
//! # Example
//!
//! ```
//! use strictly_katas::{BowlingReport, ConnectReport, KataConfig, Player};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = KataConfig::default();
//!
//! let bowling = BowlingReport::from_rolls(&[10; 12])?;
//! assert_eq!(bowling.score, Some(300));
//!
//! let connect = ConnectReport::from_text("O .\n O .", config.connect())?;
//! assert_eq!(connect.winner, Some(Player::O));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod report;

// Crate-level exports - Configuration
pub use config::{BowlingSettings, ConfigError, ConnectSettings, KataConfig};

// Crate-level exports - Reports
pub use report::{BowlingReport, ConnectReport};

// Crate-level exports - Bowling
pub use strictly_bowling::{
    BowlingError, BowlingGame, FrameKind, FrameScore, FrameState, RollSlot,
};

// Crate-level exports - Connect
pub use strictly_connect::{Board, BoardError, Cell, Coord, Glyphs, Player};
