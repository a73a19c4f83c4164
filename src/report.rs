//! Reports produced by the driver, as text or JSON.

use crate::config::{BowlingSettings, ConnectSettings};
use serde::{Deserialize, Serialize};
use strictly_bowling::{BowlingError, BowlingGame, FrameScore, FrameState};
use strictly_connect::{Board, BoardError, Coord, Player};
use tracing::{info, instrument};

/// Outcome of replaying a sequence of rolls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingReport {
    /// Rolls accepted.
    pub rolls: Vec<u8>,
    /// Where the game stands after the last roll.
    pub state: FrameState,
    /// Frame-by-frame breakdown.
    pub scorecard: Vec<FrameScore>,
    /// Final score, present once the game is complete.
    pub score: Option<u16>,
}

impl BowlingReport {
    /// Replays `rolls` and summarizes the game.
    ///
    /// An illegal roll aborts the report. An unfinished game is reported
    /// without a final score.
    #[instrument]
    pub fn from_rolls(rolls: &[i32]) -> Result<Self, BowlingError> {
        let game = BowlingGame::replay(rolls)?;
        let score = match game.score() {
            Ok(score) => Some(score),
            Err(BowlingError::GameNotComplete | BowlingError::GameNotStarted) => None,
            Err(e) => return Err(e),
        };

        info!(?score, state = %game.state(), "Bowling report ready");
        Ok(Self {
            rolls: game.rolls().to_vec(),
            state: game.state(),
            scorecard: game.scorecard(),
            score,
        })
    }

    /// Renders the report as text.
    pub fn render(&self, settings: &BowlingSettings) -> String {
        let mut lines = Vec::new();

        if *settings.show_scorecard() {
            for frame in &self.scorecard {
                lines.push(format!(
                    "Frame {:>2}  {:<8} {:<10} {}",
                    frame.frame,
                    frame_marks(frame),
                    frame.kind,
                    frame
                        .total
                        .map(|total| total.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ));
            }
        }

        match self.score {
            Some(score) => lines.push(format!("Score: {}", score)),
            None => lines.push(format!("In progress: {}", self.state)),
        }
        lines.join("\n")
    }
}

/// Scoresheet marks for a frame: `X` strike, `/` spare, `-` gutter.
fn frame_marks(frame: &FrameScore) -> String {
    let mut marks = Vec::with_capacity(frame.rolls.len());
    // First roll of a rack still waiting on its second.
    let mut previous: Option<u8> = None;

    for pins in frame.rolls.iter().copied() {
        let spare = matches!(previous, Some(prev) if prev + pins == 10);
        marks.push(if spare {
            "/".to_string()
        } else if pins == 10 {
            "X".to_string()
        } else if pins == 0 {
            "-".to_string()
        } else {
            pins.to_string()
        });
        previous = if spare || pins == 10 || previous.is_some() {
            None
        } else {
            Some(pins)
        };
    }

    marks.join(" ")
}

/// Outcome of judging a connection board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectReport {
    /// Board height.
    pub height: usize,
    /// Board width.
    pub width: usize,
    /// Winning player, if any.
    pub winner: Option<Player>,
    /// Winning chain, when requested and present.
    pub connection: Option<Vec<Coord>>,
}

impl ConnectReport {
    /// Parses `text` and judges the board.
    #[instrument(skip(text))]
    pub fn from_text(text: &str, settings: &ConnectSettings) -> Result<Self, BoardError> {
        let board = Board::parse_with(text, settings.glyphs())?;
        let winner = board.winner();
        let connection = if *settings.show_path() {
            winner.and_then(|player| board.connection(player))
        } else {
            None
        };

        info!(?winner, "Connect report ready");
        Ok(Self {
            height: board.height(),
            width: board.width(),
            winner,
            connection,
        })
    }

    /// Renders the report as text.
    pub fn render(&self) -> String {
        let mut lines = vec![match self.winner {
            Some(player) => format!("Winner: {}", player),
            None => "No winner".to_string(),
        }];

        if let Some(chain) = &self.connection {
            let path = chain
                .iter()
                .map(Coord::to_string)
                .collect::<Vec<_>>()
                .join(" -> ");
            lines.push(format!("Path: {}", path));
        }
        lines.join("\n")
    }
}
