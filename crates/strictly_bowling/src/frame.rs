//! Frame progress for a bowling game.
//!
//! The game's position is a tagged [`FrameState`] rather than a set of loose
//! counters, so a "third roll in frame 4" or "bonus rolls owed in frame 2"
//! simply cannot be written down.

use serde::{Deserialize, Serialize};

/// Pins standing at the start of every frame.
pub const MAX_PINS: u8 = 10;

/// Frames in a complete game.
pub const FRAMES_PER_GAME: u8 = 10;

/// Which roll within the current frame is expected next.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum RollSlot {
    /// Opening roll of a frame.
    First,
    /// Second roll of a frame.
    Second,
    /// Third roll, only reachable in the tenth frame.
    Third,
}

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameState {
    /// Frames 1 through 9.
    InFrame {
        /// Current frame number (1-9).
        frame: u8,
        /// Next roll expected in the frame.
        slot: RollSlot,
    },
    /// The tenth frame, including its bonus rolls.
    TenthFrame {
        /// Next roll expected in the frame.
        slot: RollSlot,
        /// Extra rolls still owed after a strike (2) or spare (1).
        bonus_owed: u8,
    },
    /// All ten frames closed; the game can be scored.
    Complete,
}

impl FrameState {
    /// State of a game before its first roll.
    pub fn new() -> Self {
        FrameState::InFrame {
            frame: 1,
            slot: RollSlot::First,
        }
    }

    /// Current frame number. A complete game reports 11.
    pub fn frame(&self) -> u8 {
        match self {
            FrameState::InFrame { frame, .. } => *frame,
            FrameState::TenthFrame { .. } => FRAMES_PER_GAME,
            FrameState::Complete => FRAMES_PER_GAME + 1,
        }
    }

    /// Next roll expected, or `None` once the game is complete.
    pub fn slot(&self) -> Option<RollSlot> {
        match self {
            FrameState::InFrame { slot, .. } | FrameState::TenthFrame { slot, .. } => Some(*slot),
            FrameState::Complete => None,
        }
    }

    /// Bonus rolls still owed in the tenth frame.
    pub fn bonus_owed(&self) -> u8 {
        match self {
            FrameState::TenthFrame { bonus_owed, .. } => *bonus_owed,
            _ => 0,
        }
    }

    /// Returns true once no further rolls are accepted.
    pub fn is_complete(&self) -> bool {
        matches!(self, FrameState::Complete)
    }
}

impl Default for FrameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FrameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameState::InFrame { frame, slot } => write!(f, "Frame {}, {} roll", frame, slot),
            FrameState::TenthFrame { slot, bonus_owed } => {
                write!(f, "Frame 10, {} roll ({} bonus owed)", slot, bonus_owed)
            }
            FrameState::Complete => write!(f, "Complete"),
        }
    }
}
