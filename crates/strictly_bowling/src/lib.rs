//! Strictly Bowling - ten-pin bowling scoring as an explicit state machine.
//!
//! A [`BowlingGame`] records raw rolls and tracks frame progress through a
//! tagged [`FrameState`]. Illegal rolls are rejected before anything is
//! recorded, and the final score is only available once the tenth frame
//! (including its bonus rolls) is closed.
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{BowlingGame, BowlingError};
//!
//! # fn main() -> Result<(), BowlingError> {
//! let game = BowlingGame::replay(&[10; 12])?;
//! assert_eq!(game.score()?, 300);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod frame;
mod game;
mod invariants;
mod rules;
mod scorecard;

pub use contracts::{Contract, GameInPlay, LegalRoll, PinsOnLane, PinsStanding, RollContract};
pub use error::BowlingError;
pub use frame::{FrameState, RollSlot, FRAMES_PER_GAME, MAX_PINS};
pub use game::BowlingGame;
pub use invariants::{
    BowlingInvariants, FramePinsBoundedInvariant, Invariant, InvariantSet, InvariantViolation,
    PinsInRangeInvariant, StateMatchesRollsInvariant,
};
pub use rules::{advance, final_score, pins_standing};
pub use scorecard::{FrameKind, FrameScore};
