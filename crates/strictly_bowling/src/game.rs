//! The bowling game: recorded rolls plus frame progress.

use super::contracts::{Contract, RollContract};
use super::error::BowlingError;
use super::frame::FrameState;
use super::rules::{advance, final_score, pins_standing};
use super::scorecard::{self, FrameScore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A ten-pin bowling game.
///
/// Rolls are kept raw because strike and spare bonuses look ahead into
/// later frames. The [`FrameState`] only ever changes through [`roll`],
/// and a rejected roll leaves the game exactly as it was.
///
/// A deserialized game is replayed from its rolls, and the stored state
/// must match the replay.
///
/// [`roll`]: BowlingGame::roll
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameData")]
pub struct BowlingGame {
    pub(crate) rolls: Vec<u8>,
    pub(crate) state: FrameState,
}

/// Game as stored, before its rolls are replayed.
#[derive(Deserialize)]
struct GameData {
    rolls: Vec<u8>,
    state: FrameState,
}

impl TryFrom<GameData> for BowlingGame {
    type Error = BowlingError;

    fn try_from(data: GameData) -> Result<Self, Self::Error> {
        let rolls: Vec<i32> = data.rolls.iter().copied().map(i32::from).collect();
        let game = Self::replay(&rolls)?;
        if game.state != data.state {
            return Err(BowlingError::InvariantViolation(format!(
                "Stored state {} does not follow from the rolls ({})",
                data.state, game.state
            )));
        }
        Ok(game)
    }
}

impl BowlingGame {
    /// Creates a game with no rolls.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rolls: Vec::with_capacity(21),
            state: FrameState::new(),
        }
    }

    /// Records a roll of `pins`.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (range, game in play, pins standing)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn roll(&mut self, pins: i32) -> Result<(), BowlingError> {
        RollContract::pre(self, &pins)?;
        let knocked = u8::try_from(pins).map_err(|_| BowlingError::InvalidPinCount(pins))?;

        let mut next = self.clone();
        next.state = advance(self.state, &self.rolls, knocked);
        next.rolls.push(knocked);

        #[cfg(debug_assertions)]
        RollContract::post(self, &next)?;

        debug!(from = %self.state, to = %next.state, "Roll recorded");
        if next.state.is_complete() {
            info!(rolls = next.rolls.len(), "Game complete");
        }

        *self = next;
        Ok(())
    }

    /// Returns the final score.
    ///
    /// Fails with [`BowlingError::GameNotStarted`] before the first roll and
    /// [`BowlingError::GameNotComplete`] while frames or bonus rolls remain.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn score(&self) -> Result<u16, BowlingError> {
        if self.rolls.is_empty() {
            return Err(BowlingError::GameNotStarted);
        }
        if !self.state.is_complete() {
            return Err(BowlingError::GameNotComplete);
        }
        Ok(final_score(&self.rolls))
    }

    /// Replays rolls from a new game, failing on the first illegal roll.
    #[instrument]
    pub fn replay(rolls: &[i32]) -> Result<Self, BowlingError> {
        let mut game = Self::new();
        for pins in rolls {
            game.roll(*pins)?;
        }
        Ok(game)
    }

    /// Returns the rolls recorded so far.
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Returns the current frame state.
    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Returns the current frame number (11 once complete).
    pub fn frame(&self) -> u8 {
        self.state.frame()
    }

    /// Returns true once the tenth frame and its bonus rolls are closed.
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Returns how many pins the next roll may knock down.
    pub fn pins_standing(&self) -> u8 {
        pins_standing(self.state, &self.rolls)
    }

    /// Returns the frame-by-frame breakdown of the rolls so far.
    pub fn scorecard(&self) -> Vec<FrameScore> {
        scorecard::build(&self.rolls)
    }
}
