//! Contract-based validation for bowling rolls.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} roll {Q}

use super::error::BowlingError;
use super::frame::MAX_PINS;
use super::game::BowlingGame;
use super::invariants::{BowlingInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), BowlingError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), BowlingError>;
}

// ─────────────────────────────────────────────────────────────
//  Roll Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: A roll knocks down between 0 and 10 pins.
pub struct PinsOnLane;

impl PinsOnLane {
    /// Rejects pin counts that no lane can produce.
    #[instrument]
    pub fn check(pins: i32) -> Result<(), BowlingError> {
        if (0..=i32::from(MAX_PINS)).contains(&pins) {
            Ok(())
        } else {
            Err(BowlingError::InvalidPinCount(pins))
        }
    }
}

/// Precondition: The game still accepts rolls.
pub struct GameInPlay;

impl GameInPlay {
    /// Rejects rolls once the tenth frame is closed.
    #[instrument(skip(game))]
    pub fn check(game: &BowlingGame) -> Result<(), BowlingError> {
        if game.is_complete() {
            Err(BowlingError::GameComplete)
        } else {
            Ok(())
        }
    }
}

/// Precondition: A roll cannot knock down more pins than are standing.
pub struct PinsStanding;

impl PinsStanding {
    /// Rejects rolls that exceed the pins left in the rack.
    #[instrument(skip(game))]
    pub fn check(pins: i32, game: &BowlingGame) -> Result<(), BowlingError> {
        let standing = game.pins_standing();
        if pins > i32::from(standing) {
            warn!(pins, standing, "Roll exceeds pins standing");
            Err(BowlingError::InvalidPinCount(pins))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in order: pins on the lane, game in play,
/// pins standing.
pub struct LegalRoll;

impl LegalRoll {
    /// Validates all preconditions for a roll.
    #[instrument(skip(game))]
    pub fn check(pins: i32, game: &BowlingGame) -> Result<(), BowlingError> {
        PinsOnLane::check(pins)?;
        GameInPlay::check(game)?;
        PinsStanding::check(pins, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Roll Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for roll actions.
///
/// Preconditions:
/// - Pin count on the lane
/// - Game not complete
/// - Pins standing
///
/// Postconditions:
/// - Exactly one roll recorded
/// - All bowling invariants hold
pub struct RollContract;

impl Contract<BowlingGame, i32> for RollContract {
    fn pre(game: &BowlingGame, pins: &i32) -> Result<(), BowlingError> {
        LegalRoll::check(*pins, game)
    }

    fn post(before: &BowlingGame, after: &BowlingGame) -> Result<(), BowlingError> {
        if after.rolls().len() != before.rolls().len() + 1 {
            return Err(BowlingError::InvariantViolation(format!(
                "Postcondition failed: expected {} rolls, found {}",
                before.rolls().len() + 1,
                after.rolls().len()
            )));
        }

        BowlingInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            BowlingError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
