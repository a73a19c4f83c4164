//! Rack invariant: no roll knocks down pins that were not standing.

use super::super::frame::FrameState;
use super::super::rules::{advance, pins_standing};
use super::super::BowlingGame;
use super::Invariant;

/// Invariant: Replayed from an empty game, every roll fits the pins standing
/// at that point, and no roll follows a completed game.
pub struct FramePinsBoundedInvariant;

impl Invariant<BowlingGame> for FramePinsBoundedInvariant {
    fn holds(game: &BowlingGame) -> bool {
        let rolls = game.rolls();
        let mut state = FrameState::new();

        for (index, pins) in rolls.iter().copied().enumerate() {
            let previous = &rolls[..index];
            if state.is_complete() || pins > pins_standing(state, previous) {
                return false;
            }
            state = advance(state, previous, pins);
        }

        true
    }

    fn description() -> &'static str {
        "Rolls never exceed the pins standing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spare_holds() {
        let game = BowlingGame::replay(&[6, 4]).unwrap();
        assert!(FramePinsBoundedInvariant::holds(&game));
    }

    #[test]
    fn test_tenth_frame_bonus_holds() {
        let mut rolls = vec![0; 18];
        rolls.extend([10, 10, 6]);
        let game = BowlingGame::replay(&rolls).unwrap();
        assert!(FramePinsBoundedInvariant::holds(&game));
    }

    #[test]
    fn test_overfull_frame_violates() {
        let mut game = BowlingGame::replay(&[6, 4]).unwrap();
        game.rolls[1] = 5;
        assert!(!FramePinsBoundedInvariant::holds(&game));
    }

    #[test]
    fn test_roll_after_completion_violates() {
        let mut game = BowlingGame::replay(&[0; 20]).unwrap();
        game.rolls.push(0);
        assert!(!FramePinsBoundedInvariant::holds(&game));
    }
}
