//! Pin range invariant: no roll knocks down more than a full rack.

use super::super::frame::MAX_PINS;
use super::super::BowlingGame;
use super::Invariant;

/// Invariant: Every recorded roll is between 0 and 10 pins.
pub struct PinsInRangeInvariant;

impl Invariant<BowlingGame> for PinsInRangeInvariant {
    fn holds(game: &BowlingGame) -> bool {
        game.rolls().iter().all(|pins| *pins <= MAX_PINS)
    }

    fn description() -> &'static str {
        "Every roll knocks down between 0 and 10 pins"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(PinsInRangeInvariant::holds(&BowlingGame::new()));
    }

    #[test]
    fn test_strikes_hold() {
        let game = BowlingGame::replay(&[10, 10, 10]).unwrap();
        assert!(PinsInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_roll_violates() {
        let mut game = BowlingGame::replay(&[10]).unwrap();
        game.rolls[0] = 11;
        assert!(!PinsInRangeInvariant::holds(&game));
    }
}
