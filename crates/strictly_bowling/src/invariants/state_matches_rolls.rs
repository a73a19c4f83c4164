//! State consistency invariant: the frame state follows from the rolls.

use super::super::frame::FrameState;
use super::super::rules::advance;
use super::super::BowlingGame;
use super::Invariant;

/// Invariant: Folding the recorded rolls through the frame transitions
/// reproduces the game's current state.
///
/// Rolls are never stored alongside a state they did not produce.
pub struct StateMatchesRollsInvariant;

impl Invariant<BowlingGame> for StateMatchesRollsInvariant {
    fn holds(game: &BowlingGame) -> bool {
        let rolls = game.rolls();
        let replayed = rolls
            .iter()
            .copied()
            .enumerate()
            .fold(FrameState::new(), |state, (index, pins)| {
                advance(state, &rolls[..index], pins)
            });

        replayed == game.state()
    }

    fn description() -> &'static str {
        "Frame state matches the recorded rolls"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(StateMatchesRollsInvariant::holds(&BowlingGame::new()));
    }

    #[test]
    fn test_mid_game_holds() {
        let game = BowlingGame::replay(&[10, 3, 4, 5]).unwrap();
        assert!(StateMatchesRollsInvariant::holds(&game));
    }

    #[test]
    fn test_stale_state_violates() {
        let mut game = BowlingGame::replay(&[3]).unwrap();
        game.state = FrameState::Complete;
        assert!(!StateMatchesRollsInvariant::holds(&game));
    }
}
