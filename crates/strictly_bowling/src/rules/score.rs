//! Final score over a flat roll sequence.

use crate::frame::{FRAMES_PER_GAME, MAX_PINS};
use tracing::instrument;

/// Scores ten frames of `rolls`.
///
/// A strike is worth 10 plus the next two rolls, a spare 10 plus the next
/// roll, an open frame its two rolls. Rolls past the end of the sequence
/// count as zero, so callers should only trust the result for a complete
/// game.
#[instrument(skip(rolls), fields(rolls = rolls.len()))]
pub fn final_score(rolls: &[u8]) -> u16 {
    let pins = |index: usize| u16::from(rolls.get(index).copied().unwrap_or(0));
    let max = u16::from(MAX_PINS);

    let mut score = 0;
    let mut index = 0;
    for _ in 0..FRAMES_PER_GAME {
        if pins(index) == max {
            score += max + pins(index + 1) + pins(index + 2);
            index += 1;
        } else if pins(index) + pins(index + 1) == max {
            score += max + pins(index + 2);
            index += 2;
        } else {
            score += pins(index) + pins(index + 1);
            index += 2;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gutter_game() {
        assert_eq!(final_score(&[0; 20]), 0);
    }

    #[test]
    fn test_no_strikes_or_spares() {
        let rolls = [3, 6].repeat(10);
        assert_eq!(final_score(&rolls), 90);
    }

    #[test]
    fn test_perfect_game() {
        assert_eq!(final_score(&[10; 12]), 300);
    }

    #[test]
    fn test_consecutive_strikes() {
        let mut rolls = vec![10, 10, 10, 5, 3];
        rolls.extend([0; 12]);
        assert_eq!(final_score(&rolls), 81);
    }

    #[test]
    fn test_spare_in_last_frame_counts_bonus_once() {
        let mut rolls = vec![0; 18];
        rolls.extend([7, 3, 7]);
        assert_eq!(final_score(&rolls), 17);
    }
}
