//! Frame-by-frame breakdown of a game, available before it is complete.

use crate::frame::{FRAMES_PER_GAME, MAX_PINS};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a frame was closed.
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
pub enum FrameKind {
    /// All ten pins on the first roll.
    Strike,
    /// All ten pins over two rolls.
    Spare,
    /// Pins left standing after two rolls.
    Open,
    /// Still waiting on a roll of its own.
    Incomplete,
}

/// One frame of a scorecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameScore {
    /// Frame number (1-10).
    pub frame: u8,
    /// How the frame was closed.
    pub kind: FrameKind,
    /// Rolls belonging to this frame (the tenth frame includes its bonus rolls).
    pub rolls: Vec<u8>,
    /// Points for this frame, once every roll it depends on is known.
    pub points: Option<u16>,
    /// Running total through this frame, once known.
    pub total: Option<u16>,
}

/// Builds the scorecard for the rolls recorded so far.
///
/// Only frames with at least one roll appear. A frame's points stay `None`
/// until its bonus rolls have been bowled, and every running total after an
/// unknown frame is unknown too.
#[instrument(skip(rolls), fields(rolls = rolls.len()))]
pub(crate) fn build(rolls: &[u8]) -> Vec<FrameScore> {
    let pins = |index: usize| rolls.get(index).copied().map(u16::from);
    let max = u16::from(MAX_PINS);

    let mut frames = Vec::with_capacity(usize::from(FRAMES_PER_GAME));
    let mut index = 0;
    let mut running = Some(0u16);

    for frame in 1..=FRAMES_PER_GAME {
        let Some(first) = pins(index) else {
            break;
        };

        let (kind, frame_rolls, points) = if frame == FRAMES_PER_GAME {
            let tail = &rolls[index..rolls.len().min(index + 3)];
            let second = pins(index + 1);
            let kind = match second {
                _ if first == max => FrameKind::Strike,
                Some(second) if first + second == max => FrameKind::Spare,
                Some(_) => FrameKind::Open,
                None => FrameKind::Incomplete,
            };
            let needed = if kind == FrameKind::Open { 2 } else { 3 };
            let points = (tail.len() == needed)
                .then(|| tail.iter().copied().map(u16::from).sum::<u16>());
            (kind, tail.to_vec(), points)
        } else if first == max {
            let bonus = pins(index + 1).zip(pins(index + 2));
            index += 1;
            (
                FrameKind::Strike,
                vec![MAX_PINS],
                bonus.map(|(a, b)| max + a + b),
            )
        } else if let Some(second) = pins(index + 1) {
            let frame_rolls = rolls[index..index + 2].to_vec();
            index += 2;
            if first + second == max {
                (
                    FrameKind::Spare,
                    frame_rolls,
                    pins(index).map(|bonus| max + bonus),
                )
            } else {
                (FrameKind::Open, frame_rolls, Some(first + second))
            }
        } else {
            index += 1;
            (FrameKind::Incomplete, rolls[index - 1..index].to_vec(), None)
        };

        running = running.zip(points).map(|(total, points)| total + points);
        frames.push(FrameScore {
            frame,
            kind,
            rolls: frame_rolls,
            points,
            total: running,
        });

        if frame == FRAMES_PER_GAME || kind == FrameKind::Incomplete {
            break;
        }
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rolls_give_empty_card() {
        assert!(build(&[]).is_empty());
    }

    #[test]
    fn test_open_frame_scored_immediately() {
        let card = build(&[3, 4]);
        assert_eq!(card.len(), 1);
        assert_eq!(card[0].kind, FrameKind::Open);
        assert_eq!(card[0].points, Some(7));
        assert_eq!(card[0].total, Some(7));
    }

    #[test]
    fn test_strike_waits_for_two_rolls() {
        let card = build(&[10, 3]);
        assert_eq!(card[0].kind, FrameKind::Strike);
        assert_eq!(card[0].points, None);
        assert_eq!(card[1].kind, FrameKind::Incomplete);
        assert_eq!(card[1].total, None);
    }

    #[test]
    fn test_spare_then_bonus() {
        let card = build(&[5, 5, 3, 0]);
        assert_eq!(card[0].kind, FrameKind::Spare);
        assert_eq!(card[0].points, Some(13));
        assert_eq!(card[1].total, Some(16));
    }

    #[test]
    fn test_tenth_frame_includes_bonus_rolls() {
        let mut rolls = vec![0; 18];
        rolls.extend([10, 10, 6]);
        let card = build(&rolls);
        assert_eq!(card.len(), 10);
        assert_eq!(card[9].kind, FrameKind::Strike);
        assert_eq!(card[9].rolls, vec![10, 10, 6]);
        assert_eq!(card[9].total, Some(26));
    }

    #[test]
    fn test_tenth_frame_pending_bonus() {
        let mut rolls = vec![0; 18];
        rolls.extend([7, 3]);
        let card = build(&rolls);
        assert_eq!(card[9].kind, FrameKind::Spare);
        assert_eq!(card[9].points, None);
        assert_eq!(card[8].total, Some(0));
    }
}
