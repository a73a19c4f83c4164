//! Pins left standing for the next roll.

use crate::frame::{FrameState, RollSlot, MAX_PINS};
use tracing::instrument;

/// Returns how many pins the next roll may knock down.
///
/// In the tenth frame the rack is reset after a strike or spare. The one cap
/// that survives is the second bonus roll after a strike, which shares a rack
/// with the first bonus roll unless that one was itself a strike.
#[instrument(skip(previous))]
pub fn pins_standing(state: FrameState, previous: &[u8]) -> u8 {
    match state {
        FrameState::InFrame {
            slot: RollSlot::First,
            ..
        }
        | FrameState::TenthFrame {
            slot: RollSlot::First,
            ..
        } => MAX_PINS,
        FrameState::InFrame { .. } => MAX_PINS - last(previous),
        FrameState::TenthFrame {
            slot: RollSlot::Second,
            bonus_owed,
        } => {
            if bonus_owed == 2 {
                MAX_PINS
            } else {
                MAX_PINS - last(previous)
            }
        }
        FrameState::TenthFrame {
            slot: RollSlot::Third,
            ..
        } => match previous {
            [.., first, second] if *first == MAX_PINS && *second < MAX_PINS => MAX_PINS - second,
            _ => MAX_PINS,
        },
        FrameState::Complete => 0,
    }
}

fn last(previous: &[u8]) -> u8 {
    previous.last().copied().unwrap_or(0).min(MAX_PINS)
}
