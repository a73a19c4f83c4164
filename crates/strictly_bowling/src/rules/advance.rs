//! Frame transitions.

use crate::frame::{FrameState, RollSlot, FRAMES_PER_GAME, MAX_PINS};
use tracing::instrument;

/// Returns the state after `pins` are knocked down.
///
/// `previous` holds the rolls recorded before this one. The roll is assumed
/// legal; validation lives in the contracts. A complete game stays complete.
#[instrument(skip(previous))]
pub fn advance(state: FrameState, previous: &[u8], pins: u8) -> FrameState {
    match state {
        FrameState::InFrame {
            frame,
            slot: RollSlot::First,
        } if pins < MAX_PINS => FrameState::InFrame {
            frame,
            slot: RollSlot::Second,
        },
        FrameState::InFrame { frame, .. } => next_frame(frame),
        FrameState::TenthFrame {
            slot: RollSlot::First,
            ..
        } => FrameState::TenthFrame {
            slot: RollSlot::Second,
            bonus_owed: if pins == MAX_PINS { 2 } else { 0 },
        },
        FrameState::TenthFrame {
            slot: RollSlot::Second,
            bonus_owed,
        } => {
            let first = previous.last().copied().unwrap_or(0);
            if bonus_owed == 2 {
                FrameState::TenthFrame {
                    slot: RollSlot::Third,
                    bonus_owed: 1,
                }
            } else if first.saturating_add(pins) == MAX_PINS {
                FrameState::TenthFrame {
                    slot: RollSlot::Third,
                    bonus_owed: 1,
                }
            } else {
                FrameState::Complete
            }
        }
        FrameState::TenthFrame {
            slot: RollSlot::Third,
            ..
        }
        | FrameState::Complete => FrameState::Complete,
    }
}

fn next_frame(frame: u8) -> FrameState {
    if frame + 1 == FRAMES_PER_GAME {
        FrameState::TenthFrame {
            slot: RollSlot::First,
            bonus_owed: 0,
        }
    } else {
        FrameState::InFrame {
            frame: frame + 1,
            slot: RollSlot::First,
        }
    }
}
