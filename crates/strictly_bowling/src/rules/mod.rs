//! Game rules for ten-pin bowling.
//!
//! Pure functions over a [`FrameState`](crate::FrameState) and the rolls
//! recorded so far. Rules are kept apart from the game object so the
//! contracts and invariants can reuse them.

pub mod advance;
pub mod score;
pub mod standing;

pub use advance::advance;
pub use score::final_score;
pub use standing::pins_standing;
