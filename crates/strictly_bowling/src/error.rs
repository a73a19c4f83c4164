//! Error types for bowling games.

/// Error that can occur when recording a roll or taking the score.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BowlingError {
    /// Pin count is off the lane (below 0, above 10) or more than are standing.
    #[display("Cannot knock down {} pins", _0)]
    InvalidPinCount(i32),

    /// The tenth frame and its bonus rolls are already closed.
    #[display("Cannot roll after the game is complete")]
    GameComplete,

    /// Frames (or bonus rolls) remain to be played.
    #[display("Score cannot be taken until the end of the game")]
    GameNotComplete,

    /// No roll has been recorded yet.
    #[display("Score cannot be taken before the first roll")]
    GameNotStarted,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for BowlingError {}
