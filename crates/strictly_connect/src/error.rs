//! Board construction errors.

use derive_more::{Display, Error};

/// Error raised while building a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A token matched none of the configured glyphs.
    #[display("Unknown token {:?} at row {}, column {}", token, row, col)]
    UnknownToken {
        /// Row of the token (0-based, blank lines skipped).
        row: usize,
        /// Column of the token (0-based).
        col: usize,
        /// The offending token.
        token: String,
    },

    /// Stored dimensions disagree with the number of cells.
    #[display("A {}x{} board cannot hold {} cells", height, width, cells)]
    Dimensions {
        /// Declared row count.
        height: usize,
        /// Declared column count.
        width: usize,
        /// Cells actually supplied.
        cells: usize,
    },
}
