//! Characters used for cells in textual boards.

use super::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// Glyph set for parsing and rendering boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Glyph for player X.
    pub x: char,
    /// Glyph for player O.
    pub o: char,
    /// Glyph for an empty cell.
    pub empty: char,
}

impl Glyphs {
    /// Returns the cell a glyph stands for.
    pub fn cell(&self, glyph: char) -> Option<Cell> {
        match glyph {
            g if g == self.x => Some(Cell::Stone(Player::X)),
            g if g == self.o => Some(Cell::Stone(Player::O)),
            g if g == self.empty => Some(Cell::Empty),
            _ => None,
        }
    }

    /// Returns the glyph for a cell.
    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Stone(Player::X) => self.x,
            Cell::Stone(Player::O) => self.o,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            x: 'X',
            o: 'O',
            empty: '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_glyphs() {
        let glyphs = Glyphs::default();
        assert_eq!(glyphs.cell('X'), Some(Cell::Stone(Player::X)));
        assert_eq!(glyphs.cell('.'), Some(Cell::Empty));
        assert_eq!(glyphs.cell('?'), None);
    }

    #[test]
    fn test_custom_glyphs_round_trip_cells() {
        let glyphs = Glyphs {
            x: 'B',
            o: 'W',
            empty: '-',
        };
        assert_eq!(glyphs.glyph(Cell::Stone(Player::O)), 'W');
        assert_eq!(glyphs.cell('B'), Some(Cell::Stone(Player::X)));
    }
}
