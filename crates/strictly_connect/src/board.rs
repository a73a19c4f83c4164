//! Immutable hex board.

use super::error::BoardError;
use super::glyphs::Glyphs;
use super::rules;
use super::types::{Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Offsets of the six neighbours of a cell on the skewed hex grid.
const NEIGHBOR_OFFSETS: [(isize, isize); 6] = [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)];

/// Parallelogram hex board, fixed at construction.
///
/// Cells are stored row-major. Rows shorter than the widest row are padded
/// with empty cells, so bounds checks use one width for every row.
/// Deserialized boards are rebuilt through [`Board::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

/// Board as stored, before its dimensions are checked.
#[derive(Deserialize)]
struct BoardData {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
}

impl TryFrom<BoardData> for Board {
    type Error = BoardError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        let fits = data.height.checked_mul(data.width) == Some(data.cells.len());
        if !fits || (data.height == 0) != (data.width == 0) {
            return Err(BoardError::Dimensions {
                height: data.height,
                width: data.width,
                cells: data.cells.len(),
            });
        }

        let rows = if data.width == 0 {
            Vec::new()
        } else {
            data.cells.chunks(data.width).map(<[Cell]>::to_vec).collect()
        };
        Ok(Self::from_rows(rows))
    }
}

impl Board {
    /// Builds a board from rows of cells, padding short rows.
    #[instrument(skip(rows), fields(height = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells = Vec::with_capacity(height * width);
        for mut row in rows {
            row.resize(width, Cell::Empty);
            cells.extend(row);
        }

        debug!(height, width, "Board built");
        Self {
            cells,
            height,
            width,
        }
    }

    /// Parses a textual board with custom glyphs.
    ///
    /// Each non-blank line is a row of whitespace-separated single-character
    /// tokens. Leading indentation (the parallelogram skew) is ignored.
    #[instrument(skip(text))]
    pub fn parse_with(text: &str, glyphs: &Glyphs) -> Result<Self, BoardError> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.split_whitespace()
                    .enumerate()
                    .map(|(col, token)| {
                        let mut chars = token.chars();
                        let cell = match (chars.next(), chars.next()) {
                            (Some(glyph), None) => glyphs.cell(glyph),
                            _ => None,
                        };
                        cell.ok_or_else(|| BoardError::UnknownToken {
                            row,
                            col,
                            token: token.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_rows(rows))
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns (the widest row).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns true if the board has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the cell at a coordinate, or `None` out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|index| self.cells[index])
    }

    /// Returns the owner of the cell at a coordinate.
    pub fn owner(&self, coord: Coord) -> Option<Player> {
        self.get(coord).and_then(Cell::owner)
    }

    /// Row-major index of an in-bounds coordinate.
    pub fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.height && coord.col < self.width)
            .then(|| coord.row * self.width + coord.col)
    }

    /// In-bounds neighbours of a cell.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |(dr, dc)| {
            let row = coord.row.checked_add_signed(*dr)?;
            let col = coord.col.checked_add_signed(*dc)?;
            let next = Coord::new(row, col);
            self.index(next).map(|_| next)
        })
    }

    /// Cells on the edge a player starts from: left column for X, top row for O.
    pub fn start_edge(&self, player: Player) -> Vec<Coord> {
        if self.is_empty() {
            return Vec::new();
        }
        match player {
            Player::X => (0..self.height).map(|row| Coord::new(row, 0)).collect(),
            Player::O => (0..self.width).map(|col| Coord::new(0, col)).collect(),
        }
    }

    /// Returns true if a coordinate lies on the edge a player must reach.
    pub fn on_goal_edge(&self, player: Player, coord: Coord) -> bool {
        match player {
            Player::X => coord.col + 1 == self.width,
            Player::O => coord.row + 1 == self.height,
        }
    }

    /// Returns the player connecting their edges, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self)
    }

    /// Returns true if a player connects their edges.
    pub fn connects(&self, player: Player) -> bool {
        rules::connects(self, player)
    }

    /// Returns one shortest chain of a player's cells joining their edges.
    pub fn connection(&self, player: Player) -> Option<Vec<Coord>> {
        rules::connection(self, player)
    }

    /// Renders the board in parallelogram form with the given glyphs.
    pub fn render(&self, glyphs: &Glyphs) -> String {
        (0..self.height)
            .map(|row| {
                let cells = (0..self.width)
                    .map(|col| glyphs.glyph(self.cells[row * self.width + col]).to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{}{}", " ".repeat(row), cells)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &Glyphs::default())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&Glyphs::default()))
    }
}
