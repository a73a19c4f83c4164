//! Strictly Connect - winner detection for hex connection games.
//!
//! A [`Board`] is a parallelogram of hexagonal cells. Player X joins the
//! left edge to the right edge, player O joins the top edge to the bottom
//! edge. Boards are immutable once built, so every query is a pure function
//! of the grid.
//!
//! # Example
//!
//! ```
//! use strictly_connect::{Board, Player};
//!
//! let board: Board = "
//!     O . .
//!      O . .
//!       O . .
//! "
//! .parse()
//! .expect("well-formed board");
//! assert_eq!(board.winner(), Some(Player::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod glyphs;
mod rules;
mod types;

pub use board::Board;
pub use error::BoardError;
pub use glyphs::Glyphs;
pub use rules::{connection, connects, winner};
pub use types::{Cell, Coord, Player};
