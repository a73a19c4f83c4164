//! Game rules for connection boards.
//!
//! Pure functions over an immutable [`Board`](crate::Board). Traversals keep
//! an explicit stack or queue plus a visited set, so they finish within
//! `height × width` steps whatever the board size.

pub mod path;
pub mod reach;

pub use path::connection;
pub use reach::{connects, winner};
