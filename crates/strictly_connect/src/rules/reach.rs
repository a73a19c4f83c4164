//! Win detection by reachability.

use super::super::{Board, Player};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Returns true if `player` joins their start edge to their goal edge.
///
/// Depth-first over cells owned by `player`, following the six hex
/// neighbours.
#[instrument(skip(board), fields(height = board.height(), width = board.width()))]
pub fn connects(board: &Board, player: Player) -> bool {
    let mut visited = vec![false; board.height() * board.width()];
    let mut stack = Vec::new();

    for coord in board.start_edge(player) {
        if board.owner(coord) == Some(player)
            && let Some(index) = board.index(coord)
        {
            visited[index] = true;
            stack.push(coord);
        }
    }

    while let Some(coord) = stack.pop() {
        if board.on_goal_edge(player, coord) {
            debug!(%coord, "Goal edge reached");
            return true;
        }

        for next in board.neighbors(coord) {
            if board.owner(next) != Some(player) {
                continue;
            }
            if let Some(index) = board.index(next)
                && !visited[index]
            {
                visited[index] = true;
                stack.push(next);
            }
        }
    }

    false
}

/// Returns the winning player, if any.
///
/// O is checked before X. Both connecting at once cannot arise in a real
/// game, so no tie-break beyond that order is needed.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|player| connects(board, *player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().expect("well-formed board")
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = board(
            ". . . . .
              . . . . .
               . . . . .
                . . . . .
                 . . . . .",
        );
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_o_checked_first() {
        let order: Vec<Player> = Player::iter().collect();
        assert_eq!(order, [Player::O, Player::X]);
    }

    #[test]
    fn test_single_cell_x() {
        assert_eq!(winner(&board("X")), Some(Player::X));
    }

    #[test]
    fn test_single_cell_o() {
        assert_eq!(winner(&board("O")), Some(Player::O));
    }

    #[test]
    fn test_x_crosses_left_to_right() {
        let board = board(
            ". O . .
              O X X X
               O X O .
                X X O X
                 . O X .",
        );
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_o_crosses_top_to_bottom() {
        let board = board(
            ". O . .
              O X X X
               O O O .
                X X O X
                 . O X .",
        );
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_edge_only_is_not_a_win() {
        let board = board(
            "O O O X
              X . . X
               X . . X
                X O O O",
        );
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_skew_breaks_wrong_diagonal() {
        // (0,0) and (1,1) are not neighbours on this grid
        let board = board(
            "X .
              . X",
        );
        assert!(!connects(&board, Player::X));
    }

    #[test]
    fn test_convoluted_path() {
        let board = board(
            ". X X . .
              X . X . X
               . X . X .
                . X X . .
                 O O O O O",
        );
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_spiral_path() {
        let board = board(
            "O X X X X X X X X
              O X O O O O O O O
               O X O X X X X X O
                O X O X O O O X O
                 O X O X X X O X O
                  O X O O O X O X O
                   O X X X X X O X O
                    O O O O O O O X O
                     X X X X X X X X O",
        );
        assert_eq!(winner(&board), Some(Player::X));
    }
}
