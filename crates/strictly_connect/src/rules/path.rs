//! Connecting chains.

use super::super::{Board, Coord, Player};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Returns one shortest chain of `player`'s cells from their start edge to
/// their goal edge, or `None` if they do not connect.
///
/// Breadth-first from every owned start-edge cell at once, so the chain
/// returned is as short as any other.
#[instrument(skip(board), fields(height = board.height(), width = board.width()))]
pub fn connection(board: &Board, player: Player) -> Option<Vec<Coord>> {
    let mut parent: Vec<Option<Option<Coord>>> = vec![None; board.height() * board.width()];
    let mut queue = VecDeque::new();

    for coord in board.start_edge(player) {
        if board.owner(coord) == Some(player)
            && let Some(index) = board.index(coord)
        {
            parent[index] = Some(None);
            queue.push_back(coord);
        }
    }

    while let Some(coord) = queue.pop_front() {
        if board.on_goal_edge(player, coord) {
            let chain = trace_back(board, &parent, coord);
            debug!(length = chain.len(), "Connection found");
            return Some(chain);
        }

        for next in board.neighbors(coord) {
            if board.owner(next) != Some(player) {
                continue;
            }
            if let Some(index) = board.index(next)
                && parent[index].is_none()
            {
                parent[index] = Some(Some(coord));
                queue.push_back(next);
            }
        }
    }

    None
}

/// Follows parent links from `end` back to the start edge.
fn trace_back(board: &Board, parent: &[Option<Option<Coord>>], end: Coord) -> Vec<Coord> {
    let mut chain = vec![end];
    let mut current = end;
    while let Some(Some(previous)) = board.index(current).and_then(|index| parent[index]) {
        chain.push(previous);
        current = previous;
    }
    chain.reverse();
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().expect("well-formed board")
    }

    #[test]
    fn test_no_connection() {
        assert_eq!(connection(&board(". .\n . ."), Player::X), None);
    }

    #[test]
    fn test_straight_row() {
        let chain = connection(&board("X X X\n . . .\n  . . ."), Player::X).unwrap();
        assert_eq!(
            chain,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn test_diagonal_column() {
        let chain = connection(&board(". . O\n . O .\n  O . ."), Player::O).unwrap();
        assert_eq!(
            chain,
            vec![Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]
        );
    }

    #[test]
    fn test_chain_is_adjacent_and_owned() {
        let board = board(
            ". X X . .
              X . X . X
               . X . X .
                . X X . .
                 O O O O O",
        );
        let chain = connection(&board, Player::X).unwrap();
        assert_eq!(chain.first().map(|c| c.col), Some(0));
        assert_eq!(chain.last().map(|c| c.col), Some(4));
        for pair in chain.windows(2) {
            assert!(board.neighbors(pair[0]).any(|n| n == pair[1]));
        }
        assert!(chain.iter().all(|c| board.owner(*c) == Some(Player::X)));
    }
}
