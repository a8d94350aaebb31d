use crate::board::Board;
use crate::data::{BLANK, SIZE};

/// Pairs of non-blank labels that appear out of increasing order in row-major order.
pub fn inversions(board: Board) -> u32 {
    let tiles = board.tiles();
    let mut count = 0;
    for (i, &a) in tiles.iter().enumerate() {
        if a == BLANK {
            continue;
        }
        count += tiles[i + 1..]
            .iter()
            .filter(|&&b| b != BLANK && a > b)
            .count() as u32;
    }
    count
}

/// The reachability invariant of a board with an even width.
///
/// A move left or right keeps the row-major order and thus the inversion count.
/// A move up or down jumps one tile over the three others between it and the blank,
/// which changes the inversion count by an odd number while the blank changes row.
/// So inversion parity and blank row parity always flip together.
fn parity_class(board: Board) -> bool {
    let blank_row_from_bottom = SIZE - board.blank().r;
    (inversions(board) % 2 == 0) == (blank_row_from_bottom % 2 == 1)
}

/// Whether `goal` can be reached from `start` by sliding tiles.
pub fn is_solvable(start: Board, goal: Board) -> bool {
    parity_class(start) == parity_class(goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dir;
    use crate::state::State;

    fn board(tiles: [u8; 16]) -> Board {
        Board::new(&tiles).unwrap()
    }

    #[test]
    fn counting_inversions() {
        assert_eq!(inversions(Board::solved()), 0);
        let swapped = board([2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]);
        assert_eq!(inversions(swapped), 1);
        // the blank doesn't count wherever it is
        let blank_first = board([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        assert_eq!(inversions(blank_first), 0);
        let reversed = board([15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(inversions(reversed), 15 * 14 / 2);
    }

    #[test]
    fn canonical_goal_parity() {
        let goal = Board::solved();
        assert!(parity_class(goal));
        assert!(is_solvable(goal, goal));
    }

    #[test]
    fn swapping_two_tiles_is_unsolvable() {
        // Loyd's 14-15 puzzle
        let goal = Board::solved();
        let start = board([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0]);
        assert!(!is_solvable(start, goal));
        assert!(!is_solvable(goal, start));
    }

    #[test]
    fn blank_in_top_left_corner() {
        let goal = Board::solved();
        // blank in the top left corner with the rest in order is not solvable:
        // 0 inversions and blank 4 rows from bottom are both even
        let blank_first = board([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        assert!(!parity_class(blank_first));
        assert!(!is_solvable(blank_first, goal));
    }

    #[test]
    fn moves_keep_parity() {
        let mut state = State::new(Board::solved());
        let walk = [
            Dir::Up,
            Dir::Left,
            Dir::Up,
            Dir::Left,
            Dir::Down,
            Dir::Left,
            Dir::Up,
            Dir::Up,
            Dir::Right,
        ];
        for &dir in &walk {
            state = state.step(dir).unwrap();
            assert!(is_solvable(state.board(), Board::solved()));
            assert!(is_solvable(Board::solved(), state.board()));
        }
    }

    #[test]
    fn symmetric() {
        let boards = [
            Board::solved(),
            board([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0]),
            board([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]),
            board([5, 1, 2, 3, 4, 0, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]),
            board([15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]),
        ];
        for &a in &boards {
            for &b in &boards {
                assert_eq!(is_solvable(a, b), is_solvable(b, a));
            }
        }
    }
}
