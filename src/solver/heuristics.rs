use crate::board::Board;
use crate::config::Heuristic;
use crate::data::{Pos, BLANK, CELLS};

/// Where each label sits in the goal board, indexed by label.
///
/// Built once per search call and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalPositions([Pos; CELLS]);

impl GoalPositions {
    pub fn new(goal: Board) -> Self {
        let mut positions = [Pos::new(0, 0); CELLS];
        for (i, &tile) in goal.tiles().iter().enumerate() {
            positions[usize::from(tile)] = Pos::from_index(i);
        }
        GoalPositions(positions)
    }

    pub fn of(&self, tile: u8) -> Pos {
        self.0[usize::from(tile)]
    }

    pub fn estimate(&self, heuristic: Heuristic, board: Board) -> u16 {
        match heuristic {
            Heuristic::Misplaced => self.misplaced(board),
            Heuristic::Manhattan => self.manhattan(board),
        }
    }

    /// Non-blank tiles not at their goal cell.
    ///
    /// Admissible and consistent: a move changes the count by at most 1.
    pub fn misplaced(&self, board: Board) -> u16 {
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(i, &tile)| tile != BLANK && self.of(tile) != Pos::from_index(i))
            .count() as u16
    }

    /// Sum of distances of non-blank tiles to their goal cells.
    ///
    /// Admissible and consistent: a move shifts exactly one tile by one cell.
    pub fn manhattan(&self, board: Board) -> u16 {
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(i, &tile)| Pos::from_index(i).dist(self.of(tile)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tiles: [u8; 16]) -> Board {
        Board::new(&tiles).unwrap()
    }

    #[test]
    fn goal_table() {
        let goal = Board::solved();
        let positions = GoalPositions::new(goal);
        assert_eq!(positions.of(1), Pos::new(0, 0));
        assert_eq!(positions.of(12), Pos::new(2, 3));
        assert_eq!(positions.of(BLANK), Pos::new(3, 3));
    }

    #[test]
    fn zero_only_on_goal() {
        let goal = board([5, 1, 2, 3, 4, 0, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
        let positions = GoalPositions::new(goal);
        assert_eq!(positions.misplaced(goal), 0);
        assert_eq!(positions.manhattan(goal), 0);

        let other = Board::solved();
        assert!(positions.misplaced(other) > 0);
        assert!(positions.manhattan(other) > 0);
    }

    #[test]
    fn blank_is_ignored() {
        let positions = GoalPositions::new(Board::solved());
        let one_off = board([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15]);
        assert_eq!(positions.misplaced(one_off), 1);
        assert_eq!(positions.manhattan(one_off), 1);
    }

    #[test]
    fn distances() {
        let positions = GoalPositions::new(Board::solved());
        // 1 and 15 swapped plus blank moved: 1 is 6 away, 15 is 5 away, 14 is 1 away
        let scrambled = board([15, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 0, 14, 1]);
        assert_eq!(positions.misplaced(scrambled), 3);
        assert_eq!(positions.manhattan(scrambled), 6 + 5 + 1);
        assert_eq!(positions.estimate(Heuristic::Misplaced, scrambled), 3);
        assert_eq!(positions.estimate(Heuristic::Manhattan, scrambled), 12);
    }

    #[test]
    fn manhattan_dominates_misplaced() {
        let positions = GoalPositions::new(Board::solved());
        let scrambled = board([6, 2, 3, 4, 0, 1, 7, 8, 9, 10, 11, 12, 13, 14, 15, 5]);
        assert!(positions.manhattan(scrambled) >= positions.misplaced(scrambled));
    }
}
