use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::data::{Dir, Pos, DIRECTIONS, SIZE};

/// A board with the blank position cached.
///
/// Identity (equality, hashing) depends only on the board:
/// the blank position is derived from it.
#[derive(Clone, Copy)]
pub struct State {
    pub(crate) board: Board,
    pub(crate) blank: Pos,
}

impl State {
    pub fn new(board: Board) -> State {
        State {
            board,
            blank: board.blank(),
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn blank(&self) -> Pos {
        self.blank
    }

    pub fn up(&self) -> Option<State> {
        if self.blank.r == 0 {
            None
        } else {
            Some(self.slide_from(Pos::new(self.blank.r - 1, self.blank.c)))
        }
    }

    pub fn down(&self) -> Option<State> {
        if self.blank.r == SIZE - 1 {
            None
        } else {
            Some(self.slide_from(Pos::new(self.blank.r + 1, self.blank.c)))
        }
    }

    pub fn left(&self) -> Option<State> {
        if self.blank.c == 0 {
            None
        } else {
            Some(self.slide_from(Pos::new(self.blank.r, self.blank.c - 1)))
        }
    }

    pub fn right(&self) -> Option<State> {
        if self.blank.c == SIZE - 1 {
            None
        } else {
            Some(self.slide_from(Pos::new(self.blank.r, self.blank.c + 1)))
        }
    }

    /// Moves the blank in `dir`, `None` if that would leave the board.
    pub fn step(&self, dir: Dir) -> Option<State> {
        match dir {
            Dir::Up => self.up(),
            Dir::Down => self.down(),
            Dir::Left => self.left(),
            Dir::Right => self.right(),
        }
    }

    /// All successors in the order up, down, left, right.
    pub fn expand(&self) -> Vec<(Dir, State)> {
        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.step(dir).map(|child| (dir, child)))
            .collect()
    }

    fn slide_from(&self, neighbor: Pos) -> State {
        State {
            board: self.board.slide(self.blank, neighbor),
            blank: neighbor,
        }
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} blank: {:?}", self.board, self.blank)
    }
}
