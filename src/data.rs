use std::fmt::{self, Display, Formatter};

/// Number of rows and columns of the board.
pub const SIZE: u8 = 4;

/// Number of cells (and labels, including the blank).
pub const CELLS: usize = 16;

/// The label of the movable empty cell.
pub const BLANK: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub(crate) fn from_index(index: usize) -> Pos {
        Pos::new((index / SIZE as usize) as u8, (index % SIZE as usize) as u8)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.r) * usize::from(SIZE) + usize::from(self.c)
    }

    pub fn dist(self, other: Pos) -> u16 {
        let dr = (i16::from(self.r) - i16::from(other.r)).abs();
        let dc = (i16::from(self.c) - i16::from(other.c)).abs();
        (dr + dc) as u16
    }
}

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Order in which successors are generated.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// Short form used when printing a whole sequence of moves.
    pub fn to_char(self) -> char {
        match self {
            Dir::Up => 'u',
            Dir::Down => 'd',
            Dir::Left => 'l',
            Dir::Right => 'r',
        }
    }

    pub fn capitalized(self) -> &'static str {
        match self {
            Dir::Up => "Up",
            Dir::Down => "Down",
            Dir::Left => "Left",
            Dir::Right => "Right",
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "up"),
            Dir::Down => write!(f, "down"),
            Dir::Left => write!(f, "left"),
            Dir::Right => write!(f, "right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_conversion() {
        for i in 0..CELLS {
            assert_eq!(Pos::from_index(i).index(), i);
        }
        assert_eq!(Pos::from_index(7), Pos::new(1, 3));
    }

    #[test]
    fn manhattan_dist() {
        assert_eq!(Pos::new(0, 0).dist(Pos::new(3, 3)), 6);
        assert_eq!(Pos::new(2, 1).dist(Pos::new(1, 2)), 2);
        assert_eq!(Pos::new(2, 2).dist(Pos::new(2, 2)), 0);
    }

    #[test]
    fn formatting_dirs() {
        let s: String = DIRECTIONS.iter().map(|d| d.to_char()).collect();
        assert_eq!(s, "udlr");
        assert_eq!(Dir::Right.to_string(), "right");
        assert_eq!(Dir::Left.capitalized(), "Left");
        for &dir in &DIRECTIONS {
            assert_eq!(dir.inverse().inverse(), dir);
        }
    }
}
