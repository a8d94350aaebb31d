use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Pos, BLANK, CELLS, SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    TileCount(usize),
    OutOfRange(u8),
    Duplicate(u8),
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::TileCount(cnt) => write!(f, "Expected {} tiles, got {}", CELLS, cnt),
            BoardErr::OutOfRange(tile) => {
                write!(f, "Tile {} is out of range 0-{}", tile, CELLS - 1)
            }
            BoardErr::Duplicate(tile) => write!(f, "Tile {} appears more than once", tile),
        }
    }
}

impl Error for BoardErr {}

/// A 4x4 arrangement of the labels 0-15, each exactly once.
///
/// Packed as sixteen 4-bit labels in row-major order, cell 0 in the lowest bits,
/// so equality and hashing are a single integer operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board(u64);

impl Board {
    /// Builds a board from 16 labels in row-major order.
    ///
    /// Fails unless the labels are a permutation of 0-15.
    pub fn new(tiles: &[u8]) -> Result<Board, BoardErr> {
        if tiles.len() != CELLS {
            return Err(BoardErr::TileCount(tiles.len()));
        }

        let mut seen = [false; CELLS];
        let mut packed = 0u64;
        for (i, &tile) in tiles.iter().enumerate() {
            if usize::from(tile) >= CELLS {
                return Err(BoardErr::OutOfRange(tile));
            }
            if seen[usize::from(tile)] {
                return Err(BoardErr::Duplicate(tile));
            }
            seen[usize::from(tile)] = true;
            packed |= u64::from(tile) << (4 * i);
        }
        Ok(Board(packed))
    }

    /// The canonical solved arrangement: 1-15 in order, blank in the bottom right corner.
    pub fn solved() -> Board {
        let mut tiles = [BLANK; CELLS];
        for (i, tile) in tiles.iter_mut().take(CELLS - 1).enumerate() {
            *tile = i as u8 + 1;
        }
        Board::from_tiles_unchecked(&tiles)
    }

    fn from_tiles_unchecked(tiles: &[u8; CELLS]) -> Board {
        let packed = tiles
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &tile)| acc | u64::from(tile) << (4 * i));
        Board(packed)
    }

    pub fn get(self, pos: Pos) -> u8 {
        self.tile_at(pos.index())
    }

    fn tile_at(self, index: usize) -> u8 {
        ((self.0 >> (4 * index)) & 0xF) as u8
    }

    /// Labels in row-major order.
    pub fn tiles(self) -> [u8; CELLS] {
        let mut tiles = [0; CELLS];
        for (i, tile) in tiles.iter_mut().enumerate() {
            *tile = self.tile_at(i);
        }
        tiles
    }

    pub fn blank(self) -> Pos {
        // every board holds exactly one blank so the fallback is never used
        let index = (0..CELLS).find(|&i| self.tile_at(i) == BLANK).unwrap_or(0);
        Pos::from_index(index)
    }

    /// Moves the tile at `from` into the blank at `blank`.
    pub(crate) fn slide(self, blank: Pos, from: Pos) -> Board {
        debug_assert_eq!(self.get(blank), BLANK);
        let tile = u64::from(self.get(from));
        let from_shift = 4 * from.index();
        let blank_shift = 4 * blank.index();
        Board((self.0 & !(0xF << from_shift)) | (tile << blank_shift))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "+--+--+--+--+")?;
        for r in 0..SIZE {
            write!(f, "|")?;
            for c in 0..SIZE {
                match self.get(Pos::new(r, c)) {
                    BLANK => write!(f, "  |")?,
                    tile => write!(f, "{:<2}|", tile)?,
                }
            }
            writeln!(f)?;
            writeln!(f, "+--+--+--+--+")?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.tiles())
    }
}
