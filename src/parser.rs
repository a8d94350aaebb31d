use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::{Board, BoardErr};
use crate::puzzle::Puzzle;

/// Which of the two input boards an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Start,
    Goal,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Line::Start => write!(f, "start"),
            Line::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    MissingLine(Line),
    InvalidToken(Line, String),
    Board(Line, BoardErr),
    ExtraLine(usize),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::MissingLine(line) => write!(f, "Missing {} board", line),
            ParserErr::InvalidToken(line, ref token) => {
                write!(f, "Invalid tile \"{}\" in {} board", token, line)
            }
            ParserErr::Board(line, err) => write!(f, "Invalid {} board: {}", line, err),
            ParserErr::ExtraLine(line_num) => {
                write!(f, "Unexpected input on line {}", line_num)
            }
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Puzzle {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses two non-empty lines of 16 whitespace separated labels each:
/// the start board, then the goal board, both row-major.
pub(crate) fn parse(input: &str) -> Result<Puzzle, ParserErr> {
    let mut lines = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let start = match lines.next() {
        Some((_, line)) => parse_board(line, Line::Start)?,
        None => return Err(ParserErr::MissingLine(Line::Start)),
    };
    let goal = match lines.next() {
        Some((_, line)) => parse_board(line, Line::Goal)?,
        None => return Err(ParserErr::MissingLine(Line::Goal)),
    };
    if let Some((i, _)) = lines.next() {
        return Err(ParserErr::ExtraLine(i + 1));
    }

    Ok(Puzzle::new(start, goal))
}

fn parse_board(text: &str, line: Line) -> Result<Board, ParserErr> {
    let tiles = text
        .split_whitespace()
        .map(|token| {
            token
                .parse::<u8>()
                .map_err(|_| ParserErr::InvalidToken(line, token.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Board::new(&tiles).map_err(|err| ParserErr::Board(line, err))
}
