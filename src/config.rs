use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Number of non-blank tiles away from their goal cell.
    Misplaced,
    /// Sum of the Manhattan distances of non-blank tiles to their goal cells.
    Manhattan,
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::Misplaced => write!(f, "misplaced"),
            Heuristic::Manhattan => write!(f, "Manhattan"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Dfs,
    Bfs,
    Idfs,
    AStar(Heuristic),
    Greedy(Heuristic),
}

impl Method {
    pub const ALL: [Method; 7] = [
        Method::Dfs,
        Method::Bfs,
        Method::Idfs,
        Method::AStar(Heuristic::Misplaced),
        Method::AStar(Heuristic::Manhattan),
        Method::Greedy(Heuristic::Misplaced),
        Method::Greedy(Heuristic::Manhattan),
    ];

    /// Whether the method always finds a path with the fewest moves.
    pub fn is_optimal(self) -> bool {
        match self {
            Method::Bfs | Method::Idfs | Method::AStar(_) => true,
            Method::Dfs | Method::Greedy(_) => false,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Dfs => write!(f, "DFS"),
            Method::Bfs => write!(f, "BFS"),
            Method::Idfs => write!(f, "IDFS"),
            Method::AStar(h) => write!(f, "A*-{}", h),
            Method::Greedy(h) => write!(f, "Greedy-{}", h),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodErr(pub String);

impl Display for MethodErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown strategy: {}", self.0)
    }
}

impl Error for MethodErr {}

impl FromStr for Method {
    type Err = MethodErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .cloned()
            .find(|method| method.to_string() == s)
            .ok_or_else(|| MethodErr(s.to_owned()))
    }
}
