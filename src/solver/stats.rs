use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::solver::search::SearchNode;

/// Counters for a single search call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    expanded_states: Vec<u64>,
    duplicate_states: Vec<u64>,
    max_frontier: usize,
    depth_limits: u32,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum::<u64>()
    }

    pub fn total_expanded(&self) -> u64 {
        self.expanded_states.iter().sum::<u64>()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum::<u64>()
    }

    /// Largest number of nodes waiting in the frontier at once.
    pub fn max_frontier(&self) -> usize {
        self.max_frontier
    }

    /// Number of depth bounds tried, 1 for searches without a bound.
    pub fn depth_limits(&self) -> u32 {
        self.depth_limits
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_expanded(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.expanded_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    pub(crate) fn update_frontier(&mut self, len: usize) {
        if len > self.max_frontier {
            self.max_frontier = len;
        }
    }

    pub(crate) fn add_depth_limit(&mut self) {
        self.depth_limits += 1;
    }

    fn add(counts: &mut Vec<u64>, node: &SearchNode<'_>) -> bool {
        let mut ret = false;

        let depth = node.dist as usize;
        // while because duplicates can make some depths appear out of order
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "max frontier: {}", self.max_frontier)?;
        write!(f, "depth limits: {}", self.depth_limits)
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", self.total_created().separated_string())?;
        writeln!(f, "States expanded total: {}", self.total_expanded().separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "Max frontier size: {}", (self.max_frontier as u64).separated_string())?;
        writeln!(f, "Depth limits tried: {}", self.depth_limits)?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Expanded", "Duplicates"
        )?;
        // created is the longest because everything expanded was created first
        for (depth, &created) in self.created_states.iter().enumerate() {
            let expanded = self.expanded_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                expanded.separated_string(),
                duplicates.separated_string()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::state::State;

    #[test]
    fn counting_by_depth() {
        let root = SearchNode::root(State::new(Board::solved()));
        let child = root.child(crate::data::Dir::Up, root.state.up().unwrap());
        let mut stats = Stats::new();

        assert!(stats.add_created(&root));
        assert!(stats.add_created(&child));
        assert!(!stats.add_created(&child));
        assert!(stats.add_expanded(&root));
        stats.update_frontier(2);
        stats.update_frontier(1);

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_expanded(), 1);
        assert_eq!(stats.total_reached_duplicates(), 0);
        assert_eq!(stats.max_frontier(), 2);
    }

    #[test]
    fn formatting_stats() {
        let root = SearchNode::root(State::new(Board::solved()));
        let mut stats = Stats::new();
        for _ in 0..1234 {
            stats.add_created(&root);
        }
        stats.add_expanded(&root);
        stats.add_depth_limit();

        let expected = r"States created total: 1,234
States expanded total: 1
Reached duplicates total: 0
Max frontier size: 0
Depth limits tried: 1

Depth          Created        Expanded       Duplicates
0:             1,234          1              0
";
        assert_eq!(stats.to_string(), expected);
    }
}
