use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use typed_arena::Arena;

use crate::config::Heuristic;
use crate::state::State;

use super::heuristics::GoalPositions;
use super::search::{graph_search, Frontier, SearchNode};
use super::stats::Stats;
use super::Solution;

/// Expands the node with the smallest heuristic value first. Not optimal.
pub(crate) fn greedy(
    start: State,
    goal: State,
    heuristic: Heuristic,
) -> (Option<Solution>, Stats) {
    let positions = GoalPositions::new(goal.board());
    let cost =
        |node: &SearchNode<'_>| u32::from(positions.estimate(heuristic, node.state.board()));

    let arena = Arena::new();
    graph_search(&arena, start, goal, PriorityFrontier::new(cost))
}

/// Expands the node with the smallest `dist + heuristic` first.
///
/// Both heuristics are consistent so the first time the goal is popped
/// its path is the shortest.
pub(crate) fn a_star(
    start: State,
    goal: State,
    heuristic: Heuristic,
) -> (Option<Solution>, Stats) {
    let positions = GoalPositions::new(goal.board());
    let cost = |node: &SearchNode<'_>| {
        node.dist + u32::from(positions.estimate(heuristic, node.state.board()))
    };

    let arena = Arena::new();
    graph_search(&arena, start, goal, PriorityFrontier::new(cost))
}

struct HeapEntry<'a> {
    cost: u32,
    /// Insertion order - equal costs pop first in first out.
    seq: u64,
    node: &'a SearchNode<'a>,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-heap ordered by a cost function supplied for one search call.
pub(crate) struct PriorityFrontier<'a, C> {
    heap: BinaryHeap<Reverse<HeapEntry<'a>>>,
    cost: C,
    pushed: u64,
}

impl<'a, C> PriorityFrontier<'a, C>
where
    C: Fn(&SearchNode<'a>) -> u32,
{
    pub(crate) fn new(cost: C) -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            cost,
            pushed: 0,
        }
    }
}

impl<'a, C> Frontier<'a> for PriorityFrontier<'a, C>
where
    C: Fn(&SearchNode<'a>) -> u32,
{
    fn push(&mut self, node: &'a SearchNode<'a>) {
        let entry = HeapEntry {
            cost: (self.cost)(node),
            seq: self.pushed,
            node,
        };
        self.pushed += 1;
        self.heap.push(Reverse(entry));
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
