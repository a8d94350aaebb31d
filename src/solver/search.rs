use std::collections::VecDeque;

use fnv::FnvHashSet;
use log::{debug, trace};
use typed_arena::Arena;

use crate::data::Dir;
use crate::state::State;

use super::backtracking::reconstruct_solution;
#[cfg(feature = "graph")]
use super::graph::Graph;
use super::stats::Stats;
use super::Solution;

/// A state together with how the search reached it.
///
/// Nodes live in an arena for the duration of one search call
/// and point back to their parent instead of copying the path.
#[derive(Debug)]
pub(crate) struct SearchNode<'a> {
    pub(crate) state: State,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    pub(crate) dir: Option<Dir>,
    pub(crate) dist: u32,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn root(state: State) -> Self {
        SearchNode {
            state,
            prev: None,
            dir: None,
            dist: 0,
        }
    }

    pub(crate) fn child(&'a self, dir: Dir, state: State) -> Self {
        SearchNode {
            state,
            prev: Some(self),
            dir: Some(dir),
            dist: self.dist + 1,
        }
    }

    /// Whether `state` is this node or one of its ancestors.
    pub(crate) fn is_on_path(&self, state: &State) -> bool {
        let mut cur = Some(self);
        while let Some(node) = cur {
            if node.state == *state {
                return true;
            }
            cur = node.prev;
        }
        false
    }
}

pub(crate) fn alloc<'a>(
    arena: &'a Arena<SearchNode<'a>>,
    node: SearchNode<'a>,
) -> &'a SearchNode<'a> {
    arena.alloc(node)
}

/// Container of generated but not yet expanded nodes.
///
/// The pop order is what distinguishes the strategies sharing `graph_search`.
pub(crate) trait Frontier<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>);
    fn pop(&mut self) -> Option<&'a SearchNode<'a>>;
    fn len(&self) -> usize;
}

/// Stack - depth first.
impl<'a> Frontier<'a> for Vec<&'a SearchNode<'a>> {
    fn push(&mut self, node: &'a SearchNode<'a>) {
        Vec::push(self, node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        Vec::pop(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Queue - breadth first.
impl<'a> Frontier<'a> for VecDeque<&'a SearchNode<'a>> {
    fn push(&mut self, node: &'a SearchNode<'a>) {
        self.push_back(node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// Generic search with a visited set.
///
/// Pops a node, marks it visited, tests it against the goal and pushes its
/// successors that haven't been visited yet. A node whose state got visited
/// while it was waiting in the frontier is skipped as a duplicate.
pub(crate) fn graph_search<'a, F>(
    arena: &'a Arena<SearchNode<'a>>,
    start: State,
    goal: State,
    mut frontier: F,
) -> (Option<Solution>, Stats)
where
    F: Frontier<'a>,
{
    let mut stats = Stats::new();
    stats.add_depth_limit();
    let mut visited = FnvHashSet::default();

    #[cfg(feature = "graph")]
    let mut graph = Graph::new();

    let root = alloc(arena, SearchNode::root(start));
    stats.add_created(root);
    #[cfg(feature = "graph")]
    graph.add(root);
    frontier.push(root);

    let found = loop {
        stats.update_frontier(frontier.len());
        let cur = match frontier.pop() {
            Some(cur) => cur,
            None => break None,
        };

        if !visited.insert(cur.state) {
            stats.add_reached_duplicate(cur);
            #[cfg(feature = "graph")]
            graph.mark_duplicate(cur);
            continue;
        }
        if stats.add_expanded(cur) {
            trace!("Expanded new depth: {}", cur.dist);
        }
        #[cfg(feature = "graph")]
        graph.mark_expanded(cur);

        if cur.state == goal {
            break Some(cur);
        }

        for (dir, child) in cur.state.expand() {
            if visited.contains(&child) {
                continue;
            }
            let next = alloc(arena, cur.child(dir, child));
            stats.add_created(next);
            #[cfg(feature = "graph")]
            graph.add(next);
            frontier.push(next);
        }
    };

    #[cfg(feature = "graph")]
    graph.draw_states();

    match found {
        Some(node) => {
            debug!("Solved at depth {}, backtracking path", node.dist);
            (Some(reconstruct_solution(node)), stats)
        }
        None => {
            debug!("Frontier exhausted without reaching the goal");
            (None, stats)
        }
    }
}
