use std::collections::VecDeque;

use log::{debug, trace};
use typed_arena::Arena;

use crate::state::State;

use super::backtracking::reconstruct_solution;
use super::search::{alloc, graph_search, SearchNode};
use super::stats::Stats;
use super::Solution;

/// Depth first, no depth bound and no optimality guarantee.
pub(crate) fn dfs(start: State, goal: State) -> (Option<Solution>, Stats) {
    let arena = Arena::new();
    let stack: Vec<&SearchNode<'_>> = Vec::new();
    graph_search(&arena, start, goal, stack)
}

/// Breadth first, finds a path with the fewest moves.
pub(crate) fn bfs(start: State, goal: State) -> (Option<Solution>, Stats) {
    let arena = Arena::new();
    let queue: VecDeque<&SearchNode<'_>> = VecDeque::new();
    graph_search(&arena, start, goal, queue)
}

/// Iterative deepening: depth limited searches with bounds 0, 1, 2, ...
///
/// The first bound that succeeds is the optimal move count.
/// Doesn't return for unreachable goals, callers check solvability first.
pub(crate) fn idfs(start: State, goal: State) -> (Option<Solution>, Stats) {
    let mut stats = Stats::new();
    let mut limit = 0;
    loop {
        trace!("Depth limit: {}", limit);
        stats.add_depth_limit();

        // each bound starts from scratch, nothing is kept from the previous one
        let arena = Arena::new();
        if let Some(solution) = dls(&arena, start, goal, limit, &mut stats) {
            debug!("Solved with depth limit {}", limit);
            return (Some(solution), stats);
        }
        limit += 1;
    }
}

/// Depth first tree search that doesn't expand nodes at depth `limit`.
///
/// There is no visited set so every path up to the limit gets tried,
/// only states already on the path to the current node are skipped.
fn dls<'a>(
    arena: &'a Arena<SearchNode<'a>>,
    start: State,
    goal: State,
    limit: u32,
    stats: &mut Stats,
) -> Option<Solution> {
    let root = alloc(arena, SearchNode::root(start));
    stats.add_created(root);
    let mut stack = vec![root];

    loop {
        stats.update_frontier(stack.len());
        let cur = stack.pop()?;
        stats.add_expanded(cur);

        if cur.state == goal {
            return Some(reconstruct_solution(cur));
        }

        if cur.dist < limit {
            for (dir, child) in cur.state.expand() {
                if cur.is_on_path(&child) {
                    continue;
                }
                let next = alloc(arena, cur.child(dir, child));
                stats.add_created(next);
                stack.push(next);
            }
        }
    }
}
