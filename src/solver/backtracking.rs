use crate::moves::Moves;

use super::search::SearchNode;
use super::Solution;

/// Walks the parent links from `final_node` back to the root.
pub(crate) fn reconstruct_solution(final_node: &SearchNode<'_>) -> Solution {
    let mut moves = Moves::default();
    let mut boards = Vec::with_capacity(final_node.dist as usize + 1);

    let mut cur = Some(final_node);
    while let Some(node) = cur {
        boards.push(node.state.board());
        if let Some(dir) = node.dir {
            moves.add(dir);
        }
        cur = node.prev;
    }

    boards.reverse();
    moves.reverse();
    Solution::new(moves, boards)
}
