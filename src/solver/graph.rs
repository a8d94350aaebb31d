use std::borrow::Cow;
use std::fs;
use std::io;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};
use fnv::FnvHashMap;
use log::{debug, warn};

use crate::board::Board;

use super::search::SearchNode;

const OUTPUT: &str = "state-space.dot";

type Nd = usize;
type Ed = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Type {
    Queued,
    Duplicate,
    Expanded,
}

/// Every node a search created, keyed by its arena address.
///
/// The same board can appear in several nodes, each gets its own vertex.
#[derive(Debug)]
pub(crate) struct Graph {
    node_to_index: FnvHashMap<usize, usize>,
    nodes: Vec<(Board, u32, Type)>,
    edges: Vec<Ed>,
}

fn key(node: &SearchNode<'_>) -> usize {
    node as *const SearchNode<'_> as usize
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self {
            node_to_index: FnvHashMap::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, node: &SearchNode<'_>) {
        let index = self.nodes.len();
        let prev_index = self.node_to_index.insert(key(node), index);
        debug_assert!(prev_index.is_none());
        self.nodes.push((node.state.board(), node.dist, Type::Queued));

        if let Some(prev) = node.prev {
            if let Some(&prev_index) = self.node_to_index.get(&key(prev)) {
                self.edges.push((prev_index, index));
            }
        }
    }

    pub(crate) fn mark_duplicate(&mut self, node: &SearchNode<'_>) {
        self.mark(node, Type::Duplicate);
    }

    pub(crate) fn mark_expanded(&mut self, node: &SearchNode<'_>) {
        self.mark(node, Type::Expanded);
    }

    fn mark(&mut self, node: &SearchNode<'_>, node_type: Type) {
        if let Some(&index) = self.node_to_index.get(&key(node)) {
            self.nodes[index].2 = node_type;
        }
    }

    /// Writes the graph in the dot format, failure is only logged.
    pub(crate) fn draw_states(&self) {
        match self.write(OUTPUT) {
            Ok(()) => debug!("Wrote {} nodes to {}", self.nodes.len(), OUTPUT),
            Err(err) => warn!("Failed to write {}: {}", OUTPUT, err),
        }
    }

    fn write(&self, path: &str) -> io::Result<()> {
        let mut writer = Vec::new();
        dot::render(self, &mut writer)?;
        let s = String::from_utf8_lossy(&writer).replace(
            "digraph G {",
            "digraph G {\n    node [fontname = \"monospace\", shape = box];",
        );
        fs::write(path, s)
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let (board, dist, _) = self.nodes[*n];
        let rows: String = board
            .tiles()
            .chunks(4)
            .map(|row| {
                let row: Vec<_> = row.iter().map(|tile| format!("{:>2}", tile)).collect();
                row.join(" ") + "\\n"
            })
            .collect();
        LabelText::EscStr(format!("d: {}\\n{}", dist, rows).into())
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.nodes[*n].2 == Type::Queued {
            Style::Solid
        } else {
            Style::Filled
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        Some(LabelText::LabelStr(
            match self.nodes[*n].2 {
                Type::Expanded => "red",
                Type::Duplicate => "gray",
                Type::Queued => return None,
            }
            .into(),
        ))
    }
}
