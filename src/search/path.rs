use crate::{
    foundation::core::NodeIdx,
    graph::mode::Multiplier,
    graph::model::Graph,
};

/// Ordered node sequence from source to target, inclusive.
///
/// Empty when the target is unreachable.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Path {
    nodes: Vec<NodeIdx>,
}

impl Path {
    /// The empty (unreachable) path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a path from an explicit node sequence.
    pub fn from_nodes(nodes: Vec<NodeIdx>) -> Self {
        Self { nodes }
    }

    /// Nodes in source → target order.
    pub fn nodes(&self) -> &[NodeIdx] {
        &self.nodes
    }

    /// Number of nodes (not edges).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` for the unreachable path.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node.
    pub fn source(&self) -> Option<NodeIdx> {
        self.nodes.first().copied()
    }

    /// Last node.
    pub fn target(&self) -> Option<NodeIdx> {
        self.nodes.last().copied()
    }

    /// `true` when `node` lies on the path.
    pub fn contains(&self, node: NodeIdx) -> bool {
        self.nodes.contains(&node)
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn segments(&self) -> impl Iterator<Item = (NodeIdx, NodeIdx)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    /// `true` when `x`-`y` (either direction) is a segment of the path.
    pub fn contains_segment(&self, x: NodeIdx, y: NodeIdx) -> bool {
        self.segments()
            .any(|(a, b)| (a == x && b == y) || (a == y && b == x))
    }

    /// Sum of effective weights along the path, or `None` when a segment has no edge.
    pub fn cost(&self, graph: &Graph, multiplier: Multiplier) -> Option<f64> {
        self.segments().try_fold(0.0, |acc, (a, b)| {
            graph
                .edge_between(a, b)
                .map(|e| acc + e.effective_weight(multiplier))
        })
    }

    /// Node labels joined with `" → "`.
    pub fn display(&self, graph: &Graph) -> String {
        self.nodes
            .iter()
            .map(|&n| graph.label(n))
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// Walk predecessors back from `target` and return the source → target path.
///
/// `predecessors` must come from a completed run in which `target` was reached; callers
/// check reachability first because chains of unreached nodes are undefined. A chain that
/// loops is reported as the empty path.
pub fn reconstruct(predecessors: &[Option<NodeIdx>], target: NodeIdx) -> Path {
    let mut nodes = Vec::new();
    let mut cursor = Some(target);

    while let Some(node) = cursor {
        if nodes.len() > predecessors.len() {
            tracing::warn!(node = %node, "predecessor chain does not terminate");
            return Path::empty();
        }
        nodes.push(node);
        cursor = predecessors.get(node.index()).copied().flatten();
    }

    nodes.reverse();
    Path { nodes }
}

#[cfg(test)]
#[path = "../../tests/unit/search/path.rs"]
mod tests;
