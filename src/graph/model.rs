use std::collections::{HashMap, HashSet};

use crate::{
    foundation::core::{NodeIdx, Point},
    foundation::error::{RouteError, RouteResult},
    graph::def::GraphDef,
    graph::mode::Multiplier,
};

/// A graph vertex: immutable label plus planar position.
///
/// The position only paces motion playback; it never contributes to search cost.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Node {
    /// Unique user-facing label.
    pub id: String,
    /// Position in map-image space.
    pub position: Point,
}

/// An undirected edge with an immutable base weight.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Edge {
    /// First endpoint, as defined.
    pub a: NodeIdx,
    /// Second endpoint, as defined.
    pub b: NodeIdx,
    /// Strictly positive base weight.
    pub base_weight: f64,
}

impl Edge {
    /// Derived weight for one run. Never written back onto the edge.
    pub fn effective_weight(&self, multiplier: Multiplier) -> f64 {
        self.base_weight * multiplier.get()
    }

    /// The endpoint opposite `from`, or `None` when `from` is not an endpoint.
    pub fn other(&self, from: NodeIdx) -> Option<NodeIdx> {
        if from == self.a {
            Some(self.b)
        } else if from == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// `true` when this edge joins `x` and `y` in either direction.
    pub fn connects(&self, x: NodeIdx, y: NodeIdx) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

/// Validated, immutable weighted graph.
///
/// Invariants established by [`Graph::from_def`]:
/// - node labels are unique and non-empty, positions are finite;
/// - every edge joins two distinct existing nodes with a finite base weight `> 0`;
/// - at most one edge exists per unordered node pair.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    by_label: HashMap<String, NodeIdx>,
    // edge indices per node, in edge definition order
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Validate a definition and build the graph.
    pub fn from_def(def: &GraphDef) -> RouteResult<Self> {
        let mut nodes = Vec::with_capacity(def.nodes.len());
        let mut by_label = HashMap::with_capacity(def.nodes.len());

        for (i, n) in def.nodes.iter().enumerate() {
            if n.id.trim().is_empty() {
                return Err(RouteError::graph(format!("node #{i} has an empty id")));
            }
            if !n.x.is_finite() || !n.y.is_finite() {
                return Err(RouteError::graph(format!(
                    "node '{}' position must be finite",
                    n.id
                )));
            }
            let idx = NodeIdx(u32::try_from(i).map_err(|_| RouteError::graph("too many nodes"))?);
            if by_label.insert(n.id.clone(), idx).is_some() {
                return Err(RouteError::graph(format!("duplicate node id '{}'", n.id)));
            }
            nodes.push(Node {
                id: n.id.clone(),
                position: Point::new(n.x, n.y),
            });
        }

        let mut edges = Vec::with_capacity(def.edges.len());
        let mut adjacency = vec![Vec::new(); nodes.len()];
        let mut seen_pairs = HashSet::with_capacity(def.edges.len());

        for e in &def.edges {
            let a = *by_label.get(&e.a).ok_or_else(|| {
                RouteError::graph(format!("edge {}-{} references unknown node '{}'", e.a, e.b, e.a))
            })?;
            let b = *by_label.get(&e.b).ok_or_else(|| {
                RouteError::graph(format!("edge {}-{} references unknown node '{}'", e.a, e.b, e.b))
            })?;
            if a == b {
                return Err(RouteError::graph(format!(
                    "edge {}-{} must join two distinct nodes",
                    e.a, e.b
                )));
            }
            if !e.weight.is_finite() || e.weight <= 0.0 {
                return Err(RouteError::graph(format!(
                    "edge {}-{} weight must be finite and > 0 (got {})",
                    e.a, e.b, e.weight
                )));
            }
            let pair = if a < b { (a, b) } else { (b, a) };
            if !seen_pairs.insert(pair) {
                return Err(RouteError::graph(format!(
                    "duplicate edge between '{}' and '{}'",
                    e.a, e.b
                )));
            }

            let edge_index = edges.len();
            edges.push(Edge {
                a,
                b,
                base_weight: e.weight,
            });
            adjacency[a.index()].push(edge_index);
            adjacency[b.index()].push(edge_index);
        }

        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "graph constructed"
        );

        Ok(Self {
            nodes,
            edges,
            by_label,
            adjacency,
        })
    }

    /// All nodes in definition order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in definition order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node by index. Panics on an index not produced by this graph.
    pub fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.index()]
    }

    /// `true` when `idx` addresses a node of this graph.
    pub fn contains(&self, idx: NodeIdx) -> bool {
        idx.index() < self.nodes.len()
    }

    /// Label of a node.
    pub fn label(&self, idx: NodeIdx) -> &str {
        &self.node(idx).id
    }

    /// Planar position of a node in map-image space.
    pub fn position(&self, idx: NodeIdx) -> Point {
        self.node(idx).position
    }

    /// Look a node up by label.
    pub fn find(&self, id: &str) -> Option<NodeIdx> {
        self.by_label.get(id).copied()
    }

    /// Look a node up by label, failing with [`RouteError::InvalidSelection`].
    pub fn require(&self, id: &str) -> RouteResult<NodeIdx> {
        self.find(id)
            .ok_or_else(|| RouteError::selection(format!("unknown node '{id}'")))
    }

    /// `(neighbor, effective_weight)` pairs of `node` under `multiplier`.
    ///
    /// Order follows edge definition order, so repeated queries are identical.
    pub fn neighbors(
        &self,
        node: NodeIdx,
        multiplier: Multiplier,
    ) -> impl Iterator<Item = (NodeIdx, f64)> + '_ {
        self.adjacency[node.index()].iter().filter_map(move |&ei| {
            let edge = &self.edges[ei];
            edge.other(node)
                .map(|n| (n, edge.effective_weight(multiplier)))
        })
    }

    /// The edge joining `x` and `y`, if any.
    pub fn edge_between(&self, x: NodeIdx, y: NodeIdx) -> Option<&Edge> {
        self.edge_index_between(x, y).map(|ei| &self.edges[ei])
    }

    /// Index of the edge joining `x` and `y`, if any.
    pub fn edge_index_between(&self, x: NodeIdx, y: NodeIdx) -> Option<usize> {
        self.adjacency
            .get(x.index())?
            .iter()
            .copied()
            .find(|&ei| self.edges[ei].connects(x, y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/model.rs"]
mod tests;
