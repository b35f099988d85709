use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{RouteError, RouteResult},
    graph::model::Graph,
};

/// JSON-facing graph definition.
///
/// ```json
/// {
///   "nodes": [{ "id": "A", "x": 0, "y": 0 }, { "id": "B", "x": 40, "y": 0 }],
///   "edges": [{ "a": "A", "b": "B", "weight": 10 }]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDef {
    /// Node list; definition order fixes node indices.
    pub nodes: Vec<NodeDef>,
    /// Undirected edge list; definition order fixes neighbor order.
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

/// `(node_id, x, y)` entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDef {
    /// Unique node label.
    pub id: String,
    /// Horizontal position in map-image space.
    pub x: f64,
    /// Vertical position in map-image space.
    pub y: f64,
}

/// `(node_a, node_b, base_weight)` entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDef {
    /// First endpoint label.
    pub a: String,
    /// Second endpoint label.
    pub b: String,
    /// Base weight; must be finite and `> 0`.
    pub weight: f64,
}

impl GraphDef {
    /// Parse a definition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RouteResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RouteError::serde(format!("parse graph JSON: {e}")))
    }

    /// Parse a definition from a JSON string.
    pub fn from_json_str(s: &str) -> RouteResult<Self> {
        serde_json::from_str(s).map_err(|e| RouteError::serde(format!("parse graph JSON: {e}")))
    }

    /// Parse a definition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RouteResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open graph JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate and build the immutable [`Graph`].
    pub fn build(&self) -> RouteResult<Graph> {
        Graph::from_def(self)
    }
}

/// Fluent builder for small in-code graphs.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    def: GraphDef,
}

impl GraphBuilder {
    /// Start an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at `(x, y)`.
    pub fn node(mut self, id: impl Into<String>, x: f64, y: f64) -> Self {
        self.def.nodes.push(NodeDef {
            id: id.into(),
            x,
            y,
        });
        self
    }

    /// Add an undirected edge with a base weight.
    pub fn edge(mut self, a: impl Into<String>, b: impl Into<String>, weight: f64) -> Self {
        self.def.edges.push(EdgeDef {
            a: a.into(),
            b: b.into(),
            weight,
        });
        self
    }

    /// Borrow the accumulated definition.
    pub fn def(&self) -> &GraphDef {
        &self.def
    }

    /// Validate and build the graph.
    pub fn build(self) -> RouteResult<Graph> {
        self.def.build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/def.rs"]
mod tests;
