use crate::{
    foundation::core::NodeIdx,
    graph::model::Graph,
    search::trace::TraceEvent,
};

/// Highlight class of a node for one step. Later variants win over earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMark {
    /// Not yet settled.
    Idle,
    /// Settled.
    Visited,
    /// Node the step is about.
    Current,
    /// On the final path.
    OnPath,
}

/// Highlight class of an edge for one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMark {
    /// Plain edge.
    Idle,
    /// The edge being relaxed.
    Relaxing,
    /// On the final path.
    Path,
}

/// Render-ready state of one node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NodeView {
    /// Highlight class.
    pub mark: NodeMark,
    /// `"∞"` or the distance with one decimal.
    pub distance_label: String,
}

/// Everything a renderer needs to paint one step; indexed like the graph.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StepView {
    /// Short human-readable description.
    pub caption: String,
    /// Per-node state, in node order.
    pub nodes: Vec<NodeView>,
    /// Per-edge state, in edge order.
    pub edges: Vec<EdgeMark>,
}

/// Format a tentative distance for display.
pub fn distance_label(d: f64) -> String {
    if d.is_finite() {
        format!("{d:.1}")
    } else {
        "∞".to_owned()
    }
}

/// Derive node/edge highlighting, labels and caption for `event`.
pub fn describe_step(graph: &Graph, event: &TraceEvent) -> StepView {
    let snapshot = event.snapshot();

    let mut nodes: Vec<NodeView> = (0..graph.node_count())
        .map(|i| {
            let idx = NodeIdx(i as u32);
            NodeView {
                mark: if snapshot.is_visited(idx) {
                    NodeMark::Visited
                } else {
                    NodeMark::Idle
                },
                distance_label: distance_label(snapshot.distance(idx)),
            }
        })
        .collect();
    let mut edges = vec![EdgeMark::Idle; graph.edges().len()];

    let caption = match event {
        TraceEvent::Explored { node, .. } => {
            raise(&mut nodes, *node, NodeMark::Current);
            format!("Exploring: {}", graph.label(*node))
        }
        TraceEvent::Relaxed { from, to, .. } => {
            raise(&mut nodes, *from, NodeMark::Current);
            if let Some(ei) = graph.edge_index_between(*from, *to) {
                edges[ei] = EdgeMark::Relaxing;
            }
            format!("Relaxing: {} → {}", graph.label(*from), graph.label(*to))
        }
        TraceEvent::Final { path, .. } => {
            for &n in path.nodes() {
                raise(&mut nodes, n, NodeMark::OnPath);
            }
            for (a, b) in path.segments() {
                if let Some(ei) = graph.edge_index_between(a, b) {
                    edges[ei] = EdgeMark::Path;
                }
            }
            format!("Final path: {}", path.display(graph))
        }
    };

    StepView {
        caption,
        nodes,
        edges,
    }
}

fn raise(nodes: &mut [NodeView], idx: NodeIdx, mark: NodeMark) {
    if let Some(view) = nodes.get_mut(idx.index()) {
        view.mark = view.mark.max(mark);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/view.rs"]
mod tests;
