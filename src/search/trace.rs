use crate::{foundation::core::NodeIdx, search::path::Path};

/// Immutable copy of the search state at one instant.
///
/// Indexed by [`NodeIdx`]; unreached nodes hold `f64::INFINITY`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Snapshot {
    distances: Box<[f64]>,
    visited: Box<[bool]>,
}

impl Snapshot {
    pub(crate) fn capture(distances: &[f64], visited: &[bool]) -> Self {
        Self {
            distances: distances.into(),
            visited: visited.into(),
        }
    }

    /// Tentative distance of `node` at this instant.
    pub fn distance(&self, node: NodeIdx) -> f64 {
        self.distances[node.index()]
    }

    /// `true` when `node` was settled at this instant.
    pub fn is_visited(&self, node: NodeIdx) -> bool {
        self.visited[node.index()]
    }

    /// All tentative distances.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Settled flags for all nodes.
    pub fn visited(&self) -> &[bool] {
        &self.visited
    }

    /// Number of settled nodes.
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }
}

/// One algorithmic step, with snapshots taken right after it happened.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    /// `node` was popped from the frontier and settled.
    Explored {
        /// Settled node.
        node: NodeIdx,
        /// State after settling.
        snapshot: Snapshot,
    },
    /// The edge `from`-`to` strictly improved the distance of `to`.
    Relaxed {
        /// Node being expanded.
        from: NodeIdx,
        /// Node whose distance improved.
        to: NodeIdx,
        /// State after the update.
        snapshot: Snapshot,
    },
    /// Route reconstruction finished.
    Final {
        /// Source → target path.
        path: Path,
        /// Final distances and settled set.
        snapshot: Snapshot,
    },
}

impl TraceEvent {
    /// Snapshot carried by the event.
    pub fn snapshot(&self) -> &Snapshot {
        match self {
            Self::Explored { snapshot, .. }
            | Self::Relaxed { snapshot, .. }
            | Self::Final { snapshot, .. } => snapshot,
        }
    }

    /// Stable event kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Explored { .. } => "explored",
            Self::Relaxed { .. } => "relaxed",
            Self::Final { .. } => "final",
        }
    }
}

/// Ordered, append-only event log of one run.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub(crate) fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    /// Events in emission order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Event at `index`.
    pub fn get(&self, index: usize) -> Option<&TraceEvent> {
        self.events.get(index)
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` when no event was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate events in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent> {
        self.events.iter()
    }

    /// Nodes in the order they were settled.
    pub fn explored_nodes(&self) -> Vec<NodeIdx> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Explored { node, .. } => Some(*node),
                _ => None,
            })
            .collect()
    }

    /// The closing [`TraceEvent::Final`], if route reconstruction succeeded.
    pub fn final_event(&self) -> Option<&TraceEvent> {
        self.events
            .last()
            .filter(|e| matches!(e, TraceEvent::Final { .. }))
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEvent;
    type IntoIter = std::slice::Iter<'a, TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
