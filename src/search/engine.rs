use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{
    foundation::core::NodeIdx,
    foundation::error::{RouteError, RouteResult},
    graph::mode::Multiplier,
    graph::model::Graph,
    search::trace::{Snapshot, Trace, TraceEvent},
};

/// Final state of one single-source search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Search origin.
    pub source: NodeIdx,
    /// Multiplier applied to every edge during the run.
    pub multiplier: Multiplier,
    /// Shortest distance per node; `f64::INFINITY` when unreached.
    pub distances: Vec<f64>,
    /// Predecessor on the shortest path per node; `None` for the source and unreached nodes.
    pub predecessors: Vec<Option<NodeIdx>>,
    /// Ordered `Explored`/`Relaxed` events.
    pub trace: Trace,
}

impl SearchOutcome {
    /// Final distance of `node`.
    pub fn distance(&self, node: NodeIdx) -> f64 {
        self.distances[node.index()]
    }

    /// `true` when `node` has a finite distance.
    pub fn is_reachable(&self, node: NodeIdx) -> bool {
        self.distance(node).is_finite()
    }
}

/// Stateless single-source Dijkstra with a lazy-deletion frontier.
pub struct ShortestPathEngine;

impl ShortestPathEngine {
    /// Search the whole component of `source`, recording every step.
    ///
    /// The run never stops early at a target: the trace always reflects full exploration.
    #[tracing::instrument(skip_all, fields(source = %source, multiplier = multiplier.get()))]
    pub fn run(
        graph: &Graph,
        source: NodeIdx,
        multiplier: Multiplier,
    ) -> RouteResult<SearchOutcome> {
        if !graph.contains(source) {
            return Err(RouteError::selection(format!(
                "source {source} is not a node of this graph"
            )));
        }

        let mut state = SearchState::new(graph.node_count());
        let mut trace = Trace::default();
        let mut stale_pops = 0usize;

        state.distances[source.index()] = 0.0;
        state.push(0.0, source);

        while let Some(entry) = state.frontier.pop() {
            let current = entry.node;
            if state.settled[current.index()] {
                stale_pops += 1;
                continue;
            }

            state.settled[current.index()] = true;
            trace.push(TraceEvent::Explored {
                node: current,
                snapshot: state.snapshot(),
            });

            let base = state.distances[current.index()];
            for (neighbor, weight) in graph.neighbors(current, multiplier) {
                if state.settled[neighbor.index()] {
                    continue;
                }
                let candidate = base + weight;
                if candidate < state.distances[neighbor.index()] {
                    state.distances[neighbor.index()] = candidate;
                    state.predecessors[neighbor.index()] = Some(current);
                    state.push(candidate, neighbor);
                    trace.push(TraceEvent::Relaxed {
                        from: current,
                        to: neighbor,
                        snapshot: state.snapshot(),
                    });
                }
            }
        }

        tracing::debug!(
            events = trace.len(),
            settled = state.settled.iter().filter(|&&s| s).count(),
            stale_pops,
            "search finished"
        );

        Ok(SearchOutcome {
            source,
            multiplier,
            distances: state.distances,
            predecessors: state.predecessors,
            trace,
        })
    }
}

/// Mutable state owned by exactly one `run` call.
struct SearchState {
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeIdx>>,
    settled: Vec<bool>,
    frontier: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl SearchState {
    fn new(node_count: usize) -> Self {
        Self {
            distances: vec![f64::INFINITY; node_count],
            predecessors: vec![None; node_count],
            settled: vec![false; node_count],
            frontier: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, distance: f64, node: NodeIdx) {
        self.frontier.push(FrontierEntry {
            distance,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.distances, &self.settled)
    }
}

/// Frontier candidate. Duplicates of a node are allowed; stale ones are dropped on pop.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    distance: f64,
    // insertion order, breaks distance ties
    seq: u64,
    node: NodeIdx,
}

impl Ord for FrontierEntry {
    // BinaryHeap is a max-heap: smaller distance, then earlier seq, compares greater.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

#[cfg(test)]
#[path = "../../tests/unit/search/engine.rs"]
mod tests;
