use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    foundation::core::NodeIdx,
    foundation::error::{RouteError, RouteResult},
    graph::mode::{Multiplier, TravelMode},
    graph::model::Graph,
    search::engine::ShortestPathEngine,
    search::path::{Path, reconstruct},
    search::trace::{Snapshot, Trace, TraceEvent},
};

/// A single source → target query.
#[derive(Clone, Debug, PartialEq)]
pub struct RunRequest {
    /// Source node label.
    pub source: String,
    /// Target node label.
    pub target: String,
    /// Weight multiplier for this run.
    pub multiplier: Multiplier,
}

impl RunRequest {
    /// Request with an explicit multiplier.
    pub fn new(source: impl Into<String>, target: impl Into<String>, multiplier: Multiplier) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            multiplier,
        }
    }

    /// Request using a travel mode preset.
    pub fn with_mode(source: impl Into<String>, target: impl Into<String>, mode: TravelMode) -> Self {
        Self::new(source, target, mode.multiplier())
    }
}

/// A reached target.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Source node.
    pub source: NodeIdx,
    /// Target node.
    pub target: NodeIdx,
    /// Multiplier the run used.
    pub multiplier: Multiplier,
    /// Non-empty source → target path.
    pub path: Path,
    /// Distance of the target.
    pub total_cost: f64,
    /// Final distance per node.
    pub distances: Vec<f64>,
    /// Final predecessor per node.
    pub predecessors: Vec<Option<NodeIdx>>,
    /// Full trace, closed by a [`TraceEvent::Final`].
    pub trace: Arc<Trace>,
}

/// The target could not be reached from the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Unreached {
    /// Source node.
    pub source: NodeIdx,
    /// Target node.
    pub target: NodeIdx,
    /// Multiplier the run used.
    pub multiplier: Multiplier,
    /// Final distance per node; the target holds `f64::INFINITY`.
    pub distances: Vec<f64>,
    /// Trace of the source component. Carries no `Final` event.
    pub trace: Arc<Trace>,
}

/// Result of [`plan_route`]. Unreachability is a normal outcome, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteOutcome {
    /// Target reached.
    Reached(Route),
    /// Target outside the source's component.
    Unreachable(Unreached),
}

impl RouteOutcome {
    /// `true` for [`RouteOutcome::Reached`].
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reached(_))
    }

    /// Reached route, if any.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Reached(r) => Some(r),
            Self::Unreachable(_) => None,
        }
    }

    /// Source → target path; empty when unreachable.
    pub fn path(&self) -> Path {
        match self {
            Self::Reached(r) => r.path.clone(),
            Self::Unreachable(_) => Path::empty(),
        }
    }

    /// Cost of the route, `None` when unreachable.
    pub fn total_cost(&self) -> Option<f64> {
        self.route().map(|r| r.total_cost)
    }

    /// Shared trace of the run.
    pub fn trace(&self) -> &Arc<Trace> {
        match self {
            Self::Reached(r) => &r.trace,
            Self::Unreachable(u) => &u.trace,
        }
    }

    /// Final distance per node.
    pub fn distances(&self) -> &[f64] {
        match self {
            Self::Reached(r) => &r.distances,
            Self::Unreachable(u) => &u.distances,
        }
    }

    /// Final distances keyed by node label.
    pub fn distance_map(&self, graph: &Graph) -> BTreeMap<String, f64> {
        graph
            .nodes()
            .iter()
            .zip(self.distances())
            .map(|(n, &d)| (n.id.clone(), d))
            .collect()
    }
}

/// Validate `request`, run the search and reconstruct the route.
///
/// Equal endpoints and unknown labels fail with [`RouteError::InvalidSelection`] before any
/// search work happens. A multiplier that drives any edge weight to zero or infinity fails
/// with [`RouteError::InvalidMode`].
#[tracing::instrument(skip_all, fields(from = %request.source, to = %request.target))]
pub fn plan_route(graph: &Graph, request: &RunRequest) -> RouteResult<RouteOutcome> {
    if request.source == request.target {
        return Err(RouteError::selection(format!(
            "source and target must differ (both '{}')",
            request.source
        )));
    }
    let source = graph.require(&request.source)?;
    let target = graph.require(&request.target)?;

    for edge in graph.edges() {
        let w = edge.effective_weight(request.multiplier);
        if !w.is_finite() || w <= 0.0 {
            return Err(RouteError::mode(format!(
                "multiplier {} turns edge {}-{} (base {}) into weight {w}",
                request.multiplier.get(),
                graph.label(edge.a),
                graph.label(edge.b),
                edge.base_weight
            )));
        }
    }

    let outcome = ShortestPathEngine::run(graph, source, request.multiplier)?;
    let total_cost = outcome.distance(target);

    if !total_cost.is_finite() {
        tracing::debug!("target unreachable");
        return Ok(RouteOutcome::Unreachable(Unreached {
            source,
            target,
            multiplier: request.multiplier,
            distances: outcome.distances,
            trace: Arc::new(outcome.trace),
        }));
    }

    let path = reconstruct(&outcome.predecessors, target);
    if path.source() != Some(source) {
        return Err(RouteError::Other(anyhow::anyhow!(
            "predecessor chain from {target} does not lead back to {source}"
        )));
    }

    let settled: Vec<bool> = outcome.distances.iter().map(|d| d.is_finite()).collect();
    let mut trace = outcome.trace;
    trace.push(TraceEvent::Final {
        path: path.clone(),
        snapshot: Snapshot::capture(&outcome.distances, &settled),
    });

    tracing::debug!(hops = path.len().saturating_sub(1), total_cost, "route planned");

    Ok(RouteOutcome::Reached(Route {
        source,
        target,
        multiplier: request.multiplier,
        path,
        total_cost,
        distances: outcome.distances,
        predecessors: outcome.predecessors,
        trace: Arc::new(trace),
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/search/route.rs"]
mod tests;
