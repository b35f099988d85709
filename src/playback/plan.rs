use std::sync::Arc;

use crate::{
    animation::counter::CounterStream,
    animation::motion::MotionStream,
    foundation::core::{Point, TimeMs},
    foundation::error::RouteResult,
    graph::model::Graph,
    playback::config::PlaybackConfig,
    search::path::Path,
    search::route::RouteOutcome,
    search::trace::{Trace, TraceEvent},
};

/// Every stream of one playback, fully precomputed.
///
/// Pure function of an outcome and a config; renderers that want whole lists read them
/// here, renderers that want ticks drive a [`crate::TraceReplayScheduler`] over it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackPlan {
    trace: Arc<Trace>,
    path: Path,
    step_interval_ms: u64,
    motion: MotionStream,
    counter: CounterStream,
    total_cost: Option<f64>,
}

impl PlaybackPlan {
    /// Build the step, motion and counter streams for `outcome`.
    ///
    /// An unreachable outcome keeps its step stream; motion and counter are empty.
    #[tracing::instrument(skip_all, fields(reachable = outcome.is_reachable()))]
    pub fn for_outcome(
        graph: &Graph,
        outcome: &RouteOutcome,
        config: &PlaybackConfig,
    ) -> RouteResult<Self> {
        config.validate()?;

        let path = outcome.path();
        let (motion, counter) = match outcome.total_cost() {
            Some(cost) => {
                let waypoints: Vec<Point> = path
                    .nodes()
                    .iter()
                    .map(|&n| config.transform.apply(graph.position(n)))
                    .collect();
                let motion =
                    MotionStream::build(&waypoints, config.step_px, config.frame_interval_ms);
                let counter = CounterStream::build(
                    cost,
                    motion.duration_ms(),
                    config.counter_interval_ms,
                    config.counter_ease,
                );
                (motion, counter)
            }
            None => (MotionStream::default(), CounterStream::default()),
        };

        tracing::debug!(
            steps = outcome.trace().len(),
            motion_frames = motion.len(),
            counter_samples = counter.len(),
            "playback planned"
        );

        Ok(Self {
            trace: Arc::clone(outcome.trace()),
            path,
            step_interval_ms: config.step_interval_ms,
            motion,
            counter,
            total_cost: outcome.total_cost(),
        })
    }

    /// Trace events in step order.
    pub fn steps(&self) -> &[TraceEvent] {
        self.trace.events()
    }

    /// Shared trace.
    pub fn trace(&self) -> &Arc<Trace> {
        &self.trace
    }

    /// Spacing between steps.
    pub fn step_interval_ms(&self) -> u64 {
        self.step_interval_ms
    }

    /// Due time of step `index` on the playback clock.
    pub fn step_due(&self, index: usize) -> TimeMs {
        TimeMs::ZERO.after_ticks(index as u64, self.step_interval_ms)
    }

    /// Time at which the whole step stream has played.
    pub fn steps_duration_ms(&self) -> u64 {
        (self.trace.len() as u64).saturating_mul(self.step_interval_ms)
    }

    /// Route being animated; empty when unreachable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Motion stream.
    pub fn motion(&self) -> &MotionStream {
        &self.motion
    }

    /// Motion positions in canvas space.
    pub fn motion_frames(&self) -> &[Point] {
        self.motion.frames()
    }

    /// Counter stream.
    pub fn counter(&self) -> &CounterStream {
        &self.counter
    }

    /// Route cost, `None` when unreachable.
    pub fn total_cost(&self) -> Option<f64> {
        self.total_cost
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/plan.rs"]
mod tests;
