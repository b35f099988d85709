//! routeplay computes single-source shortest paths over a small weighted graph and replays
//! the search as timed playback.
//!
//! The flow is one-way:
//!
//! - Build a [`Graph`] from a [`GraphDef`] (or use [`tower_map`])
//! - [`plan_route`] runs [`ShortestPathEngine`] and returns a [`RouteOutcome`] with the full
//!   [`Trace`]
//! - [`PlaybackPlan`] turns the outcome into step, motion and counter streams
//! - [`TraceReplayScheduler`] emits those streams one [`PlaybackFrame`] per tick
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod graph;
pub(crate) mod playback;
pub(crate) mod search;

pub use crate::foundation::core::{Affine, CanvasTransform, NodeIdx, Point, TimeMs, Vec2};
pub use crate::foundation::error::{RouteError, RouteResult};

pub use crate::animation::counter::{CounterSample, CounterStream};
pub use crate::animation::ease::Ease;
pub use crate::animation::motion::{MAX_SEGMENT_FRAMES, MotionStream, segment_frame_count};
pub use crate::graph::def::{EdgeDef, GraphBuilder, GraphDef, NodeDef};
pub use crate::graph::mode::{Multiplier, TravelMode};
pub use crate::graph::model::{Edge, Graph, Node};
pub use crate::graph::preset::{tower_map, tower_map_def};
pub use crate::playback::config::PlaybackConfig;
pub use crate::playback::plan::PlaybackPlan;
pub use crate::playback::scheduler::{PlaybackFrame, PlaybackState, TraceReplayScheduler};
pub use crate::playback::slot::PlaybackSlot;
pub use crate::playback::view::{
    EdgeMark, NodeMark, NodeView, StepView, describe_step, distance_label,
};
pub use crate::search::engine::{SearchOutcome, ShortestPathEngine};
pub use crate::search::path::{Path, reconstruct};
pub use crate::search::route::{Route, RouteOutcome, RunRequest, Unreached, plan_route};
pub use crate::search::trace::{Snapshot, Trace, TraceEvent};
