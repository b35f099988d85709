//! Turning a planned route into timed playback.

pub(crate) mod config;
pub(crate) mod plan;
pub(crate) mod scheduler;
pub(crate) mod slot;
pub(crate) mod view;
