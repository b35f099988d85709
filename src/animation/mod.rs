//! Easing curves and the two continuous playback streams: motion and counter.

pub(crate) mod counter;
pub(crate) mod ease;
pub(crate) mod motion;
