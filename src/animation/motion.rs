use crate::foundation::core::{Point, TimeMs};

/// Upper bound on interpolated frames per segment.
pub const MAX_SEGMENT_FRAMES: usize = 4096;

/// Number of interpolated frames for one segment of length `length`.
///
/// `max(1, floor(length / step_px))`, capped at [`MAX_SEGMENT_FRAMES`]; the exact endpoint
/// frame is not included.
pub fn segment_frame_count(length: f64, step_px: f64) -> usize {
    let n = (length / step_px).floor();
    if n.is_nan() || n < 1.0 {
        1
    } else if n >= MAX_SEGMENT_FRAMES as f64 {
        MAX_SEGMENT_FRAMES
    } else {
        n as usize
    }
}

/// Distance-paced positions along a polyline, one per frame interval.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct MotionStream {
    frames: Vec<Point>,
    interval_ms: u64,
}

impl MotionStream {
    /// Interpolate `waypoints` in order.
    ///
    /// Each segment `a → b` yields `a + (b - a) * s / n` for `s = 1..=n`, then `b` once more,
    /// so the stream always lands exactly on every waypoint. Fewer than two waypoints give
    /// an empty stream.
    pub fn build(waypoints: &[Point], step_px: f64, interval_ms: u64) -> Self {
        let mut frames = Vec::new();
        for pair in waypoints.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let n = segment_frame_count(a.distance(b), step_px);
            frames.extend((1..=n).map(|s| a.lerp(b, s as f64 / n as f64)));
            frames.push(b);
        }
        tracing::trace!(waypoints = waypoints.len(), frames = frames.len(), "motion built");
        Self {
            frames,
            interval_ms,
        }
    }

    /// All positions in playback order.
    pub fn frames(&self) -> &[Point] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when there is nothing to play.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Spacing between frames.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// `frame_count * interval_ms`.
    pub fn duration_ms(&self) -> u64 {
        (self.frames.len() as u64).saturating_mul(self.interval_ms)
    }

    /// Due time of frame `index`, relative to `origin`.
    pub fn due(&self, origin: TimeMs, index: usize) -> TimeMs {
        origin.after_ticks(index as u64, self.interval_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
