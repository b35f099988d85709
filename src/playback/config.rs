use crate::{
    animation::ease::Ease,
    foundation::core::CanvasTransform,
    foundation::error::{RouteError, RouteResult},
};

/// Timing and pacing knobs for one playback.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Spacing between algorithm steps.
    pub step_interval_ms: u64,
    /// Spacing between motion frames.
    pub frame_interval_ms: u64,
    /// Planar distance covered per motion frame, in canvas units.
    pub step_px: f64,
    /// Spacing between counter samples, independent of motion.
    pub counter_interval_ms: u64,
    /// Curve shaping the counter.
    pub counter_ease: Ease,
    /// Map-image → canvas mapping applied before motion is interpolated.
    pub transform: CanvasTransform,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 700,
            frame_interval_ms: 25,
            step_px: 8.0,
            counter_interval_ms: 30,
            counter_ease: Ease::OutQuad,
            transform: CanvasTransform::default(),
        }
    }
}

impl PlaybackConfig {
    /// Return a config with a different canvas transform.
    pub fn with_transform(mut self, transform: CanvasTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Reject zero intervals, a non-positive step budget and degenerate transforms.
    pub fn validate(&self) -> RouteResult<()> {
        if self.step_interval_ms == 0 {
            return Err(RouteError::config("step_interval_ms must be > 0"));
        }
        if self.frame_interval_ms == 0 {
            return Err(RouteError::config("frame_interval_ms must be > 0"));
        }
        if self.counter_interval_ms == 0 {
            return Err(RouteError::config("counter_interval_ms must be > 0"));
        }
        if !self.step_px.is_finite() || self.step_px <= 0.0 {
            return Err(RouteError::config(format!(
                "step_px must be finite and > 0 (got {})",
                self.step_px
            )));
        }
        self.transform.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/config.rs"]
mod tests;
