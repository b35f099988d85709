use crate::foundation::error::{RouteError, RouteResult};

pub use kurbo::{Affine, Point, Vec2};

/// Dense 0-based node index, assigned in graph definition order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeIdx(pub u32);

impl NodeIdx {
    /// Index into per-node tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Absolute position on the virtual playback clock, in milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TimeMs(pub u64);

impl TimeMs {
    /// Clock origin.
    pub const ZERO: Self = Self(0);

    /// `self + n * interval_ms`, saturating.
    pub fn after_ticks(self, n: u64, interval_ms: u64) -> Self {
        Self(self.0.saturating_add(n.saturating_mul(interval_ms)))
    }

    /// Seconds as floating point, for display.
    pub fn as_secs_f64(self) -> f64 {
        (self.0 as f64) / 1000.0
    }
}

impl std::fmt::Display for TimeMs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Uniform scale plus offset mapping map-image coordinates to canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanvasTransform {
    /// Uniform scale factor (default 1).
    pub scale: f64,
    /// Offset applied after scaling.
    pub offset: Vec2,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl CanvasTransform {
    /// Check that the transform maps to finite, non-degenerate coordinates.
    pub fn validate(&self) -> RouteResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RouteError::config("transform scale must be finite and > 0"));
        }
        if !self.offset.x.is_finite() || !self.offset.y.is_finite() {
            return Err(RouteError::config("transform offset must be finite"));
        }
        Ok(())
    }

    /// Equivalent affine matrix: `T(offset) * S(scale)`.
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Map a map-image point to canvas space.
    pub fn apply(self, p: Point) -> Point {
        self.to_affine() * p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
