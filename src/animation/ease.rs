use crate::foundation::error::RouteError;

/// Easing curves for the progress counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-out: `1 - (1 - t)^2`.
    #[default]
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-out.
    OutCubic,
}

impl Ease {
    /// Every curve, in declaration order.
    pub const ALL: [Self; 4] = [Self::Linear, Self::OutQuad, Self::InOutQuad, Self::OutCubic];

    /// Apply this curve to normalized progress `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

impl std::str::FromStr for Ease {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "linear" => Ok(Self::Linear),
            "out_quad" => Ok(Self::OutQuad),
            "in_out_quad" => Ok(Self::InOutQuad),
            "out_cubic" => Ok(Self::OutCubic),
            other => Err(RouteError::config(format!(
                "unknown ease '{other}' (expected linear, out_quad, in_out_quad or out_cubic)"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
