use crate::foundation::error::{RouteError, RouteResult};

/// Validated edge-weight multiplier (finite and strictly positive).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Multiplier(f64);

impl Multiplier {
    /// Identity multiplier: derived weights equal base weights.
    pub const ONE: Self = Self(1.0);

    /// Validate a raw multiplier.
    pub fn new(value: f64) -> RouteResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(RouteError::mode(format!(
                "multiplier must be finite and > 0 (got {value})"
            )));
        }
        Ok(Self(value))
    }

    /// Raw multiplier value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ONE
    }
}

impl<'de> serde::Deserialize<'de> for Multiplier {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(d)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Named travel presets; each scales every edge by a fixed factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    /// On foot: slowest, weights x1.5.
    Foot,
    /// Paraglider: weights x1.1.
    Glider,
    /// Horseback: fastest, weights x0.8.
    Horse,
}

impl TravelMode {
    /// Every preset, in menu order.
    pub const ALL: [Self; 3] = [Self::Foot, Self::Glider, Self::Horse];

    /// Stable lowercase name used by the CLI and serde.
    pub fn name(self) -> &'static str {
        match self {
            Self::Foot => "foot",
            Self::Glider => "glider",
            Self::Horse => "horse",
        }
    }

    /// Weight multiplier for this preset.
    pub fn multiplier(self) -> Multiplier {
        let raw = match self {
            Self::Foot => 1.5,
            Self::Glider => 1.1,
            Self::Horse => 0.8,
        };
        Multiplier(raw)
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.name() == key)
            .ok_or_else(|| {
                RouteError::mode(format!(
                    "unknown travel mode '{s}' (expected foot, glider or horse)"
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/mode.rs"]
mod tests;
