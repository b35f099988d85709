/// Convenience result type used across routeplay.
pub type RouteResult<T> = Result<T, RouteError>;

/// Top-level error taxonomy used by engine and playback APIs.
///
/// Every variant is recoverable. An unreachable target is not an error and is
/// reported through [`crate::RouteOutcome::Unreachable`] instead.
#[derive(thiserror::Error, Debug)]
pub enum RouteError {
    /// Graph construction rejected a node or edge definition.
    #[error("graph definition error: {0}")]
    GraphDefinition(String),

    /// Source/target selection is unusable (equal endpoints, unknown node).
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// Weight multiplier or travel mode is unusable.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// Scheduler operation is not allowed in its current state.
    #[error("invalid playback state: {0}")]
    InvalidPlaybackState(String),

    /// Playback configuration values are out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RouteError {
    /// Build a [`RouteError::GraphDefinition`] value.
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::GraphDefinition(msg.into())
    }

    /// Build a [`RouteError::InvalidSelection`] value.
    pub fn selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    /// Build a [`RouteError::InvalidMode`] value.
    pub fn mode(msg: impl Into<String>) -> Self {
        Self::InvalidMode(msg.into())
    }

    /// Build a [`RouteError::InvalidPlaybackState`] value.
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::InvalidPlaybackState(msg.into())
    }

    /// Build a [`RouteError::InvalidConfig`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`RouteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
