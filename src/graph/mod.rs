//! Weighted graph model, travel-mode multipliers and graph definitions.

pub(crate) mod def;
pub(crate) mod mode;
pub(crate) mod model;
pub(crate) mod preset;
