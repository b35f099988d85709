//! Single-source shortest-path search, its event trace and route reconstruction.

pub(crate) mod engine;
pub(crate) mod path;
pub(crate) mod route;
pub(crate) mod trace;
