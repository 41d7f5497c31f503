//! Request handlers for the two JSON endpoints.

pub mod collect;
pub mod predict;

pub use collect::collect;
pub use predict::predict;
