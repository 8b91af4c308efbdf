//! Inbound HTTP surface.

pub mod handler;

pub use handler::{AppState, SharedState, build_router};
