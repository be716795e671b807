//! Lifecycle glide path simulation

mod engine;
mod snapshot;

pub use engine::GlidePathEngine;
pub use snapshot::{GlidePathResult, GlidePathSummary, WealthSnapshot};
