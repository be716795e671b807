//! Lifecycle Engine - glide path construction for lifecycle investing
//!
//! This library provides:
//! - Present value and Macaulay duration of labor income and expense streams
//! - Mean-variance optimal total-wealth allocation
//! - Conversion of total-wealth targets into constrained financial-portfolio
//!   weights given human-capital and liability exposure
//! - Year-by-year glide path simulation with wealth feedback
//! - Batch scenario runs over profiles and risk-aversion grids

pub mod analytics;
pub mod assumptions;
pub mod glide_path;
pub mod profile;
pub mod scenario;

// Re-export commonly used types
pub use analytics::AssetWeights;
pub use assumptions::MarketAssumptions;
pub use glide_path::{GlidePathEngine, GlidePathResult, GlidePathSummary, WealthSnapshot};
pub use profile::{InvestorProfile, ProfileError};
pub use scenario::ScenarioRunner;
