//! Core financial analytics: present value, duration, and portfolio
//! optimization
//!
//! Everything here is a pure function of its explicit arguments, total over
//! finite numeric inputs.

pub mod duration;
pub mod optimization;
pub mod present_value;

pub use optimization::{financial_portfolio_weights, optimal_total_wealth_weights, AssetWeights};
