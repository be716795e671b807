//! Capital market assumptions with documented defaults

mod market;

pub use market::MarketAssumptions;
