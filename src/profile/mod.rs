//! Investor profile data and batch loading

mod data;
pub mod loader;

pub use data::{InvestorProfile, ProfileError, BOND_LIKE_INCOME_BETA, STOCK_LIKE_INCOME_BETA};
pub use loader::{load_profiles, load_profiles_from_reader};
