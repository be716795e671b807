//! Glide path output structures

use crate::analytics::AssetWeights;
use serde::{Deserialize, Serialize};

/// One simulated year of the glide path
///
/// `financial_wealth` is the projected portfolio value at the start of the
/// year; the weights are the constrained financial-portfolio allocation held
/// during the year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WealthSnapshot {
    pub age: u8,
    pub years_to_retirement: u32,
    pub pv_human_capital: f64,
    pub pv_expenses: f64,
    pub total_wealth: f64,
    pub financial_wealth: f64,
    pub stock_weight: f64,
    pub bond_weight: f64,
    pub cash_weight: f64,
}

impl WealthSnapshot {
    /// The year's allocation as a weight record
    pub fn weights(&self) -> AssetWeights {
        AssetWeights {
            stocks: self.stock_weight,
            bonds: self.bond_weight,
            cash: self.cash_weight,
        }
    }
}

/// Complete glide path for one investor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlidePathResult {
    /// One snapshot per age, ascending from current age to life expectancy
    pub snapshots: Vec<WealthSnapshot>,

    /// Age-invariant total-wealth target weights the path steers toward
    pub target_weights: AssetWeights,
}

impl GlidePathResult {
    pub fn new(target_weights: AssetWeights) -> Self {
        Self {
            snapshots: Vec::new(),
            target_weights,
        }
    }

    /// Add a snapshot row
    pub fn add_snapshot(&mut self, snapshot: WealthSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Snapshot at a specific age, if it lies on the path
    pub fn at_age(&self, age: u8) -> Option<&WealthSnapshot> {
        self.snapshots.iter().find(|s| s.age == age)
    }

    /// Get summary statistics
    pub fn summary(&self) -> GlidePathSummary {
        let first = self.snapshots.first();
        let last = self.snapshots.last();

        let (peak_financial_wealth, peak_wealth_age) = self
            .snapshots
            .iter()
            .fold((0.0_f64, 0_u8), |(peak, peak_age), s| {
                if s.financial_wealth > peak {
                    (s.financial_wealth, s.age)
                } else {
                    (peak, peak_age)
                }
            });

        let retirement = self.snapshots.iter().find(|s| s.years_to_retirement == 0);

        GlidePathSummary {
            total_years: self.snapshots.len() as u32,
            starting_stock_weight: first.map(|s| s.stock_weight).unwrap_or(0.0),
            retirement_age: retirement.map(|s| s.age).unwrap_or(0),
            retirement_financial_wealth: retirement.map(|s| s.financial_wealth).unwrap_or(0.0),
            retirement_stock_weight: retirement.map(|s| s.stock_weight).unwrap_or(0.0),
            peak_financial_wealth,
            peak_wealth_age,
            final_financial_wealth: last.map(|s| s.financial_wealth).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a glide path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlidePathSummary {
    pub total_years: u32,
    pub starting_stock_weight: f64,
    pub retirement_age: u8,
    pub retirement_financial_wealth: f64,
    pub retirement_stock_weight: f64,
    pub peak_financial_wealth: f64,
    pub peak_wealth_age: u8,
    pub final_financial_wealth: f64,
}
