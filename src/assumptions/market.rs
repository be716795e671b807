//! Capital market assumptions for lifecycle allocation
//!
//! All returns are real (inflation-adjusted) annual rates. Stocks and bonds
//! are assumed uncorrelated, which lets the optimizer allocate to each risky
//! asset independently.

use serde::{Deserialize, Serialize};

/// Capital market assumptions used throughout the engine
///
/// Volatilities are annual standard deviations; variances are derived.
/// Geometric returns follow the standard lognormal adjustment
/// `geometric ≈ arithmetic − σ²/2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketAssumptions {
    /// Real risk-free rate (also the cash return and expense discount rate)
    pub risk_free_rate: f64,

    /// Arithmetic excess return of stocks over cash
    pub stock_excess_return: f64,

    /// Arithmetic excess return of long-term bonds over cash
    pub bond_excess_return: f64,

    /// Annual stock return volatility
    pub stock_volatility: f64,

    /// Annual bond return volatility
    pub bond_volatility: f64,

    /// Duration of the long-term TIPS benchmark used for duration matching
    pub ltpz_duration: f64,
}

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.02,
            stock_excess_return: 0.04,
            bond_excess_return: 0.01,
            stock_volatility: 0.18,
            bond_volatility: 0.18,
            ltpz_duration: 18.5,
        }
    }
}

impl MarketAssumptions {
    /// Variance of stock returns
    pub fn stock_variance(&self) -> f64 {
        self.stock_volatility * self.stock_volatility
    }

    /// Variance of bond returns
    pub fn bond_variance(&self) -> f64 {
        self.bond_volatility * self.bond_volatility
    }

    /// Equity premium used to discount stock-like labor income
    pub fn equity_premium(&self) -> f64 {
        self.stock_excess_return
    }

    /// Total geometric return on stocks
    pub fn stock_geometric_return(&self) -> f64 {
        self.risk_free_rate + self.stock_excess_return - 0.5 * self.stock_variance()
    }

    /// Total geometric return on bonds
    pub fn bond_geometric_return(&self) -> f64 {
        self.risk_free_rate + self.bond_excess_return - 0.5 * self.bond_variance()
    }

    /// Cash earns the risk-free rate
    pub fn cash_return(&self) -> f64 {
        self.risk_free_rate
    }
}
