//! Year-by-year glide path engine
//!
//! A strict left-fold from current age to life expectancy: each year's
//! allocation is computed from the wealth projected out of the prior year,
//! and next year's wealth follows from this year's allocation and the
//! geometric market returns. Deterministic, no randomness.

use crate::analytics::duration::{annuity_duration, expense_duration};
use crate::analytics::present_value::{pv_annuity, pv_expenses, total_wealth};
use crate::analytics::{financial_portfolio_weights, optimal_total_wealth_weights, AssetWeights};
use crate::assumptions::MarketAssumptions;
use crate::profile::InvestorProfile;
use super::snapshot::{GlidePathResult, WealthSnapshot};

/// Main glide path engine
#[derive(Debug, Clone)]
pub struct GlidePathEngine {
    market: MarketAssumptions,
}

impl GlidePathEngine {
    /// Create an engine with the given market assumptions
    pub fn new(market: MarketAssumptions) -> Self {
        Self { market }
    }

    /// Market assumptions in use
    pub fn market(&self) -> &MarketAssumptions {
        &self.market
    }

    /// Total-wealth target weights for a given risk aversion
    ///
    /// Constant across the whole lifecycle: they depend only on the market
    /// assumptions and gamma, never on age or wealth.
    pub fn target_weights(&self, risk_aversion: f64) -> AssetWeights {
        optimal_total_wealth_weights(
            risk_aversion,
            self.market.stock_excess_return,
            self.market.bond_excess_return,
            self.market.stock_variance(),
            self.market.bond_variance(),
        )
    }

    /// Compute the full glide path for one investor
    ///
    /// Emits one snapshot per integer age in
    /// `[current_age, life_expectancy]`, in ascending order.
    pub fn compute(&self, profile: &InvestorProfile) -> GlidePathResult {
        let m = &self.market;
        let target = self.target_weights(profile.risk_aversion);

        log::debug!(
            "glide path ages {}..={}, gamma={}, beta={}",
            profile.current_age,
            profile.life_expectancy,
            profile.risk_aversion,
            profile.income_beta,
        );

        let mut result = GlidePathResult::new(target);

        let stock_return = m.stock_geometric_return();
        let bond_return = m.bond_geometric_return();
        let cash_return = m.cash_return();

        // The single state variable threaded through the fold
        let mut financial_wealth = profile.financial_assets;

        for age in profile.current_age..=profile.life_expectancy {
            let years_working = profile.years_working_at(age);
            let years_retired = profile.years_retired_at(age);

            // Human capital vanishes exactly at retirement. Inside the loop
            // it is discounted at the risk-free rate; income beta enters only
            // through the stock/bond/cash split below.
            let (hc_pv, hc_duration) = if years_working > 0 {
                (
                    pv_annuity(profile.annual_income, m.risk_free_rate, years_working),
                    annuity_duration(m.risk_free_rate, years_working),
                )
            } else {
                (0.0, 0.0)
            };

            let exp_pv = pv_expenses(
                profile.working_expenses,
                profile.retirement_expenses,
                years_working,
                years_retired,
                m.risk_free_rate,
            );
            let exp_duration = expense_duration(
                years_working,
                years_retired,
                profile.working_expenses,
                profile.retirement_expenses,
                m.risk_free_rate,
            );

            // Feedback loop: total wealth uses the projected, not initial,
            // financial wealth
            let total_w = total_wealth(financial_wealth, hc_pv, exp_pv);

            let weights = financial_portfolio_weights(
                total_w,
                financial_wealth,
                hc_pv,
                hc_duration,
                exp_pv,
                exp_duration,
                target,
                m.ltpz_duration,
                profile.income_beta,
                true,
            );

            result.add_snapshot(WealthSnapshot {
                age,
                years_to_retirement: years_working,
                pv_human_capital: hc_pv,
                pv_expenses: exp_pv,
                total_wealth: total_w,
                financial_wealth,
                stock_weight: weights.stocks,
                bond_weight: weights.bonds,
                cash_weight: weights.cash,
            });

            // Project next year's wealth: portfolio growth plus net savings
            // while working, withdrawals in retirement. Floored at zero.
            let portfolio_return = weights.stocks * stock_return
                + weights.bonds * bond_return
                + weights.cash * cash_return;

            let annual_cashflow = if years_working > 0 {
                profile.annual_income - profile.working_expenses
            } else {
                -profile.retirement_expenses
            };

            financial_wealth =
                (financial_wealth * (1.0 + portfolio_return) + annual_cashflow).max(0.0);
        }

        result
    }
}

impl Default for GlidePathEngine {
    fn default() -> Self {
        Self::new(MarketAssumptions::default())
    }
}
