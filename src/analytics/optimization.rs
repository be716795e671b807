//! Mean-variance portfolio optimization over total wealth
//!
//! Two stages: target weights for the full economic balance sheet (financial
//! assets plus human capital net of the expense liability), then the
//! financial-portfolio weights that make the combined exposure hit those
//! targets given the non-tradable positions already on the balance sheet.

use serde::{Deserialize, Serialize};

/// Portfolio weights across the three asset classes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetWeights {
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
}

impl AssetWeights {
    /// The all-cash portfolio used as the safe fallback
    pub fn all_cash() -> Self {
        Self {
            stocks: 0.0,
            bonds: 0.0,
            cash: 1.0,
        }
    }

    /// Sum of the three weights
    pub fn sum(&self) -> f64 {
        self.stocks + self.bonds + self.cash
    }
}

/// Optimal total-wealth weights under mean-variance utility
///
/// With zero stock-bond correlation each risky weight is independent:
/// `w = excess_return / (gamma × variance)`, with cash as the residual.
/// Weights are intentionally unconstrained: small gamma implies leverage
/// (stocks above 1, cash negative).
pub fn optimal_total_wealth_weights(
    risk_aversion: f64,
    stock_excess_return: f64,
    bond_excess_return: f64,
    stock_variance: f64,
    bond_variance: f64,
) -> AssetWeights {
    let stocks = stock_excess_return / (risk_aversion * stock_variance);
    let bonds = bond_excess_return / (risk_aversion * bond_variance);

    AssetWeights {
        stocks,
        bonds,
        cash: 1.0 - stocks - bonds,
    }
}

/// Back out the financial-portfolio weights that complete the total-wealth
/// targets
///
/// Human capital and future expenses are non-tradable but carry the risk
/// character of tradable assets. The bond-like share of human capital
/// (`1 − income_beta`) splits into a bond-equivalent amount, sized by its
/// duration relative to the LTPZ benchmark, and a cash-equivalent remainder;
/// the stock-like share maps to stocks. Expenses are a liability and form the
/// same duration-based split with the opposite sign and no stock component.
/// The financial portfolio supplies whatever dollars remain between the
/// targets and that net implicit exposure.
///
/// With non-positive financial assets there is no portfolio to lever, so the
/// result is all cash. When `constrained`, weights are clipped to [0, 1] and
/// renormalized to sum to 1, falling back to all cash if everything clips to
/// zero. Unconstrained weights may be negative or above 1 and need not sum
/// to 1.
#[allow(clippy::too_many_arguments)]
pub fn financial_portfolio_weights(
    total_wealth: f64,
    financial_assets: f64,
    pv_human_capital: f64,
    human_capital_duration: f64,
    pv_expenses: f64,
    expense_duration: f64,
    target: AssetWeights,
    ltpz_duration: f64,
    income_beta: f64,
    constrained: bool,
) -> AssetWeights {
    if financial_assets <= 0.0 {
        return AssetWeights::all_cash();
    }

    // Human capital as a tradable portfolio (long)
    let bond_like_hc = pv_human_capital * (1.0 - income_beta);
    let hc_bond_equiv = (human_capital_duration / ltpz_duration) * bond_like_hc;
    let hc_cash_equiv = bond_like_hc - hc_bond_equiv;
    let hc_stock_equiv = pv_human_capital * income_beta;

    // Expenses as a tradable portfolio (short); no stock component
    let exp_bond_equiv = (expense_duration / ltpz_duration) * pv_expenses;
    let exp_cash_equiv = pv_expenses - exp_bond_equiv;

    // Net implicit exposure from the non-tradable balance sheet
    let net_stock_equiv = hc_stock_equiv;
    let net_bond_equiv = hc_bond_equiv - exp_bond_equiv;
    let net_cash_equiv = hc_cash_equiv - exp_cash_equiv;

    // Dollars the financial portfolio must supply per asset class
    let stocks_needed = target.stocks * total_wealth - net_stock_equiv;
    let bonds_needed = target.bonds * total_wealth - net_bond_equiv;
    let cash_needed = target.cash * total_wealth - net_cash_equiv;

    let mut stocks = stocks_needed / financial_assets;
    let mut bonds = bonds_needed / financial_assets;
    let mut cash = cash_needed / financial_assets;

    if constrained {
        stocks = stocks.clamp(0.0, 1.0);
        bonds = bonds.clamp(0.0, 1.0);
        cash = cash.clamp(0.0, 1.0);

        let total = stocks + bonds + cash;
        if total > 0.0 {
            stocks /= total;
            bonds /= total;
            cash /= total;
        } else {
            return AssetWeights::all_cash();
        }
    }

    AssetWeights { stocks, bonds, cash }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const STOCK_EXCESS: f64 = 0.04;
    const BOND_EXCESS: f64 = 0.01;
    const VARIANCE: f64 = 0.0324;
    const LTPZ_DURATION: f64 = 18.5;

    fn target_for(gamma: f64) -> AssetWeights {
        optimal_total_wealth_weights(gamma, STOCK_EXCESS, BOND_EXCESS, VARIANCE, VARIANCE)
    }

    #[test]
    fn test_lecture_example_gamma_2() {
        let w = target_for(2.0);

        // w_stock = 0.04 / (2 × 0.0324), w_bond = 0.01 / (2 × 0.0324)
        assert_relative_eq!(w.stocks, 0.617, max_relative = 0.01);
        assert_relative_eq!(w.bonds, 0.154, max_relative = 0.01);
        assert_relative_eq!(w.cash, 0.229, max_relative = 0.01);
    }

    #[test]
    fn test_target_weights_sum_to_one() {
        for gamma in [1.0, 1.5, 2.0, 3.0, 5.0, 10.0] {
            let w = target_for(gamma);
            assert!((w.sum() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_higher_gamma_less_stocks_more_cash() {
        let gammas = [1.0, 2.0, 4.0, 8.0];
        let weights: Vec<AssetWeights> = gammas.iter().map(|&g| target_for(g)).collect();

        for pair in weights.windows(2) {
            assert!(pair[1].stocks < pair[0].stocks);
            assert!(pair[1].cash > pair[0].cash);
        }
    }

    #[test]
    fn test_aggressive_investor_implies_leverage() {
        // gamma = 0.5: stock weight 0.04/(0.5×0.0324) ≈ 2.47, cash deeply negative
        let w = target_for(0.5);

        assert!(w.stocks > 1.0);
        assert!(w.cash < 0.0);
        assert!((w.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_financial_assets_goes_to_cash() {
        let w = financial_portfolio_weights(
            3_000_000.0,
            0.0,
            6_000_000.0,
            17.0,
            3_000_000.0,
            22.0,
            target_for(2.0),
            LTPZ_DURATION,
            0.0,
            true,
        );

        assert_eq!(w, AssetWeights::all_cash());
    }

    #[test]
    fn test_retiree_with_no_implicit_positions_gets_target() {
        // No human capital, no remaining expenses: the financial portfolio is
        // the whole balance sheet and should hold the targets directly
        let target = target_for(2.0);
        let w = financial_portfolio_weights(
            2_000_000.0,
            2_000_000.0,
            0.0,
            0.0,
            0.0,
            0.0,
            target,
            LTPZ_DURATION,
            0.0,
            true,
        );

        assert!((w.stocks - target.stocks).abs() < 1e-9);
        assert!((w.bonds - target.bonds).abs() < 1e-9);
        assert!((w.cash - target.cash).abs() < 1e-9);
    }

    #[test]
    fn test_constrained_weights_in_range_and_normalized() {
        // Young investor: large human capital dwarfing financial assets
        let w = financial_portfolio_weights(
            3_150_000.0,
            100_000.0,
            6_200_000.0,
            17.0,
            3_150_000.0,
            22.0,
            target_for(2.0),
            LTPZ_DURATION,
            0.0,
            true,
        );

        for weight in [w.stocks, w.bonds, w.cash] {
            assert!((0.0..=1.0).contains(&weight));
        }
        assert!((w.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unconstrained_weights_pass_through() {
        // Same young investor unconstrained: the stock need far exceeds the
        // financial assets, so the raw weight is leveraged
        let w = financial_portfolio_weights(
            3_150_000.0,
            100_000.0,
            6_200_000.0,
            17.0,
            3_150_000.0,
            22.0,
            target_for(2.0),
            LTPZ_DURATION,
            0.0,
            false,
        );

        assert!(w.stocks > 1.0);
    }

    #[test]
    fn test_stock_like_income_reduces_financial_stock_need() {
        let args = (
            3_150_000.0,
            500_000.0,
            6_200_000.0,
            17.0,
            3_150_000.0,
            22.0,
            target_for(4.0),
            LTPZ_DURATION,
        );

        let bond_like = financial_portfolio_weights(
            args.0, args.1, args.2, args.3, args.4, args.5, args.6, args.7, 0.0, false,
        );
        let stock_like = financial_portfolio_weights(
            args.0, args.1, args.2, args.3, args.4, args.5, args.6, args.7, 0.4, false,
        );

        // Stock-like human capital already supplies equity exposure, so the
        // financial portfolio needs less of it
        assert!(stock_like.stocks < bond_like.stocks);
    }

    #[test]
    fn test_all_clipped_falls_back_to_cash() {
        // Negative total wealth with no implicit positions pushes every
        // dollar target negative, so every weight clips to zero
        let w = financial_portfolio_weights(
            -1_000_000.0,
            50_000.0,
            0.0,
            0.0,
            0.0,
            0.0,
            target_for(2.0),
            LTPZ_DURATION,
            0.0,
            true,
        );

        assert_eq!(w, AssetWeights::all_cash());
    }
}
