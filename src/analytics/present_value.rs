//! Present value calculations for lifecycle wealth accounting
//!
//! All functions are total over finite numeric inputs: empty streams value to
//! zero and a zero discount rate falls back to the undiscounted sum rather
//! than dividing by zero.

/// Present value of an ordinary annuity
///
/// `PV = payment × (1 − (1 + rate)^(−n)) / rate`
///
/// Zero periods value to 0; a zero rate degenerates to `payment × n`.
/// Negative payments and rates are mathematically valid and pass through.
pub fn pv_annuity(payment: f64, rate: f64, n_periods: u32) -> f64 {
    if n_periods == 0 {
        return 0.0;
    }

    if rate == 0.0 {
        return payment * n_periods as f64;
    }

    let annuity_factor = (1.0 - (1.0 + rate).powi(-(n_periods as i32))) / rate;
    payment * annuity_factor
}

/// Present value of human capital (future labor income)
///
/// The discount rate follows CAPM: `risk_free_rate + income_beta × equity_premium`.
/// Bond-like income (beta 0) discounts at the risk-free rate; stock-like income
/// carries a risk premium and is worth less today.
pub fn pv_human_capital(
    annual_income: f64,
    years_working: u32,
    risk_free_rate: f64,
    income_beta: f64,
    equity_premium: f64,
) -> f64 {
    let discount_rate = risk_free_rate + income_beta * equity_premium;
    pv_annuity(annual_income, discount_rate, years_working)
}

/// Present value of lifetime expenses
///
/// Two annuities discounted at the risk-free rate: working-year expenses
/// starting now, and retirement expenses deferred by `years_working` periods.
pub fn pv_expenses(
    working_expenses: f64,
    retirement_expenses: f64,
    years_working: u32,
    years_retirement: u32,
    risk_free_rate: f64,
) -> f64 {
    let pv_working = pv_annuity(working_expenses, risk_free_rate, years_working);

    // Value at retirement start, then pulled back to today
    let pv_retirement_at_retirement =
        pv_annuity(retirement_expenses, risk_free_rate, years_retirement);

    let discount_factor = if risk_free_rate == 0.0 {
        1.0
    } else {
        (1.0 + risk_free_rate).powi(-(years_working as i32))
    };

    pv_working + pv_retirement_at_retirement * discount_factor
}

/// Total economic wealth: financial assets plus human capital net of the
/// expense liability
///
/// Can be negative when obligations exceed resources.
pub fn total_wealth(financial_assets: f64, pv_human_capital: f64, pv_expenses: f64) -> f64 {
    financial_assets + pv_human_capital - pv_expenses
}
