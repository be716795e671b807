//! Macaulay duration of lifecycle cash-flow streams
//!
//! Duration is the PV-weighted average time to receive a stream's payments
//! and drives the bond/cash split of non-tradable wealth.

use super::present_value::pv_annuity;

/// Macaulay duration of an n-period ordinary annuity
///
/// `D = (1 + r)/r − n/((1 + r)^n − 1)`
///
/// Zero periods have duration 0. At a zero rate the formula degenerates to
/// `(n + 1)/2`, the simple average payment time.
pub fn annuity_duration(rate: f64, n_periods: u32) -> f64 {
    if n_periods == 0 {
        return 0.0;
    }

    let n = n_periods as f64;

    if rate == 0.0 {
        return (n + 1.0) / 2.0;
    }

    (1.0 + rate) / rate - n / ((1.0 + rate).powi(n_periods as i32) - 1.0)
}

/// Duration of human capital, treated as an annuity of future income
pub fn human_capital_duration(years_working: u32, risk_free_rate: f64) -> f64 {
    annuity_duration(risk_free_rate, years_working)
}

/// PV-weighted duration of lifetime expenses
///
/// Working-year expenses form an annuity starting now; retirement expenses
/// form a deferred annuity whose duration, measured from today, is the
/// deferral period plus the annuity's own duration. Returns 0 when the
/// combined present value is 0.
pub fn expense_duration(
    years_working: u32,
    years_retirement: u32,
    working_expenses: f64,
    retirement_expenses: f64,
    risk_free_rate: f64,
) -> f64 {
    if years_working == 0 && years_retirement == 0 {
        return 0.0;
    }

    let pv_working = pv_annuity(working_expenses, risk_free_rate, years_working);

    let pv_retirement_at_retirement =
        pv_annuity(retirement_expenses, risk_free_rate, years_retirement);
    let discount_factor = if risk_free_rate == 0.0 {
        1.0
    } else {
        (1.0 + risk_free_rate).powi(-(years_working as i32))
    };
    let pv_retirement_today = pv_retirement_at_retirement * discount_factor;

    let total_pv = pv_working + pv_retirement_today;
    if total_pv == 0.0 {
        return 0.0;
    }

    let duration_working = annuity_duration(risk_free_rate, years_working);

    // Deferred annuity: duration from today = deferral + annuity duration
    let duration_retirement =
        years_working as f64 + annuity_duration(risk_free_rate, years_retirement);

    (pv_working * duration_working + pv_retirement_today * duration_retirement) / total_pv
}
