//! Investor profile data structures and input validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Income beta for stable, bond-like income (teacher, consultant, government)
pub const BOND_LIKE_INCOME_BETA: f64 = 0.0;

/// Income beta for volatile, stock-like income (investment banker, trader)
pub const STOCK_LIKE_INCOME_BETA: f64 = 0.4;

/// Validation failure for an investor profile
///
/// The core math is total over finite numeric inputs; these checks belong to
/// the input boundary, not to the calculation pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("retirement age {retirement_age} must be greater than current age {current_age}")]
    RetirementNotAfterCurrentAge {
        current_age: u8,
        retirement_age: u8,
    },

    #[error("life expectancy {life_expectancy} must be greater than retirement age {retirement_age}")]
    LifeExpectancyNotAfterRetirement {
        retirement_age: u8,
        life_expectancy: u8,
    },

    #[error("risk aversion must be positive, got {0}")]
    NonPositiveRiskAversion(f64),

    #[error("income beta must lie in [0, 1], got {0}")]
    IncomeBetaOutOfRange(f64),

    #[error("{field} must be a non-negative finite amount, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },
}

/// One investor's inputs to the glide path engine
///
/// Ages are integer years. Currency amounts are in real (today's) dollars and
/// assumed constant in real terms. `income_beta` is the fraction of labor
/// income risk that correlates with equities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub current_age: u8,
    pub retirement_age: u8,
    pub life_expectancy: u8,

    /// Annual labor income during working years
    pub annual_income: f64,

    /// Annual expenses while working
    pub working_expenses: f64,

    /// Annual expenses in retirement
    pub retirement_expenses: f64,

    /// Current investable financial assets
    pub financial_assets: f64,

    /// Coefficient of relative risk aversion (gamma)
    pub risk_aversion: f64,

    /// Sensitivity of labor income to equity markets
    pub income_beta: f64,
}

impl Default for InvestorProfile {
    fn default() -> Self {
        Self {
            current_age: 25,
            retirement_age: 65,
            life_expectancy: 85,
            annual_income: 150_000.0,
            working_expenses: 80_000.0,
            retirement_expenses: 60_000.0,
            financial_assets: 50_000.0,
            risk_aversion: 2.0,
            income_beta: BOND_LIKE_INCOME_BETA,
        }
    }
}

impl InvestorProfile {
    /// Check the preconditions the engine relies on
    ///
    /// The engine itself never panics on out-of-range input, but its output
    /// is only meaningful when `current_age < retirement_age < life_expectancy`.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.retirement_age <= self.current_age {
            return Err(ProfileError::RetirementNotAfterCurrentAge {
                current_age: self.current_age,
                retirement_age: self.retirement_age,
            });
        }
        if self.life_expectancy <= self.retirement_age {
            return Err(ProfileError::LifeExpectancyNotAfterRetirement {
                retirement_age: self.retirement_age,
                life_expectancy: self.life_expectancy,
            });
        }
        if !(self.risk_aversion > 0.0) {
            return Err(ProfileError::NonPositiveRiskAversion(self.risk_aversion));
        }
        if !(0.0..=1.0).contains(&self.income_beta) {
            return Err(ProfileError::IncomeBetaOutOfRange(self.income_beta));
        }

        for (field, value) in [
            ("annual_income", self.annual_income),
            ("working_expenses", self.working_expenses),
            ("retirement_expenses", self.retirement_expenses),
            ("financial_assets", self.financial_assets),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::InvalidAmount { field, value });
            }
        }

        Ok(())
    }

    /// Years of labor income remaining at `age`
    pub fn years_working_at(&self, age: u8) -> u32 {
        u32::from(self.retirement_age.saturating_sub(age))
    }

    /// Years of retirement remaining at `age`
    pub fn years_retired_at(&self, age: u8) -> u32 {
        u32::from(
            self.life_expectancy
                .saturating_sub(age.max(self.retirement_age)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(InvestorProfile::default().validate().is_ok());
    }

    #[test]
    fn test_age_ordering_enforced() {
        let profile = InvestorProfile {
            current_age: 65,
            retirement_age: 65,
            ..Default::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::RetirementNotAfterCurrentAge { .. })
        ));

        let profile = InvestorProfile {
            retirement_age: 65,
            life_expectancy: 60,
            ..Default::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::LifeExpectancyNotAfterRetirement { .. })
        ));
    }

    #[test]
    fn test_risk_aversion_must_be_positive() {
        let profile = InvestorProfile {
            risk_aversion: 0.0,
            ..Default::default()
        };
        assert_eq!(
            profile.validate(),
            Err(ProfileError::NonPositiveRiskAversion(0.0))
        );
    }

    #[test]
    fn test_income_beta_range() {
        let profile = InvestorProfile {
            income_beta: 1.5,
            ..Default::default()
        };
        assert_eq!(
            profile.validate(),
            Err(ProfileError::IncomeBetaOutOfRange(1.5))
        );

        let profile = InvestorProfile {
            income_beta: STOCK_LIKE_INCOME_BETA,
            ..Default::default()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let profile = InvestorProfile {
            financial_assets: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::InvalidAmount {
                field: "financial_assets",
                ..
            })
        ));
    }

    #[test]
    fn test_horizon_helpers() {
        let profile = InvestorProfile::default();

        assert_eq!(profile.years_working_at(25), 40);
        assert_eq!(profile.years_working_at(65), 0);
        assert_eq!(profile.years_working_at(70), 0);

        assert_eq!(profile.years_retired_at(25), 20);
        assert_eq!(profile.years_retired_at(65), 20);
        assert_eq!(profile.years_retired_at(80), 5);
        assert_eq!(profile.years_retired_at(85), 0);
    }
}
