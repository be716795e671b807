//! Scenario runner for batch glide path runs
//!
//! Holds market assumptions once, then allows running many glide paths with
//! different profiles or risk-aversion levels without rebuilding the engine.

use crate::assumptions::MarketAssumptions;
use crate::glide_path::{GlidePathEngine, GlidePathResult};
use crate::profile::InvestorProfile;

/// Pre-configured runner for batch glide path computations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// for gamma in [1.0, 2.0, 5.0] {
///     let mut profile = InvestorProfile::default();
///     profile.risk_aversion = gamma;
///     let result = runner.run(&profile);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    market: MarketAssumptions,
}

impl ScenarioRunner {
    /// Create runner with default market assumptions
    pub fn new() -> Self {
        Self {
            market: MarketAssumptions::default(),
        }
    }

    /// Create runner with custom market assumptions
    pub fn with_market(market: MarketAssumptions) -> Self {
        Self { market }
    }

    /// Run a single glide path
    pub fn run(&self, profile: &InvestorProfile) -> GlidePathResult {
        GlidePathEngine::new(self.market).compute(profile)
    }

    /// Run glide paths for multiple profiles with the same assumptions
    pub fn run_batch(&self, profiles: &[InvestorProfile]) -> Vec<GlidePathResult> {
        let engine = GlidePathEngine::new(self.market);
        profiles.iter().map(|p| engine.compute(p)).collect()
    }

    /// Run one profile across a grid of risk-aversion levels
    pub fn run_risk_grid(
        &self,
        profile: &InvestorProfile,
        risk_aversions: &[f64],
    ) -> Vec<GlidePathResult> {
        let engine = GlidePathEngine::new(self.market);
        risk_aversions
            .iter()
            .map(|&gamma| {
                let mut scenario_profile = profile.clone();
                scenario_profile.risk_aversion = gamma;
                engine.compute(&scenario_profile)
            })
            .collect()
    }

    /// Get reference to market assumptions for inspection/modification
    pub fn market(&self) -> &MarketAssumptions {
        &self.market
    }

    /// Get mutable reference to market assumptions for customization
    pub fn market_mut(&mut self) -> &mut MarketAssumptions {
        &mut self.market
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_grid_orders_targets() {
        let runner = ScenarioRunner::new();
        let profile = InvestorProfile::default();

        let results = runner.run_risk_grid(&profile, &[1.0, 2.0, 5.0]);
        assert_eq!(results.len(), 3);

        // Higher gamma means a lower total-wealth stock target
        assert!(results[0].target_weights.stocks > results[1].target_weights.stocks);
        assert!(results[1].target_weights.stocks > results[2].target_weights.stocks);
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::new();
        let profiles = vec![
            InvestorProfile::default(),
            InvestorProfile {
                current_age: 50,
                financial_assets: 1_000_000.0,
                ..Default::default()
            },
        ];

        let batch = runner.run_batch(&profiles);
        assert_eq!(batch.len(), 2);

        let single = runner.run(&profiles[1]);
        assert_eq!(
            batch[1].snapshots.len(),
            single.snapshots.len()
        );
        assert_eq!(
            batch[1].snapshots[0].financial_wealth,
            single.snapshots[0].financial_wealth
        );
    }

    #[test]
    fn test_custom_market_flows_through() {
        let mut runner = ScenarioRunner::new();
        runner.market_mut().risk_free_rate = 0.0;

        let result = runner.run(&InvestorProfile::default());
        // At a zero rate, human capital is the undiscounted income sum
        let first = &result.snapshots[0];
        assert!((first.pv_human_capital - 40.0 * 150_000.0).abs() < 1e-6);
    }
}
