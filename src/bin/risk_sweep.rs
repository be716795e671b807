//! Sweep the risk-aversion grid for one investor profile
//!
//! Outputs a per-gamma summary CSV for comparing glide paths across risk
//! preferences.

use lifecycle_engine::{GlidePathEngine, InvestorProfile, MarketAssumptions};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() {
    env_logger::init();

    let start = Instant::now();

    // Gamma grid: 1.0 to 10.0 in steps of 0.5
    let gammas: Vec<f64> = (2..=20).map(|g| g as f64 * 0.5).collect();
    let market = MarketAssumptions::default();
    let base_profile = InvestorProfile::default();

    println!("Sweeping {} risk-aversion levels...", gammas.len());

    let rows: Vec<_> = gammas
        .par_iter()
        .map(|&gamma| {
            let mut profile = base_profile.clone();
            profile.risk_aversion = gamma;

            let engine = GlidePathEngine::new(market);
            let result = engine.compute(&profile);
            (gamma, result.target_weights, result.summary())
        })
        .collect();

    let output_path = "risk_sweep_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Gamma,TargetStocks,TargetBonds,TargetCash,StartStockWeight,RetirementStockWeight,RetirementWealth,PeakWealth,PeakAge,FinalWealth"
    )
    .unwrap();

    for (gamma, target, summary) in &rows {
        writeln!(
            file,
            "{:.1},{:.6},{:.6},{:.6},{:.6},{:.6},{:.2},{:.2},{},{:.2}",
            gamma,
            target.stocks,
            target.bonds,
            target.cash,
            summary.starting_stock_weight,
            summary.retirement_stock_weight,
            summary.retirement_financial_wealth,
            summary.peak_financial_wealth,
            summary.peak_wealth_age,
            summary.final_financial_wealth,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    println!("\nSweep Summary:");
    for (gamma, target, summary) in rows.iter().step_by(4) {
        println!(
            "  gamma {:>4.1}: target stocks {:>6.1}%, wealth at retirement ${:.0}",
            gamma,
            target.stocks * 100.0,
            summary.retirement_financial_wealth,
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
