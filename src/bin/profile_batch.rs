//! Run glide paths for a whole CSV of investor profiles
//!
//! Usage: profile_batch [profiles.csv] [output.json]
//!
//! Emits one JSON summary record per profile.

use lifecycle_engine::profile::load_profiles;
use lifecycle_engine::{GlidePathEngine, GlidePathSummary, InvestorProfile, MarketAssumptions};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct BatchRecord {
    profile: InvestorProfile,
    summary: GlidePathSummary,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let input_path = args.get(1).map(String::as_str).unwrap_or("data/profiles.csv");
    let output_path = args.get(2).map(String::as_str).unwrap_or("profile_batch_output.json");

    let start = Instant::now();
    println!("Loading profiles from {}...", input_path);

    let profiles = load_profiles(input_path).map_err(|e| anyhow::anyhow!("{e}"))?;
    println!("Loaded {} profiles in {:?}", profiles.len(), start.elapsed());

    let market = MarketAssumptions::default();

    let records: Vec<BatchRecord> = profiles
        .par_iter()
        .map(|profile| {
            let engine = GlidePathEngine::new(market);
            let result = engine.compute(profile);
            BatchRecord {
                profile: profile.clone(),
                summary: result.summary(),
            }
        })
        .collect();

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, &records)?;

    println!("Output written to {}", output_path);
    println!("\nBatch Summary:");
    for record in records.iter().take(10) {
        println!(
            "  age {:>3}, gamma {:>4.1}: retirement wealth ${:.0}, final ${:.0}",
            record.profile.current_age,
            record.profile.risk_aversion,
            record.summary.retirement_financial_wealth,
            record.summary.final_financial_wealth,
        );
    }
    if records.len() > 10 {
        println!("  ... ({} more)", records.len() - 10);
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
