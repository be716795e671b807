//! Lifecycle Engine CLI
//!
//! Computes a glide path for one investor and writes it as CSV (and
//! optionally JSON) for downstream charting.

use anyhow::Result;
use clap::Parser;
use lifecycle_engine::{GlidePathEngine, InvestorProfile, MarketAssumptions};

#[derive(Parser, Debug)]
#[command(name = "lifecycle_engine", version, about = "Lifecycle investing glide path engine")]
struct Cli {
    /// Current age
    #[arg(long, default_value_t = 25)]
    age: u8,

    /// Target retirement age
    #[arg(long, default_value_t = 65)]
    retirement_age: u8,

    /// Planning life expectancy
    #[arg(long, default_value_t = 85)]
    life_expectancy: u8,

    /// Annual labor income
    #[arg(long, default_value_t = 150_000.0)]
    income: f64,

    /// Annual expenses while working
    #[arg(long, default_value_t = 80_000.0)]
    working_expenses: f64,

    /// Annual expenses in retirement
    #[arg(long, default_value_t = 60_000.0)]
    retirement_expenses: f64,

    /// Current investable financial assets
    #[arg(long, default_value_t = 50_000.0)]
    assets: f64,

    /// Risk aversion coefficient (gamma, suggested range 1-10)
    #[arg(long, default_value_t = 2.0)]
    risk_aversion: f64,

    /// Income beta: 0 for bond-like income, 0.4 for stock-like
    #[arg(long, default_value_t = 0.0)]
    income_beta: f64,

    /// Override the real risk-free rate
    #[arg(long)]
    risk_free_rate: Option<f64>,

    /// Override the stock arithmetic excess return
    #[arg(long)]
    stock_excess_return: Option<f64>,

    /// Override the bond arithmetic excess return
    #[arg(long)]
    bond_excess_return: Option<f64>,

    /// Override the annual stock volatility
    #[arg(long)]
    stock_volatility: Option<f64>,

    /// Override the annual bond volatility
    #[arg(long)]
    bond_volatility: Option<f64>,

    /// Override the LTPZ benchmark duration
    #[arg(long)]
    ltpz_duration: Option<f64>,

    /// CSV output path
    #[arg(long, default_value = "glide_path_output.csv")]
    output: String,

    /// Also print the full path as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn profile(&self) -> InvestorProfile {
        InvestorProfile {
            current_age: self.age,
            retirement_age: self.retirement_age,
            life_expectancy: self.life_expectancy,
            annual_income: self.income,
            working_expenses: self.working_expenses,
            retirement_expenses: self.retirement_expenses,
            financial_assets: self.assets,
            risk_aversion: self.risk_aversion,
            income_beta: self.income_beta,
        }
    }

    fn market(&self) -> MarketAssumptions {
        let mut market = MarketAssumptions::default();
        if let Some(r) = self.risk_free_rate {
            market.risk_free_rate = r;
        }
        if let Some(r) = self.stock_excess_return {
            market.stock_excess_return = r;
        }
        if let Some(r) = self.bond_excess_return {
            market.bond_excess_return = r;
        }
        if let Some(v) = self.stock_volatility {
            market.stock_volatility = v;
        }
        if let Some(v) = self.bond_volatility {
            market.bond_volatility = v;
        }
        if let Some(d) = self.ltpz_duration {
            market.ltpz_duration = d;
        }
        market
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let profile = cli.profile();
    profile.validate()?;

    let market = cli.market();
    log::info!(
        "running glide path: ages {}..={}, gamma={}",
        profile.current_age,
        profile.life_expectancy,
        profile.risk_aversion
    );

    let engine = GlidePathEngine::new(market);
    let result = engine.compute(&profile);

    println!("Lifecycle Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("========================\n");

    let target = result.target_weights;
    println!("Total-wealth targets (gamma = {}):", profile.risk_aversion);
    println!(
        "  stocks {:.1}%  bonds {:.1}%  cash {:.1}%\n",
        target.stocks * 100.0,
        target.bonds * 100.0,
        target.cash * 100.0
    );

    println!(
        "{:>4} {:>6} {:>16} {:>16} {:>16} {:>16} {:>8} {:>8} {:>8}",
        "Age", "ToRet", "HumanCapital", "PV Expenses", "TotalWealth", "FinWealth", "Stock", "Bond", "Cash"
    );
    println!("{}", "-".repeat(108));

    for snapshot in result.snapshots.iter().take(15) {
        println!(
            "{:>4} {:>6} {:>16.0} {:>16.0} {:>16.0} {:>16.0} {:>8.4} {:>8.4} {:>8.4}",
            snapshot.age,
            snapshot.years_to_retirement,
            snapshot.pv_human_capital,
            snapshot.pv_expenses,
            snapshot.total_wealth,
            snapshot.financial_wealth,
            snapshot.stock_weight,
            snapshot.bond_weight,
            snapshot.cash_weight,
        );
    }
    if result.snapshots.len() > 15 {
        println!("... ({} more years)", result.snapshots.len() - 15);
    }

    // Full path as CSV for charting
    let mut writer = csv::Writer::from_path(&cli.output)?;
    for snapshot in &result.snapshots {
        writer.serialize(snapshot)?;
    }
    writer.flush()?;
    println!("\nFull results written to: {}", cli.output);

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Years Simulated: {}", summary.total_years);
    println!("  Starting Stock Weight: {:.1}%", summary.starting_stock_weight * 100.0);
    println!(
        "  Wealth at Retirement (age {}): ${:.0}",
        summary.retirement_age, summary.retirement_financial_wealth
    );
    println!(
        "  Peak Wealth: ${:.0} at age {}",
        summary.peak_financial_wealth, summary.peak_wealth_age
    );
    println!("  Final Wealth: ${:.0}", summary.final_financial_wealth);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result.snapshots)?);
    }

    Ok(())
}
