//! Load investor profiles from CSV for batch runs

use super::InvestorProfile;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the profiles file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "CurrentAge")]
    current_age: u8,
    #[serde(rename = "RetirementAge")]
    retirement_age: u8,
    #[serde(rename = "LifeExpectancy")]
    life_expectancy: u8,
    #[serde(rename = "AnnualIncome")]
    annual_income: f64,
    #[serde(rename = "WorkingExpenses")]
    working_expenses: f64,
    #[serde(rename = "RetirementExpenses")]
    retirement_expenses: f64,
    #[serde(rename = "FinancialAssets")]
    financial_assets: f64,
    #[serde(rename = "RiskAversion")]
    risk_aversion: f64,
    #[serde(rename = "IncomeBeta")]
    income_beta: f64,
}

impl CsvRow {
    fn to_profile(self) -> Result<InvestorProfile, Box<dyn Error>> {
        let profile = InvestorProfile {
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            life_expectancy: self.life_expectancy,
            annual_income: self.annual_income,
            working_expenses: self.working_expenses,
            retirement_expenses: self.retirement_expenses,
            financial_assets: self.financial_assets,
            risk_aversion: self.risk_aversion,
            income_beta: self.income_beta,
        };
        profile.validate()?;
        Ok(profile)
    }
}

/// Load all profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<InvestorProfile>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut profiles = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    Ok(profiles)
}

/// Load profiles from any reader (e.g., string buffer, network stream)
pub fn load_profiles_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<InvestorProfile>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    Ok(profiles)
}
