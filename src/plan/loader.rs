//! Load plans from plans.csv

use super::SipPlan;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching plans.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PlanID")]
    plan_id: u32,
    #[serde(rename = "InitialInvestment")]
    initial_investment: f64,
    #[serde(rename = "MonthlyContribution")]
    monthly_contribution: f64,
    #[serde(rename = "AnnualStepUpPct")]
    annual_step_up_pct: f64,
    #[serde(rename = "TotalYears")]
    total_years: u32,
    #[serde(rename = "AnnualReturnPct")]
    annual_return_pct: f64,
}

impl CsvRow {
    fn to_plan(self) -> Result<SipPlan, Box<dyn Error>> {
        let plan = SipPlan::with_id(
            self.plan_id,
            self.initial_investment,
            self.monthly_contribution,
            self.annual_step_up_pct,
            self.total_years,
            self.annual_return_pct,
        );

        // Batch inputs are user-supplied, so gate them here rather than
        // letting a bad row poison a whole projection run
        if let Err(e) = plan.validate() {
            return Err(format!("plan {}: {}", plan.plan_id, e).into());
        }

        Ok(plan)
    }
}

/// Load all plans from a CSV file
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<SipPlan>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut plans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let plan = row.to_plan()?;
        plans.push(plan);
    }

    log::debug!("loaded {} plans", plans.len());
    Ok(plans)
}

/// Load plans from any reader (e.g., string buffer, network stream)
pub fn load_plans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<SipPlan>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut plans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let plan = row.to_plan()?;
        plans.push(plan);
    }

    Ok(plans)
}

/// Load plans from the default plans.csv location
pub fn load_default_plans() -> Result<Vec<SipPlan>, Box<dyn Error>> {
    load_plans("plans.csv")
}
