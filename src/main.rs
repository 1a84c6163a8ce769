//! SIP Engine CLI
//!
//! Command-line interface for projecting a single plan

use clap::Parser;
use sip_engine::plan::SipPlan;
use sip_engine::projection::{ProjectionConfig, ProjectionEngine};
use std::fs::File;
use std::io::Write;

/// Project a step-up SIP growth schedule
#[derive(Parser, Debug)]
#[command(name = "sip_engine", version)]
struct Args {
    /// Lumpsum invested at time zero
    #[arg(long, default_value_t = 100_000.0)]
    initial_investment: f64,

    /// Monthly contribution during year 1
    #[arg(long, default_value_t = 10_000.0)]
    monthly_contribution: f64,

    /// Percentage growth of the contribution each year
    #[arg(long, default_value_t = 10.0)]
    annual_step_up_pct: f64,

    /// Years to project
    #[arg(long, default_value_t = 10)]
    total_years: u32,

    /// Nominal annual return percentage, compounded monthly
    #[arg(long, default_value_t = 12.0)]
    annual_return_pct: f64,

    /// Also emit month-level rows
    #[arg(long)]
    monthly: bool,

    /// Path for the yearly schedule CSV
    #[arg(long, default_value = "sip_schedule.csv")]
    csv: String,

    /// Print the full result as JSON and skip the table and CSV output
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let plan = SipPlan::new(
        args.initial_investment,
        args.monthly_contribution,
        args.annual_step_up_pct,
        args.total_years,
        args.annual_return_pct,
    );
    plan.validate()?;

    let config = ProjectionConfig {
        include_monthly: args.monthly,
    };
    let engine = ProjectionEngine::new(config);
    let result = engine.project_plan(&plan);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("SIP Engine v0.1.0");
    println!("=================\n");

    println!("Plan inputs:");
    println!("  Initial Investment: {:.2}", plan.initial_investment);
    println!("  Monthly Contribution: {:.2}", plan.monthly_contribution);
    println!("  Annual Step-Up: {:.2}%", plan.annual_step_up_pct);
    println!("  Total Years: {}", plan.total_years);
    println!("  Annual Return: {:.2}%", plan.annual_return_pct);
    println!();

    // Print yearly schedule
    println!("Projection Results ({} years):", result.years.len());
    println!(
        "{:>4} {:>14} {:>16} {:>16} {:>16} {:>10}",
        "Year", "Contribution", "Invested", "Value", "Est Return", "Annualized"
    );
    println!("{}", "-".repeat(82));

    for row in &result.years {
        println!(
            "{:>4} {:>14.0} {:>16.0} {:>16.0} {:>16.0} {:>9.2}%",
            row.year,
            row.monthly_contribution,
            row.cumulative_invested,
            row.cumulative_value,
            row.estimated_return,
            row.annualized_return_pct,
        );
    }

    // Write full schedule to CSV
    let mut file = File::create(&args.csv)?;
    writeln!(
        file,
        "Year,MonthlyContribution,CumulativeInvested,CumulativeValue,EstimatedReturn,AnnualizedReturnPct"
    )?;
    for row in &result.years {
        writeln!(
            file,
            "{},{:.0},{:.0},{:.0},{:.0},{:.2}",
            row.year,
            row.monthly_contribution,
            row.cumulative_invested,
            row.cumulative_value,
            row.estimated_return,
            row.annualized_return_pct,
        )?;
    }
    println!("\nFull schedule written to: {}", args.csv);

    if args.monthly {
        let monthly_path = "sip_schedule_monthly.csv";
        let mut file = File::create(monthly_path)?;
        writeln!(
            file,
            "Month,Year,MonthInYear,MonthlyContribution,CumulativeInvested,CumulativeValue"
        )?;
        for row in &result.months {
            writeln!(
                file,
                "{},{},{},{:.0},{:.0},{:.0}",
                row.month,
                row.year,
                row.month_in_year,
                row.monthly_contribution,
                row.cumulative_invested,
                row.cumulative_value,
            )?;
        }
        println!("Monthly detail written to: {}", monthly_path);
    }

    // Print summary
    let summary = result.summary();
    println!("\nSummary:");
    println!("  Years Projected: {}", summary.years_projected);
    println!("  Total Invested: {:.0}", summary.total_invested);
    println!("  Final Value: {:.0}", summary.final_value);
    println!("  Estimated Return: {:.0}", summary.estimated_return);
    println!("  Annualized Return: {:.2}%", summary.annualized_return_pct);

    // Print key milestone years for quick comparison between runs
    println!("\nKey Milestones:");
    let milestones = [1, 5, 10, 15, 20, 25, 30];
    for &y in &milestones {
        if let Some(row) = result.years.get(y - 1) {
            println!(
                "  Year {:>2}: Invested={:.0} Value={:.0} Annualized={:.2}%",
                row.year, row.cumulative_invested, row.cumulative_value, row.annualized_return_pct,
            );
        }
    }

    Ok(())
}
