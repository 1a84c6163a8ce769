//! Run projections for every plan in plans.csv
//!
//! Outputs yearly aggregated totals across the whole plan book

use chrono::Utc;
use rayon::prelude::*;
use sip_engine::plan::load_plans;
use sip_engine::projection::{project, ProjectionResult};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Aggregated yearly results across all plans
#[derive(Debug, Clone, Default)]
struct AggregatedRow {
    year: u32,
    plans_active: u32,
    total_contribution: f64,
    total_invested: f64,
    total_value: f64,
    total_return: f64,
}

fn main() {
    env_logger::init();

    let start = Instant::now();
    let input_path = std::env::args().nth(1).unwrap_or_else(|| "plans.csv".to_string());

    println!("SIP batch run {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Loading plans from {}...", input_path);

    let plans = load_plans(&input_path).expect("Failed to load plans");
    println!("Loaded {} plans in {:?}", plans.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();

    // Run projections in parallel
    let results: Vec<ProjectionResult> = plans.par_iter().map(|plan| project(plan)).collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    // Aggregate results by year; plans with shorter horizons simply
    // stop contributing to later rows
    println!("Aggregating results...");
    let horizon = results.iter().map(|r| r.years.len()).max().unwrap_or(0);
    let mut aggregated: Vec<AggregatedRow> = (1..=horizon as u32)
        .map(|y| AggregatedRow { year: y, ..Default::default() })
        .collect();

    for result in &results {
        for row in &result.years {
            let idx = (row.year - 1) as usize;
            if idx < aggregated.len() {
                let agg = &mut aggregated[idx];
                agg.plans_active += 1;
                agg.total_contribution += row.monthly_contribution;
                agg.total_invested += row.cumulative_invested;
                agg.total_value += row.cumulative_value;
                agg.total_return += row.estimated_return;
            }
        }
    }

    // Write output
    let output_path = "sip_batch_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "Year,PlansActive,MonthlyContribution,CumulativeInvested,CumulativeValue,EstimatedReturn").unwrap();

    for row in &aggregated {
        writeln!(
            file,
            "{},{},{:.0},{:.0},{:.0},{:.0}",
            row.year,
            row.plans_active,
            row.total_contribution,
            row.total_invested,
            row.total_value,
            row.total_return,
        ).unwrap();
    }

    println!("Output written to {}", output_path);

    // Print summary stats
    println!("\nBook Summary:");
    let milestones = [1, 5, 10, 15, 20];
    for &y in &milestones {
        if let Some(row) = aggregated.get(y - 1) {
            println!(
                "  Year {:>2}: Plans={:>3} Invested={:.0} Value={:.0}",
                row.year, row.plans_active, row.total_invested, row.total_value,
            );
        }
    }
    if let Some(last) = aggregated.last() {
        println!(
            "  Final  : Plans={:>3} Invested={:.0} Value={:.0} Return={:.0}",
            last.plans_active, last.total_invested, last.total_value, last.total_return,
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
