//! Run projections for every scenario in a CSV file
//!
//! Outputs one row per scenario with the final-year balances and expected profit.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use savings_projection::scenario::{load_scenarios, InputBounds};
use savings_projection::{ProjectionEngine, ScenarioParams};

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project every scenario in a CSV file")]
struct Args {
    /// Input CSV: starting_amount,horizon_years,monthly_contribution[,profile,variant]
    input: PathBuf,

    /// Output CSV
    #[arg(short, long, default_value = "batch_projection_output.csv")]
    output: PathBuf,

    /// Skip the slider bounds check, keeping only the basic sanity checks
    #[arg(long)]
    unbounded: bool,
}

#[derive(Debug, Serialize)]
struct BatchRow {
    scenario: usize,
    profile: String,
    variant: String,
    starting_amount: f64,
    horizon_years: u32,
    monthly_contribution: f64,
    total_invested: f64,
    worst_case_balance: i64,
    expected_balance: i64,
    best_case_balance: i64,
    expected_profit: f64,
}

fn project_scenario(
    engine: &ProjectionEngine,
    index: usize,
    params: &ScenarioParams,
) -> Option<BatchRow> {
    let summary = engine.project(&params.input()).summary()?;
    Some(BatchRow {
        scenario: index + 1,
        profile: params.profile.to_string(),
        variant: params.variant.to_string(),
        starting_amount: params.starting_amount,
        horizon_years: params.horizon_years,
        monthly_contribution: params.monthly_contribution,
        total_invested: summary.total_invested,
        worst_case_balance: summary.worst_case_balance,
        expected_balance: summary.expected_balance,
        best_case_balance: summary.best_case_balance,
        expected_profit: summary.expected_profit,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("Failed to load scenarios from {}", args.input.display()))?;

    let bounds = InputBounds::default();
    let valid: Vec<(usize, &ScenarioParams)> = scenarios
        .iter()
        .enumerate()
        .filter(|(idx, params)| {
            let checked = if args.unbounded {
                params.validate()
            } else {
                params.validate_within(&bounds)
            };
            match checked {
                Ok(()) => true,
                Err(e) => {
                    warn!("Skipping scenario {}: {}", idx + 1, e);
                    false
                }
            }
        })
        .collect();

    let engine = ProjectionEngine::default();
    let rows: Vec<BatchRow> = valid
        .par_iter()
        .filter_map(|(idx, params)| project_scenario(&engine, *idx, params))
        .collect();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(
        "Projected {} of {} scenarios in {:?}",
        rows.len(),
        scenarios.len(),
        start.elapsed()
    );
    println!("Output written to {}", args.output.display());
    Ok(())
}
