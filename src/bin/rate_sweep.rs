//! Project one set of savings across a range of annual rates
//!
//! Writes every data point of every scenario to rate_sweep_output.csv
//! Usage: rate_sweep [habits.csv]

use anyhow::{Context, Result};
use savings_projection::savings::load_habits;
use savings_projection::{InvestmentSettings, SavingsInputs, ScenarioRunner};
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Serialize)]
struct SweepRow {
    annual_rate: f64,
    year: u32,
    contributions: f64,
    value_with_interest: f64,
    interest_earned: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();

    let inputs = match env::args().nth(1) {
        Some(path) => {
            let habits = load_habits(&path).with_context(|| format!("loading {}", path))?;
            println!("Loaded {} habits from {}", habits.len(), path);
            SavingsInputs::from_habits(&habits)
        }
        None => SavingsInputs::new(1_000.0, 10.0),
    };

    let settings = InvestmentSettings {
        projection_years: 40,
        data_points: 40,
        ..InvestmentSettings::default()
    };

    // 1% to 15% in half-point steps
    let rates: Vec<f64> = (2..=30).map(|half_points| half_points as f64 / 2.0).collect();

    let runner = ScenarioRunner::new(inputs, settings);
    let results = runner.run_rates(&rates)?;
    println!("Projected {} rates in {:?}", results.len(), start.elapsed());

    let output_path = "rate_sweep_output.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {}", output_path))?;

    for result in &results {
        for point in &result.points {
            writer.serialize(SweepRow {
                annual_rate: result.annual_rate,
                year: point.year,
                contributions: point.contributions,
                value_with_interest: point.value_with_interest,
                interest_earned: point.interest_earned,
            })?;
        }
    }
    writer.flush()?;

    println!("Output written to {}", output_path);

    println!("\nFinal values after {} years:", runner.settings().projection_years);
    for result in results.iter().step_by(4) {
        println!("  {:>5.1}%: ${:.0}", result.annual_rate, result.summary.final_value);
    }

    Ok(())
}
