//! Savings Projection CLI
//!
//! Command-line interface for projecting habit savings

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use savings_projection::investment::{
    checked_future_value_with_contributions, future_value, goal_achievement_date, interest_earned,
    years_to_goal, GoalHorizon,
};
use savings_projection::savings::load_habits;
use savings_projection::{InvestmentSettings, SavingsInputs, ScenarioRunner};

#[derive(Parser)]
#[command(
    name = "savings-projection",
    about = "Project how money saved by quitting habits grows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where current savings and the daily rate come from
#[derive(Args)]
struct InputArgs {
    /// Habit CSV export (Name,DailyCost,Saved,Relapsed,Active). Overrides --savings/--daily.
    #[arg(long)]
    habits: Option<PathBuf>,

    /// Current accumulated savings.
    #[arg(long, default_value_t = 0.0)]
    savings: f64,

    /// Amount saved per day.
    #[arg(long, default_value_t = 0.0)]
    daily: f64,

    /// Settings JSON file. Defaults to built-in settings.
    #[arg(long)]
    settings: Option<PathBuf>,
}

impl InputArgs {
    fn load(&self) -> Result<(SavingsInputs, InvestmentSettings)> {
        let inputs = match &self.habits {
            Some(path) => {
                let habits = load_habits(path)
                    .with_context(|| format!("loading habits from {}", path.display()))?;
                SavingsInputs::from_habits(&habits)
            }
            None => SavingsInputs::new(self.savings, self.daily),
        };

        let settings = match &self.settings {
            Some(path) => InvestmentSettings::from_json_path(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => InvestmentSettings::default(),
        };

        Ok((inputs, settings))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Grow a lump sum, optionally with regular contributions.
    FutureValue {
        #[arg(long)]
        principal: f64,

        /// Annual rate as a percentage (10 = 10%).
        #[arg(long)]
        rate: f64,

        #[arg(long)]
        years: f64,

        /// Compounding events per year.
        #[arg(long, default_value_t = 12)]
        frequency: u32,

        /// Amount added per contribution period.
        #[arg(long, default_value_t = 0.0)]
        contribution: f64,

        /// Contribution events per year.
        #[arg(long, default_value_t = 365)]
        contribution_frequency: u32,
    },
    /// Print a yearly projection series.
    Project {
        #[command(flatten)]
        inputs: InputArgs,

        /// Annual rate override.
        #[arg(long)]
        rate: Option<f64>,

        /// Horizon override, in whole years.
        #[arg(long)]
        years: Option<u32>,

        /// Emit JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Estimate when a savings goal is reached.
    Goal {
        #[command(flatten)]
        inputs: InputArgs,

        /// Goal amount. Defaults to the goal in settings.
        #[arg(long)]
        amount: Option<f64>,

        /// Annual rate override.
        #[arg(long)]
        rate: Option<f64>,

        /// Count from this date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        from: Option<NaiveDate>,
    },
    /// Compare final values across several annual rates.
    Compare {
        #[command(flatten)]
        inputs: InputArgs,

        /// Annual rates to compare.
        #[arg(long, value_delimiter = ',', default_values_t = vec![4.0, 7.0, 10.0])]
        rates: Vec<f64>,

        /// Emit JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Lines describing when a goal is reached
fn goal_report(goal: f64, horizon: GoalHorizon, date: Option<NaiveDate>) -> Vec<String> {
    if !horizon.is_reachable() {
        return vec![format!("Goal ${:.2} is unreachable without daily savings", goal)];
    }

    match horizon.within_horizon() {
        None => vec![format!("Goal ${:.2} is not reached within the next century", goal)],
        Some(years) => {
            let mut lines = vec![format!("Goal ${:.2} reached in {:.2} years", goal, years)];
            if let Some(date) = date {
                lines.push(format!("Expected on {}", date));
            }
            lines
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::FutureValue {
            principal,
            rate,
            years,
            frequency,
            contribution,
            contribution_frequency,
        } => {
            let total = checked_future_value_with_contributions(
                principal,
                contribution,
                contribution_frequency,
                rate,
                frequency,
                years,
            )?;

            println!("Principal:           ${:.2}", principal);
            println!("Lump sum value:      ${:.2}", future_value(principal, rate, frequency, years));
            println!("Lump sum interest:   ${:.2}", interest_earned(principal, rate, frequency, years));
            println!("Total with deposits: ${:.2}", total);
        }
        Commands::Project { inputs, rate, years, json } => {
            let (savings, mut settings) = inputs.load()?;
            if let Some(years) = years {
                settings.projection_years = years;
            }
            let rate = rate.unwrap_or(settings.annual_rate);

            let result = ScenarioRunner::new(savings, settings).run(rate)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!(
                "Savings ${:.2}, ${:.2}/day at {}%",
                savings.current_savings, savings.daily_savings_rate, rate
            );
            println!("{:>5} {:>16} {:>16} {:>16}", "Year", "Contributions", "Value", "Interest");
            println!("{}", "-".repeat(56));
            for point in &result.points {
                println!(
                    "{:>5} {:>16.2} {:>16.2} {:>16.2}",
                    point.year, point.contributions, point.value_with_interest, point.interest_earned
                );
            }
            println!(
                "\nInterest share of final value: {:.1}%",
                result.summary.interest_share * 100.0
            );
        }
        Commands::Goal { inputs, amount, rate, from } => {
            let (savings, settings) = inputs.load()?;
            let goal = amount
                .or(settings.goal_amount)
                .context("no goal amount given and none in settings")?;
            let rate = rate.unwrap_or(settings.annual_rate);
            let from = from.unwrap_or_else(|| Local::now().date_naive());

            let horizon = years_to_goal(savings.current_savings, savings.daily_savings_rate, goal, rate);
            let date = goal_achievement_date(
                savings.current_savings,
                savings.daily_savings_rate,
                goal,
                rate,
                from,
            );
            for line in goal_report(goal, horizon, date) {
                println!("{}", line);
            }
        }
        Commands::Compare { inputs, rates, json } => {
            let (savings, settings) = inputs.load()?;
            let results = ScenarioRunner::new(savings, settings).run_rates(&rates)?;

            if json {
                let summaries: Vec<_> = results
                    .iter()
                    .map(|r| serde_json::json!({ "annual_rate": r.annual_rate, "summary": r.summary }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&summaries)?);
                return Ok(());
            }

            println!("{:>7} {:>16} {:>16} {:>9}", "Rate", "Final value", "Interest", "Share");
            println!("{}", "-".repeat(51));
            for result in &results {
                println!(
                    "{:>6}% {:>16.2} {:>16.2} {:>8.1}%",
                    result.annual_rate,
                    result.summary.final_value,
                    result.summary.total_interest,
                    result.summary.interest_share * 100.0
                );
            }
        }
    }

    Ok(())
}
