//! Scenario runner for comparing projections across return rates
//!
//! Holds one set of savings inputs and settings, then projects them under
//! any number of annual rates. Rates are independent, so batches run in
//! parallel.

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::investment::{checked_generate_projection, years_to_goal, GoalHorizon, ProjectionDataPoint, ProjectionSummary};
use crate::savings::SavingsInputs;
use crate::settings::InvestmentSettings;

/// Projection of the base inputs under one annual rate
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub annual_rate: f64,
    pub points: Vec<ProjectionDataPoint>,
    pub summary: ProjectionSummary,
    /// Present only when the settings carry a goal
    pub goal: Option<GoalHorizon>,
}

/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(SavingsInputs::new(1200.0, 8.0), InvestmentSettings::default());
/// for result in runner.run_rates(&[4.0, 7.0, 10.0])? {
///     println!("{}% -> {:.2}", result.annual_rate, result.summary.final_value);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    inputs: SavingsInputs,
    settings: InvestmentSettings,
}

impl ScenarioRunner {
    pub fn new(inputs: SavingsInputs, settings: InvestmentSettings) -> Self {
        Self { inputs, settings }
    }

    /// Project at the configured annual rate
    pub fn run_default(&self) -> Result<ScenarioResult> {
        self.run(self.settings.annual_rate)
    }

    /// Project at the given annual rate
    ///
    /// Fails with `Error::Overflow` when the horizon is too long for the rate
    /// to stay finite.
    pub fn run(&self, annual_rate: f64) -> Result<ScenarioResult> {
        debug!(
            "projecting {:.2} + {:.2}/day at {}% for {} years",
            self.inputs.current_savings, self.inputs.daily_savings_rate, annual_rate, self.settings.projection_years
        );

        let points = checked_generate_projection(
            self.inputs.current_savings,
            self.inputs.daily_savings_rate,
            annual_rate,
            self.settings.projection_years,
            self.settings.data_points,
        )?;
        let summary = ProjectionSummary::from_points(&points);

        let goal = self.settings.goal_amount.map(|goal_amount| {
            years_to_goal(
                self.inputs.current_savings,
                self.inputs.daily_savings_rate,
                goal_amount,
                annual_rate,
            )
        });

        Ok(ScenarioResult { annual_rate, points, summary, goal })
    }

    /// Project at each rate in parallel; results keep the order of `rates`
    pub fn run_rates(&self, rates: &[f64]) -> Result<Vec<ScenarioResult>> {
        rates.par_iter().map(|&rate| self.run(rate)).collect()
    }

    pub fn inputs(&self) -> &SavingsInputs {
        &self.inputs
    }

    pub fn settings(&self) -> &InvestmentSettings {
        &self.settings
    }

    /// Mutable settings, for adjusting horizon or goal between runs
    pub fn settings_mut(&mut self) -> &mut InvestmentSettings {
        &mut self.settings
    }
}
