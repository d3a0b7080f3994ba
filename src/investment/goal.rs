//! Time-to-goal solving
//!
//! Projected value is monotonic in the horizon, so the crossing point is found
//! by bisection instead of inverting the annuity formula.

use chrono::{Days, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use super::growth::{future_value_with_contributions, DAYS_PER_YEAR, MONTHLY_COMPOUNDING};

/// Upper bound of the search interval, in years
pub const MAX_GOAL_YEARS: f64 = 100.0;

/// Bisection stops once the interval is this narrow (about 3.65 days)
pub const GOAL_TOLERANCE_YEARS: f64 = 0.01;

/// Time needed to reach a savings goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GoalHorizon {
    /// Reached after this many years (0 when already met)
    Years(f64),
    /// No positive savings rate, so the goal is never reached
    Unreachable,
}

impl GoalHorizon {
    pub fn years(&self) -> Option<f64> {
        match *self {
            GoalHorizon::Years(years) => Some(years),
            GoalHorizon::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, GoalHorizon::Years(_))
    }

    /// Years, if strictly inside the search horizon
    pub fn within_horizon(&self) -> Option<f64> {
        self.years().filter(|&years| years < MAX_GOAL_YEARS)
    }
}

/// Years until savings, growing with daily deposits and monthly compounding,
/// reach `goal_amount`
///
/// The result is within [`GOAL_TOLERANCE_YEARS`] of the true crossing and never
/// earlier than it. Goals not reached within [`MAX_GOAL_YEARS`] report the
/// full horizon.
pub fn years_to_goal(
    current_savings: f64,
    daily_savings_rate: f64,
    goal_amount: f64,
    annual_rate: f64,
) -> GoalHorizon {
    if goal_amount <= current_savings {
        return GoalHorizon::Years(0.0);
    }

    if daily_savings_rate <= 0.0 {
        return GoalHorizon::Unreachable;
    }

    let mut low = 0.0_f64;
    let mut high = MAX_GOAL_YEARS;
    let mut iterations = 0u32;

    while high - low > GOAL_TOLERANCE_YEARS {
        let mid = (low + high) / 2.0;
        let value = future_value_with_contributions(
            current_savings,
            daily_savings_rate,
            DAYS_PER_YEAR,
            annual_rate,
            MONTHLY_COMPOUNDING,
            mid,
        );

        if value >= goal_amount {
            high = mid;
        } else {
            low = mid;
        }
        iterations += 1;
    }

    debug!(
        "goal {:.2} reached in {:.4} years after {} bisection steps",
        goal_amount, high, iterations
    );

    GoalHorizon::Years(high)
}

/// Calendar date on which the goal is reached, counting from `reference_date`
///
/// `None` when the goal is unreachable or lies at or beyond the search horizon.
pub fn goal_achievement_date(
    current_savings: f64,
    daily_savings_rate: f64,
    goal_amount: f64,
    annual_rate: f64,
    reference_date: NaiveDate,
) -> Option<NaiveDate> {
    let years = years_to_goal(current_savings, daily_savings_rate, goal_amount, annual_rate)
        .within_horizon()?;

    let days = (years * DAYS_PER_YEAR as f64) as u64;
    reference_date.checked_add_days(Days::new(days))
}
