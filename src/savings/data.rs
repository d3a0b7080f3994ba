//! Habit savings records and the totals fed to the projection engine

use log::warn;
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// Money figures for one habit, already derived from its log entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitSavings {
    pub name: String,

    /// Cost avoided per clean day
    pub daily_cost: f64,

    /// Amount saved so far from clean days
    pub saved_amount: f64,

    /// Amount spent during relapses
    #[serde(default)]
    pub relapse_amount: f64,

    /// Inactive habits keep their savings but stop contributing
    #[serde(default = "default_active")]
    pub active: bool,
}

impl HabitSavings {
    pub fn new(name: impl Into<String>, daily_cost: f64, saved_amount: f64) -> Self {
        Self {
            name: name.into(),
            daily_cost,
            saved_amount,
            relapse_amount: 0.0,
            active: true,
        }
    }

    /// Savings net of relapses, never below zero
    pub fn net_savings(&self) -> f64 {
        (self.saved_amount - self.relapse_amount).max(0.0)
    }
}

/// Totals the engine consumes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SavingsInputs {
    pub current_savings: f64,
    pub daily_savings_rate: f64,
}

impl SavingsInputs {
    pub fn new(current_savings: f64, daily_savings_rate: f64) -> Self {
        Self { current_savings, daily_savings_rate }
    }

    /// Sum net savings across all habits and daily cost across active ones
    pub fn from_habits(habits: &[HabitSavings]) -> Self {
        let current_savings: f64 = habits.iter().map(HabitSavings::net_savings).sum();

        let daily_savings_rate: f64 = habits
            .iter()
            .filter(|h| h.active)
            .filter(|h| {
                if h.daily_cost < 0.0 {
                    warn!("habit '{}' has negative daily cost {}, ignoring", h.name, h.daily_cost);
                    false
                } else {
                    true
                }
            })
            .map(|h| h.daily_cost)
            .sum();

        Self { current_savings, daily_savings_rate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_savings_floors_at_zero() {
        let mut habit = HabitSavings::new("Smoking", 12.0, 100.0);
        habit.relapse_amount = 250.0;
        assert_eq!(habit.net_savings(), 0.0);

        habit.relapse_amount = 40.0;
        assert_eq!(habit.net_savings(), 60.0);
    }

    #[test]
    fn test_inputs_from_habits() {
        let mut coffee = HabitSavings::new("Coffee", 4.5, 90.0);
        coffee.relapse_amount = 9.0;
        let mut takeaway = HabitSavings::new("Takeaway", 15.0, 300.0);
        takeaway.active = false;
        let smoking = HabitSavings::new("Smoking", 10.0, 420.0);

        let inputs = SavingsInputs::from_habits(&[coffee, takeaway, smoking]);
        assert_eq!(inputs.current_savings, 81.0 + 300.0 + 420.0);
        assert_eq!(inputs.daily_savings_rate, 14.5);
    }

    #[test]
    fn test_negative_daily_cost_ignored() {
        let odd = HabitSavings::new("Odd", -3.0, 0.0);
        let vending = HabitSavings::new("Vending", 2.0, 0.0);
        let inputs = SavingsInputs::from_habits(&[odd, vending]);
        assert_eq!(inputs.daily_savings_rate, 2.0);
    }

    #[test]
    fn test_no_habits() {
        assert_eq!(SavingsInputs::from_habits(&[]), SavingsInputs::default());
    }
}
