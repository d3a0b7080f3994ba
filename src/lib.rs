//! Savings Projection - compound-growth engine for money saved by quitting habits
//!
//! This library provides:
//! - Lump-sum and regular-contribution future values
//! - Yearly projection series for charting
//! - Time-to-goal solving and goal dates
//! - Savings totals from habit records (CSV)
//! - Multi-rate scenario comparison

pub mod error;
pub mod investment;
pub mod savings;
pub mod settings;
pub mod scenario;

// Re-export commonly used types
pub use error::{Error, Result};
pub use investment::{GoalHorizon, ProjectionDataPoint, ProjectionSummary};
pub use savings::{HabitSavings, SavingsInputs};
pub use settings::InvestmentSettings;
pub use scenario::{ScenarioRunner, ScenarioResult};
