//! Savings inputs gathered from habit records

mod data;
pub mod loader;

pub use data::{HabitSavings, SavingsInputs};
pub use loader::{load_habits, load_habits_from_reader};
