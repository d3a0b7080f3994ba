//! User investment settings
//!
//! Loaded from JSON; any missing field falls back to its default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::investment::{DEFAULT_DATA_POINTS, MONTHLY_COMPOUNDING};

fn default_annual_rate() -> f64 { 7.0 }
fn default_compounding_frequency() -> u32 { MONTHLY_COMPOUNDING }
fn default_projection_years() -> u32 { 30 }
fn default_data_points() -> u32 { DEFAULT_DATA_POINTS }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSettings {
    /// Expected annual return, as a percentage
    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,

    /// Compounding events per year for lump-sum figures
    #[serde(default = "default_compounding_frequency")]
    pub compounding_frequency: u32,

    #[serde(default = "default_projection_years")]
    pub projection_years: u32,

    #[serde(default = "default_data_points")]
    pub data_points: u32,

    /// Savings target, if the user has set one
    #[serde(default)]
    pub goal_amount: Option<f64>,
}

impl Default for InvestmentSettings {
    fn default() -> Self {
        Self {
            annual_rate: default_annual_rate(),
            compounding_frequency: default_compounding_frequency(),
            projection_years: default_projection_years(),
            data_points: default_data_points(),
            goal_amount: None,
        }
    }
}

impl InvestmentSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.compounding_frequency == 0 {
            return Err(Error::InvalidFrequency);
        }
        if !self.annual_rate.is_finite() {
            return Err(Error::InvalidRate(self.annual_rate));
        }
        Ok(())
    }
}
