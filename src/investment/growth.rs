//! Closed-form compound growth formulas
//!
//! Rates are annual percentages (10.0 means 10%). Frequencies are events per
//! year and must be at least 1; the unchecked functions divide by them.

use crate::error::{Error, Result};

/// Daily contributions, used wherever savings accrue from a daily rate
pub const DAYS_PER_YEAR: u32 = 365;

/// Monthly compounding, the fixed policy for projections and goal solving
pub const MONTHLY_COMPOUNDING: u32 = 12;

/// Future value of a lump sum: `principal * (1 + r/n)^(n * years)`
///
/// Non-positive principal or horizon is returned unchanged. Extreme horizons
/// with high rates overflow to infinity.
pub fn future_value(principal: f64, annual_rate: f64, compounding_frequency: u32, years: f64) -> f64 {
    if principal <= 0.0 || years <= 0.0 {
        return principal;
    }

    let n = compounding_frequency as f64;
    let rate = annual_rate / 100.0;
    principal * (1.0 + rate / n).powf(n * years)
}

/// Future value of a lump sum plus a stream of regular contributions
///
/// Contributions are rescaled to one amount per compounding period and grown
/// as an ordinary annuity (payment at period end). At a zero rate the annuity
/// degenerates to straight accumulation.
///
/// Extreme horizons combined with high rates overflow to infinity; use
/// [`checked_future_value_with_contributions`] to detect that.
pub fn future_value_with_contributions(
    principal: f64,
    regular_contribution: f64,
    contribution_frequency: u32,
    annual_rate: f64,
    compounding_frequency: u32,
    years: f64,
) -> f64 {
    if years <= 0.0 {
        return principal;
    }

    let principal_value = future_value(principal, annual_rate, compounding_frequency, years);

    let n = compounding_frequency as f64;
    let contribution_per_period = regular_contribution * (contribution_frequency as f64 / n);
    let periodic_rate = annual_rate / 100.0 / n;
    let total_periods = n * years;

    let contribution_value = if periodic_rate == 0.0 {
        // per_period * total_periods, without the n/n rounding
        regular_contribution * contribution_frequency as f64 * years
    } else {
        // (1 + i)^t - 1 via ln_1p/exp_m1 so tiny rates do not round 1 + i to 1
        let growth = (total_periods * periodic_rate.ln_1p()).exp_m1();
        contribution_per_period * growth / periodic_rate
    };

    principal_value + contribution_value
}

/// Interest portion of a lump sum's growth
pub fn interest_earned(principal: f64, annual_rate: f64, compounding_frequency: u32, years: f64) -> f64 {
    future_value(principal, annual_rate, compounding_frequency, years) - principal
}

/// Like [`future_value_with_contributions`], but rejects a zero compounding
/// frequency and reports a non-finite result as [`Error::Overflow`]
pub fn checked_future_value_with_contributions(
    principal: f64,
    regular_contribution: f64,
    contribution_frequency: u32,
    annual_rate: f64,
    compounding_frequency: u32,
    years: f64,
) -> Result<f64> {
    if compounding_frequency == 0 {
        return Err(Error::InvalidFrequency);
    }

    let value = future_value_with_contributions(
        principal,
        regular_contribution,
        contribution_frequency,
        annual_rate,
        compounding_frequency,
        years,
    );

    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::Overflow { years, annual_rate })
    }
}
