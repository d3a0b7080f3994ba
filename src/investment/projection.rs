//! Yearly projection series for charting contributions against growth

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::growth::{future_value_with_contributions, DAYS_PER_YEAR, MONTHLY_COMPOUNDING};

/// Default number of samples in a projection series
pub const DEFAULT_DATA_POINTS: u32 = 20;

/// One sampled year of a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionDataPoint {
    pub year: u32,

    /// Savings plus deposits, no interest
    pub contributions: f64,

    pub value_with_interest: f64,

    /// Always `value_with_interest - contributions`
    pub interest_earned: f64,
}

impl ProjectionDataPoint {
    fn at_year(current_savings: f64, daily_savings_rate: f64, annual_rate: f64, year: u32) -> Self {
        let years = year as f64;
        let contributions = current_savings + daily_savings_rate * DAYS_PER_YEAR as f64 * years;
        let value_with_interest = future_value_with_contributions(
            current_savings,
            daily_savings_rate,
            DAYS_PER_YEAR,
            annual_rate,
            MONTHLY_COMPOUNDING,
            years,
        );

        Self {
            year,
            contributions,
            value_with_interest,
            interest_earned: value_with_interest - contributions,
        }
    }
}

/// Lazy projection series
///
/// Yields year 0, then every `step` years, and always finishes on the
/// requested horizon exactly once.
#[derive(Debug, Clone)]
pub struct ProjectionSeries {
    current_savings: f64,
    daily_savings_rate: f64,
    annual_rate: f64,
    years: u32,
    step: u32,
    next_year: Option<u32>,
}

impl ProjectionSeries {
    pub fn new(
        current_savings: f64,
        daily_savings_rate: f64,
        annual_rate: f64,
        years: u32,
        data_points_count: u32,
    ) -> Self {
        // A zero count is treated as one so the stride stays defined
        let step = (years / data_points_count.max(1)).max(1);

        Self {
            current_savings,
            daily_savings_rate,
            annual_rate,
            years,
            step,
            next_year: Some(0),
        }
    }

    /// Stride between sampled years
    pub fn step(&self) -> u32 {
        self.step
    }

    fn remaining(&self) -> usize {
        match self.next_year {
            None => 0,
            Some(year) => {
                let strided = ((self.years - year) / self.step) as usize + 1;
                let last_strided = year + (strided as u32 - 1) * self.step;
                if last_strided == self.years {
                    strided
                } else {
                    strided + 1
                }
            }
        }
    }
}

impl Iterator for ProjectionSeries {
    type Item = ProjectionDataPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let year = self.next_year?;

        self.next_year = if year >= self.years {
            None
        } else {
            match year.checked_add(self.step) {
                Some(next) if next <= self.years => Some(next),
                _ => Some(self.years),
            }
        };

        Some(ProjectionDataPoint::at_year(
            self.current_savings,
            self.daily_savings_rate,
            self.annual_rate,
            year,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProjectionSeries {}

/// Project savings growth over `years`, sampling at most about
/// `data_points_count` points plus the endpoint
///
/// Contributions accrue daily and compound monthly regardless of any
/// configured compounding frequency. Extreme horizons with high rates yield
/// infinite values; [`checked_generate_projection`] reports that instead.
pub fn generate_projection(
    current_savings: f64,
    daily_savings_rate: f64,
    annual_rate: f64,
    years: u32,
    data_points_count: u32,
) -> Vec<ProjectionDataPoint> {
    ProjectionSeries::new(current_savings, daily_savings_rate, annual_rate, years, data_points_count)
        .collect()
}

/// Like [`generate_projection`], but fails with [`Error::Overflow`] at the
/// first sampled year whose value is not finite
pub fn checked_generate_projection(
    current_savings: f64,
    daily_savings_rate: f64,
    annual_rate: f64,
    years: u32,
    data_points_count: u32,
) -> Result<Vec<ProjectionDataPoint>> {
    ProjectionSeries::new(current_savings, daily_savings_rate, annual_rate, years, data_points_count)
        .map(|point| {
            if point.value_with_interest.is_finite() && point.contributions.is_finite() {
                Ok(point)
            } else {
                Err(Error::Overflow { years: point.year as f64, annual_rate })
            }
        })
        .collect()
}

/// Headline figures for a projection series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub final_year: u32,
    pub total_contributions: f64,
    pub final_value: f64,
    pub total_interest: f64,
    /// Share of the final value that came from interest (0 when empty)
    pub interest_share: f64,
}

impl ProjectionSummary {
    pub fn from_points(points: &[ProjectionDataPoint]) -> Self {
        let last = points.last();
        let final_value = last.map(|p| p.value_with_interest).unwrap_or(0.0);
        let total_interest = last.map(|p| p.interest_earned).unwrap_or(0.0);

        let interest_share = if final_value > 0.0 {
            total_interest / final_value
        } else {
            0.0
        };

        Self {
            final_year: last.map(|p| p.year).unwrap_or(0),
            total_contributions: last.map(|p| p.contributions).unwrap_or(0.0),
            final_value,
            total_interest,
            interest_share,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn years_of(points: &[ProjectionDataPoint]) -> Vec<u32> {
        points.iter().map(|p| p.year).collect()
    }

    #[test]
    fn test_zero_years_single_point() {
        let points = generate_projection(500.0, 10.0, 7.0, 0, DEFAULT_DATA_POINTS);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].year, 0);
        assert_eq!(points[0].contributions, 500.0);
        assert_eq!(points[0].value_with_interest, 500.0);
        assert_eq!(points[0].interest_earned, 0.0);
    }

    #[test]
    fn test_short_horizon_samples_every_year() {
        let points = generate_projection(0.0, 5.0, 7.0, 10, 20);
        assert_eq!(years_of(&points), (0..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_even_stride_has_no_duplicate_endpoint() {
        let points = generate_projection(0.0, 5.0, 7.0, 40, 20);
        assert_eq!(years_of(&points), (0..=40).step_by(2).collect::<Vec<_>>());
    }

    #[test]
    fn test_uneven_stride_appends_endpoint() {
        // step = 45 / 20 = 2, so 0, 2, ..., 44 then 45
        let points = generate_projection(0.0, 5.0, 7.0, 45, 20);
        let years = years_of(&points);
        assert_eq!(years.len(), 24);
        assert_eq!(&years[years.len() - 2..], &[44, 45]);
    }

    #[test]
    fn test_zero_data_points_still_terminates() {
        // Treated as a single sample, so the stride spans the whole horizon
        let points = generate_projection(0.0, 5.0, 7.0, 3, 0);
        assert_eq!(years_of(&points), vec![0, 3]);
    }

    #[test]
    fn test_interest_is_value_minus_contributions() {
        for point in generate_projection(1200.0, 12.5, 9.0, 37, 7) {
            assert_eq!(point.interest_earned, point.value_with_interest - point.contributions);
        }
    }

    #[test]
    fn test_contributions_grow_linearly() {
        let points = generate_projection(100.0, 10.0, 5.0, 2, 20);
        assert_abs_diff_eq!(points[1].contributions, 100.0 + 3650.0, epsilon = 1e-9);
        assert_abs_diff_eq!(points[2].contributions, 100.0 + 7300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_series_size_hint_is_exact() {
        for &(years, count) in &[(0, 20), (10, 20), (40, 20), (45, 20), (97, 7), (5, 0)] {
            let series = ProjectionSeries::new(0.0, 1.0, 5.0, years, count);
            let expected = series.len();
            assert_eq!(series.count(), expected, "years={} count={}", years, count);
        }
    }

    #[test]
    fn test_summary_from_points() {
        let points = generate_projection(0.0, 10.0, 0.0, 5, 20);
        let summary = ProjectionSummary::from_points(&points);
        assert_eq!(summary.final_year, 5);
        assert_abs_diff_eq!(summary.final_value, 18250.0, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.total_interest, 0.0, epsilon = 1e-9);
        assert_eq!(summary.interest_share, 0.0);
    }

    #[test]
    fn test_checked_projection_reports_overflow() {
        let unchecked = generate_projection(1000.0, 10.0, 25.0, 5000, 20);
        assert!(unchecked.last().unwrap().value_with_interest.is_infinite());

        let err = checked_generate_projection(1000.0, 10.0, 25.0, 5000, 20).unwrap_err();
        match err {
            Error::Overflow { years, annual_rate } => {
                assert!(years > 0.0 && years <= 5000.0);
                assert_eq!(annual_rate, 25.0);
            }
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_checked_projection_matches_unchecked() {
        let checked = checked_generate_projection(250.0, 4.0, 7.0, 30, 20).unwrap();
        assert_eq!(checked, generate_projection(250.0, 4.0, 7.0, 30, 20));
    }

    #[test]
    fn test_summary_of_empty_series() {
        let summary = ProjectionSummary::from_points(&[]);
        assert_eq!(summary.final_year, 0);
        assert_eq!(summary.final_value, 0.0);
    }
}
