//! Behavioural checks of the projection engine across a spread of inputs

use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use savings_projection::investment::{
    future_value, future_value_with_contributions, generate_projection, goal_achievement_date,
    years_to_goal, GoalHorizon, GOAL_TOLERANCE_YEARS,
};

const RATES: [f64; 5] = [0.0, 1.5, 7.0, 10.0, 25.0];
const FREQUENCIES: [u32; 4] = [1, 4, 12, 365];

#[test]
fn zero_years_returns_principal() {
    for &rate in &RATES {
        for &n in &FREQUENCIES {
            for &principal in &[0.0, 1.0, 1234.56] {
                assert_eq!(future_value(principal, rate, n, 0.0), principal);
            }
        }
    }
}

#[test]
fn nothing_saved_grows_to_nothing() {
    for &rate in &RATES {
        for &years in &[0.0, 0.25, 1.0, 30.0] {
            assert_eq!(future_value_with_contributions(0.0, 0.0, 365, rate, 12, years), 0.0);
        }
    }
}

#[test]
fn value_never_falls_as_horizon_extends() {
    for &rate in &RATES {
        let mut previous = f64::MIN;
        for step in 0..=400 {
            let years = step as f64 * 0.25;
            let value = future_value_with_contributions(250.0, 3.0, 365, rate, 12, years);
            assert!(value >= previous, "rate {} dipped at {} years", rate, years);
            previous = value;
        }
    }
}

#[test]
fn projection_interest_is_exact_difference() {
    for &rate in &RATES {
        for point in generate_projection(640.0, 7.25, rate, 33, 20) {
            assert_eq!(point.interest_earned, point.value_with_interest - point.contributions);
        }
    }
}

#[test]
fn projection_always_ends_on_horizon() {
    for years in 0..=60 {
        for count in [1, 3, 7, 20, 100] {
            let points = generate_projection(100.0, 2.0, 6.0, years, count);
            assert_eq!(points.first().unwrap().year, 0);
            assert_eq!(points.last().unwrap().year, years);

            // Strictly increasing years, so no duplicate endpoint
            assert!(points.windows(2).all(|w| w[0].year < w[1].year));
        }
    }
}

#[test]
fn goal_already_exceeded() {
    assert_eq!(years_to_goal(1000.0, 10.0, 500.0, 10.0), GoalHorizon::Years(0.0));
}

#[test]
fn goal_without_savings_is_unreachable() {
    assert_eq!(years_to_goal(0.0, 0.0, 1000.0, 10.0), GoalHorizon::Unreachable);
}

#[test]
fn lump_sum_monthly_compounding() {
    assert_abs_diff_eq!(future_value(1000.0, 10.0, 12, 1.0), 1104.71, epsilon = 0.01);
}

#[test]
fn zero_rate_annuity_is_linear() {
    assert_eq!(future_value_with_contributions(0.0, 10.0, 365, 0.0, 12, 1.0), 3650.0);
}

#[test]
fn goal_solver_converges() {
    let years = years_to_goal(0.0, 100.0, 50_000.0, 10.0).years().unwrap();
    let value = future_value_with_contributions(0.0, 100.0, 365, 10.0, 12, years);

    // One tolerance step of deposits and growth stays under 1% of the goal
    assert!(value >= 50_000.0);
    assert!(value - 50_000.0 < 500.0, "overshoot {}", value - 50_000.0);

    let earlier = future_value_with_contributions(0.0, 100.0, 365, 10.0, 12, years - GOAL_TOLERANCE_YEARS);
    assert!(earlier < 50_000.0);
}

#[test]
fn goal_date_counts_whole_days() {
    let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let date = goal_achievement_date(0.0, 100.0, 50_000.0, 10.0, today).unwrap();

    let years = years_to_goal(0.0, 100.0, 50_000.0, 10.0).years().unwrap();
    assert_eq!((date - today).num_days(), (years * 365.0) as i64);
}
