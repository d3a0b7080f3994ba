//! Investment projection engine
//!
//! Pure functions over plain numbers: compound growth, growth with regular
//! contributions, projection series and time-to-goal solving. Nothing here
//! holds state, so every function is safe to call from any thread.

mod growth;
mod projection;
mod goal;

pub use growth::{
    future_value, future_value_with_contributions, interest_earned,
    checked_future_value_with_contributions, DAYS_PER_YEAR, MONTHLY_COMPOUNDING,
};
pub use projection::{
    generate_projection, checked_generate_projection, ProjectionDataPoint, ProjectionSeries, ProjectionSummary,
    DEFAULT_DATA_POINTS,
};
pub use goal::{
    years_to_goal, goal_achievement_date, GoalHorizon, MAX_GOAL_YEARS, GOAL_TOLERANCE_YEARS,
};
