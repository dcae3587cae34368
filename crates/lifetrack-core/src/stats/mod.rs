//! Progress metrics for lifetrack
//!
//! Pure functions turning record collections into percentages and
//! motivational copy. Every function is total: empty input yields 0 and a
//! zero target yields 0 rather than an error. Percentages are clamped to
//! 0..=100 and rounded half away from zero.

mod activity;
mod dashboard;
mod fitness;
mod goals;
mod motivation;

pub use activity::{has_studied, subject_distribution, today_usage, SubjectTime};
pub use dashboard::DashboardSummary;
pub use fitness::{weekly_fitness_readiness, FitnessReadiness};
pub use goals::{goal_completion, long_goal_completion, small_goal_completion};
pub use motivation::{motivational_message, MotivationTier, ProgressBand};

/// `100 * part / whole` clamped to 0..=100, or 0 when `whole` is 0.
pub(crate) fn ratio_percent(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        return 0.0;
    }
    (part / whole * 100.0).clamp(0.0, 100.0)
}

pub(crate) fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
