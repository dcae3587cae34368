//! Domain records.
//!
//! Flat entities with no relationships beyond grouping by date. Records are
//! never mutated in place by shared owners: the state store replaces whole
//! collections (append, update-in-place, filter-out).
//!
//! Field names serialize in camelCase so a stored blob keeps the layout of
//! the original browser storage.

mod academic;
mod fitness;
mod goal;
mod journal;
mod social;

pub use academic::{AcademicLog, AcademicPlan};
pub use fitness::{upsert_daily_fitness, DailyFitness, FitnessTargets};
pub use goal::{GoalLearning, LongGoal, Priority, SmallGoal};
pub use journal::JournalEntry;
pub use social::{Platform, SocialUsage};

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Generate a fresh record id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Reject a blank required text field.
pub(crate) fn require(
    field: &'static str,
    value: &str,
) -> Result<String, crate::error::ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::error::ValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Read a whole number written by a loosely typed client.
///
/// `null` (a NaN that went through JSON) reads as `None`; fractions are
/// rounded and negatives clamp to 0.
pub(crate) fn lenient_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    let value = Option::<f64>::deserialize(d)?;
    Ok(value
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, f64::from(u32::MAX)) as u32))
}

pub(crate) fn u32_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(lenient_u32(d)?.unwrap_or(0))
}
