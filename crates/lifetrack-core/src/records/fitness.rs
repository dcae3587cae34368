use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weekly targets. Plank is in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessTargets {
    pub pushups: u32,
    pub pullups: u32,
    pub plank: u32,
}

impl Default for FitnessTargets {
    fn default() -> Self {
        Self {
            pushups: 10,
            pullups: 2,
            plank: 20,
        }
    }
}

/// One day's workout. At most one per date in a history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFitness {
    pub date: NaiveDate,
    #[serde(default)]
    pub pushups: u32,
    #[serde(default)]
    pub pullups: u32,
    #[serde(default)]
    pub plank: u32,
    #[serde(rename = "sixPackDetails", alias = "notes", default)]
    pub notes: String,
}

/// Insert `entry` into `history`, replacing any record with the same date.
///
/// The result is sorted newest date first.
pub fn upsert_daily_fitness(history: &[DailyFitness], entry: DailyFitness) -> Vec<DailyFitness> {
    let mut next = history.to_vec();
    match next.iter().position(|h| h.date == entry.date) {
        Some(idx) => next[idx] = entry,
        None => next.push(entry),
    }
    next.sort_by(|a, b| b.date.cmp(&a.date));
    next
}
