use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A study session. Several may share a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicLog {
    pub id: String,
    pub date: NaiveDate,
    pub subject: String,
    pub topic: String,
    pub intel: String,
    /// Minutes.
    #[serde(default, deserialize_with = "super::u32_or_zero")]
    pub time_spent: u32,
}

/// A study intention for a given day.
///
/// Plans are matched to logs by date only; nothing links a plan to the log
/// that fulfils it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicPlan {
    pub id: String,
    pub date: NaiveDate,
    pub subject: String,
    pub topic: String,
}
