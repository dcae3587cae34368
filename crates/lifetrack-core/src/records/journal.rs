use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A mission-log entry. `study_hours` counts as study activity when nonzero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub lesson: String,
    pub content: String,
    #[serde(default)]
    pub study_hours: f64,
}

impl JournalEntry {
    /// Case-insensitive match against the lesson title or content.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.lesson.to_lowercase().contains(&term) || self.content.to_lowercase().contains(&term)
    }
}
