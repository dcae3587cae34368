use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Priority of a short-term goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A short-term goal with binary completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmallGoal {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

/// A dated note recorded against a long-term goal.
///
/// The date is display text only. New entries use ISO dates; older data
/// carries locale-formatted ones such as `3/2/2024`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalLearning {
    pub date: String,
    pub intel: String,
}

/// A long-term goal whose progress the user sets directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongGoal {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    /// 0-100
    #[serde(default)]
    pub progress: u8,
    /// Newest first.
    #[serde(default)]
    pub learnings: Vec<GoalLearning>,
}

impl SmallGoal {
    pub fn new(name: String) -> Self {
        Self {
            id: super::new_id(),
            name,
            deadline: None,
            priority: Priority::Medium,
            completed: false,
        }
    }
}

impl LongGoal {
    pub fn new(name: String) -> Self {
        Self {
            id: super::new_id(),
            name,
            target_date: None,
            progress: 0,
            learnings: Vec::new(),
        }
    }
}
