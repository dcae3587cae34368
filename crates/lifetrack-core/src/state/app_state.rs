use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::records::{
    AcademicLog, AcademicPlan, DailyFitness, FitnessTargets, JournalEntry, LongGoal, SmallGoal,
    SocialUsage,
};

/// Daily screen-time limit in minutes for a fresh state.
pub const DEFAULT_SCREEN_TIME_LIMIT: u32 = 120;

fn screen_time_limit<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(crate::records::lenient_u32(d)?.unwrap_or(DEFAULT_SCREEN_TIME_LIMIT))
}

/// The single root aggregate. Persisted as one blob after every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub small_goals: Vec<SmallGoal>,
    pub long_goals: Vec<LongGoal>,
    pub fitness_targets: FitnessTargets,
    pub fitness_history: Vec<DailyFitness>,
    pub journal_entries: Vec<JournalEntry>,
    pub social_usage: Vec<SocialUsage>,
    pub academic_logs: Vec<AcademicLog>,
    pub academic_plans: Vec<AcademicPlan>,
    /// Minutes per day. A stored `null` reads as the default.
    #[serde(deserialize_with = "screen_time_limit")]
    pub screen_time_limit: u32,
    pub mute_reminders_date: Option<NaiveDate>,
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            small_goals: Vec::new(),
            long_goals: Vec::new(),
            fitness_targets: FitnessTargets::default(),
            fitness_history: Vec::new(),
            journal_entries: Vec::new(),
            social_usage: Vec::new(),
            academic_logs: Vec::new(),
            academic_plans: Vec::new(),
            screen_time_limit: DEFAULT_SCREEN_TIME_LIMIT,
            mute_reminders_date: None,
            dark_mode: false,
        }
    }
}

/// Names one field of [`AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateField {
    SmallGoals,
    LongGoals,
    FitnessTargets,
    FitnessHistory,
    JournalEntries,
    SocialUsage,
    AcademicLogs,
    AcademicPlans,
    ScreenTimeLimit,
    MuteRemindersDate,
    DarkMode,
}

impl StateField {
    /// Key as it appears in the stored blob.
    pub fn key(&self) -> &'static str {
        match self {
            StateField::SmallGoals => "smallGoals",
            StateField::LongGoals => "longGoals",
            StateField::FitnessTargets => "fitnessTargets",
            StateField::FitnessHistory => "fitnessHistory",
            StateField::JournalEntries => "journalEntries",
            StateField::SocialUsage => "socialUsage",
            StateField::AcademicLogs => "academicLogs",
            StateField::AcademicPlans => "academicPlans",
            StateField::ScreenTimeLimit => "screenTimeLimit",
            StateField::MuteRemindersDate => "muteRemindersDate",
            StateField::DarkMode => "darkMode",
        }
    }
}

/// A wholesale replacement for one field of [`AppState`].
#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    SmallGoals(Vec<SmallGoal>),
    LongGoals(Vec<LongGoal>),
    FitnessTargets(FitnessTargets),
    FitnessHistory(Vec<DailyFitness>),
    JournalEntries(Vec<JournalEntry>),
    SocialUsage(Vec<SocialUsage>),
    AcademicLogs(Vec<AcademicLog>),
    AcademicPlans(Vec<AcademicPlan>),
    ScreenTimeLimit(u32),
    MuteRemindersDate(Option<NaiveDate>),
    DarkMode(bool),
}

impl StateUpdate {
    pub fn field(&self) -> StateField {
        match self {
            StateUpdate::SmallGoals(_) => StateField::SmallGoals,
            StateUpdate::LongGoals(_) => StateField::LongGoals,
            StateUpdate::FitnessTargets(_) => StateField::FitnessTargets,
            StateUpdate::FitnessHistory(_) => StateField::FitnessHistory,
            StateUpdate::JournalEntries(_) => StateField::JournalEntries,
            StateUpdate::SocialUsage(_) => StateField::SocialUsage,
            StateUpdate::AcademicLogs(_) => StateField::AcademicLogs,
            StateUpdate::AcademicPlans(_) => StateField::AcademicPlans,
            StateUpdate::ScreenTimeLimit(_) => StateField::ScreenTimeLimit,
            StateUpdate::MuteRemindersDate(_) => StateField::MuteRemindersDate,
            StateUpdate::DarkMode(_) => StateField::DarkMode,
        }
    }
}

impl AppState {
    /// Replace one field wholesale. No merging.
    pub fn apply(&mut self, update: StateUpdate) {
        match update {
            StateUpdate::SmallGoals(v) => self.small_goals = v,
            StateUpdate::LongGoals(v) => self.long_goals = v,
            StateUpdate::FitnessTargets(v) => self.fitness_targets = v,
            StateUpdate::FitnessHistory(v) => self.fitness_history = v,
            StateUpdate::JournalEntries(v) => self.journal_entries = v,
            StateUpdate::SocialUsage(v) => self.social_usage = v,
            StateUpdate::AcademicLogs(v) => self.academic_logs = v,
            StateUpdate::AcademicPlans(v) => self.academic_plans = v,
            StateUpdate::ScreenTimeLimit(v) => self.screen_time_limit = v,
            StateUpdate::MuteRemindersDate(v) => self.mute_reminders_date = v,
            StateUpdate::DarkMode(v) => self.dark_mode = v,
        }
    }

    pub fn parse_blob(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }

    /// Parse a stored blob, falling back to the default state when it is
    /// malformed.
    pub fn from_blob(blob: &str) -> Self {
        match Self::parse_blob(blob) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("stored state is unreadable, starting from defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn to_blob(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_initial_state() {
        let state = AppState::default();
        assert_eq!(state.screen_time_limit, 120);
        assert_eq!(state.fitness_targets, FitnessTargets { pushups: 10, pullups: 2, plank: 20 });
        assert!(state.mute_reminders_date.is_none());
        assert!(!state.dark_mode);
    }

    #[test]
    fn blob_keys_match_field_keys() {
        let json = serde_json::to_value(AppState::default()).unwrap();
        let obj = json.as_object().unwrap();
        for field in [
            StateField::SmallGoals,
            StateField::LongGoals,
            StateField::FitnessTargets,
            StateField::FitnessHistory,
            StateField::JournalEntries,
            StateField::SocialUsage,
            StateField::AcademicLogs,
            StateField::AcademicPlans,
            StateField::ScreenTimeLimit,
            StateField::MuteRemindersDate,
            StateField::DarkMode,
        ] {
            assert!(obj.contains_key(field.key()), "missing {}", field.key());
        }
    }

    #[test]
    fn malformed_blob_falls_back_to_default() {
        assert_eq!(AppState::from_blob("{not json"), AppState::default());
        assert_eq!(AppState::from_blob(r#"{"smallGoals": 7}"#), AppState::default());
    }

    #[test]
    fn partial_blob_keeps_defaults_for_missing_fields() {
        let state = AppState::from_blob(r#"{"screenTimeLimit": 90, "darkMode": true}"#);
        assert_eq!(state.screen_time_limit, 90);
        assert!(state.dark_mode);
        assert_eq!(state.fitness_targets, FitnessTargets::default());
    }

    #[test]
    fn null_screen_time_limit_reads_as_default() {
        let state = AppState::from_blob(
            r#"{"smallGoals": [{"id": "1", "name": "Read"}], "screenTimeLimit": null}"#,
        );
        assert_eq!(state.screen_time_limit, DEFAULT_SCREEN_TIME_LIMIT);
        assert_eq!(state.small_goals.len(), 1);
    }

    #[test]
    fn apply_replaces_whole_field() {
        let mut state = AppState::default();
        state.apply(StateUpdate::ScreenTimeLimit(45));
        state.apply(StateUpdate::MuteRemindersDate(Some("2024-06-01".parse().unwrap())));
        assert_eq!(state.screen_time_limit, 45);
        assert_eq!(state.mute_reminders_date.unwrap().to_string(), "2024-06-01");
        assert_eq!(StateUpdate::DarkMode(true).field(), StateField::DarkMode);
    }
}
