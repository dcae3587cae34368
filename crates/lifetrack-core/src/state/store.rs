use chrono::NaiveDate;

use super::{AppState, StateUpdate};
use crate::error::{Result, ValidationError};
use crate::records::{
    new_id, require, upsert_daily_fitness, AcademicLog, AcademicPlan, DailyFitness,
    FitnessTargets, GoalLearning, JournalEntry, LongGoal, Platform, SmallGoal, SocialUsage,
};
use crate::storage::StateStorage;

/// Input for [`StateStore::add_journal_entry`].
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub date: NaiveDate,
    pub lesson: String,
    pub content: String,
    pub study_hours: f64,
}

/// Input for [`StateStore::add_academic_log`].
#[derive(Debug, Clone)]
pub struct NewAcademicLog {
    pub date: NaiveDate,
    pub subject: String,
    pub topic: String,
    pub intel: String,
    /// Minutes.
    pub time_spent: u32,
}

/// Owns the [`AppState`] and keeps the storage copy in step with it.
///
/// Every mutating operation ends in exactly one [`StateStore::update`].
pub struct StateStore<S: StateStorage> {
    state: AppState,
    storage: S,
    /// Blob that failed to parse at open, backed up before the first write.
    unreadable: Option<String>,
}

impl<S: StateStorage> StateStore<S> {
    /// Load the state from `storage`.
    ///
    /// A missing, unreadable or malformed blob yields the default state.
    /// A malformed blob is kept and moved aside through
    /// [`StateStorage::backup`] before anything overwrites it.
    pub fn open(storage: S) -> Self {
        let mut unreadable = None;
        let state = match storage.read() {
            Ok(Some(blob)) => match AppState::parse_blob(&blob) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!("stored state is unreadable, starting from defaults: {e}");
                    unreadable = Some(blob);
                    AppState::default()
                }
            },
            Ok(None) => AppState::default(),
            Err(e) => {
                tracing::warn!("could not read stored state, starting from defaults: {e}");
                AppState::default()
            }
        };
        Self {
            state,
            storage,
            unreadable,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Replace one field wholesale and persist the whole state.
    ///
    /// The in-memory state keeps the change even if the write fails.
    pub fn update(&mut self, update: StateUpdate) -> Result<()> {
        let field = update.field();
        self.state.apply(update);
        if let Some(old) = &self.unreadable {
            self.storage.backup(old)?;
            tracing::warn!(bytes = old.len(), "unreadable state moved aside");
            self.unreadable = None;
        }
        let blob = self.state.to_blob()?;
        self.storage.write(&blob)?;
        tracing::debug!(field = field.key(), bytes = blob.len(), "state persisted");
        Ok(())
    }

    // Goals

    pub fn add_small_goal(&mut self, name: &str) -> Result<String> {
        let goal = SmallGoal::new(require("name", name)?);
        let id = goal.id.clone();
        let mut goals = Vec::with_capacity(self.state.small_goals.len() + 1);
        goals.push(goal);
        goals.extend(self.state.small_goals.iter().cloned());
        self.update(StateUpdate::SmallGoals(goals))?;
        Ok(id)
    }

    /// Flip completion. Returns the new value.
    pub fn toggle_small_goal(&mut self, id: &str) -> Result<bool> {
        let mut goals = self.state.small_goals.clone();
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| not_found("small goal", id))?;
        goal.completed = !goal.completed;
        let completed = goal.completed;
        self.update(StateUpdate::SmallGoals(goals))?;
        Ok(completed)
    }

    pub fn delete_small_goal(&mut self, id: &str) -> Result<()> {
        let goals = self.state.small_goals.iter().filter(|g| g.id != id).cloned().collect();
        self.update(StateUpdate::SmallGoals(goals))
    }

    pub fn add_long_goal(&mut self, name: &str) -> Result<String> {
        let goal = LongGoal::new(require("name", name)?);
        let id = goal.id.clone();
        let mut goals = vec![goal];
        goals.extend(self.state.long_goals.iter().cloned());
        self.update(StateUpdate::LongGoals(goals))?;
        Ok(id)
    }

    /// Set progress, clamped to 100.
    pub fn set_long_goal_progress(&mut self, id: &str, progress: u8) -> Result<()> {
        let mut goals = self.state.long_goals.clone();
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| not_found("long goal", id))?;
        goal.progress = progress.min(100);
        self.update(StateUpdate::LongGoals(goals))
    }

    /// Prepend a learning to a long-term goal.
    pub fn add_learning(&mut self, id: &str, today: NaiveDate, intel: &str) -> Result<()> {
        let intel = require("intel", intel)?;
        let mut goals = self.state.long_goals.clone();
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| not_found("long goal", id))?;
        goal.learnings.insert(0, GoalLearning { date: today.to_string(), intel });
        self.update(StateUpdate::LongGoals(goals))
    }

    pub fn delete_long_goal(&mut self, id: &str) -> Result<()> {
        let goals = self.state.long_goals.iter().filter(|g| g.id != id).cloned().collect();
        self.update(StateUpdate::LongGoals(goals))
    }

    // Fitness

    pub fn set_fitness_targets(&mut self, targets: FitnessTargets) -> Result<()> {
        self.update(StateUpdate::FitnessTargets(targets))
    }

    /// Record a day's workout, replacing any entry for the same date.
    pub fn record_daily_fitness(&mut self, entry: DailyFitness) -> Result<()> {
        let history = upsert_daily_fitness(&self.state.fitness_history, entry);
        self.update(StateUpdate::FitnessHistory(history))
    }

    // Journal

    pub fn add_journal_entry(&mut self, input: NewJournalEntry) -> Result<String> {
        let lesson = require("lesson", &input.lesson)?;
        let content = require("content", &input.content)?;
        if !input.study_hours.is_finite() || input.study_hours < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "study_hours",
                message: format!("{} is not a number of hours", input.study_hours),
            }
            .into());
        }

        let entry = JournalEntry {
            id: new_id(),
            date: input.date,
            lesson,
            content,
            study_hours: input.study_hours,
        };
        let id = entry.id.clone();
        let mut entries = vec![entry];
        entries.extend(self.state.journal_entries.iter().cloned());
        self.update(StateUpdate::JournalEntries(entries))?;
        Ok(id)
    }

    pub fn delete_journal_entry(&mut self, id: &str) -> Result<()> {
        let entries = self.state.journal_entries.iter().filter(|e| e.id != id).cloned().collect();
        self.update(StateUpdate::JournalEntries(entries))
    }

    /// Entries whose lesson or content contains `term`, ignoring case.
    pub fn search_journal(&self, term: &str) -> Vec<&JournalEntry> {
        self.state.journal_entries.iter().filter(|e| e.matches(term)).collect()
    }

    // Social usage

    pub fn add_social_usage(&mut self, platform: Platform, minutes: u32, date: NaiveDate) -> Result<String> {
        if minutes == 0 {
            return Err(ValidationError::InvalidValue {
                field: "minutes",
                message: "must be greater than zero".into(),
            }
            .into());
        }

        let usage = SocialUsage {
            id: new_id(),
            platform,
            minutes,
            date,
        };
        let id = usage.id.clone();
        let mut all = vec![usage];
        all.extend(self.state.social_usage.iter().cloned());
        self.update(StateUpdate::SocialUsage(all))?;
        Ok(id)
    }

    pub fn delete_social_usage(&mut self, id: &str) -> Result<()> {
        let all = self.state.social_usage.iter().filter(|u| u.id != id).cloned().collect();
        self.update(StateUpdate::SocialUsage(all))
    }

    pub fn set_screen_time_limit(&mut self, minutes: u32) -> Result<()> {
        self.update(StateUpdate::ScreenTimeLimit(minutes))
    }

    /// Mute or unmute today's screen-time alert. Returns whether it is now
    /// muted.
    pub fn toggle_mute(&mut self, today: NaiveDate) -> Result<bool> {
        let muted = self.state.mute_reminders_date == Some(today);
        let next = if muted { None } else { Some(today) };
        self.update(StateUpdate::MuteRemindersDate(next))?;
        Ok(!muted)
    }

    // Academics

    pub fn add_academic_log(&mut self, input: NewAcademicLog) -> Result<String> {
        let log = AcademicLog {
            id: new_id(),
            date: input.date,
            subject: require("subject", &input.subject)?,
            topic: require("topic", &input.topic)?,
            intel: require("intel", &input.intel)?,
            time_spent: input.time_spent,
        };
        let id = log.id.clone();
        let mut logs = vec![log];
        logs.extend(self.state.academic_logs.iter().cloned());
        self.update(StateUpdate::AcademicLogs(logs))?;
        Ok(id)
    }

    pub fn delete_academic_log(&mut self, id: &str) -> Result<()> {
        let logs = self.state.academic_logs.iter().filter(|l| l.id != id).cloned().collect();
        self.update(StateUpdate::AcademicLogs(logs))
    }

    /// Plan a study session for the day after `today`.
    pub fn add_academic_plan(&mut self, subject: &str, topic: &str, today: NaiveDate) -> Result<String> {
        let date = today.succ_opt().ok_or_else(|| ValidationError::InvalidValue {
            field: "date",
            message: format!("no day after {today}"),
        })?;
        let plan = AcademicPlan {
            id: new_id(),
            date,
            subject: require("subject", subject)?,
            topic: require("topic", topic)?,
        };
        let id = plan.id.clone();
        let mut plans = vec![plan];
        plans.extend(self.state.academic_plans.iter().cloned());
        self.update(StateUpdate::AcademicPlans(plans))?;
        Ok(id)
    }

    pub fn delete_academic_plan(&mut self, id: &str) -> Result<()> {
        let plans = self.state.academic_plans.iter().filter(|p| p.id != id).cloned().collect();
        self.update(StateUpdate::AcademicPlans(plans))
    }

    // Settings

    /// Returns the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        let dark = !self.state.dark_mode;
        self.update(StateUpdate::DarkMode(dark))?;
        Ok(dark)
    }
}

fn not_found(collection: &'static str, id: &str) -> ValidationError {
    ValidationError::NotFound {
        collection,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::storage::MemoryStorage;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn store() -> StateStore<MemoryStorage> {
        StateStore::open(MemoryStorage::new())
    }

    #[test]
    fn open_without_blob_uses_defaults() {
        let store = store();
        assert_eq!(store.state(), &AppState::default());
        assert_eq!(store.storage().writes(), 0);
    }

    #[test]
    fn open_with_garbage_uses_defaults() {
        let store = StateStore::open(MemoryStorage::with_blob("]]]"));
        assert_eq!(store.state(), &AppState::default());
    }

    #[test]
    fn garbage_is_backed_up_before_first_write() {
        let mut store = StateStore::open(MemoryStorage::with_blob(r#"{"smallGoals": 7}"#));
        assert!(store.storage().backup_blob().is_none());

        store.toggle_dark_mode().unwrap();
        store.toggle_dark_mode().unwrap();
        assert_eq!(store.storage().backup_blob(), Some(r#"{"smallGoals": 7}"#));
        assert_eq!(store.storage().writes(), 2);
    }

    #[test]
    fn every_update_writes_whole_state() {
        let mut store = store();
        store.set_screen_time_limit(90).unwrap();
        store.toggle_dark_mode().unwrap();
        assert_eq!(store.storage().writes(), 2);

        let reloaded = StateStore::open(store.into_storage());
        assert_eq!(reloaded.state().screen_time_limit, 90);
        assert!(reloaded.state().dark_mode);
    }

    #[test]
    fn new_goals_are_prepended() {
        let mut store = store();
        let first = store.add_small_goal("first").unwrap();
        let second = store.add_small_goal("second").unwrap();
        let ids: Vec<&str> = store.state().small_goals.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, [second.as_str(), first.as_str()]);
    }

    #[test]
    fn blank_name_is_rejected_without_writing() {
        let mut store = store();
        let err = store.add_small_goal("  ").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MissingField { field: "name" })
        ));
        assert_eq!(store.storage().writes(), 0);
        assert!(store.state().small_goals.is_empty());
    }

    #[test]
    fn toggle_and_delete_small_goal() {
        let mut store = store();
        let id = store.add_small_goal("stretch").unwrap();
        assert!(store.toggle_small_goal(&id).unwrap());
        assert!(!store.toggle_small_goal(&id).unwrap());
        store.delete_small_goal(&id).unwrap();
        assert!(store.state().small_goals.is_empty());
    }

    #[test]
    fn toggle_unknown_goal_is_not_found() {
        let mut store = store();
        assert!(matches!(
            store.toggle_small_goal("nope"),
            Err(CoreError::Validation(ValidationError::NotFound { .. }))
        ));
    }

    #[test]
    fn long_goal_progress_clamps_and_learnings_prepend() {
        let mut store = store();
        let id = store.add_long_goal("Marathon").unwrap();
        store.set_long_goal_progress(&id, 250).unwrap();
        store.add_learning(&id, day("2024-01-01"), "pace yourself").unwrap();
        store.add_learning(&id, day("2024-01-02"), "hydrate").unwrap();

        let goal = &store.state().long_goals[0];
        assert_eq!(goal.progress, 100);
        assert_eq!(goal.learnings[0].intel, "hydrate");
        assert_eq!(goal.learnings[1].intel, "pace yourself");
    }

    #[test]
    fn same_day_fitness_is_replaced() {
        let mut store = store();
        let entry = |pushups| DailyFitness {
            date: day("2024-01-01"),
            pushups,
            pullups: 1,
            plank: 30,
            notes: String::new(),
        };
        store.record_daily_fitness(entry(5)).unwrap();
        store.record_daily_fitness(entry(10)).unwrap();
        assert_eq!(store.state().fitness_history.len(), 1);
        assert_eq!(store.state().fitness_history[0].pushups, 10);
    }

    #[test]
    fn journal_requires_lesson_and_content() {
        let mut store = store();
        let input = NewJournalEntry {
            date: day("2024-01-01"),
            lesson: "".into(),
            content: "text".into(),
            study_hours: 1.0,
        };
        assert!(store.add_journal_entry(input.clone()).is_err());

        let bad_hours = NewJournalEntry {
            lesson: "Lesson".into(),
            study_hours: -2.0,
            ..input.clone()
        };
        assert!(store.add_journal_entry(bad_hours).is_err());

        let ok = NewJournalEntry {
            lesson: "Lesson".into(),
            ..input
        };
        let id = store.add_journal_entry(ok).unwrap();
        assert_eq!(store.search_journal("LESS").len(), 1);
        store.delete_journal_entry(&id).unwrap();
        assert!(store.search_journal("").is_empty());
    }

    #[test]
    fn social_usage_deletes_by_id_not_position() {
        let mut store = store();
        let a = store.add_social_usage(Platform::X, 10, day("2024-01-01")).unwrap();
        let b = store.add_social_usage(Platform::TikTok, 20, day("2024-01-01")).unwrap();
        store.delete_social_usage(&a).unwrap();
        let remaining = &store.state().social_usage;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b);

        // Deleting again is a no-op
        store.delete_social_usage(&a).unwrap();
        assert_eq!(store.state().social_usage.len(), 1);
    }

    #[test]
    fn zero_minutes_rejected() {
        let mut store = store();
        assert!(store.add_social_usage(Platform::Other, 0, day("2024-01-01")).is_err());
    }

    #[test]
    fn mute_toggles_for_today_only() {
        let mut store = store();
        let today = day("2024-02-02");
        assert!(store.toggle_mute(today).unwrap());
        assert_eq!(store.state().mute_reminders_date, Some(today));
        assert!(!store.toggle_mute(today).unwrap());
        assert_eq!(store.state().mute_reminders_date, None);

        // A stale mute from yesterday is replaced, not cleared
        store.update(StateUpdate::MuteRemindersDate(Some(day("2024-02-01")))).unwrap();
        assert!(store.toggle_mute(today).unwrap());
        assert_eq!(store.state().mute_reminders_date, Some(today));
    }

    #[test]
    fn plans_are_dated_tomorrow() {
        let mut store = store();
        let id = store.add_academic_plan("Math", "Series", day("2024-02-29")).unwrap();
        let plan = &store.state().academic_plans[0];
        assert_eq!(plan.id, id);
        assert_eq!(plan.date, day("2024-03-01"));
        store.delete_academic_plan(&id).unwrap();
        assert!(store.state().academic_plans.is_empty());
    }

    #[test]
    fn academic_log_requires_all_text_fields() {
        let mut store = store();
        let input = NewAcademicLog {
            date: day("2024-02-02"),
            subject: "Chemistry".into(),
            topic: "Bonds".into(),
            intel: " ".into(),
            time_spent: 40,
        };
        assert!(matches!(
            store.add_academic_log(input.clone()),
            Err(CoreError::Validation(ValidationError::MissingField { field: "intel" }))
        ));
        let id = store
            .add_academic_log(NewAcademicLog {
                intel: "covalent vs ionic".into(),
                ..input
            })
            .unwrap();
        store.delete_academic_log(&id).unwrap();
        assert!(store.state().academic_logs.is_empty());
    }
}
