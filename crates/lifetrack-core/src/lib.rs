//! # lifetrack Core Library
//!
//! Business logic for a single-user life tracker: goals, workouts, study
//! sessions, screen time and a journal. The `lifetrack` CLI is a thin layer
//! over this crate; nothing here renders anything.
//!
//! ## Architecture
//!
//! - **Records**: flat domain entities, replaced a whole collection at a time
//! - **Stats**: pure percentage and motivation functions over the records
//! - **State**: the [`AppState`] aggregate and the [`StateStore`] that
//!   persists it through a [`StateStorage`] port after every change
//! - **Reminders**: an evaluator that decides which notifications are due
//! - **Grammar**: a narrow boundary to an external grammar-check service
//!
//! ## Key Components
//!
//! - [`StateStore`]: typed updates plus persistence
//! - [`DashboardSummary`]: every derived figure for one snapshot
//! - [`ReminderEvaluator`]: screen-time and study reminders
//! - [`Config`]: application configuration management

pub mod error;
pub mod grammar;
pub mod records;
pub mod reminders;
pub mod state;
pub mod stats;
pub mod storage;

pub use error::{ConfigError, CoreError, GrammarError, StorageError, ValidationError};
pub use grammar::{check_journal_grammar, GeminiChecker, GrammarChecker, GrammarFeedback, GrammarVerdict};
pub use records::{
    AcademicLog, AcademicPlan, DailyFitness, FitnessTargets, GoalLearning, JournalEntry, LongGoal,
    Platform, Priority, SmallGoal, SocialUsage,
};
pub use reminders::{
    Notification, NotificationKind, NotificationPermission, Notifier, ReminderEvaluator, SessionMarker,
};
pub use state::{AppState, NewAcademicLog, NewJournalEntry, StateField, StateStore, StateUpdate};
pub use stats::{DashboardSummary, FitnessReadiness, MotivationTier, ProgressBand};
pub use storage::{Config, FileStorage, MemoryStorage, SqliteStorage, StateStorage};
