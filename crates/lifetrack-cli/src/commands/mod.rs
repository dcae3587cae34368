pub mod academic;
pub mod config;
pub mod dashboard;
pub mod fitness;
pub mod goal;
pub mod journal;
pub mod remind;
pub mod social;
pub mod theme;

use chrono::{NaiveDate, Utc};
use lifetrack_core::storage::{data_dir, StorageBackend};
use lifetrack_core::{
    Config, FileStorage, ReminderEvaluator, SessionMarker, SqliteStorage, StateStorage, StateStore,
    StorageError,
};
use serde::Serialize;

use crate::notifier::StdoutNotifier;

pub type Store = StateStore<Box<dyn StateStorage>>;

/// Open the state store on the configured backend.
pub fn open_store(config: &Config) -> Result<Store, StorageError> {
    let storage: Box<dyn StateStorage> = match config.storage.backend {
        StorageBackend::Sqlite => Box::new(SqliteStorage::open_default()?),
        StorageBackend::File => Box::new(FileStorage::open_default()?),
    };
    Ok(StateStore::open(storage))
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Date the study reminder last fired, shared by every invocation.
const MARKER_FILE: &str = "study_reminder_sent";

/// Evaluator carrying the study-reminder date saved by earlier runs.
pub fn load_evaluator() -> ReminderEvaluator {
    let sent = data_dir()
        .ok()
        .and_then(|dir| std::fs::read_to_string(dir.join(MARKER_FILE)).ok())
        .and_then(|text| text.trim().parse::<NaiveDate>().ok());
    ReminderEvaluator::with_marker(SessionMarker::sent_on(sent))
}

pub fn save_evaluator(evaluator: &ReminderEvaluator) {
    let Some(date) = evaluator.marker().study_reminder_sent() else {
        return;
    };
    let result = data_dir().and_then(|dir| {
        std::fs::write(dir.join(MARKER_FILE), date.to_string())
            .map_err(|e| StorageError::WriteFailed(e.to_string()))
    });
    if let Err(e) = result {
        tracing::warn!("could not record study reminder date: {e}");
    }
}

/// Re-run the reminder checks after a mutation.
pub fn after_mutation(config: &Config, store: &Store) {
    let mut notifier = StdoutNotifier::new(config.notifications.permission);
    let mut evaluator = load_evaluator();
    if evaluator.deliver(store.state(), today(), &mut notifier) > 0 {
        save_evaluator(&evaluator);
    }
}

/// Parse a `YYYY-MM-DD` argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    s.parse::<NaiveDate>()
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}
