//! Application state container.
//!
//! [`AppState`] is the single aggregate of every record collection and
//! setting. [`StateStore`] owns it, applies [`StateUpdate`]s one whole field
//! at a time, and writes the full aggregate back through a
//! [`crate::storage::StateStorage`] after each one.

mod app_state;
mod store;

pub use app_state::{AppState, StateField, StateUpdate};
pub use store::{NewAcademicLog, NewJournalEntry, StateStore};
