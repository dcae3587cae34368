//! Screen-time and study reminders.
//!
//! Deciding that a reminder is due is separate from delivering it: the
//! [`ReminderEvaluator`] returns pending [`Notification`]s and a
//! [`Notifier`] sends them.

mod evaluator;

pub use evaluator::{screen_time_alert, study_reminder, ReminderEvaluator, SessionMarker};

use serde::{Deserialize, Serialize};

/// Whether the user allows notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPermission {
    Granted,
    Denied,
    /// Never asked.
    #[default]
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ScreenTime,
    StudyReminder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

/// Delivery channel for notifications.
///
/// Delivery is fire-and-forget: implementations log failures and carry on.
pub trait Notifier {
    /// Current permission as reported by the host.
    fn permission(&self) -> NotificationPermission;

    /// Ask the host for permission and return the answer.
    fn request_permission(&mut self) -> NotificationPermission;

    fn notify(&mut self, notification: &Notification);
}
