use chrono::NaiveDate;

use super::{Notification, NotificationKind, NotificationPermission, Notifier};
use crate::stats::{has_studied, today_usage};
use crate::AppState;

/// Over-limit alert for `today`, unless today is muted.
///
/// Nothing here remembers that the alert already fired: every call while
/// usage stays over the limit yields another alert.
pub fn screen_time_alert(state: &AppState, today: NaiveDate) -> Option<Notification> {
    if state.mute_reminders_date == Some(today) {
        return None;
    }

    let usage = today_usage(&state.social_usage, today);
    if usage <= state.screen_time_limit {
        return None;
    }

    Some(Notification {
        kind: NotificationKind::ScreenTime,
        title: "YOUR TIME IS OVER".to_string(),
        body: format!(
            "Screen limit of {}m exceeded. Current: {usage}m. Disconnect now.",
            state.screen_time_limit
        ),
    })
}

/// Study prompt for `today` if nothing has been studied yet.
///
/// Mentions the first plan dated today when there is one.
pub fn study_reminder(state: &AppState, today: NaiveDate) -> Option<Notification> {
    if has_studied(state, today) {
        return None;
    }

    let body = match state.academic_plans.iter().find(|p| p.date == today) {
        Some(plan) => format!(
            "You planned to study {} ({}) today. Execute your plan now.",
            plan.subject, plan.topic
        ),
        None => "No study logs detected for today. Engage your goals immediately.".to_string(),
    };

    Some(Notification {
        kind: NotificationKind::StudyReminder,
        title: "ACADEMIC ALERT".to_string(),
        body,
    })
}

/// Date the study reminder last fired in this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionMarker {
    study_reminder_sent: Option<NaiveDate>,
}

impl SessionMarker {
    /// Marker restored from a previous run.
    pub fn sent_on(date: Option<NaiveDate>) -> Self {
        Self {
            study_reminder_sent: date,
        }
    }

    pub fn study_reminder_sent(&self) -> Option<NaiveDate> {
        self.study_reminder_sent
    }
}

/// Runs both reminder checks against a state snapshot.
///
/// Holds the session marker, so one evaluator should live as long as the
/// session it de-duplicates for.
#[derive(Debug, Default)]
pub struct ReminderEvaluator {
    marker: SessionMarker,
}

impl ReminderEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue a session whose marker was saved elsewhere.
    pub fn with_marker(marker: SessionMarker) -> Self {
        Self { marker }
    }

    pub fn marker(&self) -> SessionMarker {
        self.marker
    }

    /// Pending notifications for `today`.
    ///
    /// Returns nothing without granted permission. The study reminder is
    /// returned at most once per date.
    pub fn evaluate(
        &mut self,
        state: &AppState,
        today: NaiveDate,
        permission: NotificationPermission,
    ) -> Vec<Notification> {
        if permission != NotificationPermission::Granted {
            return Vec::new();
        }

        let mut pending = Vec::new();
        if let Some(alert) = screen_time_alert(state, today) {
            pending.push(alert);
        }

        if self.marker.study_reminder_sent != Some(today) {
            if let Some(reminder) = study_reminder(state, today) {
                self.marker.study_reminder_sent = Some(today);
                pending.push(reminder);
            }
        }

        tracing::debug!(%today, pending = pending.len(), "evaluated reminders");
        pending
    }

    /// Evaluate and hand every pending notification to `notifier`.
    ///
    /// Returns how many were sent.
    pub fn deliver<N: Notifier + ?Sized>(
        &mut self,
        state: &AppState,
        today: NaiveDate,
        notifier: &mut N,
    ) -> usize {
        let pending = self.evaluate(state, today, notifier.permission());
        for notification in &pending {
            notifier.notify(notification);
        }
        pending.len()
    }
}
