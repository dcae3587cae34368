use lifetrack_core::{Notification, NotificationPermission, Notifier};

/// Prints notifications to stdout. Permission comes from the config file.
pub struct StdoutNotifier {
    permission: NotificationPermission,
}

impl StdoutNotifier {
    pub fn new(permission: NotificationPermission) -> Self {
        Self { permission }
    }
}

impl Notifier for StdoutNotifier {
    fn permission(&self) -> NotificationPermission {
        self.permission
    }

    /// Running `remind enable` is the user's answer, so the request is
    /// always granted.
    fn request_permission(&mut self) -> NotificationPermission {
        self.permission = NotificationPermission::Granted;
        self.permission
    }

    fn notify(&mut self, notification: &Notification) {
        tracing::info!(kind = ?notification.kind, "notification delivered");
        println!("[{}] {}", notification.title, notification.body);
    }
}
