use crate::domain::notification::Notification;
use crate::domain::ports::Notifier;

/// Notifier that renders toasts on stderr, one line each, so they never mix
/// with data written to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn display(&self, notification: Notification) {
        eprintln!(
            "[{}] {}: {}",
            notification.severity, notification.title, notification.message
        );
    }
}
