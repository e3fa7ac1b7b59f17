//! User-facing notifications emitted by form flows

/// Receiver of short user-facing messages (toasts in the UI)
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// Sink that drops every message
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl NotificationSink for NoopSink {
    fn notify(&mut self, _message: &str) {}
}

/// Collects messages in memory
impl NotificationSink for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
