//! Recording alert sink for tests.

use super::Notifier;

#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    alerts: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn last(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
