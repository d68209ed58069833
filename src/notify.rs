//! Blocking user notifications (the page's `alert`).

use colored::Colorize;
use std::sync::{Mutex, PoisonError};

pub trait Notifier: Send + Sync + 'static {
    /// Show `message` to the user and return once it has been delivered.
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }
}

/// Keeps every alert in memory, in the order raised
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.alert("first");
        notifier.alert("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }
}
