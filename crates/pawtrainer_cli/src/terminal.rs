//! Terminal implementations of the feedback collaborators.

use pawtrainer_core::{Clicker, FeedbackError, LogNotifier, Notifier};
use std::io::Write;

/// Prints notifications to stderr and records them in the log.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) -> Result<(), FeedbackError> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "[notice] {message}")
            .map_err(|err| FeedbackError::Delivery(err.to_string()))?;
        LogNotifier.notify(message)
    }
}

/// Rings the terminal bell as the clicker sound.
pub struct TerminalClicker;

impl Clicker for TerminalClicker {
    fn click(&self) -> Result<(), FeedbackError> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(b"\x07click!\n")
            .and_then(|()| stdout.flush())
            .map_err(|err| FeedbackError::Delivery(err.to_string()))
    }
}
