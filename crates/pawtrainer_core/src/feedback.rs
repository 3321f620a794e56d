//! Fire-and-forget feedback collaborators: notifications and the clicker.
//!
//! # Invariants
//! - Feedback failures never change tracker state or timer behavior.
//! - Callers go through `notify_best_effort`/`click_best_effort`, which log
//!   and drop errors.

use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Notification text sent when a countdown completes.
pub const SESSION_COMPLETE_MESSAGE: &str = "Training session complete! 🎉";

/// Feedback delivery failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// The user or platform refused the capability.
    PermissionDenied,
    /// No backend for this feedback kind exists on the host.
    Unsupported,
    Delivery(String),
}

impl Display for FeedbackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::Unsupported => write!(f, "capability unsupported"),
            Self::Delivery(message) => write!(f, "delivery failed: {message}"),
        }
    }
}

impl Error for FeedbackError {}

/// Posts a short user-visible notification.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str) -> Result<(), FeedbackError>;
}

/// Plays the training clicker sound.
pub trait Clicker: Send + Sync {
    fn click(&self) -> Result<(), FeedbackError>;
}

/// Notifier that records notifications in the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) -> Result<(), FeedbackError> {
        info!(
            "event=notification module=feedback status=ok chars={}",
            message.chars().count()
        );
        Ok(())
    }
}

/// Notifier for hosts without notification support.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &str) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Message sent when the random picker selects a cue.
pub fn practice_message(cue_name: &str) -> String {
    format!("Practice: {cue_name}")
}

/// Delivers a notification, logging and discarding any failure.
pub fn notify_best_effort(notifier: &dyn Notifier, message: &str) {
    if let Err(err) = notifier.notify(message) {
        warn!("event=notification module=feedback status=dropped error={err}");
    }
}

/// Plays the clicker, logging and discarding any failure.
pub fn click_best_effort(clicker: &dyn Clicker) {
    if let Err(err) = clicker.click() {
        warn!("event=clicker module=feedback status=dropped error={err}");
    }
}
