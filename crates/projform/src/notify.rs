#![forbid(unsafe_code)]

//! Blocking user notifications.

/// Message shown when any field fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input — please try again.";

/// Presents a modal message to the user.
///
/// Implementations may block until the user acknowledges the message; the
/// controller does not look at any result.
pub trait Notifier {
    /// Show `message` to the user.
    fn notify(&mut self, message: &str);
}

impl<F> Notifier for F
where
    F: FnMut(&str),
{
    fn notify(&mut self, message: &str) {
        self(message);
    }
}

/// Notifier that only records the message as a `warn!` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        tracing::warn!(notification = message, "user notification");
    }
}
