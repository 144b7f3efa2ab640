#![forbid(unsafe_code)]

//! Submission events.

/// One user-initiated submission gesture.
///
/// The host performs its default action (a full reload, in a browser) unless
/// a listener calls [`SubmitEvent::prevent_default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    /// Create a fresh event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the host's default submission behavior.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a listener suppressed the default behavior.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
