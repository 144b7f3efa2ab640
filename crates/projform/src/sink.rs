#![forbid(unsafe_code)]

//! Validated output and the consumers it is handed to.

use serde::Serialize;

/// The normalized record emitted after a fully valid submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectInput {
    /// Title exactly as entered.
    pub title: String,
    /// Description exactly as entered.
    pub description: String,
    /// Parsed people count, within the configured bounds.
    pub people: f64,
}

impl ProjectInput {
    /// Ordered `(title, description, people)` view.
    #[must_use]
    pub fn as_tuple(&self) -> (&str, &str, f64) {
        (&self.title, &self.description, self.people)
    }
}

impl From<ProjectInput> for (String, String, f64) {
    fn from(input: ProjectInput) -> Self {
        (input.title, input.description, input.people)
    }
}

/// Downstream consumer of validated output.
///
/// Receives each record exactly once and is expected to take ownership;
/// the controller keeps nothing.
pub trait OutputSink {
    /// Take one validated record.
    fn emit(&mut self, output: ProjectInput);
}

impl<F> OutputSink for F
where
    F: FnMut(ProjectInput),
{
    fn emit(&mut self, output: ProjectInput) {
        self(output);
    }
}

/// Sink that records each output as an `info!` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl OutputSink for LogSink {
    fn emit(&mut self, output: ProjectInput) {
        tracing::info!(
            title = %output.title,
            description = %output.description,
            people = output.people,
            "project input submitted"
        );
    }
}
