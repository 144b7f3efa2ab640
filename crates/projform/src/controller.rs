#![forbid(unsafe_code)]

//! The form controller: capture, validate, then emit-and-clear or notify-and-retain.
//!
//! Every submission is evaluated from scratch. All three fields are checked
//! (no short-circuit) so the [`ValidationReport`] names each failing field,
//! but the user only ever sees the one generic notification.

use std::fmt;

use projform_validate::{ValidationError, errors};
use tracing::{debug, info, warn};

use crate::config::FormRules;
use crate::event::SubmitEvent;
use crate::field::{FieldCapture, FieldId, FieldSource, FormFields, TextField, parse_people};
use crate::notify::Notifier;
use crate::sink::{OutputSink, ProjectInput};

/// Controller lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for a submission.
    #[default]
    Idle,
    /// Inside [`FormController::submit`].
    Submitting,
}

/// One field that failed, with every rule it broke.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    /// The failing input.
    pub field: FieldId,
    /// Failed rules, in descriptor order. Never empty.
    pub errors: Vec<ValidationError>,
}

/// Which fields failed a submission attempt, and why.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    failures: Vec<FieldFailure>,
}

impl ValidationReport {
    /// Returns `true` if no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failed fields, in form order.
    #[must_use]
    pub fn failed_fields(&self) -> Vec<FieldId> {
        self.failures.iter().map(|f| f.field).collect()
    }

    /// Whether a specific field failed.
    #[must_use]
    pub fn failed(&self, id: FieldId) -> bool {
        self.failures.iter().any(|f| f.field == id)
    }

    /// Every failure, in form order.
    #[must_use]
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// The rules a field broke; empty if it passed.
    #[must_use]
    pub fn errors_for(&self, id: FieldId) -> &[ValidationError] {
        self.failures
            .iter()
            .find(|f| f.field == id)
            .map(|f| f.errors.as_slice())
            .unwrap_or_default()
    }
}

/// Renders as `field=code,code field=code`.
impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}=", failure.field)?;
            for (j, err) in failure.errors.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                f.write_str(err.code())?;
            }
        }
        Ok(())
    }
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// All fields passed; the output was emitted and the inputs cleared.
    Submitted(ProjectInput),
    /// At least one field failed; the user was notified and inputs kept.
    Rejected(ValidationReport),
}

impl SubmitOutcome {
    /// Returns `true` for [`SubmitOutcome::Submitted`].
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    /// The emitted output, if any.
    #[must_use]
    pub fn output(&self) -> Option<&ProjectInput> {
        match self {
            Self::Submitted(output) => Some(output),
            Self::Rejected(_) => None,
        }
    }

    /// The failure report, if any.
    #[must_use]
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Submitted(_) => None,
            Self::Rejected(report) => Some(report),
        }
    }
}

/// Orchestrates submissions for one project form.
pub struct FormController<N, S, F = TextField> {
    fields: FormFields<F>,
    rules: FormRules,
    notifier: N,
    sink: S,
    phase: Phase,
    attempts: u64,
}

impl<N, S> FormController<N, S, TextField>
where
    N: Notifier,
    S: OutputSink,
{
    /// Create a controller over empty in-memory fields with default rules.
    #[must_use]
    pub fn new(notifier: N, sink: S) -> Self {
        Self::with_fields(FormFields::default(), notifier, sink)
    }
}

impl<N, S, F> FormController<N, S, F>
where
    N: Notifier,
    S: OutputSink,
    F: FieldSource,
{
    /// Create a controller over the given input sources with default rules.
    #[must_use]
    pub fn with_fields(fields: FormFields<F>, notifier: N, sink: S) -> Self {
        Self {
            fields,
            rules: FormRules::default(),
            notifier,
            sink,
            phase: Phase::Idle,
            attempts: 0,
        }
    }

    /// Replace the rules (builder).
    #[must_use]
    pub fn rules(mut self, rules: FormRules) -> Self {
        self.rules = rules;
        self
    }

    /// Active rules.
    #[must_use]
    pub fn current_rules(&self) -> &FormRules {
        &self.rules
    }

    /// The input sources.
    #[must_use]
    pub fn fields(&self) -> &FormFields<F> {
        &self.fields
    }

    /// The input sources, for whatever UI is editing them.
    pub fn fields_mut(&mut self) -> &mut FormFields<F> {
        &mut self.fields
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of submission attempts handled so far.
    #[must_use]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// The sink receiving validated output.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The notifier used on validation failure.
    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Handle one submission event end to end.
    ///
    /// Never fails: invalid input resolves to a notification and
    /// [`SubmitOutcome::Rejected`].
    pub fn submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();
        self.phase = Phase::Submitting;
        self.attempts += 1;

        let outcome = match self.gather_user_input() {
            Ok(output) => {
                info!(attempt = self.attempts, people = output.people, "submission accepted");
                self.sink.emit(output.clone());
                self.fields.clear();
                SubmitOutcome::Submitted(output)
            }
            Err(report) => {
                for failure in report.failures() {
                    for err in &failure.errors {
                        debug!(field = %failure.field, code = err.code(), "{err}");
                    }
                }
                warn!(attempt = self.attempts, failed = %report, "submission rejected");
                self.notifier.notify(&self.rules.invalid_message);
                SubmitOutcome::Rejected(report)
            }
        };

        self.phase = Phase::Idle;
        outcome
    }

    /// Validate the current inputs without emitting, notifying or clearing.
    #[must_use]
    pub fn check(&self) -> ValidationReport {
        let capture = self.fields.capture();
        self.report_for(&capture)
    }

    fn gather_user_input(&self) -> Result<ProjectInput, ValidationReport> {
        let capture = self.fields.capture();
        debug!(
            title_len = capture.title.len(),
            description_len = capture.description.len(),
            people_raw = %capture.people_raw,
            "captured form input"
        );

        let report = self.report_for(&capture);
        if !report.is_valid() {
            return Err(report);
        }

        let people = parse_people(&capture.people_raw);
        Ok(ProjectInput {
            title: capture.title,
            description: capture.description,
            people,
        })
    }

    fn report_for(&self, capture: &FieldCapture) -> ValidationReport {
        let failures = FieldId::ALL
            .into_iter()
            .filter_map(|field| {
                let broken = errors(&self.rules.constraints_for(field, capture));
                (!broken.is_empty()).then_some(FieldFailure {
                    field,
                    errors: broken,
                })
            })
            .collect();
        ValidationReport { failures }
    }
}
