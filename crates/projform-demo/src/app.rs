#![forbid(unsafe_code)]

//! Wiring for the demo: one controller, one bound form, stdin-driven input.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use projform::{
    FieldId, FieldSource, FormController, FormElement, FormRules, Notifier, OutputSink,
    ProjectInput, SharedController, SubmitOutcome, TextField, bind_submit_with, share,
};
use tracing::{debug, error};

use crate::cli::OutputFormat;

/// Typing this on any prompt ends the interactive session.
pub const QUIT_COMMAND: &str = ":q";

/// Writes each record to a shared writer, one per line.
pub struct WriterSink<W: Write> {
    out: Rc<RefCell<W>>,
    format: OutputFormat,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: Rc<RefCell<W>>, format: OutputFormat) -> Self {
        Self { out, format }
    }

    fn write(&self, output: &ProjectInput) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        match self.format {
            OutputFormat::Plain => writeln!(
                out,
                "{}\t{}\t{}",
                output.title, output.description, output.people
            )?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, output)?;
                writeln!(out)?;
            }
        }
        out.flush()
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, output: ProjectInput) {
        if let Err(err) = self.write(&output) {
            error!(%err, "failed to write output");
        }
    }
}

/// The application: owns the controller and the form it is bound to.
pub struct App<N, W: Write> {
    form: FormElement,
    controller: SharedController<N, WriterSink<W>, TextField>,
    last_outcome: Rc<RefCell<Option<SubmitOutcome>>>,
}

impl<N, W> App<N, W>
where
    N: Notifier + 'static,
    W: Write + 'static,
{
    /// Build the controller, bind it to a fresh form and keep both.
    pub fn new(notifier: N, out: Rc<RefCell<W>>, format: OutputFormat, rules: FormRules) -> Self {
        let controller = share(
            FormController::new(notifier, WriterSink::new(out, format)).rules(rules),
        );
        let last_outcome = Rc::new(RefCell::new(None));

        let mut form = FormElement::new("user-input");
        {
            let last_outcome = Rc::clone(&last_outcome);
            bind_submit_with(&mut form, &controller, move |outcome| {
                *last_outcome.borrow_mut() = Some(outcome.clone());
            });
        }

        Self {
            form,
            controller,
            last_outcome,
        }
    }

    /// Set one input.
    pub fn set(&self, id: FieldId, value: &str) {
        self.controller.borrow_mut().fields_mut().set(id, value);
    }

    /// Current value of one input.
    pub fn value(&self, id: FieldId) -> String {
        self.controller.borrow().fields().get(id).value().to_string()
    }

    /// Fire a submission through the bound form.
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        let event = self.form.dispatch_submit();
        debug!(default_prevented = event.default_prevented(), "submit dispatched");
        self.last_outcome.borrow_mut().take()
    }

    /// Submit once with the given values.
    pub fn run_once(&mut self, title: &str, description: &str, people: &str) -> Option<SubmitOutcome> {
        self.set(FieldId::Title, title);
        self.set(FieldId::Description, description);
        self.set(FieldId::People, people);
        self.submit()
    }

    /// Prompt for each field, submit, repeat until EOF or [`QUIT_COMMAND`].
    ///
    /// An empty answer keeps the field's current value, so after a rejection
    /// only the wrong fields need retyping. Returns the number of accepted
    /// submissions.
    pub fn run_interactive<R: BufRead, P: Write>(
        &mut self,
        input: &mut R,
        prompt: &mut P,
    ) -> io::Result<usize> {
        let mut accepted = 0;
        loop {
            for id in FieldId::ALL {
                let current = self.value(id);
                if current.is_empty() {
                    write!(prompt, "{}: ", id.label())?;
                } else {
                    write!(prompt, "{} [{}]: ", id.label(), current)?;
                }
                prompt.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Ok(accepted);
                }
                let line = line.trim_end_matches(['\r', '\n']);
                if line == QUIT_COMMAND {
                    return Ok(accepted);
                }
                if !line.is_empty() {
                    self.set(id, line);
                }
            }

            if self.submit().is_some_and(|o| o.is_submitted()) {
                accepted += 1;
            }
        }
    }
}
