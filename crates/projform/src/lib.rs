#![forbid(unsafe_code)]

//! Project input form: capture three fields, validate them, then either
//! emit a [`ProjectInput`] and clear the inputs or notify the user and keep
//! the inputs for correction.
//!
//! # Example
//!
//! ```rust
//! use projform::{FieldId, FieldSource, FormController, ProjectInput, SubmitEvent};
//!
//! let mut emitted = Vec::new();
//! let mut controller = FormController::new(|_: &str| {}, |o: ProjectInput| emitted.push(o));
//! controller.fields_mut().set(FieldId::Title, "Build a shed");
//! controller.fields_mut().set(FieldId::Description, "A small shed");
//! controller.fields_mut().set(FieldId::People, "3");
//!
//! let outcome = controller.submit(&mut SubmitEvent::new());
//! assert!(outcome.is_submitted());
//! assert_eq!(controller.fields().title.value(), "");
//! drop(controller);
//! assert_eq!(emitted.len(), 1);
//! ```

pub mod binder;
pub mod config;
pub mod controller;
pub mod event;
pub mod field;
pub mod notify;
pub mod sink;

pub use binder::{FormElement, SharedController, bind_submit, bind_submit_with, share};
pub use config::{ConfigError, ConfigParse, FormRules};
pub use controller::{FieldFailure, FormController, Phase, SubmitOutcome, ValidationReport};
pub use event::SubmitEvent;
pub use field::{FieldCapture, FieldId, FieldSource, FormFields, TextField, parse_people};
pub use notify::{INVALID_INPUT_MESSAGE, LogNotifier, Notifier};
pub use sink::{LogSink, OutputSink, ProjectInput};

pub use projform_validate as validate;
