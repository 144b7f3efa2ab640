#![forbid(unsafe_code)]

//! End-to-end tests for the submission flow.
//!
//! These tests drive the controller through a bound [`FormElement`], the way
//! an application wires it, covering:
//!
//! - Valid submission: one emission, all inputs cleared
//! - Invalid submission: one notification, no emission, inputs retained
//! - Length and numeric boundaries
//! - Serialized output shape
//!
//! # Invariants
//!
//! 1. **All or nothing**: a submission either emits exactly once and clears
//!    every input, or emits nothing and clears nothing.
//! 2. **Single message**: every rejection produces the same notification.
//! 3. **Default suppressed**: every dispatched event has its default
//!    prevented, whatever the outcome.
//!
//! Run: `cargo test -p projform --test submit_flow_e2e`

use std::cell::RefCell;
use std::rc::Rc;

use projform::{
    FieldId, FieldSource, FormController, FormElement, INVALID_INPUT_MESSAGE, ProjectInput,
    SubmitOutcome, ValidationReport, bind_submit_with, parse_people, share,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

type Notes = Rc<RefCell<Vec<String>>>;
type Emitted = Rc<RefCell<Vec<ProjectInput>>>;
type Outcomes = Rc<RefCell<Vec<SubmitOutcome>>>;

struct Harness {
    form: FormElement,
    controller: projform::SharedController<
        Box<dyn FnMut(&str)>,
        Box<dyn FnMut(ProjectInput)>,
        projform::TextField,
    >,
    notes: Notes,
    emitted: Emitted,
    outcomes: Outcomes,
}

impl Harness {
    fn new() -> Self {
        let notes: Notes = Rc::default();
        let emitted: Emitted = Rc::default();
        let outcomes: Outcomes = Rc::default();

        let notifier: Box<dyn FnMut(&str)> = {
            let notes = Rc::clone(&notes);
            Box::new(move |m: &str| notes.borrow_mut().push(m.to_string()))
        };
        let sink: Box<dyn FnMut(ProjectInput)> = {
            let emitted = Rc::clone(&emitted);
            Box::new(move |o: ProjectInput| emitted.borrow_mut().push(o))
        };

        let controller = share(FormController::new(notifier, sink));
        let mut form = FormElement::new("user-input");
        {
            let outcomes = Rc::clone(&outcomes);
            bind_submit_with(&mut form, &controller, move |o| {
                outcomes.borrow_mut().push(o.clone());
            });
        }

        Self {
            form,
            controller,
            notes,
            emitted,
            outcomes,
        }
    }

    fn fill(&self, title: &str, description: &str, people: &str) {
        let mut c = self.controller.borrow_mut();
        c.fields_mut().set(FieldId::Title, title);
        c.fields_mut().set(FieldId::Description, description);
        c.fields_mut().set(FieldId::People, people);
    }

    fn submit(&mut self) -> SubmitOutcome {
        let event = self.form.dispatch_submit();
        assert!(event.default_prevented(), "default must be prevented");
        self.outcomes
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(|| panic!("no outcome recorded"))
    }

    fn value(&self, id: FieldId) -> String {
        self.controller.borrow().fields().get(id).value().to_string()
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn valid_submission_emits_once_and_clears() {
    let mut h = Harness::new();
    h.fill("Build a shed", "A small shed", "3");

    let outcome = h.submit();

    assert!(outcome.is_submitted());
    let emitted = h.emitted.borrow();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].as_tuple(), ("Build a shed", "A small shed", 3.0));
    for id in FieldId::ALL {
        assert_eq!(h.value(id), "", "{id} should be cleared");
    }
    assert!(h.notes.borrow().is_empty());
}

#[test]
fn empty_title_notifies_and_retains() {
    let mut h = Harness::new();
    h.fill("", "ok", "2");

    let outcome = h.submit();

    assert!(!outcome.is_submitted());
    assert!(outcome.report().is_some_and(|r| r.failed(FieldId::Title)));
    assert!(h.emitted.borrow().is_empty());
    assert_eq!(*h.notes.borrow(), vec![INVALID_INPUT_MESSAGE.to_string()]);
    assert_eq!(h.value(FieldId::Description), "ok");
    assert_eq!(h.value(FieldId::People), "2");
}

#[test]
fn short_description_is_rejected() {
    let mut h = Harness::new();
    h.fill("T", "shrt", "2");
    let outcome = h.submit();
    assert_eq!(
        outcome.report().map(ValidationReport::failed_fields),
        Some(vec![FieldId::Description])
    );
    assert_eq!(h.notes.borrow().len(), 1);
}

#[test]
fn rejection_report_carries_rule_codes() {
    let mut h = Harness::new();
    h.fill("Build a shed", "shrt", "many");
    let outcome = h.submit();

    let report = outcome.report().cloned().unwrap_or_else(|| panic!("expected rejection"));
    assert_eq!(report.to_string(), "description=too_short people=too_small,too_large");
    assert_eq!(report.errors_for(FieldId::Description)[0].found, "4");
    assert!(report.errors_for(FieldId::Title).is_empty());
    assert_eq!(h.notes.borrow().len(), 1);
}

#[test]
fn description_of_exactly_five_passes() {
    let mut h = Harness::new();
    h.fill("T", "short", "2");
    assert!(h.submit().is_submitted());
}

#[test]
fn people_boundaries() {
    let mut h = Harness::new();
    for (raw, ok) in [("1", true), ("5", true), ("0", false), ("6", false)] {
        h.fill("T", "A small shed", raw);
        assert_eq!(h.submit().is_submitted(), ok, "people={raw}");
    }
    assert_eq!(h.emitted.borrow().len(), 2);
    assert_eq!(h.notes.borrow().len(), 2);
}

#[test]
fn correction_after_rejection() {
    let mut h = Harness::new();
    h.fill("Build a shed", "A small shed", "9");
    assert!(!h.submit().is_submitted());
    assert_eq!(h.value(FieldId::Title), "Build a shed");

    h.controller
        .borrow_mut()
        .fields_mut()
        .set(FieldId::People, "4");
    assert!(h.submit().is_submitted());
    assert_eq!(h.emitted.borrow()[0].people, 4.0);
    assert_eq!(h.controller.borrow().attempts(), 2);
}

#[test]
fn output_serializes_as_object() {
    let mut h = Harness::new();
    h.fill("Build a shed", "A small shed", "3");
    let outcome = h.submit();
    let output = outcome.output().cloned().unwrap_or_else(|| panic!("expected output"));

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "title": "Build a shed",
            "description": "A small shed",
            "people": 3.0
        })
    );
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn all_or_nothing(
        title in "[ a-z]{0,8}",
        description in "[ a-z]{0,10}",
        people in prop_oneof!["[0-7]", "[0-9]\\.[0-9]", "[a-z ]{0,3}"],
    ) {
        let mut h = Harness::new();
        h.fill(&title, &description, &people);
        let outcome = h.submit();

        let emitted = h.emitted.borrow().len();
        let notes = h.notes.borrow().len();
        if outcome.is_submitted() {
            prop_assert_eq!((emitted, notes), (1, 0));
            for id in FieldId::ALL {
                prop_assert_eq!(h.value(id), "");
            }
            let out = outcome.output().cloned().unwrap_or_else(|| panic!("output"));
            prop_assert_eq!(out.people, parse_people(&people));
            prop_assert!((1.0..=5.0).contains(&out.people));
        } else {
            prop_assert_eq!((emitted, notes), (0, 1));
            prop_assert_eq!(h.value(FieldId::Title), title);
            prop_assert_eq!(h.value(FieldId::Description), description);
            prop_assert_eq!(h.value(FieldId::People), people);
        }
    }
}
