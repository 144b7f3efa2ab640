#![forbid(unsafe_code)]

//! Wiring submission events to a controller.
//!
//! A [`FormElement`] invokes its listeners as detached closures. Binding
//! captures a shared handle to the controller once, so the listener always
//! submits through that controller no matter who calls it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::warn;

use crate::controller::{FormController, SubmitOutcome};
use crate::event::SubmitEvent;
use crate::field::FieldSource;
use crate::notify::Notifier;
use crate::sink::OutputSink;

/// A registered submission listener.
pub type SubmitListener = Box<dyn FnMut(&mut SubmitEvent)>;

/// A controller shared between the application and its event listeners.
pub type SharedController<N, S, F> = Rc<RefCell<FormController<N, S, F>>>;

/// Wrap a controller for binding.
#[must_use]
pub fn share<N, S, F>(controller: FormController<N, S, F>) -> SharedController<N, S, F> {
    Rc::new(RefCell::new(controller))
}

/// An in-memory submission event target.
#[derive(Default)]
pub struct FormElement {
    id: String,
    listeners: Vec<SubmitListener>,
}

impl FormElement {
    /// Create a form element with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            listeners: Vec::new(),
        }
    }

    /// Element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Register a listener for submission events.
    pub fn add_submit_listener(&mut self, listener: impl FnMut(&mut SubmitEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Fire one submission event through every listener, in registration order.
    ///
    /// Returns the event so the caller can see whether the default action
    /// was suppressed.
    pub fn dispatch_submit(&mut self) -> SubmitEvent {
        let mut event = SubmitEvent::new();
        for listener in &mut self.listeners {
            listener(&mut event);
        }
        event
    }
}

impl fmt::Debug for FormElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormElement")
            .field("id", &self.id)
            .field("listeners", &format!("[{} listeners]", self.listeners.len()))
            .finish()
    }
}

/// Attach `controller.submit` to the form's submission event.
pub fn bind_submit<N, S, F>(form: &mut FormElement, controller: &SharedController<N, S, F>)
where
    N: Notifier + 'static,
    S: OutputSink + 'static,
    F: FieldSource + 'static,
{
    bind_submit_with(form, controller, |_| {});
}

/// Like [`bind_submit`], also passing every outcome to `on_outcome`.
///
/// The event's default is suppressed on every dispatch. A submission that
/// arrives while the controller is already borrowed (for example from inside
/// its own sink) is then dropped with a warning: nothing is validated,
/// emitted or notified, and `on_outcome` is not called.
pub fn bind_submit_with<N, S, F, O>(
    form: &mut FormElement,
    controller: &SharedController<N, S, F>,
    mut on_outcome: O,
) where
    N: Notifier + 'static,
    S: OutputSink + 'static,
    F: FieldSource + 'static,
    O: FnMut(&SubmitOutcome) + 'static,
{
    let controller = Rc::clone(controller);
    form.add_submit_listener(move |event| {
        event.prevent_default();
        let outcome = match controller.try_borrow_mut() {
            Ok(mut controller) => controller.submit(event),
            Err(_) => {
                warn!("submission ignored: controller busy");
                return;
            }
        };
        on_outcome(&outcome);
    });
}
