//! The form controller: the trigger surface that ties dispatch,
//! presentation, and focus together for one form.

use formcheck_core::Dispatcher;
use tracing::debug;

use crate::capture::capture;
use crate::error::Result;
use crate::focus::FocusState;
use crate::layout::FormLayout;
use crate::presenter::ErrorPresenter;
use crate::tree::{Document, NodeId};

/// Handles submit attempts and field-change notifications.
///
/// The host wiring is expected to suppress default submission
/// unconditionally and call [`FormController::submit`]; a change
/// notification on a single field goes to [`FormController::change`].
#[derive(Debug, Default)]
pub struct FormController {
    dispatcher: Dispatcher,
    presenter: ErrorPresenter,
    focus: FocusState,
}

impl FormController {
    /// Creates a controller with the built-in rules and default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller with a custom layout capability.
    #[must_use]
    pub fn with_layout(layout: impl FormLayout + 'static) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            presenter: ErrorPresenter::with_layout(layout),
            focus: FocusState::new(),
        }
    }

    /// Focus and scroll state after the last submit.
    #[must_use]
    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    /// Whole-form validation on a submit attempt.
    ///
    /// Visits every field in form order, updates each field's marker,
    /// then either inserts the error banner and focuses the first
    /// failing field, or shows success. Returns the aggregate verdict.
    pub fn submit(&mut self, doc: &mut Document, form: NodeId) -> Result<bool> {
        let fields = collect_fields(doc, form);
        debug!(?form, fields = fields.len(), "submit validation");

        let mut snapshots = Vec::with_capacity(fields.len());
        for &field in &fields {
            snapshots.push(capture(doc, field, self.presenter.layout())?);
        }

        let result = self.dispatcher.aggregate(&snapshots);
        for (&field, outcome) in fields.iter().zip(result.iter()) {
            self.presenter.apply(doc, field, outcome);
        }

        if result.is_valid() {
            self.presenter.show_form_success(doc, form);
        } else {
            self.presenter.show_form_error(doc, form);
            self.focus.focus_first_error(doc, form);
        }

        Ok(result.is_valid())
    }

    /// Single-field validation on a change notification.
    ///
    /// Never touches the form banner. Returns whether the field passed
    /// (an unclassified field passes vacuously).
    pub fn change(&mut self, doc: &mut Document, field: NodeId) -> Result<bool> {
        let snapshot = capture(doc, field, self.presenter.layout())?;
        let outcome = self.dispatcher.dispatch(&snapshot);
        let valid = !matches!(&outcome, Some(o) if !o.valid);
        self.presenter.apply(doc, field, outcome.as_ref());
        Ok(valid)
    }
}

/// Fields of the form: every `input` descendant, then every `textarea`
/// descendant. The two tag lists are collected separately, not merged
/// into strict document order.
fn collect_fields(doc: &Document, form: NodeId) -> Vec<NodeId> {
    let mut fields = doc.descendants_with_tag(form, "input");
    fields.extend(doc.descendants_with_tag(form, "textarea"));
    fields
}
