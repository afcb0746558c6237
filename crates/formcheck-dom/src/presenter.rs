//! The error presenter: materializes validation outcomes as classes,
//! message nodes, and the form-level banner.

use formcheck_core::ValidationOutcome;
use tracing::debug;

use crate::layout::{FormLayout, SiblingLabelLayout};
use crate::tree::{Document, NodeId};

/// Class token marking an invalid field.
pub const FIELD_ERROR_CLASS: &str = "field--error";
/// Class token on the inline message node.
pub const FIELD_MESSAGE_CLASS: &str = "field--error__message";
/// Class token on the form-level error banner.
pub const FORM_ERROR_CLASS: &str = "form__error";
/// Class token on the form-level success banner.
pub const FORM_SUCCESS_CLASS: &str = "form__success";

const FORM_ERROR_TEXT: &str = "Error: please check fields below";
const FORM_SUCCESS_TEXT: &str = "Form submitted successfully";

/// Per-field and per-form presentation state machine.
///
/// Field states are `clean` and `error`; the transitions are driven by
/// [`ValidationOutcome`] values. Form states are `neutral`, `error`,
/// and `success`, materialized as a single banner element.
pub struct ErrorPresenter {
    layout: Box<dyn FormLayout>,
}

impl Default for ErrorPresenter {
    fn default() -> Self {
        Self {
            layout: Box::new(SiblingLabelLayout),
        }
    }
}

impl std::fmt::Debug for ErrorPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorPresenter").finish_non_exhaustive()
    }
}

impl ErrorPresenter {
    /// Creates a presenter with the default sibling-label layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a presenter with a custom layout capability.
    #[must_use]
    pub fn with_layout(layout: impl FormLayout + 'static) -> Self {
        Self {
            layout: Box::new(layout),
        }
    }

    /// The layout capability, shared with snapshot capture.
    #[must_use]
    pub fn layout(&self) -> &dyn FormLayout {
        self.layout.as_ref()
    }

    /// Applies one outcome to one field's marker state.
    ///
    /// An unclassified field (`None`) is left untouched: no rule looked
    /// at it, so no marker is attached or removed.
    pub fn apply(&self, doc: &mut Document, field: NodeId, outcome: Option<&ValidationOutcome>) {
        match outcome {
            None => {}
            Some(outcome) if outcome.valid => self.clear_error(doc, field),
            Some(outcome) => self.mark_error(doc, field, outcome.message.as_deref()),
        }
    }

    /// `clean -> error`: adds the error class and, at most once, the
    /// message node under the field's container.
    pub fn mark_error(&self, doc: &mut Document, field: NodeId, message: Option<&str>) {
        doc.add_class(field, FIELD_ERROR_CLASS);

        let Some(message) = message else { return };
        let Some(container) = self.layout.error_container(doc, field) else {
            return;
        };
        if doc
            .first_descendant_with_class(container, FIELD_MESSAGE_CLASS)
            .is_some()
        {
            // Already in the error state with a message node attached.
            return;
        }

        let node = doc.create_element("span");
        doc.set_text(node, message);
        doc.add_class(node, FIELD_MESSAGE_CLASS);
        doc.append_child(container, node);
        debug!(?field, message, "attached error marker");
    }

    /// `error -> clean`: removes the error class and the message node.
    pub fn clear_error(&self, doc: &mut Document, field: NodeId) {
        doc.remove_class(field, FIELD_ERROR_CLASS);

        if let Some(container) = self.layout.error_container(doc, field) {
            if let Some(message) = doc.first_descendant_with_class(container, FIELD_MESSAGE_CLASS)
            {
                doc.detach(message);
                debug!(?field, "removed error marker");
            }
        }
    }

    /// `neutral/success -> error`: ensures the error banner exists as
    /// the form's first child.
    pub fn show_form_error(&self, doc: &mut Document, form: NodeId) {
        if doc
            .first_descendant_with_class(form, FORM_ERROR_CLASS)
            .is_some()
        {
            return;
        }

        let banner = doc.create_element("span");
        doc.add_class(banner, FORM_ERROR_CLASS);
        doc.set_text(banner, FORM_ERROR_TEXT);
        doc.prepend_child(form, banner);
        debug!(?form, "inserted form error banner");
    }

    /// `* -> success`: converts an existing error banner in place.
    ///
    /// A form that never showed an error banner displays nothing on
    /// success.
    pub fn show_form_success(&self, doc: &mut Document, form: NodeId) {
        if let Some(banner) = doc.first_descendant_with_class(form, FORM_ERROR_CLASS) {
            doc.remove_class(banner, FORM_ERROR_CLASS);
            doc.add_class(banner, FORM_SUCCESS_CLASS);
            doc.set_text(banner, FORM_SUCCESS_TEXT);
            debug!(?form, "converted banner to success");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcheck_core::{ValidationOutcome, ViolationKind};

    fn failing(message: &str) -> ValidationOutcome {
        ValidationOutcome::fail(ViolationKind::InvalidFormat, message)
    }

    fn field_in_container(doc: &mut Document) -> (NodeId, NodeId) {
        let div = doc.create_element("div");
        let input = doc.create_element("input");
        doc.append_child(div, input);
        (div, input)
    }

    #[test]
    fn test_mark_error_attaches_class_and_message() {
        let mut doc = Document::new();
        let (div, input) = field_in_container(&mut doc);

        let presenter = ErrorPresenter::new();
        presenter.apply(&mut doc, input, Some(&failing("nope")));

        assert!(doc.has_class(input, FIELD_ERROR_CLASS));
        let message = doc
            .first_descendant_with_class(div, FIELD_MESSAGE_CLASS)
            .unwrap();
        assert_eq!(doc.text(message), "nope");
        assert_eq!(doc.tag(message), "span");
    }

    #[test]
    fn test_mark_error_is_idempotent() {
        let mut doc = Document::new();
        let (div, input) = field_in_container(&mut doc);

        let presenter = ErrorPresenter::new();
        presenter.mark_error(&mut doc, input, Some("nope"));
        presenter.mark_error(&mut doc, input, Some("nope"));

        let messages = doc
            .descendants(div)
            .into_iter()
            .filter(|&id| doc.has_class(id, FIELD_MESSAGE_CLASS))
            .count();
        assert_eq!(messages, 1);
    }

    #[test]
    fn test_passing_outcome_clears_marker() {
        let mut doc = Document::new();
        let (div, input) = field_in_container(&mut doc);

        let presenter = ErrorPresenter::new();
        presenter.mark_error(&mut doc, input, Some("nope"));
        presenter.apply(&mut doc, input, Some(&ValidationOutcome::pass()));

        assert!(!doc.has_class(input, FIELD_ERROR_CLASS));
        assert!(doc
            .first_descendant_with_class(div, FIELD_MESSAGE_CLASS)
            .is_none());
    }

    #[test]
    fn test_unclassified_outcome_leaves_state_alone() {
        let mut doc = Document::new();
        let (div, input) = field_in_container(&mut doc);

        let presenter = ErrorPresenter::new();
        presenter.mark_error(&mut doc, input, Some("nope"));
        presenter.apply(&mut doc, input, None);

        // The stale marker survives; no rule looked at the field.
        assert!(doc.has_class(input, FIELD_ERROR_CLASS));
        assert!(doc
            .first_descendant_with_class(div, FIELD_MESSAGE_CLASS)
            .is_some());
    }

    #[test]
    fn test_clear_error_without_marker_is_noop() {
        let mut doc = Document::new();
        let (_, input) = field_in_container(&mut doc);

        ErrorPresenter::new().clear_error(&mut doc, input);
        assert!(!doc.has_class(input, FIELD_ERROR_CLASS));
    }

    #[test]
    fn test_error_banner_created_once_as_first_child() {
        let mut doc = Document::new();
        let form = doc.create_element("form");
        let existing = doc.create_element("div");
        doc.append_child(form, existing);

        let presenter = ErrorPresenter::new();
        presenter.show_form_error(&mut doc, form);
        presenter.show_form_error(&mut doc, form);

        let banner = doc.children(form)[0];
        assert!(doc.has_class(banner, FORM_ERROR_CLASS));
        assert_eq!(doc.text(banner), "Error: please check fields below");

        let banners = doc
            .descendants(form)
            .into_iter()
            .filter(|&id| doc.has_class(id, FORM_ERROR_CLASS))
            .count();
        assert_eq!(banners, 1);
    }

    #[test]
    fn test_success_converts_error_banner_in_place() {
        let mut doc = Document::new();
        let form = doc.create_element("form");

        let presenter = ErrorPresenter::new();
        presenter.show_form_error(&mut doc, form);
        let banner = doc.children(form)[0];

        presenter.show_form_success(&mut doc, form);
        assert!(!doc.has_class(banner, FORM_ERROR_CLASS));
        assert!(doc.has_class(banner, FORM_SUCCESS_CLASS));
        assert_eq!(doc.text(banner), "Form submitted successfully");
    }

    #[test]
    fn test_success_without_prior_error_shows_nothing() {
        let mut doc = Document::new();
        let form = doc.create_element("form");

        ErrorPresenter::new().show_form_success(&mut doc, form);
        assert!(doc.children(form).is_empty());
    }
}
