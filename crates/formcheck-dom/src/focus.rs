//! The focus coordinator: moves focus and scroll to the first failing
//! field after a failed whole-form validation.

use tracing::debug;

use crate::presenter::FIELD_ERROR_CLASS;
use crate::tree::{Document, NodeId};

/// Tracks the focus and scroll requests made by the validation flow.
///
/// The host environment owns real focus and smooth scrolling; this
/// records which element should receive them.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<NodeId>,
    scroll_target: Option<NodeId>,
}

impl FocusState {
    /// Creates a new state with nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently focused element.
    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// The element last requested to be scrolled into view.
    #[must_use]
    pub fn scroll_target(&self) -> Option<NodeId> {
        self.scroll_target
    }

    /// Programmatically focuses an element. Returns true if focus changed.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if self.focused == Some(id) {
            return false;
        }
        self.focused = Some(id);
        true
    }

    /// Clears focus. Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focuses the first error-marked element within the form, in tree
    /// order, and requests it scrolled into view.
    ///
    /// Explicit no-op returning `None` when no element carries the
    /// error class.
    pub fn focus_first_error(&mut self, doc: &Document, form: NodeId) -> Option<NodeId> {
        let Some(target) = doc.first_descendant_with_class(form, FIELD_ERROR_CLASS) else {
            debug!(?form, "no error-marked element to focus");
            return None;
        };

        self.focus(target);
        self.scroll_target = Some(target);
        debug!(?target, "focused first failing field");
        Some(target)
    }
}
