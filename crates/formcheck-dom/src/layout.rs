//! The accessor capability resolving a field's label and message host.
//!
//! Alternate markup layouts plug in here without touching the presenter.

use crate::tree::{Document, NodeId};

/// Resolves the structural relations around a field.
pub trait FormLayout: Send + Sync {
    /// The label element associated with a field, if any.
    fn label_of(&self, doc: &Document, field: NodeId) -> Option<NodeId>;

    /// The element that hosts the field's error message.
    fn error_container(&self, doc: &Document, field: NodeId) -> Option<NodeId>;
}

/// Default layout: the label is the first `label`-tagged child of the
/// field's parent, and the parent itself hosts the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiblingLabelLayout;

impl FormLayout for SiblingLabelLayout {
    fn label_of(&self, doc: &Document, field: NodeId) -> Option<NodeId> {
        let parent = doc.parent(field)?;
        doc.children(parent)
            .iter()
            .copied()
            .find(|&child| doc.tag(child) == "label")
    }

    fn error_container(&self, doc: &Document, field: NodeId) -> Option<NodeId> {
        doc.parent(field)
    }
}
