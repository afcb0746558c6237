//! Snapshot extraction: reads a field element into [`FieldData`].

use formcheck_core::{FieldData, FieldKind};

use crate::error::{FormError, Result};
use crate::layout::FormLayout;
use crate::tree::{Document, NodeId};

/// Returns whether the element is subject to validation at all.
#[must_use]
pub fn is_field(doc: &Document, id: NodeId) -> bool {
    matches!(doc.tag(id), "input" | "textarea")
}

/// Reads the validation-relevant state of a field element.
///
/// Length bounds come from `data-min-length`/`data-max-length`; a value
/// that does not parse as an integer is treated as undeclared. The label
/// text is resolved through the layout capability.
pub fn capture(doc: &Document, field: NodeId, layout: &dyn FormLayout) -> Result<FieldData> {
    if !is_field(doc, field) {
        return Err(FormError::NotAField {
            id: field,
            tag: doc.tag(field).to_string(),
        });
    }

    let kind = FieldKind::from_declared(
        doc.attr(field, "type"),
        doc.attr(field, "data-validation"),
    );

    let mut data = FieldData::new(kind, doc.attr(field, "value").unwrap_or_default());

    if let Some(min) = parse_bound(doc.attr(field, "data-min-length")) {
        data = data.min_length(min);
    }
    if let Some(max) = parse_bound(doc.attr(field, "data-max-length")) {
        data = data.max_length(max);
    }
    if let Some(label) = layout.label_of(doc, field) {
        data = data.label(doc.text(label));
    }

    Ok(data)
}

fn parse_bound(attr: Option<&str>) -> Option<usize> {
    attr.and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SiblingLabelLayout;

    fn labeled_input(doc: &mut Document) -> NodeId {
        let div = doc.create_element("div");
        let label = doc.create_element("label");
        doc.set_text(label, "Name");
        let input = doc.create_element("input");
        doc.append_child(div, label);
        doc.append_child(div, input);
        input
    }

    #[test]
    fn test_capture_email_input() {
        let mut doc = Document::new();
        let input = labeled_input(&mut doc);
        doc.set_attr(input, "type", "email");
        doc.set_attr(input, "value", "a@b.co");

        let data = capture(&doc, input, &SiblingLabelLayout).unwrap();
        assert_eq!(data.kind, FieldKind::Email);
        assert_eq!(data.value, "a@b.co");
        assert_eq!(data.label.as_deref(), Some("Name"));
    }

    #[test]
    fn test_capture_phone_hint() {
        let mut doc = Document::new();
        let input = labeled_input(&mut doc);
        doc.set_attr(input, "type", "text");
        doc.set_attr(input, "data-validation", "phone");

        let data = capture(&doc, input, &SiblingLabelLayout).unwrap();
        assert_eq!(data.kind, FieldKind::Phone);
    }

    #[test]
    fn test_capture_length_bounds() {
        let mut doc = Document::new();
        let input = labeled_input(&mut doc);
        doc.set_attr(input, "data-min-length", "2");
        doc.set_attr(input, "data-max-length", "10");

        let data = capture(&doc, input, &SiblingLabelLayout).unwrap();
        assert_eq!(data.min_length, Some(2));
        assert_eq!(data.max_length, Some(10));
    }

    #[test]
    fn test_non_numeric_bound_is_undeclared() {
        let mut doc = Document::new();
        let input = labeled_input(&mut doc);
        doc.set_attr(input, "data-min-length", "abc");

        let data = capture(&doc, input, &SiblingLabelLayout).unwrap();
        assert_eq!(data.min_length, None);
        assert!(!data.has_length_bounds());
    }

    #[test]
    fn test_textarea_is_a_text_field() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        let area = doc.create_element("textarea");
        doc.append_child(div, area);

        let data = capture(&doc, area, &SiblingLabelLayout).unwrap();
        assert_eq!(data.kind, FieldKind::Text);
        assert_eq!(data.value, "");
    }

    #[test]
    fn test_capture_rejects_non_field() {
        let mut doc = Document::new();
        let div = doc.create_element("div");

        let err = capture(&doc, div, &SiblingLabelLayout).unwrap_err();
        assert_eq!(
            err,
            FormError::NotAField {
                id: div,
                tag: "div".to_string()
            }
        );
    }
}
