//! Field snapshots consumed by the rule engine.

use serde::{Deserialize, Serialize};

/// The validation-relevant kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Plain text input or textarea.
    Text,
    /// `type="email"` input.
    Email,
    /// Field tagged `data-validation="phone"`.
    Phone,
    /// Anything else (checkbox, submit, ...).
    Generic,
}

impl FieldKind {
    /// Derives the kind from the declared `type` attribute and the
    /// `data-validation` hint.
    ///
    /// An `email` type wins over a phone hint, matching dispatch priority.
    /// A missing type attribute means a plain text field (textareas carry
    /// no `type` at all, and `<input>` defaults to text).
    #[must_use]
    pub fn from_declared(input_type: Option<&str>, validation: Option<&str>) -> Self {
        match input_type {
            Some("email") => Self::Email,
            _ if validation == Some("phone") => Self::Phone,
            Some("text") | None => Self::Text,
            Some(_) => Self::Generic,
        }
    }
}

/// A read-only snapshot of one form field.
///
/// This is everything a rule evaluator is allowed to see: the kind, the
/// current value, the declared length bounds, and the label text used to
/// phrase length messages. The underlying element stays with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldData {
    /// Validation-relevant kind.
    pub kind: FieldKind,
    /// Current string value.
    pub value: String,
    /// Declared `data-min-length`, if any.
    pub min_length: Option<usize>,
    /// Declared `data-max-length`, if any.
    pub max_length: Option<usize>,
    /// Text of the field's label, if one exists.
    pub label: Option<String>,
}

impl FieldData {
    /// Creates a snapshot with no declared constraints.
    #[must_use]
    pub fn new(kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            min_length: None,
            max_length: None,
            label: None,
        }
    }

    /// Declares a minimum length bound.
    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Declares a maximum length bound.
    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns whether either length bound is declared.
    #[must_use]
    pub fn has_length_bounds(&self) -> bool {
        self.min_length.is_some() || self.max_length.is_some()
    }

    /// Label text used when phrasing messages. Falls back to a generic
    /// prefix for fields without a label.
    #[must_use]
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or("This field")
    }
}
