//! Validation outcomes and their whole-form reduction.

use serde::{Deserialize, Serialize};

/// Classification of a validation failure.
///
/// Failures are data, not faults: a field that does not validate is
/// reported through these values, never through `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// The value does not match the expected format (email pattern).
    InvalidFormat,
    /// The value has the wrong length (phone digit count, length bounds).
    InvalidLength,
}

/// Result of applying one rule to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the field passed.
    pub valid: bool,
    /// Human-readable message, present on failure.
    pub message: Option<String>,
    /// Failure classification, present on failure.
    pub kind: Option<ViolationKind>,
}

impl ValidationOutcome {
    /// A passing outcome.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
            kind: None,
        }
    }

    /// A failing outcome with a message.
    #[must_use]
    pub fn fail(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
            kind: Some(kind),
        }
    }
}

/// Ordered per-field outcomes for one aggregate validation run.
///
/// A `None` entry is a field no rule classified; it does not count
/// against validity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    outcomes: Vec<Option<ValidationOutcome>>,
}

impl AggregateResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the outcome for the next field in form order.
    pub fn push(&mut self, outcome: Option<ValidationOutcome>) {
        self.outcomes.push(outcome);
    }

    /// True iff no entry is an explicit failure.
    ///
    /// An empty result is vacuously valid, and unclassified (`None`)
    /// entries never fail.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self
            .outcomes
            .iter()
            .any(|outcome| matches!(outcome, Some(o) if !o.valid))
    }

    /// Number of fields visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether any field was visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterates outcomes in field order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&ValidationOutcome>> {
        self.outcomes.iter().map(Option::as_ref)
    }
}

impl FromIterator<Option<ValidationOutcome>> for AggregateResult {
    fn from_iter<I: IntoIterator<Item = Option<ValidationOutcome>>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}
