//! Rule evaluators: pure predicates over field snapshots.

use regex::Regex;

use crate::field::{FieldData, FieldKind};
use crate::outcome::{ValidationOutcome, ViolationKind};

/// Anchored ASCII email pattern, matched case-insensitively against the
/// whole raw value.
const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@([A-Z0-9-]+\.)+[A-Z]{2,4}$";

/// Minimum length of a phone number after stripping non-dial characters.
pub const PHONE_MIN_LENGTH: usize = 9;

const EMAIL_MESSAGE: &str = "Email address is not valid";
const PHONE_MESSAGE: &str = "Phone number is not valid";

/// Trait for rule evaluators.
///
/// A rule first declares whether it applies to a field at all; the
/// dispatcher only calls [`Rule::evaluate`] on the first rule that does.
pub trait Rule: Send + Sync {
    /// Returns whether this rule knows how to validate the field.
    fn applies(&self, field: &FieldData) -> bool;

    /// Validates the field. Only meaningful when [`Rule::applies`] is true.
    fn evaluate(&self, field: &FieldData) -> ValidationOutcome;
}

/// Validates `email` fields against the anchored email pattern.
#[derive(Debug, Clone)]
pub struct EmailRule {
    pattern: Regex,
}

impl EmailRule {
    /// Creates a new `EmailRule`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(EMAIL_PATTERN).expect("email pattern compiles"),
        }
    }
}

impl Default for EmailRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for EmailRule {
    fn applies(&self, field: &FieldData) -> bool {
        field.kind == FieldKind::Email
    }

    fn evaluate(&self, field: &FieldData) -> ValidationOutcome {
        if self.pattern.is_match(&field.value) {
            ValidationOutcome::pass()
        } else {
            ValidationOutcome::fail(ViolationKind::InvalidFormat, EMAIL_MESSAGE)
        }
    }
}

/// Validates phone fields by digit count.
///
/// Strips every character that is not a digit or `+`, then requires the
/// cleaned value to be at least [`PHONE_MIN_LENGTH`] characters. The
/// minimum and the kept character set are fixed, not configurable.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneRule;

impl PhoneRule {
    /// Creates a new `PhoneRule`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PhoneRule {
    fn applies(&self, field: &FieldData) -> bool {
        field.kind == FieldKind::Phone
    }

    fn evaluate(&self, field: &FieldData) -> ValidationOutcome {
        let cleaned: String = field
            .value
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();

        if cleaned.chars().count() >= PHONE_MIN_LENGTH {
            ValidationOutcome::pass()
        } else {
            ValidationOutcome::fail(ViolationKind::InvalidLength, PHONE_MESSAGE)
        }
    }
}

/// Validates fields with declared length bounds.
///
/// Bounds are inclusive. With only a minimum the value must be at least
/// that long, with only a maximum at most that long. A field that
/// declares neither bound fails vacuously; the dispatcher never routes
/// such a field here.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthRule;

impl LengthRule {
    /// Creates a new `LengthRule`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for LengthRule {
    fn applies(&self, field: &FieldData) -> bool {
        field.has_length_bounds()
    }

    fn evaluate(&self, field: &FieldData) -> ValidationOutcome {
        let length = field.value.chars().count();

        let ok = match (field.min_length, field.max_length) {
            (Some(min), Some(max)) => length >= min && length <= max,
            (Some(min), None) => length >= min,
            (None, Some(max)) => length <= max,
            (None, None) => false,
        };

        if ok {
            return ValidationOutcome::pass();
        }

        // With both bounds declared, all three clauses are appended
        // back to back.
        let mut message = format!("{} must be ", field.label_text());
        if let Some(min) = field.min_length {
            message.push_str(&format!("over {min} characters long."));
        }
        if let Some(max) = field.max_length {
            message.push_str(&format!("under {max} characters long."));
        }
        if let (Some(min), Some(max)) = (field.min_length, field.max_length) {
            message.push_str(&format!("between {min} and {max} characters long."));
        }

        ValidationOutcome::fail(ViolationKind::InvalidLength, message)
    }
}
