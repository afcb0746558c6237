//! Field dispatch: selects the one rule that applies to a field.

use tracing::debug;

use crate::field::FieldData;
use crate::outcome::ValidationOutcome;
use crate::rules::{EmailRule, LengthRule, PhoneRule, Rule};

/// Routes a field to the first rule that applies to it.
///
/// The built-in priority order is email, phone, length; a field matching
/// none of them is not validated at all and the dispatcher returns
/// `None`, which the aggregator treats as vacuously valid.
pub struct Dispatcher {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            rules: vec![
                Box::new(EmailRule::new()),
                Box::new(PhoneRule::new()),
                Box::new(LengthRule::new()),
            ],
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl Dispatcher {
    /// Creates a dispatcher with the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher with a custom rule set, checked in the given
    /// priority order.
    #[must_use]
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Validates one field with the first rule that applies.
    ///
    /// Returns `None` when no rule applies; the field is then not
    /// validated and must be treated as passing.
    pub fn dispatch(&self, field: &FieldData) -> Option<ValidationOutcome> {
        let rule = self.rules.iter().find(|rule| rule.applies(field))?;
        let outcome = rule.evaluate(field);
        debug!(kind = ?field.kind, valid = outcome.valid, "dispatched field");
        Some(outcome)
    }
}
