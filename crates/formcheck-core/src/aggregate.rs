//! Whole-form aggregation over the dispatcher.

use tracing::info;

use crate::dispatch::Dispatcher;
use crate::field::FieldData;
use crate::outcome::AggregateResult;

impl Dispatcher {
    /// Validates every field in order and collects the outcomes.
    ///
    /// Every field is visited even after a failure; the output preserves
    /// field order, one entry per field. The reduction to a single
    /// verdict is [`AggregateResult::is_valid`].
    pub fn aggregate<'a, I>(&self, fields: I) -> AggregateResult
    where
        I: IntoIterator<Item = &'a FieldData>,
    {
        let result: AggregateResult = fields
            .into_iter()
            .map(|field| self.dispatch(field))
            .collect();

        info!(
            fields = result.len(),
            valid = result.is_valid(),
            "aggregate validation finished"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;

    #[test]
    fn test_empty_form_is_valid() {
        let dispatcher = Dispatcher::new();
        let result = dispatcher.aggregate([]);
        assert!(result.is_valid());
        assert!(result.is_empty());
    }

    #[test]
    fn test_failure_does_not_abort_siblings() {
        let dispatcher = Dispatcher::new();
        let fields = vec![
            FieldData::new(FieldKind::Email, "bad"),
            FieldData::new(FieldKind::Text, "ab").min_length(5).label("Name"),
            FieldData::new(FieldKind::Email, "ok@example.com"),
        ];

        let result = dispatcher.aggregate(&fields);
        assert!(!result.is_valid());
        assert_eq!(result.len(), 3);

        // Every field got its own outcome, in order.
        let validity: Vec<Option<bool>> =
            result.iter().map(|o| o.map(|o| o.valid)).collect();
        assert_eq!(validity, vec![Some(false), Some(false), Some(true)]);
    }

    #[test]
    fn test_unclassified_fields_do_not_fail_the_form() {
        let dispatcher = Dispatcher::new();
        let fields = vec![
            FieldData::new(FieldKind::Email, "ok@example.com"),
            FieldData::new(FieldKind::Text, "free text"),
            FieldData::new(FieldKind::Generic, "on"),
        ];

        let result = dispatcher.aggregate(&fields);
        assert!(result.is_valid());
        assert_eq!(result.iter().filter(|o| o.is_none()).count(), 2);
    }
}
