//! # formcheck-core
//!
//! The pure half of the formcheck inline validation engine.
//!
//! This crate provides:
//! - Rule evaluators for email format, phone digit count, and length bounds
//! - A dispatcher that picks the one rule applying to a field
//! - An aggregator that reduces per-field outcomes to a whole-form verdict
//!
//! Nothing in this crate touches a document. Rules operate on [`FieldData`]
//! snapshots and return [`ValidationOutcome`] values; rendering those
//! outcomes as inline error state is the job of `formcheck-dom`.
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck_core::{Dispatcher, FieldData, FieldKind};
//!
//! let dispatcher = Dispatcher::new();
//!
//! let email = FieldData::new(FieldKind::Email, "a@b.co");
//! let outcome = dispatcher.dispatch(&email).unwrap();
//! assert!(outcome.valid);
//!
//! let phone = FieldData::new(FieldKind::Phone, "555-1234");
//! let outcome = dispatcher.dispatch(&phone).unwrap();
//! assert_eq!(outcome.message.as_deref(), Some("Phone number is not valid"));
//! ```
//!
//! ## Whole-form aggregation
//!
//! ```rust
//! use formcheck_core::{Dispatcher, FieldData, FieldKind};
//!
//! let dispatcher = Dispatcher::new();
//! let fields = vec![
//!     FieldData::new(FieldKind::Email, "user@example.com"),
//!     // No rule applies to a bare text field; it is vacuously valid.
//!     FieldData::new(FieldKind::Text, "anything"),
//! ];
//!
//! let result = dispatcher.aggregate(&fields);
//! assert!(result.is_valid());
//! ```

mod aggregate;
mod dispatch;
mod field;
mod outcome;
pub mod rules;

pub use dispatch::Dispatcher;
pub use field::{FieldData, FieldKind};
pub use outcome::{AggregateResult, ValidationOutcome, ViolationKind};
pub use rules::{EmailRule, LengthRule, PhoneRule, Rule};
