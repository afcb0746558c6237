//! # formcheck-dom
//!
//! The presentation half of the formcheck inline validation engine.
//!
//! This crate provides:
//! - [`Document`], an in-memory element tree standing in for the host DOM
//! - [`FormLayout`], the accessor capability resolving labels and
//!   message containers
//! - [`ErrorPresenter`], the marker and banner state machine
//! - [`FocusState`], the focus coordinator
//! - [`FormController`], the submit/change trigger surface
//!
//! The rule engine itself lives in `formcheck-core`; everything here
//! consumes its outcomes and mutates presentation state.
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck_dom::{Document, FormController};
//!
//! let mut doc = Document::new();
//! let form = doc.create_element("form");
//! let wrapper = doc.create_element("div");
//! let label = doc.create_element("label");
//! doc.set_text(label, "Email");
//! let email = doc.create_element("input");
//! doc.set_attr(email, "type", "email");
//! doc.set_attr(email, "value", "not-an-email");
//! doc.append_child(form, wrapper);
//! doc.append_child(wrapper, label);
//! doc.append_child(wrapper, email);
//!
//! let mut controller = FormController::new();
//! let valid = controller.submit(&mut doc, form).unwrap();
//!
//! assert!(!valid);
//! assert!(doc.has_class(email, formcheck_dom::FIELD_ERROR_CLASS));
//! assert_eq!(controller.focus().focused(), Some(email));
//! ```

mod capture;
mod controller;
mod error;
mod focus;
mod layout;
mod presenter;
mod tree;

pub use capture::{capture, is_field};
pub use controller::FormController;
pub use error::{FormError, Result};
pub use focus::FocusState;
pub use layout::{FormLayout, SiblingLabelLayout};
pub use presenter::{
    ErrorPresenter, FIELD_ERROR_CLASS, FIELD_MESSAGE_CLASS, FORM_ERROR_CLASS, FORM_SUCCESS_CLASS,
};
pub use tree::{Document, NodeId};
