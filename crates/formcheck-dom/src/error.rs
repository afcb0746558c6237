//! Error types for the presentation layer.

use thiserror::Error;

use crate::tree::NodeId;

/// Faults from misusing the document-facing API.
///
/// Validation failures are never represented here; they flow through
/// [`formcheck_core::ValidationOutcome`] as data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A submit or change target that is not an input or textarea.
    #[error("node {id:?} is a <{tag}>, not a form field")]
    NotAField {
        /// The offending node.
        id: NodeId,
        /// Its tag.
        tag: String,
    },
}

/// Result type alias for presentation operations.
pub type Result<T> = std::result::Result<T, FormError>;
