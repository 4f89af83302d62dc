//! Error types for choice collections.
//!
//! Lookups never fail: an out-of-range or non-integer selector simply yields
//! `None`. The only hard failure is an attempt to break the relationship
//! between a collection's entries and its derived selectable view.

use thiserror::Error;

/// Errors returned by [`Choices`](crate::choices::Choices) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoicesError {
    /// A derived value was assigned directly instead of through its entries.
    #[error("cannot set `{field}` of a Choices collection (attempted {attempted})")]
    InvariantViolation {
        /// Name of the derived field the caller tried to assign.
        field: &'static str,
        /// The rejected value.
        attempted: usize,
    },
}

/// Result type for choice collection operations.
pub type Result<T> = std::result::Result<T, ChoicesError>;
