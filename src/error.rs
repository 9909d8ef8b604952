//! Error taxonomy for binding and element access.

use thiserror::Error;

use crate::dispatch::MemberId;

/// The one-time member resolution failed, sorting never started.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("collection has no '{name}' member")]
    UnknownMember { name: &'static str },
}

/// A single getter or setter invocation was refused by the collection.
///
/// Never retried; the first one aborts the sort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("member id {member:?} is not invocable on this collection")]
    UnknownMember { member: MemberId },

    #[error("'{member}' expects {expected} argument(s), got {actual}")]
    InvalidArity {
        member: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("'{member}' rejected an argument: expected {expected}, got {actual}")]
    InvalidArgument {
        member: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("index {index} out of bounds for collection of length {len}")]
    OutOfBounds { index: i64, len: usize },

    #[error("collection rejected the call: {message}")]
    Rejected { message: String },
}

/// What the sort entry points return on failure.
///
/// On an [`Access`] failure the collection keeps whatever partial
/// permutation existed at that point, there is no rollback.
///
/// [`Access`]: SortError::Access
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("binding the element accessor failed")]
    Bind(#[from] BindError),

    #[error("element access failed during sorting")]
    Access(#[from] AccessError),
}
