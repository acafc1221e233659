//! Error types for keyswitch.
//!
//! The engine reports only its own failures:
//!
//! - [`DispatchError`] - Top-level error for build and resolve operations
//! - [`MalformedRegistrations`] - Shape errors in a flat registration sequence
//!
//! Errors raised by caller-supplied classifiers and handlers never pass through
//! these types. They reach the caller exactly as the caller produced them.

use thiserror::Error;

/// A boxed error type for callers that erase their handler errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by the dispatch engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError<K> {
    /// The registration sequence could not be paired into cases and handlers.
    #[error("malformed registrations: {0}")]
    Malformed(#[from] MalformedRegistrations<K>),

    /// A case name was registered twice on a table built with
    /// [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject).
    #[error("duplicate case {0:?} rejected by strict table")]
    DuplicateCase(K),

    /// The classifier produced a case name with no registered handler.
    #[error("unmatched case: {0:?}")]
    UnmatchedCase(K),
}

impl<K> DispatchError<K> {
    /// Returns true if this is an [`UnmatchedCase`](Self::UnmatchedCase) error.
    pub fn is_unmatched(&self) -> bool {
        matches!(self, DispatchError::UnmatchedCase(_))
    }

    /// Returns true if the registration sequence was malformed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, DispatchError::Malformed(_))
    }

    /// The case name this error is about, if it names one.
    pub fn case(&self) -> Option<&K> {
        match self {
            DispatchError::Malformed(MalformedRegistrations::UnpairedCase { case, .. })
            | DispatchError::DuplicateCase(case)
            | DispatchError::UnmatchedCase(case) => Some(case),
            DispatchError::Malformed(MalformedRegistrations::OrphanHandler { .. }) => None,
        }
    }

    /// Convert the carried case name, e.g. to an owned `String` before boxing.
    pub fn map_case<K2>(self, f: impl FnOnce(K) -> K2) -> DispatchError<K2> {
        match self {
            DispatchError::Malformed(MalformedRegistrations::UnpairedCase { case, position }) => {
                MalformedRegistrations::UnpairedCase {
                    case: f(case),
                    position,
                }
                .into()
            }
            DispatchError::Malformed(MalformedRegistrations::OrphanHandler { position }) => {
                MalformedRegistrations::OrphanHandler { position }.into()
            }
            DispatchError::DuplicateCase(case) => DispatchError::DuplicateCase(f(case)),
            DispatchError::UnmatchedCase(case) => DispatchError::UnmatchedCase(f(case)),
        }
    }
}

/// Shape errors in a flat `case, handler, case, handler, ...` sequence.
///
/// Positions are zero-based token indices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRegistrations<K> {
    /// A case name was not followed by a handler.
    #[error("case {case:?} at position {position} has no paired handler")]
    UnpairedCase {
        /// The unpaired case name.
        case: K,
        /// Token index of the case name.
        position: usize,
    },

    /// A handler appeared where a case name was expected.
    #[error("handler at position {position} has no preceding case name")]
    OrphanHandler {
        /// Token index of the handler.
        position: usize,
    },
}
