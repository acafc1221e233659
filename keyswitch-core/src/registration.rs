//! Registrations: the unit of input of the build phase.
//!
//! A registration pairs a case name with a handler. Sequences can be written
//! either as pairs ([`Registration`], usually via [`pair`]) or as a flat
//! alternating stream of [`Token`]s.

use crate::handler::{BoxHandler, Handler, boxed};
use std::fmt;

/// One `(case name, handler)` pair contributed to a dispatch table.
pub struct Registration<'a, K, R> {
    case: K,
    handler: BoxHandler<'a, R>,
}

impl<'a, K, R> Registration<'a, K, R> {
    /// Package a case name and a handler.
    pub fn new<H>(case: K, handler: H) -> Self
    where
        H: Handler<R> + 'a,
    {
        Self {
            case,
            handler: boxed(handler),
        }
    }

    /// The case name this registration answers to.
    pub fn case(&self) -> &K {
        &self.case
    }

    /// Split into the case name and the boxed handler.
    pub fn into_parts(self) -> (K, BoxHandler<'a, R>) {
        (self.case, self.handler)
    }
}

impl<'a, K, R, H> From<(K, H)> for Registration<'a, K, R>
where
    H: Handler<R> + 'a,
{
    fn from((case, handler): (K, H)) -> Self {
        Self::new(case, handler)
    }
}

impl<K: fmt::Debug, R> fmt::Debug for Registration<'_, K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("case", &self.case)
            .finish_non_exhaustive()
    }
}

/// Package a case name and a handler into a [`Registration`].
///
/// Performs no validation; duplicates are settled when the table is built.
pub fn pair<'a, K, R, H>(case: K, handler: H) -> Registration<'a, K, R>
where
    H: Handler<R> + 'a,
{
    Registration::new(case, handler)
}

/// One element of a flat registration sequence.
///
/// A well-formed sequence alternates `Case, Handler, Case, Handler, ...`.
/// Anything else is rejected by
/// [`build_table_flat`](crate::build_table_flat).
pub enum Token<'a, K, R> {
    /// A case name, to be paired with the next token.
    Case(K),
    /// A handler for the preceding case name.
    Handler(BoxHandler<'a, R>),
}

impl<'a, K, R> Token<'a, K, R> {
    /// A case-name token.
    pub fn case(case: K) -> Self {
        Token::Case(case)
    }

    /// A handler token.
    pub fn handler<H>(handler: H) -> Self
    where
        H: Handler<R> + 'a,
    {
        Token::Handler(boxed(handler))
    }
}

impl<K: fmt::Debug, R> fmt::Debug for Token<'_, K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Case(case) => f.debug_tuple("Case").field(case).finish(),
            Token::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}
