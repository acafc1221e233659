//! # Dispatch Table
//!
//! The case-name to handler mapping consulted by a resolution.
//!
//! A [`DispatchTable`] is built once per resolution call, either through the
//! [`build_table`](crate::build_table) helpers or a [`TableBuilder`], and is
//! consumed by [`DispatchTable::resolve`]. Lookups are exact `Eq` matches on
//! the case name; there is no prefix, fuzzy or default matching.
//!
//! The [`Lookup`] trait abstracts over the table backends so compile-time
//! tables (see `keyswitch-std`) share the same matching rule.

use crate::{
    classifier::Classifier,
    error::DispatchError,
    handler::{BoxHandler, Handler},
    registration::Registration,
};
use std::{collections::HashMap, fmt, hash::Hash};

/// Result of a table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found<'a, V> {
    /// A handler is registered under the case name.
    Matched(&'a V),
    /// No handler is registered under the case name.
    NotFound,
}

impl<'a, V> Found<'a, V> {
    /// Returns true if the case was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, Found::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            Found::Matched(v) => Some(v),
            Found::NotFound => None,
        }
    }
}

/// Exact-match lookup from a case name to a stored handler.
///
/// Implemented by [`DispatchTable`] and by the static tables in
/// `keyswitch-std`.
pub trait Lookup<K: ?Sized, V> {
    /// Look up the handler registered under `case`.
    fn lookup(&self, case: &K) -> Found<'_, V>;

    /// Check if a handler is registered under `case`.
    fn contains(&self, case: &K) -> bool {
        self.lookup(case).is_matched()
    }
}

/// How a table treats a case name that is registered more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later registration replaces the earlier one.
    #[default]
    LastWriteWins,
    /// A repeated case name is a build error.
    Reject,
}

/// A case-name to handler mapping, owned by a single resolution.
pub struct DispatchTable<'a, K, R> {
    handlers: HashMap<K, BoxHandler<'a, R>>,
}

impl<'a, K, R> DispatchTable<'a, K, R> {
    /// Get the number of distinct cases.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the table has no cases.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterate over the registered case names, in no particular order.
    pub fn cases(&self) -> impl Iterator<Item = &K> {
        self.handlers.keys()
    }
}

impl<'a, K, R> DispatchTable<'a, K, R>
where
    K: Eq + Hash + fmt::Debug,
{
    /// Classify `input` and run the matching handler.
    ///
    /// The classifier is called exactly once. If its case name is registered,
    /// that handler is invoked exactly once and its result returned unchanged.
    /// Otherwise no handler runs and [`DispatchError::UnmatchedCase`] carries
    /// the name back.
    pub fn resolve<I, C>(mut self, classifier: C, input: I) -> Result<R, DispatchError<K>>
    where
        C: Classifier<I, K>,
    {
        let case = classifier.classify(input);
        match self.handlers.remove(&case) {
            Some(handler) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(case = ?case, "dispatching to matched case");
                Ok(handler())
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(case = ?case, cases = self.handlers.len(), "no handler for case");
                Err(DispatchError::UnmatchedCase(case))
            }
        }
    }
}

impl<'a, K, R> Lookup<K, BoxHandler<'a, R>> for DispatchTable<'a, K, R>
where
    K: Eq + Hash,
{
    fn lookup(&self, case: &K) -> Found<'_, BoxHandler<'a, R>> {
        match self.handlers.get(case) {
            Some(handler) => Found::Matched(handler),
            None => Found::NotFound,
        }
    }
}

impl<K: fmt::Debug, R> fmt::Debug for DispatchTable<'_, K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

/// Builder for [`DispatchTable`].
pub struct TableBuilder<'a, K, R> {
    handlers: HashMap<K, BoxHandler<'a, R>>,
    policy: DuplicatePolicy,
}

impl<'a, K, R> Default for TableBuilder<'a, K, R> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
            policy: DuplicatePolicy::default(),
        }
    }
}

impl<'a, K, R> TableBuilder<'a, K, R> {
    /// Create a builder with the last-write-wins policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate policy.
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reject repeated case names instead of overwriting.
    pub fn strict(self) -> Self {
        self.with_policy(DuplicatePolicy::Reject)
    }

    /// Get the configured duplicate policy.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }
}

impl<'a, K, R> TableBuilder<'a, K, R>
where
    K: Eq + Hash + fmt::Debug,
{
    /// Insert a registration.
    ///
    /// Under [`DuplicatePolicy::Reject`] a repeated case name returns
    /// [`DispatchError::DuplicateCase`] and leaves the earlier handler in place.
    pub fn insert(
        &mut self,
        registration: Registration<'a, K, R>,
    ) -> Result<(), DispatchError<K>> {
        let (case, handler) = registration.into_parts();
        if self.policy == DuplicatePolicy::Reject && self.handlers.contains_key(&case) {
            return Err(DispatchError::DuplicateCase(case));
        }
        self.put(case, handler);
        Ok(())
    }

    /// Register a handler under `case`, chaining.
    pub fn on<H>(mut self, case: K, handler: H) -> Result<Self, DispatchError<K>>
    where
        H: Handler<R> + 'a,
    {
        self.insert(Registration::new(case, handler))?;
        Ok(self)
    }

    /// Insert every registration in order, stopping at the first error.
    pub fn extend<T>(&mut self, registrations: T) -> Result<(), DispatchError<K>>
    where
        T: IntoIterator<Item = Registration<'a, K, R>>,
    {
        registrations
            .into_iter()
            .try_for_each(|registration| self.insert(registration))
    }

    /// Build the table, consuming the builder.
    pub fn build(self) -> DispatchTable<'a, K, R> {
        #[cfg(feature = "tracing")]
        tracing::debug!(cases = self.handlers.len(), "dispatch table built");
        DispatchTable {
            handlers: self.handlers,
        }
    }

    /// Unconditional last-write-wins insert.
    pub(crate) fn put(&mut self, case: K, handler: BoxHandler<'a, R>) {
        #[cfg(feature = "tracing")]
        {
            if self.handlers.contains_key(&case) {
                tracing::trace!(case = ?case, "later registration replaces earlier handler");
            }
        }
        self.handlers.insert(case, handler);
    }
}
