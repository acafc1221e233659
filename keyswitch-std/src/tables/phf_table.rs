//! PHF-backed dispatch table.
//!
//! Compile-time perfect hash map from string case names to handlers. The
//! `phf_map!` macro rejects repeated keys at compile time, so this table never
//! sees a duplicate registration.

use keyswitch_core::{Classifier, DispatchError, Found, Lookup, resolve_shared};
use std::{borrow::Borrow, fmt};

/// A dispatch table over a static `phf::Map`.
///
/// ```rust,ignore
/// static COMMANDS: phf::Map<&'static str, fn() -> Reply> = phf_map! {
///     "ping" => ping as fn() -> Reply,
///     "help" => help as fn() -> Reply,
/// };
///
/// let reply = PhfTable::new(&COMMANDS).resolve(|line: &str| first_word(line), input)?;
/// ```
pub struct PhfTable<R: 'static> {
    map: &'static phf::Map<&'static str, fn() -> R>,
}

impl<R: 'static> PhfTable<R> {
    /// Create a table from a static PHF map.
    pub const fn new(map: &'static phf::Map<&'static str, fn() -> R>) -> Self {
        Self { map }
    }

    /// Get the number of cases.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table has no cases.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Classify `input` and run the matching handler.
    ///
    /// The classifier may return `&str`, `String`, or anything else that
    /// borrows as `str`; the unmatched error carries it back as returned.
    pub fn resolve<K, I, C>(&self, classifier: C, input: I) -> Result<R, DispatchError<K>>
    where
        K: Borrow<str> + fmt::Debug,
        C: Classifier<I, K>,
    {
        resolve_shared::<str, K, _, _, _, _, _>(self, classifier, input)
    }
}

impl<R: 'static> Lookup<str, fn() -> R> for PhfTable<R> {
    fn lookup(&self, case: &str) -> Found<'_, fn() -> R> {
        match self.map.get(case) {
            Some(handler) => Found::Matched(handler),
            None => Found::NotFound,
        }
    }
}
