//! # Dispatch Engine
//!
//! The two-phase protocol: build a table from the registrations, then
//! classify the input and run the one matching handler.
//!
//! ```rust,ignore
//! use keyswitch::{build_and_resolve, pair};
//!
//! let size = build_and_resolve(
//!     |n: i32| if n < 3 { "low" } else if n < 7 { "mid" } else { "high" },
//!     5,
//!     [pair("low", || 0), pair("mid", || 1), pair("high", || 2)],
//! )?;
//! assert_eq!(size, 1);
//! ```
//!
//! The table is always complete before the classifier runs, so a malformed
//! registration sequence fails without touching caller code. Nothing is
//! cached between calls.

use crate::{
    classifier::Classifier,
    error::{DispatchError, MalformedRegistrations},
    registration::{Registration, Token},
    table::{DispatchTable, Found, Lookup, TableBuilder},
};
use std::{borrow::Borrow, fmt, hash::Hash};

/// Build a table from `(case, handler)` registrations.
///
/// A case name registered more than once keeps the handler of its last
/// registration.
pub fn build_table<'a, K, R, T>(registrations: T) -> DispatchTable<'a, K, R>
where
    K: Eq + Hash + fmt::Debug,
    T: IntoIterator<Item = Registration<'a, K, R>>,
{
    let mut builder = TableBuilder::new();
    for registration in registrations {
        let (case, handler) = registration.into_parts();
        builder.put(case, handler);
    }
    builder.build()
}

/// Build a table from a flat `case, handler, case, handler, ...` sequence.
///
/// A case name without a following handler, or a handler without a preceding
/// case name, is a [`MalformedRegistrations`] error. Duplicates resolve as in
/// [`build_table`].
pub fn build_table_flat<'a, K, R, T>(
    tokens: T,
) -> Result<DispatchTable<'a, K, R>, DispatchError<K>>
where
    K: Eq + Hash + fmt::Debug,
    T: IntoIterator<Item = Token<'a, K, R>>,
{
    let mut builder = TableBuilder::new();
    let mut pending: Option<(K, usize)> = None;

    for (position, token) in tokens.into_iter().enumerate() {
        match (pending.take(), token) {
            (None, Token::Case(case)) => pending = Some((case, position)),
            (Some((case, _)), Token::Handler(handler)) => builder.put(case, handler),
            (Some((case, position)), Token::Case(_)) => {
                return Err(MalformedRegistrations::UnpairedCase { case, position }.into());
            }
            (None, Token::Handler(_)) => {
                return Err(MalformedRegistrations::OrphanHandler { position }.into());
            }
        }
    }

    match pending {
        Some((case, position)) => {
            Err(MalformedRegistrations::UnpairedCase { case, position }.into())
        }
        None => Ok(builder.build()),
    }
}

/// Classify `input` against an already built table and run the match.
///
/// Equivalent to [`DispatchTable::resolve`].
pub fn resolve<'a, K, R, I, C>(
    table: DispatchTable<'a, K, R>,
    classifier: C,
    input: I,
) -> Result<R, DispatchError<K>>
where
    K: Eq + Hash + fmt::Debug,
    C: Classifier<I, K>,
{
    table.resolve(classifier, input)
}

/// Build a table from `registrations`, then resolve `input` against it.
pub fn build_and_resolve<'a, K, R, I, C, T>(
    classifier: C,
    input: I,
    registrations: T,
) -> Result<R, DispatchError<K>>
where
    K: Eq + Hash + fmt::Debug,
    C: Classifier<I, K>,
    T: IntoIterator<Item = Registration<'a, K, R>>,
{
    build_table(registrations).resolve(classifier, input)
}

/// [`build_and_resolve`] over a flat token sequence.
///
/// A malformed sequence fails before the classifier is called.
pub fn build_and_resolve_flat<'a, K, R, I, C, T>(
    classifier: C,
    input: I,
    tokens: T,
) -> Result<R, DispatchError<K>>
where
    K: Eq + Hash + fmt::Debug,
    C: Classifier<I, K>,
    T: IntoIterator<Item = Token<'a, K, R>>,
{
    build_table_flat(tokens)?.resolve(classifier, input)
}

/// Resolve with a fallible classifier and fallible handlers.
///
/// Errors returned by the classifier or the handler come back exactly as
/// produced. Engine errors are converted into the caller's `E`.
pub fn try_resolve<'a, K, T, E, I, C>(
    table: DispatchTable<'a, K, Result<T, E>>,
    classifier: C,
    input: I,
) -> Result<T, E>
where
    K: Eq + Hash + fmt::Debug,
    E: From<DispatchError<K>>,
    C: Classifier<I, Result<K, E>>,
{
    let case = classifier.classify(input)?;
    table.resolve(move |_: ()| case, ())?
}

/// [`build_and_resolve`] with a fallible classifier and fallible handlers.
pub fn try_build_and_resolve<'a, K, T, E, I, C, Regs>(
    classifier: C,
    input: I,
    registrations: Regs,
) -> Result<T, E>
where
    K: Eq + Hash + fmt::Debug,
    E: From<DispatchError<K>>,
    C: Classifier<I, Result<K, E>>,
    Regs: IntoIterator<Item = Registration<'a, K, Result<T, E>>>,
{
    try_resolve(build_table(registrations), classifier, input)
}

/// Resolve against a table that is shared rather than consumed.
///
/// Used by long-lived tables of plain `Fn` handlers, such as the compile-time
/// tables in `keyswitch-std`. `Q` is the borrowed form the table is keyed by,
/// so a `str`-keyed table accepts classifiers returning `&str` or `String`.
pub fn resolve_shared<Q, K, V, R, I, C, L>(
    table: &L,
    classifier: C,
    input: I,
) -> Result<R, DispatchError<K>>
where
    Q: ?Sized,
    K: Borrow<Q> + fmt::Debug,
    L: Lookup<Q, V> + ?Sized,
    V: Fn() -> R,
    C: Classifier<I, K>,
{
    let case = classifier.classify(input);
    match table.lookup(<K as Borrow<Q>>::borrow(&case)) {
        Found::Matched(handler) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(case = ?case, "dispatching to matched case");
            Ok(handler())
        }
        Found::NotFound => {
            #[cfg(feature = "tracing")]
            tracing::debug!(case = ?case, "no handler for case");
            Err(DispatchError::UnmatchedCase(case))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::pair;
    use std::{cell::Cell, rc::Rc};

    fn band(n: i32) -> &'static str {
        if n < 3 {
            "low"
        } else if n < 7 {
            "mid"
        } else {
            "high"
        }
    }

    #[test]
    fn test_build_and_resolve_bands() {
        let regs = || [pair("low", || 0), pair("mid", || 1), pair("high", || 2)];

        assert_eq!(build_and_resolve(band, 2, regs()), Ok(0));
        assert_eq!(build_and_resolve(band, 5, regs()), Ok(1));
        assert_eq!(build_and_resolve(band, 9, regs()), Ok(2));
    }

    #[test]
    fn test_flat_pairs() {
        let tokens = vec![
            Token::case("a"),
            Token::handler(|| 'a'),
            Token::case("b"),
            Token::handler(|| 'b'),
        ];
        let table = build_table_flat(tokens).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(resolve(table, |()| "b", ()), Ok('b'));
    }

    #[test]
    fn test_flat_trailing_case() {
        let tokens = vec![
            Token::case("a"),
            Token::handler(|| ()),
            Token::case("tail"),
        ];
        let err = build_table_flat(tokens).unwrap_err();
        assert_eq!(
            err,
            DispatchError::Malformed(MalformedRegistrations::UnpairedCase {
                case: "tail",
                position: 2
            })
        );
    }

    #[test]
    fn test_flat_two_cases_in_a_row() {
        let tokens = vec![Token::case("a"), Token::case("b"), Token::handler(|| ())];
        let err = build_table_flat(tokens).unwrap_err();
        assert_eq!(err.case(), Some(&"a"));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_flat_orphan_handler() {
        let tokens: Vec<Token<&str, ()>> = vec![Token::handler(|| ())];
        assert_eq!(
            build_table_flat(tokens).unwrap_err(),
            DispatchError::Malformed(MalformedRegistrations::OrphanHandler { position: 0 })
        );
    }

    #[test]
    fn test_flat_malformed_skips_classifier_and_handlers() {
        let classified = Cell::new(false);
        let ran = Cell::new(false);

        let result = build_and_resolve_flat(
            |()| {
                classified.set(true);
                "a"
            },
            (),
            vec![Token::case("a"), Token::handler(|| ran.set(true)), Token::case("b")],
        );

        assert!(result.unwrap_err().is_malformed());
        assert!(!classified.get());
        assert!(!ran.get());
    }

    #[test]
    fn test_build_runs_no_handler() {
        let ran = Cell::new(0);
        let table = build_table([
            pair("a", || ran.set(ran.get() + 1)),
            pair("b", || ran.set(ran.get() + 10)),
        ]);
        assert_eq!(ran.get(), 0);

        table.resolve(|()| "b", ()).unwrap();
        assert_eq!(ran.get(), 10);
    }

    #[test]
    fn test_shared_handler_runs_once() {
        let count = Rc::new(Cell::new(0));
        let shared = {
            let count = Rc::clone(&count);
            move || count.set(count.get() + 1)
        };

        let result = build_and_resolve(
            |()| "second",
            (),
            [pair("first", &shared), pair("second", &shared)],
        );

        assert_eq!(result, Ok(()));
        assert_eq!(count.get(), 1);
    }

    #[derive(Debug, PartialEq)]
    enum AppError {
        Dispatch(DispatchError<&'static str>),
        BadInput(String),
        Handler(&'static str),
    }

    impl From<DispatchError<&'static str>> for AppError {
        fn from(err: DispatchError<&'static str>) -> Self {
            AppError::Dispatch(err)
        }
    }

    fn parse_band(raw: &str) -> Result<&'static str, AppError> {
        raw.parse::<i32>()
            .map(band)
            .map_err(|_| AppError::BadInput(raw.to_string()))
    }

    #[test]
    fn test_try_resolve_passes_errors_through() {
        let regs = || -> [Registration<'static, &'static str, Result<i32, AppError>>; 2] {
            [
                pair("low", || Ok(0)),
                pair("mid", || Err(AppError::Handler("mid failed"))),
            ]
        };

        assert_eq!(try_build_and_resolve(parse_band, "1", regs()), Ok(0));
        assert_eq!(
            try_build_and_resolve(parse_band, "4", regs()),
            Err(AppError::Handler("mid failed"))
        );
        assert_eq!(
            try_build_and_resolve(parse_band, "four", regs()),
            Err(AppError::BadInput("four".to_string()))
        );
        assert_eq!(
            try_build_and_resolve(parse_band, "8", regs()),
            Err(AppError::Dispatch(DispatchError::UnmatchedCase("high")))
        );
    }

    struct Pair([(&'static str, fn() -> u8); 2]);

    impl Lookup<str, fn() -> u8> for Pair {
        fn lookup(&self, case: &str) -> Found<'_, fn() -> u8> {
            match self.0.iter().find(|(name, _)| *name == case) {
                Some((_, handler)) => Found::Matched(handler),
                None => Found::NotFound,
            }
        }
    }

    #[test]
    fn test_resolve_shared_reuses_table() {
        let table = Pair([("one", || 1), ("two", || 2)]);

        let one: Result<u8, DispatchError<String>> =
            resolve_shared(&table, |s: &str| s.to_string(), "one");
        let two: Result<u8, DispatchError<&str>> = resolve_shared(&table, |()| "two", ());
        let three: Result<u8, DispatchError<&str>> = resolve_shared(&table, |()| "three", ());

        assert_eq!(one, Ok(1));
        assert_eq!(two, Ok(2));
        assert_eq!(three, Err(DispatchError::UnmatchedCase("three")));
    }
}
