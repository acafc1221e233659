//! Const Generics Table - compile-time dispatch tables.
//!
//! When every case name is a literal known at compile time, the table can be
//! a `static` array of plain function pointers instead of a per-call
//! `HashMap` of boxed closures. The lookup rule is the same exact-match rule
//! as [`DispatchTable`](keyswitch_core::DispatchTable), including
//! last-write-wins for repeated case names.

use keyswitch_core::{Classifier, DispatchError, Found, Lookup, resolve_shared};
use std::fmt;

/// A dispatch table with a fixed number of cases known at compile time.
///
/// # Type Parameters
///
/// - `K`: The case name type
/// - `R`: The handler result type
/// - `N`: The number of registrations (const generic)
///
/// # Example
///
/// ```rust,ignore
/// use keyswitch::tables::ConstTable;
///
/// static SIZES: ConstTable<&str, u32, 3> = ConstTable::new([
///     ("low", || 0),
///     ("mid", || 1),
///     ("high", || 2),
/// ]);
///
/// let size = SIZES.resolve(|n: i32| if n < 3 { "low" } else { "high" }, 9)?;
/// ```
///
/// Handlers are `fn() -> R`, so they capture nothing and the table can be
/// shared freely. Registrations are kept in order; lookups scan from the
/// end, so the later of two registrations under the same name wins.
pub struct ConstTable<K, R, const N: usize> {
    cases: [(K, fn() -> R); N],
}

impl<K, R, const N: usize> ConstTable<K, R, N> {
    /// Create a table from registrations in order.
    pub const fn new(cases: [(K, fn() -> R); N]) -> Self {
        Self { cases }
    }

    /// Get the number of registrations, duplicates included.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the table has no registrations.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Iterate over the registered case names in registration order.
    pub fn cases(&self) -> impl Iterator<Item = &K> {
        self.cases.iter().map(|(case, _)| case)
    }
}

impl<K, R, const N: usize> ConstTable<K, R, N>
where
    K: PartialEq,
{
    /// Find the handler for `case`, preferring the latest registration.
    #[inline]
    pub fn handler(&self, case: &K) -> Option<fn() -> R> {
        self.cases
            .iter()
            .rev()
            .find(|(k, _)| k == case)
            .map(|(_, handler)| *handler)
    }

    /// Classify `input` and run the matching handler.
    ///
    /// Same contract as [`DispatchTable::resolve`], but the table is only
    /// borrowed and can serve any number of resolutions.
    ///
    /// [`DispatchTable::resolve`]: keyswitch_core::DispatchTable::resolve
    pub fn resolve<I, C>(&self, classifier: C, input: I) -> Result<R, DispatchError<K>>
    where
        K: fmt::Debug,
        C: Classifier<I, K>,
    {
        resolve_shared::<K, K, _, _, _, _, _>(self, classifier, input)
    }
}

impl<K, R, const N: usize> Lookup<K, fn() -> R> for ConstTable<K, R, N>
where
    K: PartialEq,
{
    fn lookup(&self, case: &K) -> Found<'_, fn() -> R> {
        match self.cases.iter().rev().find(|(k, _)| k == case) {
            Some((_, handler)) => Found::Matched(handler),
            None => Found::NotFound,
        }
    }
}

impl<K: fmt::Debug, R, const N: usize> fmt::Debug for ConstTable<K, R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cases()).finish()
    }
}

// ============================================================================
// Macro for convenient ConstTable construction
// ============================================================================

/// Declare a `static` [`ConstTable`].
///
/// # Example
///
/// ```rust,ignore
/// use keyswitch::const_table;
///
/// const_table! {
///     pub SIZES: &'static str => u32 {
///         "low" => || 0,
///         "mid" => || 1,
///         "high" => || 2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! const_table {
    (
        $vis:vis $name:ident: $key:ty => $out:ty {
            $($k:expr => $v:expr),+ $(,)?
        }
    ) => {
        $vis static $name: $crate::tables::ConstTable<$key, $out, { $crate::const_table!(@count $($k),+) }> =
            $crate::tables::ConstTable::new([
                $(($k, $v as fn() -> $out)),+
            ]);
    };
    (@count $($x:expr),*) => {
        <[()]>::len(&[$($crate::const_table!(@replace $x, ())),*])
    };
    (@replace $_:expr, $sub:expr) => { $sub };
}
