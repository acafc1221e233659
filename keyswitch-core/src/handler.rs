//! # Handler
//!
//! The terminal step of a resolution: a zero-argument callable that runs when
//! its case name is selected.
//!
//! Handlers receive nothing from the engine. Whatever context they need is
//! captured from the defining scope, so the usual handler is a closure:
//!
//! ```rust,ignore
//! let total = compute_total();
//! pair("summary", move || format!("total: {total}"))
//! ```
//!
//! Struct handlers implement [`Handler`] directly.

/// A handler stored in a [`DispatchTable`](crate::DispatchTable).
///
/// Boxed `FnOnce` because every table is built for a single resolution and
/// each handler runs at most once.
pub type BoxHandler<'a, R> = Box<dyn FnOnce() -> R + 'a>;

/// A zero-argument callable producing a result of type `R`.
///
/// Implemented for every `FnOnce() -> R`. The handler is consumed by
/// [`invoke`](Handler::invoke), which makes the single-invocation contract
/// part of the type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a handler producing `{R}`",
    label = "missing `Handler<{R}>` implementation",
    note = "Handlers take no arguments; capture context in a closure instead."
)]
pub trait Handler<R> {
    /// Runs the handler.
    fn invoke(self) -> R;
}

impl<F, R> Handler<R> for F
where
    F: FnOnce() -> R,
{
    fn invoke(self) -> R {
        self()
    }
}

pub(crate) fn boxed<'a, R, H>(handler: H) -> BoxHandler<'a, R>
where
    H: Handler<R> + 'a,
{
    Box::new(move || handler.invoke())
}
