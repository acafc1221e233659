//! # keyswitch-core
//!
//! Core types of the keyswitch dispatch engine.
//!
//! Given an input, a classifier that reduces it to a case name, and a
//! sequence of `(case name, handler)` registrations, the engine runs exactly
//! one handler and returns its result.
//!
//! # Two-Phase Protocol
//!
//! ## Build ([`build_table`], [`TableBuilder`])
//!
//! Registrations are consumed in order into a [`DispatchTable`]. A repeated
//! case name replaces the earlier handler (last write wins). Flat
//! `case, handler, ...` sequences ([`Token`]) are checked for pairing here.
//! No handler runs during build.
//!
//! ## Resolve ([`resolve`], [`DispatchTable::resolve`])
//!
//! The [`Classifier`] is called once with the input. Its case name is looked
//! up by exact equality. A match runs that [`Handler`] once; a miss is
//! [`DispatchError::UnmatchedCase`].
//!
//! # Defaults
//!
//! The engine has no fallback case. A case called `"default"` is an ordinary
//! registration; mapping unknown input onto it is the classifier's job.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Build and resolve errors raised by the engine
//! - [`MalformedRegistrations`] - Pairing errors in flat sequences
//!
//! Errors from classifiers and handlers are never wrapped; see
//! [`try_resolve`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod classifier;
mod engine;
mod error;
mod handler;
mod registration;
mod table;

// Re-exports
pub use classifier::Classifier;
pub use engine::{
    build_and_resolve, build_and_resolve_flat, build_table, build_table_flat, resolve,
    resolve_shared, try_build_and_resolve, try_resolve,
};
pub use error::{BoxError, DispatchError, MalformedRegistrations};
pub use handler::{BoxHandler, Handler};
pub use registration::{Registration, Token, pair};
pub use table::{DispatchTable, DuplicatePolicy, Found, Lookup, TableBuilder};
