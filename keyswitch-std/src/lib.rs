//! # keyswitch-std
//!
//! Standard implementations on top of `keyswitch-core`.
//!
//! This crate provides:
//! - **Compile-time tables**: [`ConstTable`](tables::ConstTable), the
//!   [`const_table!`] macro, and `PhfTable` behind the `phf` feature
//! - **Classifier wrappers**: [`TracedClassifier`](classifiers::TracedClassifier),
//!   [`FallbackClassifier`](classifiers::FallbackClassifier)
//! - **Testing utilities**: counting handlers, recording classifiers, call logs

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use keyswitch_core;

// Modules
pub mod classifiers;
pub mod tables;
pub mod testing;
