//! # keyswitch - Keyed Dispatch
//!
//! Classify an input into a case name, then run exactly the one handler
//! registered under that name.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keyswitch::prelude::*;
//!
//! let label = build_and_resolve(
//!     |n: i32| if n < 3 { "low" } else if n < 7 { "mid" } else { "high" },
//!     9,
//!     [
//!         pair("low", || "small"),
//!         pair("mid", || "medium"),
//!         pair("high", || "large"),
//!     ],
//! )?;
//! assert_eq!(label, "large");
//! ```
//!
//! Each call builds its own [`DispatchTable`] and discards it afterwards, so
//! handlers may capture anything from the calling scope. For case sets fixed
//! at compile time, the [`tables`] module offers static tables that are built
//! once and shared.
//!
//! ## No Implicit Default
//!
//! An unmatched case name is always [`DispatchError::UnmatchedCase`]. To get a
//! fallback, register it as an ordinary case and have the classifier return
//! its name, e.g. with [`classifiers::FallbackClassifier`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use keyswitch_core::{
    // Error types
    BoxError,
    // Handler
    BoxHandler,
    // Classifier
    Classifier,
    DispatchError,
    // Table
    DispatchTable,
    DuplicatePolicy,
    Found,
    Handler,
    Lookup,
    MalformedRegistrations,
    // Registration
    Registration,
    TableBuilder,
    Token,
    // Engine
    build_and_resolve,
    build_and_resolve_flat,
    build_table,
    build_table_flat,
    pair,
    resolve,
    resolve_shared,
    try_build_and_resolve,
    try_resolve,
};

pub use keyswitch_std::const_table;

/// Compile-time dispatch tables.
pub mod tables {
    pub use keyswitch_std::tables::ConstTable;

    #[cfg(feature = "phf")]
    pub use keyswitch_std::tables::PhfTable;
}

/// Standard classifier wrappers.
pub mod classifiers {
    pub use keyswitch_std::classifiers::{FallbackClassifier, TracedClassifier};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use keyswitch_std::testing::*;
}

/// Prelude module - common imports for keyswitch.
///
/// # Usage
///
/// ```rust,ignore
/// use keyswitch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Core traits
        Classifier,
        // Errors
        DispatchError,
        DispatchTable,
        Handler,
        Lookup,
        Registration,
        TableBuilder,
        // Engine
        build_and_resolve,
        build_table,
        pair,
        resolve,
    };
}

#[cfg(feature = "phf")]
pub use phf;
