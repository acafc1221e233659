//! # Compile-time Tables
//!
//! Long-lived dispatch tables for case sets known at compile time.
//!
//! | Table | Keys | Duplicates |
//! |-------|------|------------|
//! | [`ConstTable`] | any `PartialEq` | last registration wins |
//! | `PhfTable` (feature `phf`) | `&'static str` | rejected by `phf_map!` |
//!
//! Both borrow their handlers instead of consuming them, so one table serves
//! many resolutions. Handlers are plain `fn() -> R` and hold no per-call
//! state. For handlers that capture call-specific context, build a
//! [`DispatchTable`](keyswitch_core::DispatchTable) per call instead.

pub mod const_table;
#[cfg(feature = "phf")]
pub mod phf_table;

pub use const_table::ConstTable;

#[cfg(feature = "phf")]
pub use phf_table::PhfTable;
