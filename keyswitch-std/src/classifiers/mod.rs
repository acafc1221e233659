//! Standard classifier wrappers.

pub mod fallback;
pub mod traced;

pub use fallback::FallbackClassifier;
pub use traced::TracedClassifier;
