//! Fallback classifier for explicit default cases.
//!
//! The engine never falls back on its own. This wrapper is the caller-side
//! way to get a default: a partial classifier returns `Option<K>` and `None`
//! is mapped onto a named case that must itself be registered.

use keyswitch_core::Classifier;

/// A classifier that maps `None` from a partial classifier onto a fixed case.
pub struct FallbackClassifier<C, K> {
    inner: C,
    fallback: K,
}

impl<C, K> FallbackClassifier<C, K> {
    /// Create a fallback classifier.
    pub fn new(inner: C, fallback: K) -> Self {
        Self { inner, fallback }
    }

    /// The case name used when the inner classifier returns `None`.
    pub fn fallback(&self) -> &K {
        &self.fallback
    }
}

impl<I, K, C> Classifier<I, K> for FallbackClassifier<C, K>
where
    C: Classifier<I, Option<K>>,
{
    fn classify(self, input: I) -> K {
        self.inner.classify(input).unwrap_or(self.fallback)
    }
}
