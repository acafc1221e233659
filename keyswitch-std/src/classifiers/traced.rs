use keyswitch_core::Classifier;
use std::fmt::Debug;

/// A classifier wrapper that instruments classification with a `tracing` span.
///
/// The span is named `classify` and carries the wrapper's label; the chosen
/// case is recorded as a `debug` event inside it. Without the `tracing`
/// feature the wrapper forwards to the inner classifier and does nothing else.
pub struct TracedClassifier<C> {
    inner: C,
    name: &'static str,
}

impl<C> TracedClassifier<C> {
    /// Wrap `inner`, labelling its span with `name`.
    pub const fn new(inner: C, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The span label.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<C: Clone> Clone for TracedClassifier<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<C: Copy> Copy for TracedClassifier<C> {}

impl<I, K, C> Classifier<I, K> for TracedClassifier<C>
where
    I: Debug,
    K: Debug,
    C: Classifier<I, K>,
{
    #[cfg(feature = "tracing")]
    fn classify(self, input: I) -> K {
        let span = tracing::info_span!("classify", classifier = %self.name, input = ?input);
        let _guard = span.enter();
        let case = self.inner.classify(input);
        tracing::debug!(case = ?case, "input classified");
        case
    }

    #[cfg(not(feature = "tracing"))]
    fn classify(self, input: I) -> K {
        self.inner.classify(input)
    }
}
