//! Testing utilities for keyswitch.
//!
//! Doubles that make the engine's guarantees observable in tests:
//!
//! - [`CountingHandler`]: counts how many times a handler actually ran
//! - [`RecordingClassifier`]: records every input it classifies
//! - [`CallLog`]: an ordered log shared by classifiers and handlers

use keyswitch_core::{Classifier, Handler};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
///
/// Clones share the counter, so one `CountingHandler` can be registered under
/// several case names and still report the total number of runs.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
///
/// build_and_resolve(classify, input, [
///     pair("a", counter.returning(1)),
///     pair("b", counter.returning(2)),
/// ])?;
///
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that bumps the shared counter and returns `value`.
    pub fn returning<R>(&self, value: R) -> impl FnOnce() -> R + 'static
    where
        R: 'static,
    {
        let count = Arc::clone(&self.count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
            value
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl Handler<()> for CountingHandler {
    fn invoke(self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Recording Classifier
// ============================================================================

/// A classifier that records each input before delegating to `F`.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingClassifier::new(|n: i32| if n < 0 { "neg" } else { "pos" });
/// let observed = recorder.clone();
///
/// build_and_resolve(recorder, -4, regs)?;
///
/// assert_eq!(observed.inputs(), vec![-4]);
/// ```
pub struct RecordingClassifier<F, I> {
    classify: F,
    inputs: Arc<Mutex<Vec<I>>>,
}

impl<F, I> RecordingClassifier<F, I> {
    /// Create a recorder around `classify`.
    pub fn new(classify: F) -> Self {
        Self {
            classify,
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times this classifier (or a clone) ran.
    pub fn call_count(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }
}

impl<F, I: Clone> RecordingClassifier<F, I> {
    /// Get a clone of the recorded inputs.
    pub fn inputs(&self) -> Vec<I> {
        self.inputs.lock().unwrap().clone()
    }
}

impl<F: Clone, I> Clone for RecordingClassifier<F, I> {
    fn clone(&self) -> Self {
        Self {
            classify: self.classify.clone(),
            inputs: self.inputs.clone(),
        }
    }
}

impl<F, I, K> Classifier<I, K> for RecordingClassifier<F, I>
where
    I: Clone,
    F: FnOnce(I) -> K,
{
    fn classify(self, input: I) -> K {
        self.inputs.lock().unwrap().push(input.clone());
        (self.classify)(input)
    }
}

// ============================================================================
// Call Log
// ============================================================================

/// An ordered record of labelled events, shared across clones.
///
/// Used to check the order in which the engine calls into caller code.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `label`.
    pub fn record(&self, label: &'static str) {
        self.entries.lock().unwrap().push(label);
    }

    /// A handler that appends `label` and returns `value`.
    pub fn handler<R: 'static>(
        &self,
        label: &'static str,
        value: R,
    ) -> impl FnOnce() -> R + 'static {
        let log = self.clone();
        move || {
            log.record(label);
            value
        }
    }

    /// Get a clone of the entries in order.
    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.lock().unwrap().clone()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
