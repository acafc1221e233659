//! # Classifier
//!
//! Reduces an input value to a case name.
//!
//! The engine calls the classifier exactly once per resolution and treats it
//! as opaque: guards, ranges, type tests and "default" conventions all live
//! here, never in the table.

/// A one-argument callable mapping an input to a case name.
///
/// The input is forwarded by value and unmodified; pass a reference type as
/// `I` to classify borrowed data. Fallible classifiers use `K = Result<_, E>`
/// with [`try_resolve`](crate::try_resolve).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot classify `{I}` into `{K}`",
    label = "missing `Classifier<{I}, {K}>` implementation",
    note = "Any `FnOnce({I}) -> {K}` is a classifier."
)]
pub trait Classifier<I, K> {
    /// Computes the case name for `input`.
    fn classify(self, input: I) -> K;
}

impl<F, I, K> Classifier<I, K> for F
where
    F: FnOnce(I) -> K,
{
    fn classify(self, input: I) -> K {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Threshold(i32);

    impl Classifier<i32, &'static str> for Threshold {
        fn classify(self, input: i32) -> &'static str {
            if input < self.0 { "below" } else { "above" }
        }
    }

    #[test]
    fn test_closure_classifier() {
        let classify = |input: Option<u8>| match input {
            Some(_) => "present",
            None => "absent",
        };
        assert_eq!(classify.classify(None), "absent");
    }

    #[test]
    fn test_struct_classifier() {
        assert_eq!(Threshold(3).classify(2), "below");
        assert_eq!(Threshold(3).classify(3), "above");
    }
}
