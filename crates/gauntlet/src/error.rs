//! The failure record of a transformation

/// The result of invoking a transform: either the output value, or a [`TransformError`]
/// holding the input that could not be transformed.
pub type TransformResult<I, O> = Result<O, TransformError<I>>;

/// Returned in the `Err` variant when a transformation fails. Contains the input that was
/// provided and a message describing why it could not be transformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransformError<I> {
    /// The original value passed into the transform
    pub value: I,
    /// Why the transformation could not be completed
    pub message: String,
}

impl<I> TransformError<I> {
    /// Creates a new transform error for the given input
    pub fn new(value: I, message: impl Into<String>) -> Self {
        Self {
            value,
            message: message.into(),
        }
    }

    /// Gets the input that failed to transform
    pub fn value(&self) -> &I {
        &self.value
    }

    /// Gets the failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Takes the input back out of this error
    pub fn into_value(self) -> I {
        self.value
    }

    /// Splits this error into its input and message
    pub fn into_parts(self) -> (I, String) {
        (self.value, self.message)
    }
}
