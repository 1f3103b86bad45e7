//! The completion protocol handed to transform handlers

use crate::error::{TransformError, TransformResult};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

/// A completion object is passed to a transform handler alongside its input, and is the only
/// way for the handler to produce its outcome.
///
/// A new completion is created for every invocation of a [`BoundTransform`](crate::BoundTransform)
/// and is bound to that invocation's input, which lets [`fail`](Completion::fail) report the
/// input without the handler passing it back in.
pub struct Completion<'a, I, O> {
    input: &'a I,
    _output: PhantomData<fn() -> O>,
}

impl<'a, I, O> Completion<'a, I, O> {
    pub(crate) fn new(input: &'a I) -> Self {
        Self {
            input,
            _output: PhantomData,
        }
    }

    /// Completes the transformation successfully with the final output value
    pub fn succeed(&self, value: O) -> TransformResult<I, O> {
        Ok(value)
    }

    /// The input this completion is bound to
    pub fn input(&self) -> &'a I {
        self.input
    }
}

impl<'a, I: Clone, O> Completion<'a, I, O> {
    /// Completes the transformation with a failure, explaining why the input could not be
    /// transformed. The returned error holds a copy of the input.
    pub fn fail(&self, message: impl Into<String>) -> TransformResult<I, O> {
        Err(TransformError::new(self.input.clone(), message))
    }
}

impl<I: Debug, O> Debug for Completion<'_, I, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("input", self.input)
            .finish()
    }
}
