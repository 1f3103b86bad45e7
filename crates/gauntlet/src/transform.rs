//! Binding handlers into callable transforms

use crate::apply::apply;
use crate::completion::Completion;
use crate::error::TransformResult;
use std::any::type_name;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use tracing::trace;

/// Something that can transform an `I` into an `O`, failing with a
/// [`TransformError<I>`](crate::TransformError).
pub trait Transform<I, O> {
    /// Transforms a single input
    fn transform(&self, input: I) -> TransformResult<I, O>;

    /// Transforms every input in order. See [`apply`].
    fn apply_all<It>(&self, inputs: It) -> Vec<TransformResult<I, O>>
    where
        It: IntoIterator<Item = I>,
        Self: Sized,
    {
        apply(self, inputs)
    }
}

impl<I, O, T: Transform<I, O> + ?Sized> Transform<I, O> for &T {
    fn transform(&self, input: I) -> TransformResult<I, O> {
        (**self).transform(input)
    }
}

/// A transform created from a handler with [`transform`].
///
/// Holds no state between calls besides whatever the handler itself captures, so the same bound
/// transform can be invoked any number of times.
pub struct BoundTransform<H, I, O> {
    handler: H,
    _marker: PhantomData<fn(I) -> O>,
}

impl<H, I, O> BoundTransform<H, I, O>
where
    H: Fn(&I, &Completion<'_, I, O>) -> TransformResult<I, O>,
{
    /// Invokes the handler on the input, returning exactly what the handler returned.
    ///
    /// # Panics
    /// Panics if the handler panics. Handlers are expected to report failures through
    /// [`Completion::fail`], so a panic here is a bug in the handler.
    pub fn call(&self, input: I) -> TransformResult<I, O> {
        let completion = Completion::new(&input);
        let result = (self.handler)(&input, &completion);
        if let Err(error) = &result {
            trace!("transform into {} failed: {}", type_name::<O>(), error.message);
        }
        result
    }
}

impl<H, I, O> Transform<I, O> for BoundTransform<H, I, O>
where
    H: Fn(&I, &Completion<'_, I, O>) -> TransformResult<I, O>,
{
    fn transform(&self, input: I) -> TransformResult<I, O> {
        self.call(input)
    }
}

impl<H: Clone, I, O> Clone for BoundTransform<H, I, O> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            _marker: PhantomData,
        }
    }
}

impl<H, I, O> Debug for BoundTransform<H, I, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundTransform")
            .field("input", &type_name::<I>())
            .field("output", &type_name::<O>())
            .finish_non_exhaustive()
    }
}

/// Binds a handler into a reusable, callable transform.
///
/// The handler receives the input and a [`Completion`] for that input, and must finish with
/// either [`Completion::succeed`] or [`Completion::fail`].
///
/// ```rust
/// use gauntlet::transform;
///
/// let parse_number = transform::<String, i32, _>(|input, g| match input.parse() {
///     Ok(number) => g.succeed(number),
///     Err(_) => g.fail("not a number"),
/// });
///
/// assert_eq!(parse_number.call("42".to_string()), Ok(42));
/// let error = parse_number.call("forty-two".to_string()).unwrap_err();
/// assert_eq!(error.value, "forty-two");
/// assert_eq!(error.message, "not a number");
/// ```
pub fn transform<I, O, H>(handler: H) -> BoundTransform<H, I, O>
where
    H: Fn(&I, &Completion<'_, I, O>) -> TransformResult<I, O>,
{
    BoundTransform {
        handler,
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransformError;
    use std::cell::Cell;

    fn halve_handler(input: &i32, g: &Completion<'_, i32, i32>) -> TransformResult<i32, i32> {
        if input % 2 == 0 {
            g.succeed(input / 2)
        } else {
            g.fail(format!("{input} is odd"))
        }
    }

    fn halve() -> impl Transform<i32, i32> + Clone {
        transform(halve_handler)
    }

    #[test_log::test]
    fn test_succeed_is_propagated() {
        let t = halve();
        assert_eq!(t.transform(8), Ok(4));
    }

    #[test_log::test]
    fn test_fail_holds_input() {
        let t = halve();
        assert_eq!(t.transform(7), Err(TransformError::new(7, "7 is odd")));
    }

    #[test]
    fn test_reusable() {
        let t = halve();
        assert_eq!(t.transform(10), t.transform(10));
        assert_eq!(t.clone().transform(3), t.transform(3));
    }

    #[test]
    fn test_result_returned_verbatim() {
        let t = transform::<i32, i32, _>(|input, _| {
            Err(TransformError::new(input * 100, "handler built its own error"))
        });
        let error = t.call(1).unwrap_err();
        assert_eq!(error.value, 100);
    }

    #[test]
    fn test_handler_captures_state() {
        let calls = Cell::new(0);
        let t = transform::<(), (), _>(|_, g| {
            calls.set(calls.get() + 1);
            g.succeed(())
        });
        t.call(()).unwrap();
        t.call(()).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_transform_trait_through_reference() {
        let t = transform(halve_handler);
        let by_ref: &dyn Transform<i32, i32> = &t;
        assert_eq!(by_ref.transform(2), Ok(1));
        assert_eq!((&t).transform(4), Ok(2));
    }

    #[test]
    #[should_panic(expected = "handler bug")]
    fn test_panics_propagate() {
        let t = transform::<i32, i32, _>(|_, _| panic!("handler bug"));
        let _ = t.call(0);
    }
}
