//! Applying a transform to many inputs

use crate::error::TransformResult;
use crate::transform::Transform;
use tracing::debug;

/// Applies a transform to every input and returns all the results.
///
/// The returned list has the same length as `inputs` and `results[i]` is the outcome of
/// transforming `inputs[i]`. Every input is transformed, even after a failure.
///
/// ```rust
/// use gauntlet::{apply, transform};
///
/// let positive = transform::<i32, u32, _>(|input, g| match u32::try_from(*input) {
///     Ok(value) => g.succeed(value),
///     Err(_) => g.fail("negative"),
/// });
/// let results = apply(&positive, [1, -2, 3]);
/// assert_eq!(results.len(), 3);
/// assert!(results[1].is_err());
/// assert_eq!(results[2], Ok(3));
/// ```
pub fn apply<I, O, T, It>(t: &T, inputs: It) -> Vec<TransformResult<I, O>>
where
    T: Transform<I, O> + ?Sized,
    It: IntoIterator<Item = I>,
{
    let inputs = inputs.into_iter();
    let mut results = Vec::with_capacity(inputs.size_hint().0);
    let mut failed = 0_usize;
    for input in inputs {
        let result = t.transform(input);
        if result.is_err() {
            failed += 1;
        }
        results.push(result);
    }
    debug!(total = results.len(), failed, "applied transform");
    results
}
