//! Collapsing lists of transform results into plain values

use crate::error::{TransformError, TransformResult};
use tracing::debug;

/// Options passed to [`unwrap_ok_results`]
#[derive(Debug, Clone, Copy)]
pub struct UnwrapOkResultsOptions<F> {
    /// Called once with each failed transformation, in order. Typical uses:
    ///  - log the failures
    ///  - abort on the first failure (see [`throw_on_err`])
    ///  - collect all failures in an external collection
    ///  - ignore them (see [`ignore_on_err`])
    pub on_err: F,
}

impl<F> UnwrapOkResultsOptions<F> {
    /// Creates new options with the given error handler
    pub fn new(on_err: F) -> Self {
        Self { on_err }
    }
}

/// Error handler for [`unwrap_ok_results`] which ignores all failures
pub fn ignore_on_err<I>(_error: TransformError<I>) {}

/// Error handler for [`unwrap_ok_results`] which panics on the first failure it is given.
///
/// # Panics
/// Always panics, with the error's message.
pub fn throw_on_err<I>(error: TransformError<I>) {
    panic!("{}", error.message)
}

/// Unwraps every result, returning the successful values in their original order.
///
/// Failed results contribute nothing to the output. Instead, each is handed to `options.on_err`.
///
/// ```rust
/// use gauntlet::{unwrap_ok_results, TransformError, UnwrapOkResultsOptions};
///
/// let results = vec![Ok(1), Err(TransformError::new("b", "bad")), Ok(3)];
/// let mut failures = vec![];
/// let values = unwrap_ok_results(
///     results,
///     UnwrapOkResultsOptions::new(|e: TransformError<&'static str>| failures.push(e.value)),
/// );
/// assert_eq!(values, [1, 3]);
/// assert_eq!(failures, ["b"]);
/// ```
pub fn unwrap_ok_results<I, O, F, It>(results: It, options: UnwrapOkResultsOptions<F>) -> Vec<O>
where
    It: IntoIterator<Item = TransformResult<I, O>>,
    F: FnMut(TransformError<I>),
{
    let UnwrapOkResultsOptions { mut on_err } = options;
    let mut values = vec![];
    let mut failed = 0_usize;
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(error) => {
                failed += 1;
                on_err(error);
            }
        }
    }
    debug!(ok = values.len(), failed, "unwrapped ok results");
    values
}

/// Unwraps every result, substituting `default_fn(error)` in place of each failure.
///
/// The output always has the same length as the input, with `output[i]` corresponding to
/// `results[i]`.
///
/// ```rust
/// use gauntlet::{unwrap_or_default, TransformError};
///
/// let results = vec![Ok(1), Err(TransformError::new("b", "bad")), Ok(3)];
/// let values = unwrap_or_default(results, |_| 0);
/// assert_eq!(values, [1, 0, 3]);
/// ```
pub fn unwrap_or_default<I, O, F, It>(results: It, mut default_fn: F) -> Vec<O>
where
    It: IntoIterator<Item = TransformResult<I, O>>,
    F: FnMut(TransformError<I>) -> O,
{
    let results = results.into_iter();
    let mut values = Vec::with_capacity(results.size_hint().0);
    for result in results {
        let value = match result {
            Ok(value) => value,
            Err(error) => default_fn(error),
        };
        values.push(value);
    }
    values
}

/// Unwraps every result, stopping at the first failure and returning it.
///
/// Results after the first failure are not inspected.
pub fn try_unwrap_ok_results<I, O, It>(results: It) -> Result<Vec<O>, TransformError<I>>
where
    It: IntoIterator<Item = TransformResult<I, O>>,
{
    let mut values = vec![];
    for result in results {
        values.push(result?);
    }
    Ok(values)
}
