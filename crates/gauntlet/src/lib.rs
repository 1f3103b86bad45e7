#![doc = include_str!("../README.md")]
//! # Example
//!
//! ```rust
//! use gauntlet::{apply, transform, unwrap_ok_results, TransformError, UnwrapOkResultsOptions};
//!
//! let parse = transform::<&str, u8, _>(|input, g| match input.parse() {
//!     Ok(value) => g.succeed(value),
//!     Err(e) => g.fail(format!("could not parse {input:?}: {e}")),
//! });
//!
//! let results = apply(&parse, ["1", "x", "3"]);
//! let mut failed = vec![];
//! let values = unwrap_ok_results(
//!     results,
//!     UnwrapOkResultsOptions::new(|e: TransformError<&'static str>| failed.push(e.value)),
//! );
//! assert_eq!(values, [1, 3]);
//! assert_eq!(failed, ["x"]);
//! ```

mod apply;
mod completion;
mod error;
mod transform;
mod unwrap;

pub use self::{
    apply::apply,
    completion::Completion,
    error::{TransformError, TransformResult},
    transform::{transform, BoundTransform, Transform},
    unwrap::*,
};
