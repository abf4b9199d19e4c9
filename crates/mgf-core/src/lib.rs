//! Core types for moment-generating function evaluation.
//!
//! Shared by the distribution crates: the error type, the `Result` alias
//! and the [`MomentGeneratingFunction`] trait.

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::MomentGeneratingFunction;
