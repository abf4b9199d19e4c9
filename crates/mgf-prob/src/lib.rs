//! Moment-generating functions of probability distributions.
//!
//! The crate currently covers the exponential distribution:
//! - permissive scalar evaluation (`NaN` outside the domain)
//! - a curried evaluator with the rate fixed up front
//! - a checked API reporting invalid input through [`mgf_core::Error`]

pub mod exponential;

pub use exponential::ExponentialMgf;
pub use mgf_core::{Error, MomentGeneratingFunction, Result};
