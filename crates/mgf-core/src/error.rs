//! Error types for MGF evaluation

use thiserror::Error;

/// MGF error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter or argument
    #[error("Validation error: {0}")]
    Validation(String),

    /// The MGF does not converge at `t`
    #[error("Domain error: MGF diverges at t={t} (requires t < {rate})")]
    Domain {
        /// Evaluation point.
        t: f64,
        /// Rate parameter bounding the domain from above.
        rate: f64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
