//! Error types for LTI system algebra.

use thiserror::Error;

/// Result type for LTI algebra operations.
pub type LtiResult<T> = Result<T, LtiError>;

/// Errors that can occur while composing or realizing transfer functions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LtiError {
    /// The denominator collapsed to the zero polynomial, typically after
    /// feedback composition. The system has no valid response.
    #[error("Degenerate system: denominator is the zero polynomial")]
    DegenerateSystem,

    /// Coefficient sequences that cannot describe a valid transfer function.
    #[error("Invalid coefficients: {what}")]
    InvalidCoefficients { what: &'static str },
}
