//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while preparing or running a simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// The transfer function could not be realized as a state-space system.
    /// Degenerate closed loops surface here before integration begins.
    #[error("Realization failed: {0}")]
    Realization(#[from] lb_lti::LtiError),
}

pub type SimResult<T> = Result<T, SimError>;
