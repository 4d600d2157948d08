//! Error types for the loopbench service layer.

use lb_lti::LtiError;
use lb_sim::SimError;

/// Result type for service-layer operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type that wraps errors from the lower crates and
/// provides a unified interface for CLI and GUI front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The closed loop has no valid response for these settings. Shown to
    /// the user as-is; never retried.
    #[error("No valid response for these settings: the closed loop is degenerate")]
    Degenerate,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("System algebra error: {0}")]
    Lti(LtiError),

    #[error("Simulation error: {0}")]
    Simulation(SimError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LtiError> for AppError {
    fn from(e: LtiError) -> Self {
        match e {
            LtiError::DegenerateSystem => AppError::Degenerate,
            other => AppError::Lti(other),
        }
    }
}

impl From<SimError> for AppError {
    fn from(e: SimError) -> Self {
        match e {
            SimError::Realization(LtiError::DegenerateSystem) => AppError::Degenerate,
            other => AppError::Simulation(other),
        }
    }
}

impl From<lb_core::CoreError> for AppError {
    fn from(e: lb_core::CoreError) -> Self {
        AppError::InvalidInput(e.to_string())
    }
}
