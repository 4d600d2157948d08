//! Time-domain simulation for loopbench.
//!
//! Provides:
//! - TransientModel trait for pluggable dynamic systems
//! - Fixed-step RK4 and forward Euler integrators
//! - A step-driven LTI model over a state-space realization
//! - The step-response runner producing the sampled output curve

pub mod error;
pub mod integrator;
pub mod lti;
pub mod model;
pub mod response;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator, RK4};
pub use lti::LtiStepModel;
pub use model::TransientModel;
pub use response::{IntegratorKind, StepOptions, StepResponse, step_response};
