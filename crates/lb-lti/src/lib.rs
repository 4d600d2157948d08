//! Linear time-invariant system algebra for loopbench.
//!
//! Provides:
//! - Rational transfer functions with series and unity-feedback composition
//! - Ideal PID controller construction from a gain triple
//! - Controllable canonical state-space realization for simulation
//!
//! Transfer-function composition is exact polynomial arithmetic on
//! coefficient vectors. The closed-loop denominator determines the system
//! poles and hence the numerical behavior of everything downstream, so none
//! of it is delegated to a black-box solver.

mod polynomial;

pub mod error;
pub mod pid;
pub mod state_space;
pub mod transfer;

pub use error::{LtiError, LtiResult};
pub use pid::PidGains;
pub use state_space::StateSpace;
pub use transfer::TransferFunction;
