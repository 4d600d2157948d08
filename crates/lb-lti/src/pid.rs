//! Ideal PID controller construction.

use serde::{Deserialize, Serialize};

use crate::error::LtiResult;
use crate::transfer::TransferFunction;

/// Proportional, integral, and derivative gains.
///
/// Gains are expected to be non-negative (front ends bound them to
/// [0, 100]); this type does not re-validate. A negative gain still yields a
/// mathematically valid controller, just a physically unusual one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PidGains {
    /// Proportional gain.
    pub kp: f64,
    /// Integral gain.
    pub ki: f64,
    /// Derivative gain.
    pub kd: f64,
}

impl PidGains {
    /// Create a gain triple.
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }

    /// Transfer function of the ideal PID controller,
    /// `(Kd*s^2 + Kp*s + Ki) / s`, with the integrator pole at the origin.
    ///
    /// Fails only on non-finite gains.
    pub fn transfer_function(&self) -> LtiResult<TransferFunction> {
        TransferFunction::new(vec![self.kd, self.kp, self.ki], vec![1.0, 0.0])
    }
}
