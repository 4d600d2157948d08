//! Closed-loop simulation service.

use lb_core::ensure_finite;
use lb_lti::PidGains;
use lb_scenarios::Scenario;
use lb_sim::{StepOptions, step_response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppResult;

/// Smallest gain accepted from front ends.
pub const GAIN_MIN: f64 = 0.0;
/// Largest gain accepted from front ends.
pub const GAIN_MAX: f64 = 100.0;
/// Smallest load factor accepted from front ends.
pub const LOAD_MIN: f64 = 0.0;
/// Largest load factor accepted from front ends.
pub const LOAD_MAX: f64 = 10.0;

/// One simulation request: gains, plant selection, load. Created per user
/// interaction, consumed synchronously, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub gains: PidGains,
    pub scenario: Scenario,
    /// Load factor in [0, 10]. Only meaningful for scenarios whose
    /// `load_affects_dynamics` flag is set; the plant table ignores it for
    /// the others by construction.
    pub load_factor: f64,
}

/// Paired time/output sequences of the closed-loop step response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Time grid (seconds).
    pub time: Vec<f64>,
    /// Closed-loop output at each grid point. May contain very large or
    /// non-finite values when the loop is unstable; that is data, not an
    /// error.
    pub output: Vec<f64>,
}

/// Simulate the closed-loop step response with the default grid
/// (1000 samples over [0, 20] seconds).
pub fn simulate_closed_loop(request: &SimulationRequest) -> AppResult<SimulationResult> {
    simulate_closed_loop_with(request, &StepOptions::default())
}

/// Simulate the closed-loop step response on a caller-chosen grid.
///
/// Gains are clamped to [0, 100] and the load factor to [0, 10]; non-finite
/// inputs are rejected. The controller and plant are composed in series and
/// closed under unity negative feedback; a degenerate loop surfaces as
/// [`crate::AppError::Degenerate`].
pub fn simulate_closed_loop_with(
    request: &SimulationRequest,
    opts: &StepOptions,
) -> AppResult<SimulationResult> {
    let gains = clamped_gains(&request.gains)?;
    let load_factor = ensure_finite(request.load_factor, "load_factor")?.clamp(LOAD_MIN, LOAD_MAX);

    let pid = gains.transfer_function()?;
    let plant = request.scenario.plant(load_factor)?;
    let closed_loop = pid.series(&plant).feedback(-1.0)?;
    debug!(
        scenario = request.scenario.canonical_id(),
        num = ?closed_loop.num(),
        den = ?closed_loop.den(),
        "composed closed loop"
    );

    let response = step_response(&closed_loop, opts)?;
    Ok(SimulationResult {
        time: response.time,
        output: response.output,
    })
}

fn clamped_gains(gains: &PidGains) -> AppResult<PidGains> {
    Ok(PidGains {
        kp: ensure_finite(gains.kp, "kp")?.clamp(GAIN_MIN, GAIN_MAX),
        ki: ensure_finite(gains.ki, "ki")?.clamp(GAIN_MIN, GAIN_MAX),
        kd: ensure_finite(gains.kd, "kd")?.clamp(GAIN_MIN, GAIN_MAX),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gains_are_clamped_to_range() {
        let clamped = clamped_gains(&PidGains::new(150.0, -3.0, 0.5)).unwrap();
        assert_eq!((clamped.kp, clamped.ki, clamped.kd), (100.0, 0.0, 0.5));
    }

    #[test]
    fn non_finite_gains_are_rejected() {
        assert!(clamped_gains(&PidGains::new(f64::NAN, 0.0, 0.0)).is_err());
        assert!(clamped_gains(&PidGains::new(0.0, f64::INFINITY, 0.0)).is_err());
    }
}
