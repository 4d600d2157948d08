//! Step-response runner and result recording.

use lb_lti::{StateSpace, TransferFunction};
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator, RK4};
use crate::lti::LtiStepModel;
use crate::model::TransientModel;

/// Integrator selection for step-response runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorKind {
    /// 4th-order Runge-Kutta (default, 4 rhs calls per step).
    #[default]
    RK4,
    /// Forward Euler (1st-order, 1 rhs call per step).
    ForwardEuler,
}

/// Options for a step-response run.
#[derive(Clone, Debug)]
pub struct StepOptions {
    /// Final simulation time (seconds). The grid covers [0, horizon].
    pub horizon: f64,
    /// Number of grid points, inclusive of both endpoints.
    pub samples: usize,
    /// Integrator steps per grid interval. The recorded grid stays fixed;
    /// substeps only shrink the internal step for accuracy and stability.
    pub substeps: usize,
    /// Integrator type (default: RK4).
    pub integrator: IntegratorKind,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            horizon: 20.0,
            samples: 1000,
            substeps: 20,
            integrator: IntegratorKind::default(),
        }
    }
}

/// Sampled unit-step response.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResponse {
    /// Time grid (seconds), uniform over [0, horizon].
    pub time: Vec<f64>,
    /// System output at each grid point.
    pub output: Vec<f64>,
}

/// Compute the unit-step response of a transfer function.
///
/// The function is realized in controllable canonical form and the state
/// equations are integrated with the selected fixed-step method from zero
/// initial state. Output samples are recorded at every grid point,
/// including `t = 0`.
///
/// An unstable system is not special-cased: its samples grow without bound
/// and may become non-finite, and they are returned unchanged. A degenerate
/// transfer function fails before integration begins.
pub fn step_response(tf: &TransferFunction, opts: &StepOptions) -> SimResult<StepResponse> {
    if !(opts.horizon.is_finite() && opts.horizon > 0.0) {
        return Err(SimError::InvalidArg {
            what: "horizon must be positive and finite",
        });
    }
    if opts.samples < 2 {
        return Err(SimError::InvalidArg {
            what: "samples must be at least 2",
        });
    }
    if opts.substeps == 0 {
        return Err(SimError::InvalidArg {
            what: "substeps must be positive",
        });
    }

    let ss = StateSpace::from_transfer_function(tf)?;
    let intervals = opts.samples - 1;
    let dt_grid = opts.horizon / intervals as f64;
    let dt = dt_grid / opts.substeps as f64;
    debug!(
        order = ss.order(),
        dt, samples = opts.samples, "realized system for step response"
    );

    let model = LtiStepModel::new(ss);
    let mut x = model.initial_state();

    let mut time = Vec::with_capacity(opts.samples);
    let mut output = Vec::with_capacity(opts.samples);
    time.push(0.0);
    output.push(model.output(&x));

    for k in 1..opts.samples {
        let t_start = (k - 1) as f64 * dt_grid;
        for j in 0..opts.substeps {
            let t = t_start + j as f64 * dt;
            x = match opts.integrator {
                IntegratorKind::RK4 => RK4.step(&model, t, &x, dt),
                IntegratorKind::ForwardEuler => ForwardEuler.step(&model, t, &x, dt),
            };
        }
        // Grid times come from the index, not accumulation, so the endpoints
        // are exact: t_k = horizon * k / (samples - 1).
        time.push(opts.horizon * k as f64 / intervals as f64);
        output.push(model.output(&x));
    }

    Ok(StepResponse { time, output })
}
