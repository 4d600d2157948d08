//! Step-driven LTI model over a state-space realization.

use lb_lti::StateSpace;

use crate::model::TransientModel;

/// An LTI system `x' = A*x + B*u`, `y = C*x + D*u` driven by the unit step
/// `u(t) = 1` for `t >= 0`, from zero initial state.
#[derive(Debug, Clone)]
pub struct LtiStepModel {
    ss: StateSpace,
}

impl LtiStepModel {
    pub fn new(ss: StateSpace) -> Self {
        Self { ss }
    }

    /// System output y = C*x + D*u at the given state.
    pub fn output(&self, x: &[f64]) -> f64 {
        let cx: f64 = self.ss.c.iter().zip(x.iter()).map(|(c, xi)| c * xi).sum();
        cx + self.ss.d * STEP_INPUT
    }

    pub fn order(&self) -> usize {
        self.ss.order()
    }
}

const STEP_INPUT: f64 = 1.0;

impl TransientModel for LtiStepModel {
    type State = Vec<f64>;

    fn initial_state(&self) -> Vec<f64> {
        vec![0.0; self.ss.order()]
    }

    fn rhs(&self, _t: f64, x: &Vec<f64>) -> Vec<f64> {
        self.ss
            .a
            .iter()
            .zip(self.ss.b.iter())
            .map(|(row, bi)| {
                let ax: f64 = row.iter().zip(x.iter()).map(|(aij, xj)| aij * xj).sum();
                ax + bi * STEP_INPUT
            })
            .collect()
    }

    fn add(&self, a: &Vec<f64>, b: &Vec<f64>) -> Vec<f64> {
        a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
    }

    fn scale(&self, a: &Vec<f64>, scale: f64) -> Vec<f64> {
        a.iter().map(|x| x * scale).collect()
    }
}
