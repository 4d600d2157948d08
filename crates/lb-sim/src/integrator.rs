//! Fixed-step time integrators.

use crate::model::TransientModel;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step using the transient model.
    fn step<M: TransientModel>(&self, model: &M, t: f64, x: &M::State, dt: f64) -> M::State;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<M: TransientModel>(&self, model: &M, t: f64, x: &M::State, dt: f64) -> M::State {
        let k1 = model.rhs(t, x);

        let x2 = model.add(x, &model.scale(&k1, 0.5 * dt));
        let k2 = model.rhs(t + 0.5 * dt, &x2);

        let x3 = model.add(x, &model.scale(&k2, 0.5 * dt));
        let k3 = model.rhs(t + 0.5 * dt, &x3);

        let x4 = model.add(x, &model.scale(&k3, dt));
        let k4 = model.rhs(t + dt, &x4);

        // Combine: x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = model.add(
            &model.add(&k1, &model.scale(&k2, 2.0)),
            &model.add(&model.scale(&k3, 2.0), &k4),
        );

        model.add(x, &model.scale(&k_sum, dt / 6.0))
    }
}

/// Forward Euler (explicit, 1st order). One rhs() call per step instead of
/// four; useful for cheap, low-accuracy runs and as a cross-check in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: TransientModel>(&self, model: &M, t: f64, x: &M::State, dt: f64) -> M::State {
        let xdot = model.rhs(t, x);
        model.add(x, &model.scale(&xdot, dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Scalar exponential decay x' = -x, exact solution x(t) = e^{-t}.
    struct Decay;

    impl TransientModel for Decay {
        type State = f64;

        fn initial_state(&self) -> f64 {
            1.0
        }

        fn rhs(&self, _t: f64, x: &f64) -> f64 {
            -x
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }
    }

    fn integrate<I: Integrator>(integrator: &I, dt: f64, t_end: f64) -> f64 {
        let model = Decay;
        let mut x = model.initial_state();
        let steps = (t_end / dt).round() as usize;
        for k in 0..steps {
            x = integrator.step(&model, k as f64 * dt, &x, dt);
        }
        x
    }

    #[test]
    fn rk4_matches_exponential_decay() {
        let x = integrate(&RK4, 0.01, 1.0);
        assert_relative_eq!(x, (-1.0_f64).exp(), max_relative = 1e-9);
    }

    #[test]
    fn forward_euler_converges_with_first_order_error() {
        let exact = (-1.0_f64).exp();
        let coarse = (integrate(&ForwardEuler, 0.02, 1.0) - exact).abs();
        let fine = (integrate(&ForwardEuler, 0.01, 1.0) - exact).abs();
        // Halving dt should roughly halve the error for a 1st-order method.
        assert!(fine < coarse);
        assert_relative_eq!(coarse / fine, 2.0, max_relative = 0.2);
    }

    #[test]
    fn rk4_is_far_more_accurate_than_euler() {
        let exact = (-1.0_f64).exp();
        let rk4_err = (integrate(&RK4, 0.1, 1.0) - exact).abs();
        let euler_err = (integrate(&ForwardEuler, 0.1, 1.0) - exact).abs();
        assert!(rk4_err < euler_err * 1e-3);
    }
}
