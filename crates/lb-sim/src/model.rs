//! TransientModel trait for pluggable dynamic systems.

/// Trait for transient (dynamic) system models under fixed-step integration.
///
/// Models here are pure: the right-hand side is a function of time and state
/// only, so it takes `&self` and cannot fail. The state arithmetic hooks let
/// integrators combine stages without knowing the state layout.
pub trait TransientModel {
    /// State type (must be Clone for snapshots).
    type State: Clone;

    /// Return the initial state at t = 0.
    fn initial_state(&self) -> Self::State;

    /// Compute the state derivative dxdt = f(t, x).
    fn rhs(&self, t: f64, x: &Self::State) -> Self::State;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;
}
