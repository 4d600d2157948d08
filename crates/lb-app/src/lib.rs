//! Service layer for loopbench.
//!
//! Exposes the one entry point front ends call: take a gain triple, a
//! scenario, and a load factor; compose controller and plant under unity
//! negative feedback; return the sampled closed-loop step response. All of
//! it is pure and synchronous, so concurrent front-end sessions need no
//! coordination.

pub mod error;
pub mod service;

pub use error::{AppError, AppResult};
pub use service::{
    GAIN_MAX, GAIN_MIN, LOAD_MAX, LOAD_MIN, SimulationRequest, SimulationResult,
    simulate_closed_loop, simulate_closed_loop_with,
};
