//! Plant scenario catalog for loopbench.
//!
//! One tagged table carries everything a front end or the simulation
//! pipeline needs per scenario: base plant dynamics, load sensitivity,
//! default PID gains, and display metadata. Selecting a plant and selecting
//! default gains read the same row, so the two can never drift apart.

pub mod scenario;

pub use scenario::{ParseScenarioError, Scenario};
