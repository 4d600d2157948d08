//! Scenario definitions and the static catalog table.

use std::fmt;
use std::str::FromStr;

use lb_lti::{LtiResult, PidGains, TransferFunction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A physical plant the user can pick for closed-loop control.
///
/// Declaration order matches the selection list presented to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Water level in a reservoir tank.
    WaterTank,
    /// Temperature inside an incubator.
    Incubator,
    /// Speed of an electric motor.
    Motor,
    /// Room climate (humidity) control.
    ClimateControl,
    /// Altitude hold for a drone.
    Drone,
}

/// Plant denominator coefficient that varies linearly with load.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LoadLinear {
    base: f64,
    per_load: f64,
}

impl LoadLinear {
    const fn fixed(base: f64) -> Self {
        Self {
            base,
            per_load: 0.0,
        }
    }

    const fn sloped(base: f64, per_load: f64) -> Self {
        Self { base, per_load }
    }

    fn at(&self, load: f64) -> f64 {
        self.base + self.per_load * load
    }
}

struct ScenarioEntry {
    scenario: Scenario,
    canonical_id: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
    /// Coefficient of s in the second-order plant denominator.
    damping: LoadLinear,
    /// Constant term of the second-order plant denominator.
    restoring: LoadLinear,
    load_affects_dynamics: bool,
    default_gains: PidGains,
    description: &'static str,
}

static CATALOG: [ScenarioEntry; 5] = [
    ScenarioEntry {
        scenario: Scenario::WaterTank,
        canonical_id: "water-tank",
        display_name: "Water tank level",
        aliases: &["tank", "reservoir"],
        damping: LoadLinear::fixed(2.0),
        restoring: LoadLinear::fixed(1.0),
        load_affects_dynamics: false,
        default_gains: PidGains {
            kp: 2.0,
            ki: 0.5,
            kd: 0.1,
        },
        description: "Hold the water level at the setpoint while minimizing oscillation.",
    },
    ScenarioEntry {
        scenario: Scenario::Incubator,
        canonical_id: "incubator",
        display_name: "Incubator temperature",
        aliases: &["temperature"],
        damping: LoadLinear::fixed(1.5),
        restoring: LoadLinear::fixed(1.0),
        load_affects_dynamics: false,
        default_gains: PidGains {
            kp: 5.0,
            ki: 1.5,
            kd: 0.2,
        },
        description: "Stabilize the incubator temperature to within plus or minus 1 degree C.",
    },
    ScenarioEntry {
        scenario: Scenario::Motor,
        canonical_id: "motor",
        display_name: "Motor speed",
        aliases: &["engine"],
        damping: LoadLinear::sloped(3.0, 1.0),
        restoring: LoadLinear::sloped(2.0, 0.5),
        load_affects_dynamics: true,
        default_gains: PidGains {
            kp: 8.0,
            ki: 2.0,
            kd: 0.5,
        },
        description: "Track the commanded motor speed with a fast, stable response to load changes.",
    },
    ScenarioEntry {
        scenario: Scenario::ClimateControl,
        canonical_id: "climate-control",
        display_name: "Room climate control",
        aliases: &["climate", "humidity"],
        damping: LoadLinear::sloped(2.5, 0.3),
        restoring: LoadLinear::fixed(2.0),
        load_affects_dynamics: true,
        default_gains: PidGains {
            kp: 3.0,
            ki: 0.8,
            kd: 0.3,
        },
        description: "Keep room humidity steady despite disturbances from outside conditions.",
    },
    ScenarioEntry {
        scenario: Scenario::Drone,
        canonical_id: "drone",
        display_name: "Drone altitude hold",
        aliases: &["quadcopter", "altitude"],
        damping: LoadLinear::sloped(1.0, 1.0),
        restoring: LoadLinear::sloped(0.5, 0.2),
        load_affects_dynamics: true,
        default_gains: PidGains {
            kp: 10.0,
            ki: 3.0,
            kd: 1.0,
        },
        description: "Hold the drone at the commanded altitude through wind gusts.",
    },
];

impl Scenario {
    /// All scenarios in presentation order.
    pub fn all() -> impl Iterator<Item = Scenario> {
        CATALOG.iter().map(|entry| entry.scenario)
    }

    fn entry(self) -> &'static ScenarioEntry {
        match self {
            Scenario::WaterTank => &CATALOG[0],
            Scenario::Incubator => &CATALOG[1],
            Scenario::Motor => &CATALOG[2],
            Scenario::ClimateControl => &CATALOG[3],
            Scenario::Drone => &CATALOG[4],
        }
    }

    /// Stable identifier used on the command line and in serialized data.
    pub fn canonical_id(self) -> &'static str {
        self.entry().canonical_id
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        self.entry().display_name
    }

    /// Task description shown next to the response plot. Presentation data;
    /// nothing in the simulation pipeline reads it.
    pub fn description(self) -> &'static str {
        self.entry().description
    }

    /// Starting gains offered to the user for this plant.
    pub fn default_gains(self) -> PidGains {
        self.entry().default_gains
    }

    /// Whether a load control is exposed for this plant.
    ///
    /// This flag is presentation-level only: [`Scenario::plant`] evaluates
    /// its coefficient table literally either way, and the rows of
    /// load-insensitive scenarios simply do not reference the load.
    pub fn load_affects_dynamics(self) -> bool {
        self.entry().load_affects_dynamics
    }

    /// Plant transfer function `1 / (s^2 + a(load)*s + b(load))` for this
    /// scenario under the given load factor.
    ///
    /// No clamping happens here; callers own the [0, 10] load bound. Fails
    /// only if `load_factor` is non-finite.
    pub fn plant(self, load_factor: f64) -> LtiResult<TransferFunction> {
        let entry = self.entry();
        TransferFunction::new(
            vec![1.0],
            vec![
                1.0,
                entry.damping.at(load_factor),
                entry.restoring.at(load_factor),
            ],
        )
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error for unrecognized scenario identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown scenario '{input}' (expected one of: {expected})")]
pub struct ParseScenarioError {
    input: String,
    expected: String,
}

impl FromStr for Scenario {
    type Err = ParseScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s.trim().to_ascii_lowercase();
        for entry in &CATALOG {
            if entry.canonical_id == query || entry.aliases.contains(&query.as_str()) {
                return Ok(entry.scenario);
            }
        }
        Err(ParseScenarioError {
            input: s.to_string(),
            expected: CATALOG
                .iter()
                .map(|entry| entry.canonical_id)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}
