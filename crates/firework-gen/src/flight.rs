// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rocket flight parameters.

use serde::{Deserialize, Serialize};

/// One `(LifeTime, Flight)` pairing and its relative weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightOption {
    /// Ticks before the rocket detonates (`LifeTime`).
    pub lifetime: i32,
    /// Flight duration level (`Flight`).
    pub flight: i32,
    /// Non-negative relative weight.
    pub weight: f64,
}

impl FlightOption {
    /// Shorthand constructor.
    pub const fn new(lifetime: i32, flight: i32, weight: f64) -> Self {
        Self {
            lifetime,
            flight,
            weight,
        }
    }
}

/// Mostly mid-height launches, with short and long ones at the edges.
pub fn default_flight_options() -> Vec<FlightOption> {
    vec![
        FlightOption::new(40, 2, 0.2),
        FlightOption::new(50, 3, 0.6),
        FlightOption::new(60, 3, 0.2),
    ]
}
