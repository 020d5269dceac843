// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Randomized `/summon firework_rocket` command generator.
//!
//! A [`FireworkGenerator`] owns a validated [`GeneratorConfig`] (coordinate
//! pool, festival/fade palettes, shape weights, flight options, effect
//! chances) plus an injected random source. Each command is built as an
//! [`Explosion`]/[`FireworkCommand`] record, turned into a tag tree and
//! rendered with [`firework_snbt`].
//!
//! ```
//! use firework_gen::{FireworkGenerator, GeneratorConfig};
//!
//! let mut g = FireworkGenerator::seeded(GeneratorConfig::default(), 7)?;
//! let line = g.build_command(true);
//! assert!(line.starts_with("/summon firework_rocket "));
//! # Ok::<(), firework_gen::ValidationError>(())
//! ```

mod command;
pub mod config;
mod coords;
mod explosion;
mod flight;
mod generator;
mod palette;
mod shape;
mod weighted;

pub use command::{FireworkCommand, ROCKET_ITEM_ID, SUMMON_PREFIX};
pub use config::{ExplosionRules, GeneratorConfig, PaletteKind, ValidationError, MAX_EXPLOSIONS};
pub use coords::{default_pool, Coordinate, RELATIVE_ORIGIN};
pub use explosion::Explosion;
pub use flight::{default_flight_options, FlightOption};
pub use generator::FireworkGenerator;
pub use palette::{ColorPalette, DEFAULT_FADE, DEFAULT_FESTIVAL, MAX_RGB};
pub use shape::{default_type_weights, Shape, TypeWeight, UnknownShape};
pub use weighted::WeightedTable;
