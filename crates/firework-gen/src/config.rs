// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Generator configuration: pools, weights and the probability knobs.
//!
//! Every field has a default, so a partial JSON document (or `{}`) loads cleanly.
//! Invalid combinations are caught by [`GeneratorConfig::validate`] before a
//! generator is built; sampling itself never fails.

use rand::distributions::WeightedError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coords::{default_pool, is_forbidden_in_token};
use crate::palette::{first_duplicate, MAX_RGB};
use crate::{
    default_flight_options, default_type_weights, ColorPalette, Coordinate, FlightOption, Shape,
    TypeWeight, WeightedTable,
};

/// Upper bound on `multi_max`; one rocket never carries more bursts.
pub const MAX_EXPLOSIONS: usize = 16;

/// Which palette a validation problem refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteKind {
    /// Festival (primary) colors.
    Festival,
    /// Fade colors.
    Fade,
}

impl core::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Festival => "festival",
            Self::Fade => "fade",
        })
    }
}

/// Rejected configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Distinct sampling would need more colors than the palette holds.
    #[error("{palette} palette has {available} colors but up to {requested} may be drawn")]
    PaletteTooSmall {
        /// Palette concerned.
        palette: PaletteKind,
        /// Colors in the palette.
        available: usize,
        /// Largest subset that may be requested.
        requested: usize,
    },
    /// A color appears twice, so "distinct" sampling could repeat it.
    #[error("{palette} palette lists color {color} more than once")]
    DuplicateColor {
        /// Palette concerned.
        palette: PaletteKind,
        /// Repeated value.
        color: u32,
    },
    /// Color outside `0..=0xFFFFFF`.
    #[error("{palette} color {color} exceeds 0xFFFFFF")]
    ColorOutOfRange {
        /// Palette concerned.
        palette: PaletteKind,
        /// Offending value.
        color: u32,
    },
    /// Shape weights unusable.
    #[error("type weights: {0}")]
    TypeWeights(WeightedError),
    /// Flight option weights unusable.
    #[error("flight options: {0}")]
    FlightWeights(WeightedError),
    /// Probability outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    Probability {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A count bound is zero, too large, or the range is inverted.
    #[error("invalid count bound: {0}")]
    CountBound(&'static str),
    /// Coordinate token would corrupt the command line.
    #[error("coordinate token {0:?} is empty or contains a reserved character")]
    BadToken(String),
}

/// Probability and count knobs for explosions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionRules {
    /// Chance a burst flickers.
    pub flicker_chance: f64,
    /// Chance a burst leaves a trail.
    pub trail_chance: f64,
    /// Chance a multi-enabled rocket carries several bursts.
    pub multi_chance: f64,
    /// Fewest bursts on a multi-burst rocket.
    pub multi_min: usize,
    /// Most bursts on a multi-burst rocket.
    pub multi_max: usize,
    /// Most festival colors per burst (at least one is always drawn).
    pub max_colors: usize,
    /// Most fade colors per burst (at least one is always drawn).
    pub max_fade_colors: usize,
}

impl Default for ExplosionRules {
    fn default() -> Self {
        Self {
            flicker_chance: 0.3,
            trail_chance: 0.3,
            multi_chance: 0.2,
            multi_min: 2,
            multi_max: 4,
            max_colors: 3,
            max_fade_colors: 2,
        }
    }
}

/// Everything a generator samples from. Read-only once a generator owns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Launch positions; empty means "relative origin".
    pub coordinates: Vec<Coordinate>,
    /// Color pools.
    pub palette: ColorPalette,
    /// Shape weights, in sampling order.
    pub type_weights: Vec<TypeWeight>,
    /// Flight options, in sampling order.
    pub flight_options: Vec<FlightOption>,
    /// Effect chances and count bounds.
    pub rules: ExplosionRules,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            coordinates: default_pool(),
            palette: ColorPalette::default(),
            type_weights: default_type_weights(),
            flight_options: default_flight_options(),
            rules: ExplosionRules::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check every invariant sampling relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let r = &self.rules;
        for (name, value) in [
            ("flicker_chance", r.flicker_chance),
            ("trail_chance", r.trail_chance),
            ("multi_chance", r.multi_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::Probability { name, value });
            }
        }
        if r.max_colors == 0 {
            return Err(ValidationError::CountBound("max_colors must be at least 1"));
        }
        if r.max_fade_colors == 0 {
            return Err(ValidationError::CountBound("max_fade_colors must be at least 1"));
        }
        if r.multi_min == 0 {
            return Err(ValidationError::CountBound("multi_min must be at least 1"));
        }
        if r.multi_min > r.multi_max {
            return Err(ValidationError::CountBound("multi_min exceeds multi_max"));
        }
        if r.multi_max > MAX_EXPLOSIONS {
            return Err(ValidationError::CountBound("multi_max exceeds MAX_EXPLOSIONS"));
        }

        check_pool(PaletteKind::Festival, &self.palette.festival, r.max_colors)?;
        check_pool(PaletteKind::Fade, &self.palette.fade, r.max_fade_colors)?;

        for coord in &self.coordinates {
            if let Coordinate::Token(t) = coord {
                if t.trim().is_empty() || t.chars().any(is_forbidden_in_token) {
                    return Err(ValidationError::BadToken(t.clone()));
                }
            }
        }
        self.type_table()?;
        self.flight_table()?;
        Ok(())
    }

    pub(crate) fn type_table(&self) -> Result<WeightedTable<Shape>, ValidationError> {
        WeightedTable::new(self.type_weights.iter().map(|w| (w.shape, w.weight)))
            .map_err(ValidationError::TypeWeights)
    }

    pub(crate) fn flight_table(&self) -> Result<WeightedTable<FlightOption>, ValidationError> {
        WeightedTable::new(self.flight_options.iter().map(|o| (*o, o.weight)))
            .map_err(ValidationError::FlightWeights)
    }
}

fn check_pool(palette: PaletteKind, pool: &[u32], requested: usize) -> Result<(), ValidationError> {
    if let Some(&color) = pool.iter().find(|c| **c > MAX_RGB) {
        return Err(ValidationError::ColorOutOfRange { palette, color });
    }
    if let Some(color) = first_duplicate(pool) {
        return Err(ValidationError::DuplicateColor { palette, color });
    }
    if pool.len() < requested {
        return Err(ValidationError::PaletteTooSmall {
            palette,
            available: pool.len(),
            requested,
        });
    }
    Ok(())
}
