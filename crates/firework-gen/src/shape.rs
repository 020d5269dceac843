// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Firework burst shapes and their sampling weights.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Burst shape, stored in the tag as its numeric id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Shape {
    /// `0`
    SmallBall,
    /// `1`
    LargeBall,
    /// `2`
    Star,
    /// `3`
    Creeper,
    /// `4`
    Burst,
}

/// Shape id outside `0..=4`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown firework shape id {0}")]
pub struct UnknownShape(pub u8);

impl Shape {
    /// Numeric id used in the `Type` tag.
    pub fn id(self) -> u8 {
        match self {
            Self::SmallBall => 0,
            Self::LargeBall => 1,
            Self::Star => 2,
            Self::Creeper => 3,
            Self::Burst => 4,
        }
    }
}

impl TryFrom<u8> for Shape {
    type Error = UnknownShape;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::SmallBall),
            1 => Ok(Self::LargeBall),
            2 => Ok(Self::Star),
            3 => Ok(Self::Creeper),
            4 => Ok(Self::Burst),
            other => Err(UnknownShape(other)),
        }
    }
}

impl From<Shape> for u8 {
    fn from(value: Shape) -> Self {
        value.id()
    }
}

/// Relative weight for one shape. Weights need not sum to one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeWeight {
    /// Shape being weighted.
    pub shape: Shape,
    /// Non-negative relative weight.
    pub weight: f64,
}

/// Small balls dominate, large balls and bursts fill in.
pub fn default_type_weights() -> Vec<TypeWeight> {
    vec![
        TypeWeight {
            shape: Shape::SmallBall,
            weight: 0.5,
        },
        TypeWeight {
            shape: Shape::LargeBall,
            weight: 0.3,
        },
        TypeWeight {
            shape: Shape::Burst,
            weight: 0.2,
        },
    ]
}
