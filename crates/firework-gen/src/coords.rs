// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Launch positions.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Relative-origin token: "wherever the command runs".
pub const RELATIVE_ORIGIN: &str = "~ ~ ~";

/// One launch position.
///
/// Serialized untagged: a JSON `[x, y, z]` array or a free-form string such as
/// `"~ ~5 ~"` or `"^ ^ ^2"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    /// Absolute block position.
    Block([i32; 3]),
    /// Location text passed through verbatim.
    Token(String),
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block([x, y, z]) => write!(f, "{x} {y} {z}"),
            Self::Token(t) => f.write_str(t),
        }
    }
}

impl From<[i32; 3]> for Coordinate {
    fn from(value: [i32; 3]) -> Self {
        Self::Block(value)
    }
}

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Self::Token(value.to_owned())
    }
}

/// Default pool: a 3x2 grid around the plaza at (-534, 66, -966).
pub fn default_pool() -> Vec<Coordinate> {
    [
        [-534, 66, -970],
        [-534, 66, -962],
        [-530, 66, -962],
        [-530, 66, -970],
        [-538, 66, -970],
        [-538, 66, -962],
    ]
    .into_iter()
    .map(Coordinate::Block)
    .collect()
}

/// Characters a token must not contain to survive inside a command line.
pub(crate) fn is_forbidden_in_token(c: char) -> bool {
    matches!(c, '{' | '}' | '[' | ']' | ',' | '\n' | '\r')
}
