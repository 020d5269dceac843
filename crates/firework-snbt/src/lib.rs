// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Quoteless tag-notation ("SNBT") rendering for firework commands.
//!
//! This crate is intentionally tiny:
//!
//! - [`Value`] is a closed tagged union over compounds, lists, integer arrays,
//!   integers and text (plus a couple of fallback scalars).
//! - [`render`] turns a value tree into the exact text the game's command parser
//!   accepts. Keys and text are emitted verbatim, without quotes or escaping.
//!
//! Constraint on callers: text and keys must not contain characters that need
//! quoting in the target notation (`{`, `}`, `[`, `]`, `,`, `:`, whitespace).
//! Nothing here checks that; build trees from trusted literals.

mod compound;
mod value;

pub use compound::Compound;
pub use value::{render, Value};
