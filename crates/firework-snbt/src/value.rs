// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Value tree and its text rendering.

use core::fmt::{self, Write as _};

use crate::Compound;

/// Node of a tag tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Ordered key → value mapping, rendered `{k:v,...}`.
    Compound(Compound),
    /// Generic list, rendered `[a,b,...]`.
    ///
    /// A non-empty list whose elements are all [`Value::Int`] renders as an
    /// integer array (`[I;...]`) instead.
    List(Vec<Value>),
    /// Explicit integer array, always rendered `[I;...]`.
    IntArray(Vec<i64>),
    /// Integer scalar.
    Int(i64),
    /// Unquoted text.
    Text(String),
    /// Float scalar (fallback, default `Display` text).
    Float(f64),
    /// Boolean scalar (fallback, default `Display` text).
    Bool(bool),
}

/// Render a value tree into tag notation.
///
/// Pure and infallible: identical trees always yield identical text.
pub fn render(value: &Value) -> String {
    value.to_string()
}

fn write_joined<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut each: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        each(f, item)?;
    }
    Ok(())
}

fn write_int_array<'a>(
    f: &mut fmt::Formatter<'_>,
    ints: impl Iterator<Item = &'a i64>,
) -> fmt::Result {
    f.write_str("[I;")?;
    for (i, n) in ints.enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{n}")?;
    }
    f.write_char(']')
}

impl Value {
    /// Borrow the integer payload, if this is an [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(map) => {
                f.write_char('{')?;
                let entries: Vec<(&str, &Value)> = map.iter().collect();
                write_joined(f, &entries, |f, (k, v)| write!(f, "{k}:{v}"))?;
                f.write_char('}')
            }
            Self::List(items) => {
                let ints: Option<Vec<i64>> = items.iter().map(Value::as_int).collect();
                match ints {
                    Some(ints) if !ints.is_empty() => write_int_array(f, ints.iter()),
                    _ => {
                        f.write_char('[')?;
                        write_joined(f, items, |f, v| write!(f, "{v}"))?;
                        f.write_char(']')
                    }
                }
            }
            Self::IntArray(ints) => write_int_array(f, ints.iter()),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<Compound> for Value {
    fn from(value: Compound) -> Self {
        Self::Compound(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
