// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! A single burst definition.

use firework_snbt::{Compound, Value};

use crate::Shape;

/// One firework burst.
///
/// Invariants (upheld by the generator, not re-checked here):
///
/// - `colors` holds 1..=`max_colors` distinct festival colors.
/// - `fade_colors` holds 1..=`max_fade_colors` distinct fade colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explosion {
    /// Burst shape.
    pub shape: Shape,
    /// Twinkle effect.
    pub flicker: bool,
    /// Trail effect.
    pub trail: bool,
    /// Primary colors.
    pub colors: Vec<u32>,
    /// Fade colors.
    pub fade_colors: Vec<u32>,
}

impl Explosion {
    /// Tag tree for this burst: `{Type,Flicker,Trail,Colors,FadeColors}`.
    ///
    /// Flags are written as `0`/`1` integers and color lists as int arrays.
    pub fn to_value(&self) -> Value {
        Compound::new()
            .with("Type", self.shape.id())
            .with("Flicker", u8::from(self.flicker))
            .with("Trail", u8::from(self.trail))
            .with("Colors", int_array(&self.colors))
            .with("FadeColors", int_array(&self.fade_colors))
            .into()
    }
}

fn int_array(colors: &[u32]) -> Value {
    Value::IntArray(colors.iter().copied().map(i64::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use firework_snbt::render;

    #[test]
    fn renders_flags_as_ints() {
        let e = Explosion {
            shape: Shape::Burst,
            flicker: true,
            trail: false,
            colors: vec![10496000, 13260],
            fade_colors: vec![255],
        };
        assert_eq!(
            render(&e.to_value()),
            "{Type:4,Flicker:1,Trail:0,Colors:[I;10496000,13260],FadeColors:[I;255]}"
        );
    }
}
