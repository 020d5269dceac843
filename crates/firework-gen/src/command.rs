// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Full summon command assembly.

use core::fmt;

use firework_snbt::{Compound, Value};

use crate::Explosion;

/// Command verb and entity, including the leading slash.
pub const SUMMON_PREFIX: &str = "/summon firework_rocket";

/// Item id carried in `FireworksItem`.
pub const ROCKET_ITEM_ID: &str = "firework_rocket";

/// A generated rocket, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FireworkCommand {
    /// Rendered launch position (`x y z` or a location token).
    pub coordinate: String,
    /// `LifeTime` in ticks.
    pub lifetime: i32,
    /// `Flight` level.
    pub flight: i32,
    /// Bursts, in order.
    pub explosions: Vec<Explosion>,
}

impl FireworkCommand {
    /// Entity tag tree:
    /// `{LifeTime, FireworksItem:{id, Count, tag:{Fireworks:{Explosions, Flight}}}}`.
    pub fn to_value(&self) -> Value {
        let explosions: Vec<Value> = self.explosions.iter().map(Explosion::to_value).collect();
        let fireworks = Compound::new()
            .with("Explosions", explosions)
            .with("Flight", self.flight);
        let item = Compound::new()
            .with("id", ROCKET_ITEM_ID)
            .with("Count", 1)
            .with("tag", Compound::new().with("Fireworks", fireworks));
        Compound::new()
            .with("LifeTime", self.lifetime)
            .with("FireworksItem", item)
            .into()
    }

    /// The complete command line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FireworkCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SUMMON_PREFIX} {} {}", self.coordinate, self.to_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shape;

    #[test]
    fn matches_reference_command() {
        let cmd = FireworkCommand {
            coordinate: "-534 66 -970".into(),
            lifetime: 50,
            flight: 3,
            explosions: vec![Explosion {
                shape: Shape::LargeBall,
                flicker: false,
                trail: false,
                colors: vec![10496000],
                fade_colors: vec![255],
            }],
        };
        assert_eq!(
            cmd.render(),
            "/summon firework_rocket -534 66 -970 {LifeTime:50,FireworksItem:{id:firework_rocket,Count:1,tag:{Fireworks:{Explosions:[{Type:1,Flicker:0,Trail:0,Colors:[I;10496000],FadeColors:[I;255]}],Flight:3}}}}"
        );
    }

    #[test]
    fn multiple_explosions_are_comma_joined() {
        let burst = |shape| Explosion {
            shape,
            flicker: true,
            trail: true,
            colors: vec![1, 2, 3],
            fade_colors: vec![4, 5],
        };
        let cmd = FireworkCommand {
            coordinate: "~ ~ ~".into(),
            lifetime: 40,
            flight: 2,
            explosions: vec![burst(Shape::SmallBall), burst(Shape::Burst)],
        };
        let text = cmd.render();
        assert!(text.starts_with("/summon firework_rocket ~ ~ ~ {LifeTime:40,"));
        assert!(text.contains(
            "Explosions:[{Type:0,Flicker:1,Trail:1,Colors:[I;1,2,3],FadeColors:[I;4,5]},{Type:4,"
        ));
        assert!(text.ends_with("],Flight:2}}}}"));
    }
}
