// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Festival and fade color pools (RGB packed as decimal integers).

use serde::{Deserialize, Serialize};

/// Largest packed RGB value (`#FFFFFF`).
pub const MAX_RGB: u32 = 0xFF_FFFF;

/// Primary burst colors: deep reds, oranges, golds and a few cool accents.
///
/// Two literal blocks concatenated into one flat pool. Upstream lists them as a
/// single sequence with a missing separator between the blocks, which reads
/// like an authoring slip; kept as the union until someone decides otherwise.
pub const DEFAULT_FESTIVAL: [u32; 21] = [
    10496000, // dark red
    12541952, // burnt orange
    11833112, // muted gold
    13260,    // deep blue
    26214,    // forest green
    10496128, // dark magenta
    13391232, // dusty pink
    11842560, // mustard yellow
    6704255,  // twilight purple
    32896,    // teal
    11743532, 3887386, 2437522, 8073150, 2651799, 14188952, 4312372, 14602026, 6719955, 12801229,
    15435844,
];

/// Secondary colors used for the fade-out.
pub const DEFAULT_FADE: [u32; 10] = [
    14423100, // #DC143C
    13789470, // #D2691E
    13408512, // #CC9900
    255,      // #0000FF
    32768,    // #008000
    8388736,  // #800080
    16711884, // #FF00CC
    10079232, // #99CC00
    10289152, // #9D0000
    32767,    // #007FFF
];

/// The two independent color pools.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    /// Burst colors (`Colors`).
    pub festival: Vec<u32>,
    /// Fade colors (`FadeColors`).
    pub fade: Vec<u32>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            festival: DEFAULT_FESTIVAL.to_vec(),
            fade: DEFAULT_FADE.to_vec(),
        }
    }
}

/// First color that appears twice in `pool`, if any.
pub(crate) fn first_duplicate(pool: &[u32]) -> Option<u32> {
    pool.iter()
        .enumerate()
        .find_map(|(i, c)| pool[..i].contains(c).then_some(*c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_distinct_and_in_range() {
        let p = ColorPalette::default();
        assert_eq!(p.festival.len(), 21);
        assert_eq!(p.fade.len(), 10);
        assert_eq!(first_duplicate(&p.festival), None);
        assert_eq!(first_duplicate(&p.fade), None);
        assert!(p.festival.iter().chain(&p.fade).all(|c| *c <= MAX_RGB));
    }

    #[test]
    fn duplicate_detection() {
        assert_eq!(first_duplicate(&[1, 2, 3, 2, 1]), Some(2));
        assert_eq!(first_duplicate(&[]), None);
    }
}
