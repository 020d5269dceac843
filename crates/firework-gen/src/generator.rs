// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Randomized firework command generation.
//!
//! All sampling goes through the one injected random source, in a fixed order
//! per command: coordinate, flight option, multi-burst roll, then each burst
//! (shape, flicker, trail, colors, fade colors). Matching seeds and matching
//! call sequences therefore yield identical output.

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::coords::RELATIVE_ORIGIN;
use crate::{
    Explosion, FireworkCommand, FlightOption, GeneratorConfig, Shape, ValidationError,
    WeightedTable,
};

/// Generator owning read-only pools and a random source.
#[derive(Debug)]
pub struct FireworkGenerator<R = StdRng> {
    config: GeneratorConfig,
    types: WeightedTable<Shape>,
    flights: WeightedTable<FlightOption>,
    rng: R,
}

impl FireworkGenerator<StdRng> {
    /// Generator seeded from OS entropy; output differs between runs.
    pub fn from_entropy(config: GeneratorConfig) -> Result<Self, ValidationError> {
        Self::new(config, StdRng::from_entropy())
    }

    /// Reproducible generator.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Result<Self, ValidationError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FireworkGenerator<R> {
    /// Validate `config` and take ownership of it and of `rng`.
    pub fn new(config: GeneratorConfig, rng: R) -> Result<Self, ValidationError> {
        config.validate()?;
        let types = config.type_table()?;
        let flights = config.flight_table()?;
        Ok(Self {
            config,
            types,
            flights,
            rng,
        })
    }

    /// The pools this generator samples from.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Uniformly chosen launch position, or `~ ~ ~` when the pool is empty.
    pub fn pick_coordinate(&mut self) -> String {
        self.config
            .coordinates
            .choose(&mut self.rng)
            .map_or_else(|| RELATIVE_ORIGIN.to_owned(), ToString::to_string)
    }

    /// One burst with a weighted shape, independent effect flags and distinct colors.
    pub fn build_explosion(&mut self) -> Explosion {
        let rules = &self.config.rules;
        let shape = *self.types.sample(&mut self.rng);
        let flicker = self.rng.gen_bool(rules.flicker_chance);
        let trail = self.rng.gen_bool(rules.trail_chance);
        let colors = sample_distinct(&mut self.rng, &self.config.palette.festival, rules.max_colors);
        let fade_colors =
            sample_distinct(&mut self.rng, &self.config.palette.fade, rules.max_fade_colors);
        trace!(?shape, flicker, trail, ?colors, ?fade_colors, "explosion");
        Explosion {
            shape,
            flicker,
            trail,
            colors,
            fade_colors,
        }
    }

    /// One rocket record. With `multiple`, there is a `multi_chance` of
    /// carrying `multi_min..=multi_max` bursts instead of one.
    pub fn build_firework(&mut self, multiple: bool) -> FireworkCommand {
        let coordinate = self.pick_coordinate();
        let flight = *self.flights.sample(&mut self.rng);
        let rules = &self.config.rules;
        let count = if multiple && self.rng.gen_bool(rules.multi_chance) {
            self.rng.gen_range(rules.multi_min..=rules.multi_max)
        } else {
            1
        };
        let explosions = (0..count).map(|_| self.build_explosion()).collect();
        debug!(
            %coordinate,
            lifetime = flight.lifetime,
            flight = flight.flight,
            explosions = count,
            "built firework"
        );
        FireworkCommand {
            coordinate,
            lifetime: flight.lifetime,
            flight: flight.flight,
            explosions,
        }
    }

    /// Rendered `/summon` command line.
    pub fn build_command(&mut self, multiple: bool) -> String {
        self.build_firework(multiple).render()
    }

    /// `count` multi-enabled commands, in generation order. No deduplication.
    pub fn build_batch(&mut self, count: usize) -> Vec<String> {
        let batch: Vec<String> = (0..count).map(|_| self.build_command(true)).collect();
        info!(count, "generated firework batch");
        batch
    }
}

/// Between 1 and `max` distinct entries of `pool`, in random order.
///
/// `max <= pool.len()` is guaranteed by config validation.
fn sample_distinct<R: Rng + ?Sized>(rng: &mut R, pool: &[u32], max: usize) -> Vec<u32> {
    let amount = rng.gen_range(1..=max);
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i])
        .collect()
}
