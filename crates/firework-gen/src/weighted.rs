// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Weighted choice over a fixed item set.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;

/// Items paired with relative weights, validated once and sampled many times.
///
/// Probability of each item is `weight / total`. Weights must be finite and
/// non-negative with a positive total.
#[derive(Clone, Debug)]
pub struct WeightedTable<T> {
    items: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T> WeightedTable<T> {
    /// Build a table from `(item, weight)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (T, f64)>) -> Result<Self, WeightedError> {
        let (items, weights): (Vec<T>, Vec<f64>) = entries.into_iter().unzip();
        // WeightedIndex panics when the running total is not finite.
        if weights.iter().any(|w| !w.is_finite()) || !weights.iter().sum::<f64>().is_finite() {
            return Err(WeightedError::InvalidWeight);
        }
        let index = WeightedIndex::new(&weights)?;
        Ok(Self { items, index })
    }

    /// Draw one item.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.items[self.index.sample(rng)]
    }
}
