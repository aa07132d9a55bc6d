//! Continuous build encoding
//!
//! This module provides the `[0,1]^7` vector representation used by
//! differential evolution. A vector has no identity apart from the build
//! it decodes to; decoding is pure and deterministic.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::build::build::{Build, EMPTY_SLOT, SLOT_COUNT};
use crate::build::item_pool::ItemPool;

/// Components below this threshold decode to an empty slot
///
/// Reserving `[0, 0.1)` gives the empty slot a fixed 10% of the prior
/// mass; the remaining `[0.1, 1.0]` is partitioned uniformly over the
/// pool in decode order.
pub const EMPTY_THRESHOLD: f64 = 0.1;

/// A point in the continuous search space of differential evolution
///
/// Invariant: every component is in `[0, 1]`. Operators clamp rather
/// than wrap or reflect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchVector {
    components: [f64; SLOT_COUNT],
}

impl SearchVector {
    /// Sample a vector with each component uniform in [0, 1]
    pub fn uniform<R: Rng>(rng: &mut R) -> Self {
        let mut components = [0.0; SLOT_COUNT];
        for c in &mut components {
            *c = rng.gen::<f64>();
        }
        Self { components }
    }

    /// Create a vector from raw components, clamping each to [0, 1]
    pub fn clamped(components: [f64; SLOT_COUNT]) -> Self {
        let mut clamped = components;
        for c in &mut clamped {
            *c = c.clamp(0.0, 1.0);
        }
        Self { components: clamped }
    }

    /// The components in slot order
    pub fn components(&self) -> &[f64; SLOT_COUNT] {
        &self.components
    }

    /// Decode one component to a slot value
    fn decode_component(v: f64, pool: &ItemPool) -> u32 {
        if v < EMPTY_THRESHOLD {
            return EMPTY_SLOT;
        }
        let span = 1.0 - EMPTY_THRESHOLD;
        let index = ((v - EMPTY_THRESHOLD) / span * pool.len() as f64) as usize;
        let index = index.min(pool.len() - 1);
        pool.get(index).unwrap_or(EMPTY_SLOT)
    }

    /// Decode to a discrete build
    ///
    /// Pure: the same vector always decodes to the same build.
    pub fn decode(&self, pool: &ItemPool) -> Build {
        let mut slots = [EMPTY_SLOT; SLOT_COUNT];
        for (slot, &v) in slots.iter_mut().zip(self.components.iter()) {
            *slot = Self::decode_component(v, pool);
        }
        Build::from_slots(slots)
    }

    /// Encode a discrete build as a vector that decodes back to it
    ///
    /// Each component lands at a random position inside its slot's decode
    /// interval: empty slots in `[0, 0.1)`, item slots inside the item's
    /// bin of `[0.1, 1.0]`. Items outside the pool encode as empty.
    pub fn encode<R: Rng>(build: &Build, pool: &ItemPool, rng: &mut R) -> Self {
        let span = 1.0 - EMPTY_THRESHOLD;
        let bin = span / pool.len() as f64;
        let mut components = [0.0; SLOT_COUNT];
        for (c, &slot) in components.iter_mut().zip(build.slots().iter()) {
            *c = match pool.index_of(slot) {
                Some(index) => {
                    // jitter stays inside the bin so decode round-trips
                    EMPTY_THRESHOLD + index as f64 * bin + rng.gen::<f64>() * bin * 0.9
                }
                None => rng.gen::<f64>() * EMPTY_THRESHOLD,
            };
        }
        Self { components }
    }
}
