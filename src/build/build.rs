//! Discrete item build
//!
//! This module provides the canonical 7-slot build representation shared
//! by both search engines.

use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::build::item_pool::ItemPool;
use crate::error::BuildError;

/// Number of equipment slots in a build
pub const SLOT_COUNT: usize = 7;

/// Reserved marker for an empty slot
pub const EMPTY_SLOT: u32 = 0;

/// Probability that a randomly initialized slot stays empty
const RANDOM_EMPTY_RATE: f64 = 0.2;

/// An ordered assignment of items to the 7 equipment slots
///
/// `0` marks an empty slot; duplicate non-zero items are permitted (the
/// fitness bonuses, not the representation, discourage them). Builds are
/// never mutated after scoring — operators construct new ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Build {
    slots: [u32; SLOT_COUNT],
}

impl Build {
    /// The all-empty build
    pub fn empty() -> Self {
        Self {
            slots: [EMPTY_SLOT; SLOT_COUNT],
        }
    }

    /// Create a build from exactly 7 slot values
    pub fn from_slots(slots: [u32; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// Create a build from a slice, rejecting wrong lengths
    pub fn try_from_slice(slots: &[u32]) -> Result<Self, BuildError> {
        let slots: [u32; SLOT_COUNT] =
            slots
                .try_into()
                .map_err(|_| BuildError::SlotCountMismatch {
                    expected: SLOT_COUNT,
                    actual: slots.len(),
                })?;
        Ok(Self { slots })
    }

    /// Generate a random build
    ///
    /// Each slot is independently empty with a small fixed probability,
    /// otherwise a uniformly random pool item.
    pub fn random<R: Rng>(pool: &ItemPool, rng: &mut R) -> Self {
        let mut slots = [EMPTY_SLOT; SLOT_COUNT];
        for slot in &mut slots {
            if rng.gen::<f64>() >= RANDOM_EMPTY_RATE {
                *slot = pool.sample(rng);
            }
        }
        Self { slots }
    }

    /// The slot values in order
    pub fn slots(&self) -> &[u32; SLOT_COUNT] {
        &self.slots
    }

    /// Slot value at an index
    pub fn slot(&self, index: usize) -> u32 {
        self.slots[index]
    }

    /// Count of non-empty slots
    pub fn filled_slots(&self) -> usize {
        self.slots.iter().filter(|&&s| s != EMPTY_SLOT).count()
    }

    /// The set of distinct non-empty items
    pub fn distinct_items(&self) -> BTreeSet<u32> {
        self.slots
            .iter()
            .copied()
            .filter(|&s| s != EMPTY_SLOT)
            .collect()
    }

    /// Check that every non-empty slot holds a pool item
    pub fn is_valid(&self, pool: &ItemPool) -> bool {
        self.slots
            .iter()
            .all(|&s| s == EMPTY_SLOT || pool.contains(s))
    }

    /// Validate against a pool, naming the first offending item
    pub fn validate(&self, pool: &ItemPool) -> Result<(), BuildError> {
        for &slot in &self.slots {
            if slot != EMPTY_SLOT && !pool.contains(slot) {
                return Err(BuildError::ItemNotInPool(slot));
            }
        }
        Ok(())
    }

    /// Single-point recombination of two builds
    ///
    /// The cut index is uniform in [1, 6], so each offspring always takes
    /// at least one slot from each parent.
    pub fn crossover_at(&self, other: &Self, cut: usize) -> (Self, Self) {
        debug_assert!((1..SLOT_COUNT).contains(&cut));
        let mut child1 = self.slots;
        let mut child2 = other.slots;
        child1[cut..].copy_from_slice(&other.slots[cut..]);
        child2[cut..].copy_from_slice(&self.slots[cut..]);
        (Self { slots: child1 }, Self { slots: child2 })
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write!(f, "[")?;
        for &slot in &self.slots {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            if slot == EMPTY_SLOT {
                write!(f, "Empty")?;
            } else {
                write!(f, "Item{slot}")?;
            }
        }
        write!(f, "]")
    }
}

impl From<[u32; SLOT_COUNT]> for Build {
    fn from(slots: [u32; SLOT_COUNT]) -> Self {
        Self::from_slots(slots)
    }
}
