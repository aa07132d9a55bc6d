//! Champion item pool
//!
//! This module provides the ordered set of item ids that are legal for a
//! champion. Pool order is significant: it is the decode order for the
//! continuous encoding.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::build::build::EMPTY_SLOT;
use crate::error::BuildError;

/// Ordered set of legal item identifiers for one champion
///
/// Item id `0` is reserved for empty slots and can never be a member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct ItemPool {
    items: Vec<u32>,
}

impl ItemPool {
    /// Create a pool from an ordered list of item ids
    ///
    /// Rejects the reserved id `0`, duplicates, and empty lists.
    pub fn new(items: Vec<u32>) -> Result<Self, BuildError> {
        if items.is_empty() {
            return Err(BuildError::EmptyPool);
        }
        let mut seen = std::collections::HashSet::with_capacity(items.len());
        for &item in &items {
            if item == EMPTY_SLOT {
                return Err(BuildError::ReservedItemId);
            }
            if !seen.insert(item) {
                return Err(BuildError::DuplicateItem(item));
            }
        }
        Ok(Self { items })
    }

    /// Number of items in the pool
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A pool is never empty by construction
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check membership of an item id
    pub fn contains(&self, item: u32) -> bool {
        self.items.contains(&item)
    }

    /// Get the item at a decode index
    pub fn get(&self, index: usize) -> Option<u32> {
        self.items.get(index).copied()
    }

    /// Position of an item id in decode order
    pub fn index_of(&self, item: u32) -> Option<usize> {
        self.items.iter().position(|&i| i == item)
    }

    /// Sample one item uniformly
    pub fn sample<R: Rng>(&self, rng: &mut R) -> u32 {
        self.items[rng.gen_range(0..self.items.len())]
    }

    /// Sample from the slot alphabet {empty} ∪ pool uniformly
    ///
    /// Every pool item and the empty marker have equal probability.
    pub fn sample_slot<R: Rng>(&self, rng: &mut R) -> u32 {
        let choice = rng.gen_range(0..=self.items.len());
        if choice == 0 {
            EMPTY_SLOT
        } else {
            self.items[choice - 1]
        }
    }
}

impl TryFrom<Vec<u32>> for ItemPool {
    type Error = BuildError;

    fn try_from(items: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<ItemPool> for Vec<u32> {
    fn from(pool: ItemPool) -> Self {
        pool.items
    }
}
