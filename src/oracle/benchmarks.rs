//! Benchmark oracles
//!
//! This module provides cheap deterministic oracles for exercising the
//! search engines without a trained model.

use crate::build::build::{Build, SLOT_COUNT};
use crate::oracle::fitness::{completion_bonus, diversity_bonus, FitnessOracle, Scored};

/// Oracle scoring a build by the sum of its slot values
///
/// `fitness = win_probability = Σ slots / (100 * slot_count)`, so builds
/// of larger item ids score higher. Useful for reproducibility tests:
/// the global optimum is the build filling every slot with the largest
/// pool item.
#[derive(Clone, Debug, Default)]
pub struct SlotSumOracle;

impl SlotSumOracle {
    /// Create a new slot-sum oracle
    pub fn new() -> Self {
        Self
    }
}

impl FitnessOracle for SlotSumOracle {
    fn score(&self, build: &Build) -> Scored {
        let sum: u32 = build.slots().iter().sum();
        let value = f64::from(sum) / (100.0 * SLOT_COUNT as f64);
        Scored {
            win_probability: value,
            fitness: value,
        }
    }
}

/// Oracle rewarding only the composite bonuses
///
/// `win_probability` is a constant 0.5; the fitness landscape is driven
/// entirely by the diversity and completion bonuses. Its optimum is any
/// build with 7 distinct items.
#[derive(Clone, Debug, Default)]
pub struct BonusOnlyOracle;

impl BonusOnlyOracle {
    /// Create a new bonus-only oracle
    pub fn new() -> Self {
        Self
    }
}

impl FitnessOracle for BonusOnlyOracle {
    fn score(&self, build: &Build) -> Scored {
        let win_probability = 0.5;
        Scored {
            win_probability,
            fitness: win_probability + diversity_bonus(build) + completion_bonus(build),
        }
    }
}
