//! Crossover operators
//!
//! This module provides the crossover operator used by the genetic
//! algorithm.

use rand::Rng;

use crate::build::build::{Build, SLOT_COUNT};
use crate::operators::traits::CrossoverOperator;

/// Single-point crossover
///
/// Picks a cut index uniformly in [1, 6] and swaps the tails, so each
/// offspring inherits at least one slot from each parent.
#[derive(Clone, Debug, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    /// Create a new single-point crossover
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator for SinglePointCrossover {
    fn crossover<R: Rng>(&self, parent1: &Build, parent2: &Build, rng: &mut R) -> (Build, Build) {
        let cut = rng.gen_range(1..SLOT_COUNT);
        parent1.crossover_at(parent2, cut)
    }
}
