//! Operator traits
//!
//! This module defines the operator seams of the genetic algorithm, so
//! the engine stays independent of the concrete operators it runs.

use rand::Rng;

use crate::build::build::Build;
use crate::build::item_pool::ItemPool;

/// Selection operator trait
///
/// Selects individuals from a population for reproduction.
pub trait SelectionOperator: Send + Sync {
    /// Select a single individual from the population
    ///
    /// Returns the index of the selected individual.
    fn select<R: Rng>(&self, population: &[(Build, f64)], rng: &mut R) -> usize;
}

/// Crossover operator trait
///
/// Combines two parent builds into two offspring.
pub trait CrossoverOperator: Send + Sync {
    /// Apply crossover to two parents and produce two offspring
    fn crossover<R: Rng>(&self, parent1: &Build, parent2: &Build, rng: &mut R) -> (Build, Build);
}

/// Mutation operator trait
///
/// Applies random changes to a build within the legal pool.
pub trait MutationOperator: Send + Sync {
    /// Produce a mutated copy of the build
    fn mutate<R: Rng>(&self, build: &Build, pool: &ItemPool, rng: &mut R) -> Build;
}
