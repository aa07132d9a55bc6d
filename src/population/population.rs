//! Population type
//!
//! This module provides the Population container for the genetic
//! algorithm. Populations are replaced wholesale each generation; the
//! new population is built from scratch referencing only completed
//! prior-generation scores.

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::build::build::Build;
use crate::build::item_pool::ItemPool;
use crate::oracle::fitness::FitnessOracle;
use crate::population::individual::Individual;

/// A population of individuals
#[derive(Clone, Debug, Default)]
pub struct Population {
    individuals: Vec<Individual>,
    generation: usize,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create a random population of the given size
    pub fn random<R: Rng>(size: usize, pool: &ItemPool, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(Build::random(pool, rng)))
            .collect();
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Current generation number
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Add an individual
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Drop individuals beyond the given size
    pub fn truncate(&mut self, size: usize) {
        self.individuals.truncate(size);
    }

    /// Iterate over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get the best individual by fitness
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.iter().max_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Sort by fitness, best first
    pub fn sort_by_fitness(&mut self) {
        self.individuals.sort_by(|a, b| {
            b.fitness()
                .partial_cmp(&a.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Mean fitness of the evaluated individuals
    pub fn mean_fitness(&self) -> Option<f64> {
        let fitnesses: Vec<f64> = self
            .individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .map(|i| i.fitness())
            .collect();
        if fitnesses.is_empty() {
            None
        } else {
            Some(fitnesses.iter().sum::<f64>() / fitnesses.len() as f64)
        }
    }

    /// Build-fitness pairs for selection operators
    pub fn as_selection_pool(&self) -> Vec<(Build, f64)> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .map(|i| (i.build, i.fitness()))
            .collect()
    }

    /// Score every unevaluated individual (sequential)
    pub fn evaluate<O: FitnessOracle>(&mut self, oracle: &O) {
        for individual in &mut self.individuals {
            if !individual.is_evaluated() {
                individual.set_score(oracle.score(&individual.build));
            }
        }
    }
}

/// Parallel evaluation support (requires `parallel` feature)
#[cfg(feature = "parallel")]
impl Population {
    /// Score every unevaluated individual (parallel)
    ///
    /// The oracle is pure and read-only, so a generation's individuals
    /// can be scored concurrently without changing selection semantics.
    pub fn evaluate_parallel<O: FitnessOracle>(&mut self, oracle: &O) {
        self.individuals
            .par_iter_mut()
            .filter(|i| !i.is_evaluated())
            .for_each(|individual| {
                individual.set_score(oracle.score(&individual.build));
            });
    }
}

/// Sequential fallback for parallel evaluation (when `parallel` is disabled)
#[cfg(not(feature = "parallel"))]
impl Population {
    /// Score every unevaluated individual (sequential fallback)
    pub fn evaluate_parallel<O: FitnessOracle>(&mut self, oracle: &O) {
        self.evaluate(oracle);
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::benchmarks::SlotSumOracle;
    use crate::oracle::fitness::Scored;

    fn with_fitness(fitness: f64) -> Individual {
        Individual::with_score(
            Build::empty(),
            Scored {
                win_probability: fitness,
                fitness,
            },
        )
    }

    fn pool() -> ItemPool {
        ItemPool::new(vec![10, 20, 30, 40, 50]).unwrap()
    }

    fn create_test_population() -> Population {
        Population::from_individuals(vec![
            with_fitness(0.1),
            with_fitness(0.5),
            with_fitness(0.3),
            with_fitness(0.2),
        ])
    }

    #[test]
    fn test_population_random() {
        let mut rng = rand::thread_rng();
        let pop = Population::random(10, &pool(), &mut rng);
        assert_eq!(pop.len(), 10);
        assert!(pop.iter().all(|i| !i.is_evaluated()));
        assert!(pop.iter().all(|i| i.build.is_valid(&pool())));
    }

    #[test]
    fn test_population_best() {
        let pop = create_test_population();
        assert_eq!(pop.best().unwrap().fitness(), 0.5);
    }

    #[test]
    fn test_population_sort_by_fitness() {
        let mut pop = create_test_population();
        pop.sort_by_fitness();
        let fitnesses: Vec<f64> = pop.iter().map(|i| i.fitness()).collect();
        assert_eq!(fitnesses, vec![0.5, 0.3, 0.2, 0.1]);
    }

    #[test]
    fn test_population_mean_fitness() {
        let pop = create_test_population();
        assert!((pop.mean_fitness().unwrap() - 0.275).abs() < 1e-12);
        assert_eq!(Population::new().mean_fitness(), None);
    }

    #[test]
    fn test_population_evaluate() {
        let mut rng = rand::thread_rng();
        let mut pop = Population::random(5, &pool(), &mut rng);
        pop.evaluate(&SlotSumOracle::new());
        assert!(pop.iter().all(|i| i.is_evaluated()));
    }

    #[test]
    fn test_population_evaluate_parallel_matches_sequential() {
        let mut rng = rand::thread_rng();
        let mut seq = Population::random(20, &pool(), &mut rng);
        let mut par = seq.clone();

        seq.evaluate(&SlotSumOracle::new());
        par.evaluate_parallel(&SlotSumOracle::new());

        for (a, b) in seq.iter().zip(par.iter()) {
            assert_eq!(a.fitness(), b.fitness());
        }
    }

    #[test]
    fn test_population_evaluate_keeps_cached_scores() {
        // elites carried across generations keep their cached score
        let mut pop = Population::from_individuals(vec![with_fitness(123.0)]);
        pop.evaluate(&SlotSumOracle::new());
        assert_eq!(pop[0].fitness(), 123.0);
    }

    #[test]
    fn test_population_selection_pool_skips_unevaluated() {
        let mut pop = create_test_population();
        pop.push(Individual::new(Build::empty()));
        assert_eq!(pop.as_selection_pool().len(), 4);
    }

    #[test]
    fn test_population_generation_counter() {
        let mut pop = Population::new();
        assert_eq!(pop.generation(), 0);
        pop.set_generation(7);
        assert_eq!(pop.generation(), 7);
    }

    #[test]
    fn test_population_truncate() {
        let mut pop = create_test_population();
        pop.truncate(2);
        assert_eq!(pop.len(), 2);
    }
}
