//! Genetic algorithm engine
//!
//! This module implements a standard generational genetic algorithm over
//! discrete builds: tournament selection, single-point crossover,
//! per-slot resampling mutation, and elitism.

use rand::Rng;

use crate::build::build::Build;
use crate::build::item_pool::ItemPool;
use crate::diagnostics::{GenerationStats, OptimizationResult, RunStats};
use crate::error::{ConfigError, OptResult, OptimizeError};
use crate::operators::crossover::SinglePointCrossover;
use crate::operators::mutation::SlotResampleMutation;
use crate::operators::selection::TournamentSelection;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::oracle::fitness::FitnessOracle;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Configuration for the genetic algorithm
#[derive(Clone, Debug)]
pub struct GaConfig {
    /// Population size
    pub population_size: usize,
    /// Number of generations to run
    pub generations: usize,
    /// Probability that a parent pair recombines
    pub crossover_rate: f64,
    /// Per-slot mutation probability
    pub mutation_rate: f64,
    /// Number of elite individuals copied unchanged each generation
    pub elite_size: usize,
    /// Tournament size for selection
    pub tournament_size: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.15,
            elite_size: 5,
            tournament_size: 3,
        }
    }
}

impl GaConfig {
    /// Validate the configuration before any generation runs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::RateOutOfRange {
                name: "crossover_rate",
                min: 0.0,
                max: 1.0,
                value: self.crossover_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::RateOutOfRange {
                name: "mutation_rate",
                min: 0.0,
                max: 1.0,
                value: self.mutation_rate,
            });
        }
        if self.elite_size > self.population_size {
            return Err(ConfigError::EliteExceedsPopulation {
                elite: self.elite_size,
                population: self.population_size,
            });
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::InvalidTournamentSize {
                tournament: self.tournament_size,
                population: self.population_size,
            });
        }
        Ok(())
    }
}

/// Generational genetic algorithm
///
/// Operators are pluggable through the operator traits; `new` wires up
/// the standard set from the configuration.
pub struct GeneticAlgorithm<
    S = TournamentSelection,
    C = SinglePointCrossover,
    M = SlotResampleMutation,
> {
    config: GaConfig,
    selection: S,
    crossover: C,
    mutation: M,
    seed_builds: Vec<Build>,
}

impl GeneticAlgorithm {
    /// Create an engine with the standard operators
    pub fn new(config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let selection = TournamentSelection::new(config.tournament_size);
        let mutation = SlotResampleMutation::new(config.mutation_rate);
        Ok(Self {
            config,
            selection,
            crossover: SinglePointCrossover::new(),
            mutation,
            seed_builds: Vec::new(),
        })
    }
}

impl<S, C, M> GeneticAlgorithm<S, C, M>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
{
    /// Seed the initial population with known builds
    ///
    /// Seeds beyond the population size are ignored; remaining slots are
    /// filled randomly.
    pub fn with_seed_builds(mut self, seeds: Vec<Build>) -> Self {
        self.seed_builds = seeds;
        self
    }

    /// The engine's configuration
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Run the genetic algorithm
    pub fn run<O, R>(
        &self,
        oracle: &O,
        pool: &ItemPool,
        rng: &mut R,
    ) -> OptResult<OptimizationResult>
    where
        O: FitnessOracle,
        R: Rng,
    {
        let mut population = self.initialize(pool, rng);
        population.evaluate_parallel(oracle);

        // best-ever accumulator threaded through the loop
        let mut best = *population.best().ok_or(OptimizeError::EmptyPopulation)?;
        let mut stats = RunStats::new();

        for generation in 1..=self.config.generations {
            population = self.evolve_generation(&population, oracle, pool, generation, rng);

            if let Some(gen_best) = population.best() {
                if gen_best.is_better_than(&best) {
                    best = *gen_best;
                }
            }

            stats.record(GenerationStats::from_population(
                &population,
                generation,
                best.fitness(),
            ));
        }

        Ok(OptimizationResult::new(
            best.build,
            best.scored(),
            self.config.generations,
            self.config.population_size,
            stats,
        ))
    }

    /// Build the initial population from seeds plus random fill
    fn initialize<R: Rng>(&self, pool: &ItemPool, rng: &mut R) -> Population {
        let mut population = Population::with_capacity(self.config.population_size);
        for seed in self.seed_builds.iter().take(self.config.population_size) {
            population.push(Individual::new(*seed));
        }
        while population.len() < self.config.population_size {
            population.push(Individual::new(Build::random(pool, rng)));
        }
        population
    }

    /// Produce the next generation from the current one
    fn evolve_generation<O, R>(
        &self,
        population: &Population,
        oracle: &O,
        pool: &ItemPool,
        generation: usize,
        rng: &mut R,
    ) -> Population
    where
        O: FitnessOracle,
        R: Rng,
    {
        let mut next = Population::with_capacity(self.config.population_size);

        // Elitism: the top individuals carry over unchanged, cached
        // scores included
        let mut sorted = population.clone();
        sorted.sort_by_fitness();
        for i in 0..self.config.elite_size.min(sorted.len()) {
            next.push(sorted[i]);
        }

        let selection_pool = population.as_selection_pool();

        while next.len() < self.config.population_size {
            let parent1 = selection_pool[self.selection.select(&selection_pool, rng)].0;
            let parent2 = selection_pool[self.selection.select(&selection_pool, rng)].0;

            let (child1, child2) = if rng.gen::<f64>() < self.config.crossover_rate {
                self.crossover.crossover(&parent1, &parent2, rng)
            } else {
                (parent1, parent2)
            };

            let child1 = self.mutation.mutate(&child1, pool, rng);
            let child2 = self.mutation.mutate(&child2, pool, rng);

            next.push(Individual::with_generation(child1, generation));
            if next.len() < self.config.population_size {
                next.push(Individual::with_generation(child2, generation));
            }
        }

        next.set_generation(generation);
        next.evaluate_parallel(oracle);
        next
    }
}
