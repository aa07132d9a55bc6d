//! Differential evolution engine
//!
//! This module implements DE/rand/1/bin over the continuous `[0,1]^7`
//! encoding, decoding to discrete builds only for scoring. Survivor
//! selection is greedy per individual, so an individual's fitness never
//! regresses between generations.

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::build::build::{Build, SLOT_COUNT};
use crate::build::item_pool::ItemPool;
use crate::build::vector::SearchVector;
use crate::diagnostics::{GenerationStats, OptimizationResult, RunStats};
use crate::error::{ConfigError, OptResult, OptimizeError};
use crate::oracle::fitness::{FitnessOracle, Scored};

/// Configuration for differential evolution
#[derive(Clone, Debug)]
pub struct DeConfig {
    /// Population size
    pub population_size: usize,
    /// Number of generations to run
    pub generations: usize,
    /// Differential weight F scaling the donor difference
    pub differential_weight: f64,
    /// Per-component crossover probability CR
    pub crossover_probability: f64,
}

impl Default for DeConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 200,
            differential_weight: 0.5,
            crossover_probability: 0.9,
        }
    }
}

impl DeConfig {
    /// Validate the configuration before any generation runs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.population_size < 4 {
            // rand/1 needs three distinct donors besides the target
            return Err(ConfigError::DegeneratePopulation(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(ConfigError::RateOutOfRange {
                name: "crossover_probability",
                min: 0.0,
                max: 1.0,
                value: self.crossover_probability,
            });
        }
        if !(0.0..=2.0).contains(&self.differential_weight) {
            return Err(ConfigError::RateOutOfRange {
                name: "differential_weight",
                min: 0.0,
                max: 2.0,
                value: self.differential_weight,
            });
        }
        Ok(())
    }
}

/// One DE population member: a vector and its decoded build's score
#[derive(Clone, Copy, Debug)]
struct DeMember {
    vector: SearchVector,
    score: Scored,
}

/// Sample three distinct donor indices, none equal to the target
///
/// Rejection sampling over population indices; cheaper than shuffling
/// the whole population per target.
pub fn distinct_donors<R: Rng>(target: usize, len: usize, rng: &mut R) -> [usize; 3] {
    debug_assert!(len >= 4, "need three donors distinct from the target");
    let mut donors = [usize::MAX; 3];
    let mut count = 0;
    while count < 3 {
        let idx = rng.gen_range(0..len);
        if idx != target && !donors[..count].contains(&idx) {
            donors[count] = idx;
            count += 1;
        }
    }
    donors
}

/// DE/rand/1 donor combination: `a + F * (b - c)`, clamped to [0, 1]
pub fn mutant_rand1(a: &SearchVector, b: &SearchVector, c: &SearchVector, f: f64) -> SearchVector {
    let mut components = [0.0; SLOT_COUNT];
    for i in 0..SLOT_COUNT {
        components[i] = a.components()[i] + f * (b.components()[i] - c.components()[i]);
    }
    SearchVector::clamped(components)
}

/// Binomial crossover with one forced mutant component
///
/// Each component comes from the mutant with probability `cr`; one
/// random index always takes the mutant value, so the trial differs
/// from the target even at `cr = 0`.
pub fn binomial_crossover<R: Rng>(
    target: &SearchVector,
    mutant: &SearchVector,
    cr: f64,
    rng: &mut R,
) -> SearchVector {
    let forced = rng.gen_range(0..SLOT_COUNT);
    let mut components = *target.components();
    for (i, component) in components.iter_mut().enumerate() {
        if i == forced || rng.gen::<f64>() < cr {
            *component = mutant.components()[i];
        }
    }
    SearchVector::clamped(components)
}

/// Differential evolution engine
pub struct DifferentialEvolution {
    config: DeConfig,
    seed_builds: Vec<Build>,
}

impl DifferentialEvolution {
    /// Create an engine from a validated configuration
    pub fn new(config: DeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            seed_builds: Vec::new(),
        })
    }

    /// Seed the initial population with known builds
    ///
    /// Each seed is encoded into the continuous space at a random point
    /// inside its decode region. Seeds beyond the population size are
    /// ignored.
    pub fn with_seed_builds(mut self, seeds: Vec<Build>) -> Self {
        self.seed_builds = seeds;
        self
    }

    /// The engine's configuration
    pub fn config(&self) -> &DeConfig {
        &self.config
    }

    /// Run differential evolution
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
        let mut members = self.initialize(oracle, pool, rng);

        let mut best = *members
            .iter()
            .max_by(|a, b| {
                a.score
                    .fitness
                    .partial_cmp(&b.score.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .ok_or(OptimizeError::EmptyPopulation)?;
        let mut stats = RunStats::new();

        for generation in 1..=self.config.generations {
            self.evolve_generation(&mut members, oracle, pool, rng);

            for member in &members {
                if member.score.fitness > best.score.fitness {
                    best = *member;
                }
            }

            let mean = members.iter().map(|m| m.score.fitness).sum::<f64>()
                / members.len() as f64;
            stats.record(GenerationStats::new(generation, best.score.fitness, mean));
        }

        Ok(OptimizationResult::new(
            best.vector.decode(pool),
            best.score,
            self.config.generations,
            self.config.population_size,
            stats,
        ))
    }

    /// Build and score the initial population
    fn initialize<O, R>(&self, oracle: &O, pool: &ItemPool, rng: &mut R) -> Vec<DeMember>
    where
        O: FitnessOracle,
        R: Rng,
    {
        let mut vectors = Vec::with_capacity(self.config.population_size);
        for seed in self.seed_builds.iter().take(self.config.population_size) {
            vectors.push(SearchVector::encode(seed, pool, rng));
        }
        while vectors.len() < self.config.population_size {
            vectors.push(SearchVector::uniform(rng));
        }

        let scores = score_vectors(&vectors, oracle, pool);
        vectors
            .into_iter()
            .zip(scores)
            .map(|(vector, score)| DeMember { vector, score })
            .collect()
    }

    /// One generation: build all trials from the generation-start
    /// population, score them, then apply greedy survivor selection
    fn evolve_generation<O, R>(
        &self,
        members: &mut [DeMember],
        oracle: &O,
        pool: &ItemPool,
        rng: &mut R,
    ) where
        O: FitnessOracle,
        R: Rng,
    {
        let trials: Vec<SearchVector> = (0..members.len())
            .map(|i| {
                let [r0, r1, r2] = distinct_donors(i, members.len(), rng);
                let mutant = mutant_rand1(
                    &members[r0].vector,
                    &members[r1].vector,
                    &members[r2].vector,
                    self.config.differential_weight,
                );
                binomial_crossover(
                    &members[i].vector,
                    &mutant,
                    self.config.crossover_probability,
                    rng,
                )
            })
            .collect();

        let trial_scores = score_vectors(&trials, oracle, pool);

        for ((member, trial), trial_score) in
            members.iter_mut().zip(trials).zip(trial_scores)
        {
            if trial_score.fitness >= member.score.fitness {
                member.vector = trial;
                member.score = trial_score;
            }
        }
    }
}

/// Decode and score a batch of vectors (parallel)
#[cfg(feature = "parallel")]
fn score_vectors<O: FitnessOracle>(
    vectors: &[SearchVector],
    oracle: &O,
    pool: &ItemPool,
) -> Vec<Scored> {
    vectors
        .par_iter()
        .map(|v| oracle.score(&v.decode(pool)))
        .collect()
}

/// Decode and score a batch of vectors (sequential fallback)
#[cfg(not(feature = "parallel"))]
fn score_vectors<O: FitnessOracle>(
    vectors: &[SearchVector],
    oracle: &O,
    pool: &ItemPool,
) -> Vec<Scored> {
    vectors
        .iter()
        .map(|v| oracle.score(&v.decode(pool)))
        .collect()
}
