//! Diagnostics and statistics
//!
//! This module provides per-generation statistics collection and the
//! result type produced by both search engines.

use serde::{Deserialize, Serialize};

use crate::build::build::Build;
use crate::oracle::fitness::Scored;
use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (1-based; one entry per completed generation)
    pub generation: usize,
    /// Best composite fitness seen so far in the run
    pub best_fitness: f64,
    /// Mean composite fitness of the current population
    pub mean_fitness: f64,
}

impl GenerationStats {
    /// Create stats from raw values
    pub fn new(generation: usize, best_fitness: f64, mean_fitness: f64) -> Self {
        Self {
            generation,
            best_fitness,
            mean_fitness,
        }
    }

    /// Compute stats for a GA population, given the running best
    pub fn from_population(population: &Population, generation: usize, best_fitness: f64) -> Self {
        Self {
            generation,
            best_fitness,
            mean_fitness: population.mean_fitness().unwrap_or(f64::NEG_INFINITY),
        }
    }
}

/// Statistics collector for an entire run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
}

impl RunStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Number of generations recorded
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    /// Whether anything has been recorded
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// The best-fitness convergence curve, one entry per generation
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// The mean-fitness curve
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }
}

/// Result of one optimization run
///
/// Created once when a run completes; immutable thereafter. The best
/// build is the best ever observed across all generations, not just the
/// final population's.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// The best build ever observed
    pub best_build: Build,
    /// Score of the best build
    pub score: Scored,
    /// Number of generations completed
    pub generations: usize,
    /// Population size used
    pub population_size: usize,
    /// Statistics for the run
    pub stats: RunStats,
}

impl OptimizationResult {
    /// Create a new result
    pub fn new(
        best_build: Build,
        score: Scored,
        generations: usize,
        population_size: usize,
        stats: RunStats,
    ) -> Self {
        Self {
            best_build,
            score,
            generations,
            population_size,
            stats,
        }
    }

    /// The best-fitness convergence curve
    pub fn convergence_history(&self) -> Vec<f64> {
        self.stats.best_fitness_history()
    }
}

pub mod prelude {
    pub use super::{GenerationStats, OptimizationResult, RunStats};
}
