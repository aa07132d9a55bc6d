//! Comparison reporting
//!
//! This module runs both engines under matched population budgets and
//! produces the structured comparison records consumed downstream.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::algorithms::differential::{DeConfig, DifferentialEvolution};
use crate::algorithms::genetic::{GaConfig, GeneticAlgorithm};
use crate::build::build::Build;
use crate::dataset::ChampionData;
use crate::diagnostics::OptimizationResult;
use crate::error::{ConfigError, OptResult};
use crate::oracle::fitness::FitnessOracle;

/// One engine's result in its downstream record shape
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineReport {
    /// The best build found
    pub optimal_build: Build,
    /// Composite fitness of the best build
    pub fitness: f64,
    /// Raw win probability of the best build
    pub win_probability: f64,
    /// Generations the engine ran
    pub generations: usize,
    /// Population size the engine used
    pub population_size: usize,
    /// Best-fitness curve, one entry per generation
    pub convergence_history: Vec<f64>,
}

impl EngineReport {
    /// Build the record from an engine result
    pub fn from_result(result: &OptimizationResult) -> Self {
        Self {
            optimal_build: result.best_build,
            fitness: result.score.fitness,
            win_probability: result.score.win_probability,
            generations: result.generations,
            population_size: result.population_size,
            convergence_history: result.convergence_history(),
        }
    }
}

/// Which engine found the higher win probability
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    /// The genetic algorithm won
    GeneticAlgorithm,
    /// Differential evolution won
    DifferentialEvolution,
    /// Identical win probability and identical fitness
    Tie,
}

/// Head-to-head comparison of the two optimal builds
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuildComparison {
    /// The winning engine, or an explicit tie
    pub winner: Winner,
    /// Win-probability margin of the winner (0 on a tie)
    pub advantage: f64,
    /// GA win-rate improvement over baseline, in percent
    pub ga_improvement: f64,
    /// DE win-rate improvement over baseline, in percent
    pub de_improvement: f64,
    /// `|common| / max(|ga_items|, |de_items|)`
    pub overlap_ratio: f64,
    /// Items appearing in both optimal builds, ascending
    pub common_items: Vec<u32>,
}

/// The full comparison record for one champion
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Riot champion identifier
    pub champion_id: u32,
    /// Historical win rate the improvements are measured against
    pub baseline_win_rate: f64,
    /// Genetic algorithm result
    pub genetic_algorithm: EngineReport,
    /// Differential evolution result
    pub differential_evolution: EngineReport,
    /// Derived head-to-head comparison
    pub comparison: BuildComparison,
}

/// Items common to both builds, as a set (duplicate slots collapse)
pub fn common_items(a: &Build, b: &Build) -> BTreeSet<u32> {
    a.distinct_items()
        .intersection(&b.distinct_items())
        .copied()
        .collect()
}

/// Overlap between two builds' item sets
///
/// The denominator is the larger of the two distinct-item counts, so a
/// build fully contained in the other scores 1.0. Two empty builds
/// have no overlap to measure and score 0.
pub fn overlap_ratio(a: &Build, b: &Build) -> f64 {
    let larger = a.distinct_items().len().max(b.distinct_items().len());
    if larger == 0 {
        return 0.0;
    }
    common_items(a, b).len() as f64 / larger as f64
}

/// Percentage improvement of a win probability over a baseline rate
fn improvement_pct(win_probability: f64, baseline: f64) -> f64 {
    if baseline > 0.0 {
        (win_probability - baseline) / baseline * 100.0
    } else {
        0.0
    }
}

/// Runs both engines on one oracle and assembles the comparison record
pub struct Comparator {
    ga_config: GaConfig,
    de_config: DeConfig,
    seed_builds: Vec<Build>,
}

impl Comparator {
    /// Create a comparator with both engines at their defaults
    ///
    /// Population sizes are matched (50); each engine keeps its own
    /// generation budget.
    pub fn new() -> Self {
        Self {
            ga_config: GaConfig::default(),
            de_config: DeConfig::default(),
            seed_builds: Vec::new(),
        }
    }

    /// Create a comparator with explicit engine configurations
    ///
    /// Rejects mismatched population sizes: the comparison is only fair
    /// under matched population budgets.
    pub fn with_configs(ga_config: GaConfig, de_config: DeConfig) -> Result<Self, ConfigError> {
        ga_config.validate()?;
        de_config.validate()?;
        if ga_config.population_size != de_config.population_size {
            return Err(ConfigError::MismatchedPopulations {
                ga: ga_config.population_size,
                de: de_config.population_size,
            });
        }
        Ok(Self {
            ga_config,
            de_config,
            seed_builds: Vec::new(),
        })
    }

    /// Seed both engines' initial populations with known builds
    pub fn with_seed_builds(mut self, seeds: Vec<Build>) -> Self {
        self.seed_builds = seeds;
        self
    }

    /// Run both engines and produce the comparison record
    pub fn run<O, R>(
        &self,
        oracle: &O,
        data: &ChampionData,
        rng: &mut R,
    ) -> OptResult<ComparisonReport>
    where
        O: FitnessOracle,
        R: Rng,
    {
        let pool = data.item_pool()?;

        let ga = GeneticAlgorithm::new(self.ga_config.clone())?
            .with_seed_builds(self.seed_builds.clone());
        let ga_result = ga.run(oracle, &pool, rng)?;

        let de = DifferentialEvolution::new(self.de_config.clone())?
            .with_seed_builds(self.seed_builds.clone());
        let de_result = de.run(oracle, &pool, rng)?;

        Ok(compare(
            data.champion_id,
            data.baseline_win_rate(),
            &ga_result,
            &de_result,
        ))
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the comparison record from two finished runs
///
/// The winner is the engine with the higher win probability; an exact
/// tie falls back to the higher composite fitness; if both are tied the
/// record says so explicitly rather than guessing.
pub fn compare(
    champion_id: u32,
    baseline_win_rate: f64,
    ga_result: &OptimizationResult,
    de_result: &OptimizationResult,
) -> ComparisonReport {
    let ga = EngineReport::from_result(ga_result);
    let de = EngineReport::from_result(de_result);

    let (winner, advantage) = if ga.win_probability > de.win_probability {
        (Winner::GeneticAlgorithm, ga.win_probability - de.win_probability)
    } else if de.win_probability > ga.win_probability {
        (Winner::DifferentialEvolution, de.win_probability - ga.win_probability)
    } else if ga.fitness > de.fitness {
        (Winner::GeneticAlgorithm, 0.0)
    } else if de.fitness > ga.fitness {
        (Winner::DifferentialEvolution, 0.0)
    } else {
        (Winner::Tie, 0.0)
    };

    let comparison = BuildComparison {
        winner,
        advantage,
        ga_improvement: improvement_pct(ga.win_probability, baseline_win_rate),
        de_improvement: improvement_pct(de.win_probability, baseline_win_rate),
        overlap_ratio: overlap_ratio(&ga.optimal_build, &de.optimal_build),
        common_items: common_items(&ga.optimal_build, &de.optimal_build)
            .into_iter()
            .collect(),
    };

    ComparisonReport {
        champion_id,
        baseline_win_rate,
        genetic_algorithm: ga,
        differential_evolution: de,
        comparison,
    }
}

pub mod prelude {
    pub use super::{
        common_items, compare, overlap_ratio, BuildComparison, Comparator, ComparisonReport,
        EngineReport, Winner,
    };
}
