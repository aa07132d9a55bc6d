//! Individual wrapper type
//!
//! This module provides the Individual type that pairs a build with its
//! cached score.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::build::build::Build;
use crate::oracle::fitness::Scored;

/// An individual in the population
///
/// Owns one build and the score computed for it. Builds are immutable
/// once scored: operators produce new individuals instead of editing
/// evaluated ones.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// The candidate build
    pub build: Build,
    /// The cached score (None until evaluated)
    pub score: Option<Scored>,
    /// Generation when this individual was created
    pub birth_generation: usize,
}

impl Individual {
    /// Create a new unevaluated individual
    pub fn new(build: Build) -> Self {
        Self {
            build,
            score: None,
            birth_generation: 0,
        }
    }

    /// Create an individual with a known score
    pub fn with_score(build: Build, score: Scored) -> Self {
        Self {
            build,
            score: Some(score),
            birth_generation: 0,
        }
    }

    /// Create an unevaluated individual tagged with its birth generation
    pub fn with_generation(build: Build, generation: usize) -> Self {
        Self {
            build,
            score: None,
            birth_generation: generation,
        }
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.score.is_some()
    }

    /// Get the score, panicking if not evaluated
    pub fn scored(&self) -> Scored {
        self.score.expect("Individual has not been evaluated")
    }

    /// Composite fitness, or negative infinity if not evaluated
    pub fn fitness(&self) -> f64 {
        self.score.map_or(f64::NEG_INFINITY, |s| s.fitness)
    }

    /// Set the score
    pub fn set_score(&mut self, score: Scored) {
        self.score = Some(score);
    }

    /// Check if this individual is better than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.fitness() > other.fitness()
    }
}

impl PartialOrd for Individual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.fitness().partial_cmp(&other.fitness())
    }
}
