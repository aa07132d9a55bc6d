//! Composite fitness
//!
//! The objective both engines optimize is not the raw win probability
//! but a composite that also rewards distinct items and filled slots.

use serde::{Deserialize, Serialize};

use crate::build::build::{Build, SLOT_COUNT};
use crate::build::item_pool::ItemPool;
use crate::error::OracleError;
use crate::oracle::features::{FeatureRow, FeatureSchema, FitnessContext};
use crate::oracle::predictor::WinPredictor;

/// Weight of the distinct-item bonus
pub const DIVERSITY_WEIGHT: f64 = 0.1;

/// Weight of the filled-slot bonus
pub const COMPLETION_WEIGHT: f64 = 0.05;

/// A scored build: the raw probability and the composite objective
///
/// Both are reported downstream, so both are kept.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scored {
    /// The predictor's win-probability estimate in [0, 1]
    pub win_probability: f64,
    /// `win_probability + diversity_bonus + completion_bonus`
    pub fitness: f64,
}

/// The fitness oracle consumed by both search engines
///
/// Scoring is pure: deterministic for a fixed model and context, with no
/// mutable state, so a generation's builds may be scored concurrently.
pub trait FitnessOracle: Send + Sync {
    /// Score one build
    fn score(&self, build: &Build) -> Scored;
}

/// Diversity bonus: distinct non-empty items, scaled by slot count
pub fn diversity_bonus(build: &Build) -> f64 {
    build.distinct_items().len() as f64 / SLOT_COUNT as f64 * DIVERSITY_WEIGHT
}

/// Completion bonus: filled slots, scaled by slot count
pub fn completion_bonus(build: &Build) -> f64 {
    build.filled_slots() as f64 / SLOT_COUNT as f64 * COMPLETION_WEIGHT
}

/// Fitness oracle assembling predictor input from a build and a context
///
/// Item ids the model never saw (outside the pool) are encoded as empty
/// slots in the feature row; scoring never fails on a candidate. The
/// same substitution applies in both engines so the comparison is fair.
#[derive(Debug)]
pub struct CompositeOracle<P: WinPredictor> {
    predictor: P,
    pool: ItemPool,
    context: FitnessContext,
    schema: FeatureSchema,
}

impl<P: WinPredictor> CompositeOracle<P> {
    /// Create an oracle, rejecting a model/schema feature-count mismatch
    pub fn new(
        predictor: P,
        pool: ItemPool,
        context: FitnessContext,
    ) -> Result<Self, OracleError> {
        let schema = FeatureSchema::for_context(&context);
        if let Some(expected) = predictor.expected_features() {
            if expected != schema.len() {
                return Err(OracleError::SchemaMismatch {
                    model: expected,
                    schema: schema.len(),
                });
            }
        }
        Ok(Self {
            predictor,
            pool,
            context,
            schema,
        })
    }

    /// The schema this oracle feeds the predictor
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Assemble the predictor input for a build
    pub fn assemble_row(&self, build: &Build) -> FeatureRow {
        let mut values = Vec::with_capacity(self.schema.len());
        for &slot in build.slots() {
            // out-of-pool ids substitute as empty, never a crash
            let encoded = if slot == 0 || self.pool.contains(slot) {
                f64::from(slot)
            } else {
                0.0
            };
            values.push(encoded);
        }
        values.extend(self.context.stats().iter().map(|s| s.value));
        FeatureRow::new(values)
    }
}

impl<P: WinPredictor> FitnessOracle for CompositeOracle<P> {
    fn score(&self, build: &Build) -> Scored {
        let row = self.assemble_row(build);
        let win_probability = self.predictor.predict_win_probability(&row);
        let fitness = win_probability + diversity_bonus(build) + completion_bonus(build);
        Scored {
            win_probability,
            fitness,
        }
    }
}
