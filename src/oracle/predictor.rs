//! Win-probability predictor
//!
//! The trained classifier is consumed as a black box behind the
//! `WinPredictor` trait; training lives outside this crate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::oracle::features::FeatureRow;

/// A trained classifier exposing a win-probability estimate
///
/// Implementations must be pure: the same feature row always yields the
/// same probability, and the returned value is in `[0, 1]`.
pub trait WinPredictor: Send + Sync {
    /// Predicted probability of the positive (win) class
    fn predict_win_probability(&self, row: &FeatureRow) -> f64;

    /// Number of features the model was trained on, if it is fixed
    ///
    /// Used to reject a schema mismatch before any generation runs.
    fn expected_features(&self) -> Option<usize> {
        None
    }
}

/// Logistic scoring model with per-feature weights
///
/// The simplest deployable form of a trained classifier: a dot product
/// through a logistic link. Loadable from the JSON file the training
/// pipeline exports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Create a model from weights and an intercept
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }

    /// Load a model from a JSON file
    ///
    /// A missing or malformed file makes the oracle unavailable, which
    /// is fatal: optimization cannot proceed without a scorer.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, OracleError> {
        let raw = std::fs::read_to_string(path.as_ref())
            .map_err(|e| OracleError::Unavailable(format!("{}: {e}", path.as_ref().display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| OracleError::Unavailable(format!("{}: {e}", path.as_ref().display())))
    }

    /// The model's weight vector
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl WinPredictor for LinearModel {
    fn predict_win_probability(&self, row: &FeatureRow) -> f64 {
        let logit: f64 = self
            .weights
            .iter()
            .zip(row.values())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        1.0 / (1.0 + (-logit).exp())
    }

    fn expected_features(&self) -> Option<usize> {
        Some(self.weights.len())
    }
}
