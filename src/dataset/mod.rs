//! Champion dataset
//!
//! This module loads the per-champion inputs the optimizer consumes: the
//! legal item pool, the fixed contextual statistics, and the baseline
//! win rate computed from historical match records. The JSON layout
//! matches what the data-processing pipeline exports.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::build::item_pool::ItemPool;
use crate::error::DatasetError;
use crate::oracle::features::{ContextStat, FitnessContext};

/// Per-champion optimization inputs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChampionData {
    /// Riot champion identifier
    pub champion_id: u32,
    /// Legal item ids, in decode order
    pub available_items: Vec<u32>,
    /// Historical win rate of the champion, in [0, 1]
    pub win_rate: f64,
    /// Fixed contextual statistics (dataset means)
    #[serde(default)]
    pub context_stats: Vec<ContextStat>,
}

impl ChampionData {
    /// Load champion data from a JSON metadata file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse champion data from a JSON string
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let data: Self = serde_json::from_str(raw)?;
        data.validate()?;
        Ok(data)
    }

    /// Validate ranges and pool shape
    pub fn validate(&self) -> Result<(), DatasetError> {
        if !(0.0..=1.0).contains(&self.win_rate) {
            return Err(DatasetError::InvalidBaseline(self.win_rate));
        }
        ItemPool::new(self.available_items.clone())?;
        Ok(())
    }

    /// The legal item pool
    pub fn item_pool(&self) -> Result<ItemPool, DatasetError> {
        Ok(ItemPool::new(self.available_items.clone())?)
    }

    /// The fixed fitness context
    pub fn fitness_context(&self) -> FitnessContext {
        FitnessContext::new(self.context_stats.clone())
    }

    /// Baseline win rate used for improvement reporting
    pub fn baseline_win_rate(&self) -> f64 {
        self.win_rate
    }
}

pub mod prelude {
    pub use super::ChampionData;
}
