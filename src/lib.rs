//! # itemforge
//!
//! Evolutionary item-build optimization for League of Legends champions.
//!
//! This library searches the discrete space of 7-slot item builds
//! (~74^7 combinations for a typical champion) with two population-based
//! algorithms — a generational genetic algorithm and differential
//! evolution — both scored by a machine-learned win-probability model
//! consumed as a black box.
//!
//! ## Core Concepts
//!
//! - **Build**: an ordered assignment of items to the 7 equipment slots,
//!   where `0` marks an empty slot.
//! - **Fitness Oracle**: wraps the trained win predictor and adds
//!   diversity and completion bonuses; the composite fitness, not the raw
//!   win probability, drives selection in both engines.
//! - **Dual Encodings**: the GA operates directly on discrete builds; DE
//!   operates on `[0,1]^7` vectors decoded to builds only for scoring.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use itemforge::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let data = ChampionData::from_json_file("champion_metadata.json")?;
//! let model = LinearModel::from_json_file("win_model.json")?;
//! let oracle = CompositeOracle::new(model, data.item_pool()?, data.fitness_context())?;
//!
//! let report = Comparator::new().run(&oracle, &data, &mut rng)?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod algorithms;
pub mod build;
pub mod dataset;
pub mod diagnostics;
pub mod error;
pub mod operators;
pub mod oracle;
pub mod population;
pub mod report;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::build::prelude::*;
    pub use crate::dataset::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::operators::prelude::*;
    pub use crate::oracle::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::report::prelude::*;
}
