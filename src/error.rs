//! Error types for itemforge
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for build and item-pool operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    /// An item id is not part of the champion's legal pool
    #[error("Item {0} is not in the legal pool")]
    ItemNotInPool(u32),

    /// Wrong number of slots in a raw build
    #[error("Build has {actual} slots, expected {expected}")]
    SlotCountMismatch { expected: usize, actual: usize },

    /// The reserved empty marker was used as an item id
    #[error("Item id 0 is reserved for empty slots")]
    ReservedItemId,

    /// The same item id appears twice in a pool definition
    #[error("Duplicate item {0} in pool definition")]
    DuplicateItem(u32),

    /// A pool was defined with no items
    #[error("Item pool is empty")]
    EmptyPool,
}

/// Error type for configuration validation
///
/// All configuration errors are raised before any generation runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Population size configured as zero
    #[error("Population size must be at least 1")]
    EmptyPopulation,

    /// Differential evolution needs at least 4 individuals to sample
    /// three distinct non-target donors
    #[error("Population size {0} is too small for differential evolution (minimum 4)")]
    DegeneratePopulation(usize),

    /// A probability-like parameter is outside its domain
    #[error("{name} must be in [{min}, {max}], got {value}")]
    RateOutOfRange {
        name: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Elite count cannot exceed the population
    #[error("Elite count {elite} exceeds population size {population}")]
    EliteExceedsPopulation { elite: usize, population: usize },

    /// Tournament size must fit the population
    #[error("Tournament size must be in [1, {population}], got {tournament}")]
    InvalidTournamentSize { tournament: usize, population: usize },

    /// Generation budget of zero would produce no search at all
    #[error("Generation count must be at least 1")]
    NoGenerations,

    /// A fair comparison needs both engines on the same population size
    #[error("Engines have mismatched population sizes: GA {ga}, DE {de}")]
    MismatchedPopulations { ga: usize, de: usize },
}

/// Error type for the fitness oracle
#[derive(Debug, Error)]
pub enum OracleError {
    /// The trained model cannot be loaded or used
    #[error("Win predictor unavailable: {0}")]
    Unavailable(String),

    /// The model's weight vector does not match the feature schema
    #[error("Model expects {model} features but schema has {schema}")]
    SchemaMismatch { model: usize, schema: usize },
}

/// Error type for champion dataset loading
#[derive(Debug, Error)]
pub enum DatasetError {
    /// IO error reading the dataset file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed dataset JSON
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Baseline win rate outside [0, 1]
    #[error("Baseline win rate {0} is outside [0, 1]")]
    InvalidBaseline(f64),

    /// Dataset declares an unusable item pool
    #[error("Invalid item pool: {0}")]
    InvalidPool(#[from] BuildError),
}

/// Top-level error type for optimization runs
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Configuration rejected before the run started
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Oracle error
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Dataset error
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// The population emptied out mid-run
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for optimization operations
pub type OptResult<T> = Result<T, OptimizeError>;
