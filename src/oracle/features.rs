//! Feature schema and rows
//!
//! The predictor's input contract is a fixed, ordered schema: the 7 item
//! slots first, then the contextual game statistics. Keeping the schema
//! static makes the oracle's input statically checkable instead of a
//! dynamically keyed structure.

use serde::{Deserialize, Serialize};

use crate::build::build::SLOT_COUNT;

/// One contextual game statistic, fixed for an optimization run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContextStat {
    /// Feature name, e.g. `goldEarned`
    pub name: String,
    /// Fixed value fed to the predictor for every candidate build
    pub value: f64,
}

impl ContextStat {
    /// Create a named contextual statistic
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The fixed per-run auxiliary features used by the oracle
///
/// Shared read-only configuration; never mutated during a run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessContext {
    stats: Vec<ContextStat>,
}

impl FitnessContext {
    /// Create a context from named statistics
    pub fn new(stats: Vec<ContextStat>) -> Self {
        Self { stats }
    }

    /// A context with no auxiliary statistics
    pub fn empty() -> Self {
        Self::default()
    }

    /// The statistics in schema order
    pub fn stats(&self) -> &[ContextStat] {
        &self.stats
    }

    /// Number of contextual features
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Whether the context carries no statistics
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Ordered feature names: the 7 item slots, then the context
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Build the schema for a fitness context
    pub fn for_context(context: &FitnessContext) -> Self {
        let mut names: Vec<String> = (0..SLOT_COUNT).map(|i| format!("item{i}")).collect();
        names.extend(context.stats().iter().map(|s| s.name.clone()));
        Self { names }
    }

    /// Total number of features (7 + context size)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// A schema always has at least the 7 item slots
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The feature names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// One assembled predictor input, ordered per the schema
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureRow {
    values: Vec<f64>,
}

impl FeatureRow {
    /// Create a row from ordered values
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The values in schema order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> FitnessContext {
        FitnessContext::new(vec![
            ContextStat::new("kills", 6.2),
            ContextStat::new("goldEarned", 11_450.0),
        ])
    }

    #[test]
    fn test_schema_orders_items_first() {
        let schema = FeatureSchema::for_context(&context());
        assert_eq!(schema.len(), SLOT_COUNT + 2);
        assert_eq!(schema.names()[0], "item0");
        assert_eq!(schema.names()[6], "item6");
        assert_eq!(schema.names()[7], "kills");
        assert_eq!(schema.names()[8], "goldEarned");
    }

    #[test]
    fn test_schema_for_empty_context() {
        let schema = FeatureSchema::for_context(&FitnessContext::empty());
        assert_eq!(schema.len(), SLOT_COUNT);
    }

    #[test]
    fn test_context_serde_roundtrip() {
        let ctx = context();
        let json = serde_json::to_string(&ctx).unwrap();
        let back: FitnessContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx);
    }
}
