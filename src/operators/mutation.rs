//! Mutation operators
//!
//! This module provides the mutation operator used by the genetic
//! algorithm.

use rand::Rng;

use crate::build::build::Build;
use crate::build::item_pool::ItemPool;
use crate::operators::traits::MutationOperator;

/// Per-slot resampling mutation
///
/// Each slot independently mutates with the configured rate; a mutated
/// slot is redrawn uniformly from {empty} ∪ pool, so mutation can empty
/// slots or introduce duplicates.
#[derive(Clone, Debug)]
pub struct SlotResampleMutation {
    /// Per-slot mutation probability
    pub mutation_rate: f64,
}

impl SlotResampleMutation {
    /// Create a new mutation operator with the given per-slot rate
    pub fn new(mutation_rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&mutation_rate),
            "Mutation rate must be in [0, 1]"
        );
        Self { mutation_rate }
    }
}

impl Default for SlotResampleMutation {
    fn default() -> Self {
        Self::new(0.15)
    }
}

impl MutationOperator for SlotResampleMutation {
    fn mutate<R: Rng>(&self, build: &Build, pool: &ItemPool, rng: &mut R) -> Build {
        let mut slots = *build.slots();
        for slot in &mut slots {
            if rng.gen::<f64>() < self.mutation_rate {
                *slot = pool.sample_slot(rng);
            }
        }
        Build::from_slots(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> ItemPool {
        ItemPool::new(vec![10, 20, 30, 40, 50]).unwrap()
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let mut rng = rand::thread_rng();
        let build = Build::from_slots([10, 20, 30, 0, 0, 40, 50]);
        let mutation = SlotResampleMutation::new(0.0);
        for _ in 0..20 {
            assert_eq!(mutation.mutate(&build, &pool(), &mut rng), build);
        }
    }

    #[test]
    fn test_mutated_slots_stay_legal() {
        let mut rng = rand::thread_rng();
        let build = Build::from_slots([10, 20, 30, 0, 0, 40, 50]);
        let mutation = SlotResampleMutation::new(1.0);
        for _ in 0..100 {
            assert!(mutation.mutate(&build, &pool(), &mut rng).is_valid(&pool()));
        }
    }

    #[test]
    fn test_mutation_does_not_modify_original() {
        let mut rng = rand::thread_rng();
        let build = Build::from_slots([10, 20, 30, 0, 0, 40, 50]);
        let before = build;
        let _ = SlotResampleMutation::new(1.0).mutate(&build, &pool(), &mut rng);
        assert_eq!(build, before);
    }

    #[test]
    fn test_mutation_can_empty_a_slot() {
        let mut rng = rand::thread_rng();
        let build = Build::from_slots([10, 20, 30, 40, 50, 10, 20]);
        let mutation = SlotResampleMutation::new(1.0);
        let mut saw_empty = false;
        for _ in 0..200 {
            if mutation.mutate(&build, &pool(), &mut rng).filled_slots() < 7 {
                saw_empty = true;
                break;
            }
        }
        assert!(saw_empty);
    }

    #[test]
    #[should_panic(expected = "Mutation rate must be in [0, 1]")]
    fn test_rate_out_of_range() {
        SlotResampleMutation::new(1.5);
    }
}
