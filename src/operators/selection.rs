//! Selection operators
//!
//! This module provides the selection operator used by the genetic
//! algorithm.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::build::build::Build;
use crate::operators::traits::SelectionOperator;

/// Tournament selection operator
///
/// Selects the best individual from a random subset of the population.
/// Tournaments are independent: each call samples fresh, so the same
/// individual can win any number of tournaments.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size >= 1, "Tournament size must be at least 1");
        Self { tournament_size }
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::new(3)
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng>(&self, population: &[(Build, f64)], rng: &mut R) -> usize {
        assert!(!population.is_empty(), "Population cannot be empty");

        let tournament_size = self.tournament_size.min(population.len());

        let indices: Vec<usize> = (0..population.len()).collect();
        indices
            .choose_multiple(rng, tournament_size)
            .copied()
            .max_by(|&a, &b| {
                population[a]
                    .1
                    .partial_cmp(&population[b].1)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_population(size: usize) -> Vec<(Build, f64)> {
        (0..size)
            .map(|i| (Build::empty(), i as f64))
            .collect()
    }

    #[test]
    fn test_tournament_selects_valid_index() {
        let mut rng = rand::thread_rng();
        let population = create_population(10);
        let selection = TournamentSelection::new(3);

        for _ in 0..100 {
            assert!(selection.select(&population, &mut rng) < population.len());
        }
    }

    #[test]
    fn test_full_tournament_always_selects_best() {
        let mut rng = rand::thread_rng();
        let population = create_population(5);
        let selection = TournamentSelection::new(5);

        for _ in 0..50 {
            assert_eq!(selection.select(&population, &mut rng), 4);
        }
    }

    #[test]
    fn test_tournament_prefers_fitter() {
        let mut rng = rand::thread_rng();
        let population = create_population(20);
        let selection = TournamentSelection::new(3);

        let mean_selected: f64 = (0..1000)
            .map(|_| selection.select(&population, &mut rng) as f64)
            .sum::<f64>()
            / 1000.0;

        // uniform sampling would average 9.5; tournaments pull upward
        assert!(mean_selected > 11.0);
    }

    #[test]
    fn test_tournament_larger_than_population() {
        let mut rng = rand::thread_rng();
        let population = create_population(2);
        let selection = TournamentSelection::new(10);
        assert_eq!(selection.select(&population, &mut rng), 1);
    }

    #[test]
    #[should_panic(expected = "Tournament size must be at least 1")]
    fn test_tournament_size_zero() {
        TournamentSelection::new(0);
    }
}
