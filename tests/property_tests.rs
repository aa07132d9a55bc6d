//! Property-based tests for itemforge
//!
//! Uses proptest to verify invariants across both engines, plus the
//! fixed regression scenarios for decoding and comparison.

use itemforge::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn pool_of(n: u32) -> ItemPool {
    ItemPool::new((1..=n).map(|i| i * 100).collect()).unwrap()
}

/// Oracle that rejects any out-of-pool build before scoring it
///
/// Wrapping the engines with this oracle turns "every evaluated build is
/// valid" into an executable property: an invalid candidate panics.
#[derive(Clone)]
struct ValidityCheckingOracle {
    pool: ItemPool,
    inner: SlotSumOracle,
}

impl ValidityCheckingOracle {
    fn new(pool: ItemPool) -> Self {
        Self {
            pool,
            inner: SlotSumOracle::new(),
        }
    }
}

impl FitnessOracle for ValidityCheckingOracle {
    fn score(&self, build: &Build) -> Scored {
        assert!(
            build.is_valid(&self.pool),
            "engine evaluated an out-of-pool build: {build}"
        );
        self.inner.score(build)
    }
}

proptest! {
    // ==================== Build Properties ====================

    #[test]
    fn random_builds_stay_in_pool(seed in any::<u64>(), pool_size in 1u32..80) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = pool_of(pool_size);
        let build = Build::random(&pool, &mut rng);
        prop_assert!(build.is_valid(&pool));
        prop_assert_eq!(build.slots().len(), SLOT_COUNT);
    }

    #[test]
    fn distinct_items_never_exceed_filled_slots(slots in prop::array::uniform7(0u32..20)) {
        let build = Build::from_slots(slots);
        prop_assert!(build.distinct_items().len() <= build.filled_slots());
        prop_assert!(build.filled_slots() <= SLOT_COUNT);
    }

    // ==================== Decoding Properties ====================

    #[test]
    fn decode_is_pure(
        components in prop::array::uniform7(0.0..=1.0f64),
        pool_size in 1u32..80
    ) {
        let pool = pool_of(pool_size);
        let vector = SearchVector::clamped(components);
        prop_assert_eq!(vector.decode(&pool), vector.decode(&pool));
    }

    #[test]
    fn decode_always_yields_valid_builds(
        components in prop::array::uniform7(-2.0..2.0f64),
        pool_size in 1u32..80
    ) {
        let pool = pool_of(pool_size);
        let build = SearchVector::clamped(components).decode(&pool);
        prop_assert!(build.is_valid(&pool));
    }

    #[test]
    fn encode_decode_roundtrip(seed in any::<u64>(), pool_size in 1u32..80) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = pool_of(pool_size);
        let build = Build::random(&pool, &mut rng);
        let vector = SearchVector::encode(&build, &pool, &mut rng);
        prop_assert_eq!(vector.decode(&pool), build);
    }

    // ==================== DE Operator Properties ====================

    #[test]
    fn mutant_components_stay_clamped(
        a in prop::array::uniform7(0.0..=1.0f64),
        b in prop::array::uniform7(0.0..=1.0f64),
        c in prop::array::uniform7(0.0..=1.0f64),
        f in 0.0..=2.0f64
    ) {
        let mutant = mutant_rand1(
            &SearchVector::clamped(a),
            &SearchVector::clamped(b),
            &SearchVector::clamped(c),
            f,
        );
        for &component in mutant.components() {
            prop_assert!((0.0..=1.0).contains(&component));
        }
    }

    #[test]
    fn zero_rate_crossover_still_takes_one_mutant_component(
        target in prop::array::uniform7(0.0..0.45f64),
        mutant in prop::array::uniform7(0.55..1.0f64),
        seed in any::<u64>()
    ) {
        // ranges are disjoint, so every changed component is attributable
        let mut rng = StdRng::seed_from_u64(seed);
        let target = SearchVector::clamped(target);
        let mutant = SearchVector::clamped(mutant);
        let trial = binomial_crossover(&target, &mutant, 0.0, &mut rng);

        let taken = trial
            .components()
            .iter()
            .zip(mutant.components())
            .filter(|(t, m)| t == m)
            .count();
        prop_assert_eq!(taken, 1);
    }

    #[test]
    fn donor_indices_distinct_and_off_target(
        target in 0usize..20,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let [a, b, c] = distinct_donors(target, 20, &mut rng);
        prop_assert!(a != b && b != c && a != c);
        prop_assert!(a != target && b != target && c != target);
    }

    // ==================== Engine Properties ====================

    #[test]
    fn ga_only_evaluates_valid_builds(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = pool_of(15);
        let oracle = ValidityCheckingOracle::new(pool.clone());
        let config = GaConfig {
            population_size: 8,
            generations: 4,
            ..GaConfig::default()
        };
        let result = GeneticAlgorithm::new(config)
            .unwrap()
            .run(&oracle, &pool, &mut rng)
            .unwrap();
        prop_assert!(result.best_build.is_valid(&pool));
    }

    #[test]
    fn de_only_evaluates_valid_builds(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = pool_of(15);
        let oracle = ValidityCheckingOracle::new(pool.clone());
        let config = DeConfig {
            population_size: 8,
            generations: 4,
            ..DeConfig::default()
        };
        let result = DifferentialEvolution::new(config)
            .unwrap()
            .run(&oracle, &pool, &mut rng)
            .unwrap();
        prop_assert!(result.best_build.is_valid(&pool));
    }

    #[test]
    fn ga_convergence_history_is_monotone(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = pool_of(10);
        let config = GaConfig {
            population_size: 8,
            generations: 10,
            ..GaConfig::default()
        };
        let result = GeneticAlgorithm::new(config)
            .unwrap()
            .run(&SlotSumOracle::new(), &pool, &mut rng)
            .unwrap();
        let history = result.convergence_history();
        for window in history.windows(2) {
            prop_assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn de_convergence_history_is_monotone(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = pool_of(10);
        let config = DeConfig {
            population_size: 8,
            generations: 10,
            ..DeConfig::default()
        };
        let result = DifferentialEvolution::new(config)
            .unwrap()
            .run(&SlotSumOracle::new(), &pool, &mut rng)
            .unwrap();
        let history = result.convergence_history();
        for window in history.windows(2) {
            prop_assert!(window[1] >= window[0]);
        }
    }
}

// ==================== Fixed Scenarios ====================

#[test]
fn decode_boundary_all_empty() {
    let pool = pool_of(10);
    let vector = SearchVector::clamped([0.05; SLOT_COUNT]);
    assert_eq!(vector.decode(&pool), Build::from_slots([0; SLOT_COUNT]));
}

#[test]
fn decode_mapping_hits_pool_ends() {
    // pool of 10 sorted items: threshold maps to the first, 1.0 clamps
    // to the last
    let pool = pool_of(10);
    let first = SearchVector::clamped([0.1; SLOT_COUNT]).decode(&pool);
    let last = SearchVector::clamped([1.0; SLOT_COUNT]).decode(&pool);
    assert_eq!(first, Build::from_slots([100; SLOT_COUNT]));
    assert_eq!(last, Build::from_slots([1000; SLOT_COUNT]));
}

#[test]
fn ga_runs_reproduce_exactly_under_one_seed() {
    let pool = pool_of(20);
    let oracle = SlotSumOracle::new();
    let config = GaConfig {
        population_size: 10,
        generations: 5,
        ..GaConfig::default()
    };

    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        GeneticAlgorithm::new(config.clone())
            .unwrap()
            .run(&oracle, &pool, &mut rng)
            .unwrap()
    };

    let first = run(1234);
    let second = run(1234);
    assert_eq!(first.best_build, second.best_build);
    assert_eq!(first.convergence_history(), second.convergence_history());
}

#[test]
fn comparator_reports_expected_overlap() {
    let ga = Build::from_slots([1, 2, 3, 4, 5, 6, 7]);
    let de = Build::from_slots([1, 2, 8, 9, 10, 11, 12]);

    let common: Vec<u32> = common_items(&ga, &de).into_iter().collect();
    assert_eq!(common, vec![1, 2]);
    assert!((overlap_ratio(&ga, &de) - 2.0 / 7.0).abs() < 1e-12);
}

#[test]
fn empty_build_is_scorable_with_zero_bonuses() {
    let model = LinearModel::new(vec![0.0; SLOT_COUNT], 0.0);
    let oracle = CompositeOracle::new(model, pool_of(5), FitnessContext::empty()).unwrap();

    let scored = oracle.score(&Build::empty());
    assert!((0.0..=1.0).contains(&scored.win_probability));
    // no diversity or completion bonus on an all-empty build
    assert_eq!(scored.fitness, scored.win_probability);
}

#[test]
fn de_rejects_population_below_four() {
    let config = DeConfig {
        population_size: 3,
        ..DeConfig::default()
    };
    assert!(matches!(
        DifferentialEvolution::new(config),
        Err(ConfigError::DegeneratePopulation(3))
    ));
}

#[test]
fn out_of_pool_items_score_as_empty() {
    // the substitution policy both engines share
    let model = LinearModel::new(vec![1.0; SLOT_COUNT], 0.0);
    let oracle = CompositeOracle::new(model, pool_of(5), FitnessContext::empty()).unwrap();

    let foreign = Build::from_slots([9999, 0, 0, 0, 0, 0, 0]);
    let empty = Build::empty();
    assert_eq!(
        oracle.score(&foreign).win_probability,
        oracle.score(&empty).win_probability
    );
}
