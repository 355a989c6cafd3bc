use genmaze::engines::generation::individual::score_position;
use genmaze::engines::generation::operators::{crossover, mutate, random_genome};
use genmaze::engines::generation::{FitnessPolicy, MutationRate, OFF_PATH_PENALTY};
use genmaze::engines::maze::{generate, shortest_path};
use genmaze::types::Move;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fraction of positions whose move differs after mutation
fn changed_fraction(rate: MutationRate, seed: u64) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    let total = 20_000;
    let original = random_genome(total, &mut rng);
    let mut mutated = original.clone();
    mutate(&mut mutated, rate, &mut rng);
    original.iter().zip(&mutated).filter(|(a, b)| a != b).count() as f64 / total as f64
}

#[test]
fn test_mutation_rate_converges() {
    // A re-roll keeps the old move one time in four
    for (percent, seed) in [(10u8, 1u64), (20, 2), (50, 3), (80, 4)] {
        let rate = MutationRate::from_percent(percent).unwrap();
        let observed = changed_fraction(rate, seed);
        let expected = rate.probability() * 0.75;
        assert!(
            (observed - expected).abs() < 0.02,
            "rate {}: observed {}, expected {}",
            rate.probability(),
            observed,
            expected
        );
    }
}

#[test]
fn test_mutation_extremes() {
    assert_eq!(changed_fraction(MutationRate::NEVER, 9), 0.0);
    let full = changed_fraction(MutationRate::ALWAYS, 10);
    assert!((full - 0.75).abs() < 0.02, "observed {}", full);
}

#[test]
fn test_crossover_length_for_many_parents() {
    let mut rng = StdRng::seed_from_u64(31);
    for len in 1..60 {
        let a = random_genome(len, &mut rng);
        let b = random_genome(len, &mut rng);
        assert_eq!(crossover(&a, &b, &mut rng).len(), len);
        assert_eq!(crossover(&b, &a, &mut rng).len(), len);
    }
}

#[test]
fn test_crossover_of_identical_parents_is_identity() {
    let mut rng = StdRng::seed_from_u64(32);
    let a = random_genome(36, &mut rng);
    assert_eq!(crossover(&a, &a, &mut rng), a);
    assert_eq!(crossover(&[Move::Up], &[Move::Down], &mut rng), vec![Move::Down]);
}

#[test]
fn test_fitness_monotone_along_path() {
    let mut rng = StdRng::seed_from_u64(42);
    let grid = generate(11, 15, &mut rng).unwrap();
    let path = shortest_path(&grid, grid.start(), grid.end()).unwrap();
    let goal = grid.end();
    let policy = FitnessPolicy::PathGuided;

    for &p1 in path.cells() {
        for &p2 in path.cells() {
            if p1.manhattan(goal) < p2.manhattan(goal) {
                assert!(score_position(p1, &path, goal, policy, 0) < score_position(p2, &path, goal, policy, 0));
            }
        }
    }

    for off in grid.passable_cells().filter(|&p| !path.contains(p)) {
        let score = score_position(off, &path, goal, policy, 0);
        assert_eq!(score, OFF_PATH_PENALTY + off.manhattan(goal) as u32);
    }
}

#[test]
fn test_collision_policy_ignores_path() {
    let mut rng = StdRng::seed_from_u64(43);
    let grid = generate(7, 11, &mut rng).unwrap();
    let path = shortest_path(&grid, grid.start(), grid.end()).unwrap();
    let goal = grid.end();
    for p in grid.passable_cells() {
        let d = p.manhattan(goal) as u32;
        assert_eq!(score_position(p, &path, goal, FitnessPolicy::CollisionPenalty, 8), 8 + d);
    }
}
