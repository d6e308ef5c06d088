use cellevo_core::config::{AppConfig, CellConfig, IntRange};
use cellevo_core::geometry::{direction_step, distance};
use cellevo_core::lifecycle::{create_cell_with_rng, mutate_channel, mutate_color};
use cellevo_core::{CellLogic, Population};
use cellevo_data::{Food, Point, Rgb};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

prop_compose! {
    fn arb_point()(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0
    ) -> Point {
        Point::new(x, y)
    }
}

prop_compose! {
    fn arb_food()(
        position in arb_point(),
        size in 5i32..=10
    ) -> Food {
        Food::new(position, size)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_direction_step_zero_distance_is_identity(p in arb_point(), k in 0.0f64..100.0) {
        prop_assert_eq!(direction_step(p, p, k), p);
    }

    #[test]
    fn test_direction_step_never_overshoots(
        from in arb_point(),
        to in arb_point(),
        k in 0.0f64..50.0
    ) {
        let next = direction_step(from, to, k);
        prop_assert!(distance(from, next) <= k + 1e-9);
        prop_assert!(distance(next, to) <= distance(from, to) + 1e-9);
    }

    #[test]
    fn test_size_never_below_floor(
        seed in any::<u64>(),
        floor in 0i32..10,
        food in prop::collection::vec(arb_food(), 0..8),
        ticks in 1usize..60
    ) {
        let config = CellConfig { size_floor: floor, start_size: floor + 20, ..Default::default() };
        let app = AppConfig { cell: config.clone(), ..Default::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cell = create_cell_with_rng(&app, &mut rng);
        let mut pool = food;
        for _ in 0..ticks {
            let before = pool.len();
            let eaten = cell.update(&mut pool, &config, &mut rng);
            prop_assert!(cell.size >= floor);
            prop_assert_eq!(pool.len(), before - usize::from(eaten.is_some()));
        }
    }

    #[test]
    fn test_is_alive_matches_vitals(health in -20i32..20, energy in -20i32..20) {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut cell = create_cell_with_rng(&AppConfig::default(), &mut rng);
        cell.health = health;
        cell.energy = energy;
        prop_assert_eq!(cell.is_alive(), health > 0 && energy > 0);
    }

    #[test]
    fn test_mutate_channel_is_modular(c in any::<u8>(), delta in -10i32..=10) {
        let child = mutate_channel(c, delta);
        prop_assert_eq!(i32::from(child), (i32::from(c) + delta).rem_euclid(256));
    }

    #[test]
    fn test_mutate_color_stays_within_drift(
        seed in any::<u64>(),
        r in any::<u8>(),
        g in any::<u8>(),
        b in any::<u8>()
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let parent = Rgb::new(r, g, b);
        let child = mutate_color(parent, 10, &mut rng);
        for (p, c) in parent.channels().iter().zip(child.channels()) {
            let up = (i32::from(c) - i32::from(*p)).rem_euclid(256);
            prop_assert!(up <= 10 || up >= 246);
        }
    }

    #[test]
    fn test_reproduction_size_and_generation(
        seed in any::<u64>(),
        size in 1usize..30,
        rounds in 1u64..6
    ) {
        let mut config = AppConfig::default();
        config.evolution.population_size = size;
        config.food.spawn_chance = 0.0;
        config.cell.health_decay = IntRange::fixed(1);
        let mut pop = Population::with_rng(config, ChaCha8Rng::seed_from_u64(seed)).unwrap();
        for round in 1..=rounds {
            let reproduction = pop.reproduce();
            prop_assert_eq!(pop.population(), size);
            prop_assert_eq!(pop.generation_index, round);
            prop_assert_eq!(reproduction.generation, round);
        }
    }
}
