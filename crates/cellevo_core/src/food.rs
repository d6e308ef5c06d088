//! Food resource spawning.

use crate::config::{FoodConfig, WorldConfig};
use cellevo_data::{Food, Point};
use rand::Rng;

/// New food with a uniform size and a uniform position over `[0, W) x [0, H)`.
pub fn spawn_food<R: Rng + ?Sized>(rng: &mut R, food: &FoodConfig, world: &WorldConfig) -> Food {
    let size = food.size.sample(rng);
    let x = rng.gen_range(0.0..f64::from(world.width));
    let y = rng.gen_range(0.0..f64::from(world.height));
    Food::new(Point::new(x, y), size)
}

/// Bernoulli spawn: returns new food with probability `spawn_chance`.
pub fn maybe_spawn_food<R: Rng + ?Sized>(
    rng: &mut R,
    food: &FoodConfig,
    world: &WorldConfig,
) -> Option<Food> {
    if rng.gen_bool(food.spawn_chance) {
        Some(spawn_food(rng, food, world))
    } else {
        None
    }
}
