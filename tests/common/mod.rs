pub mod macros;

use cellevo_core::config::{AppConfig, IntRange};
use cellevo_core::Population;
use cellevo_data::{Food, Point};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct PopulationBuilder {
    config: AppConfig,
    seed: u64,
    food: Vec<Food>,
    seeded: bool,
}

#[allow(dead_code)]
impl PopulationBuilder {
    /// Deterministic population with food spawning switched off.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.food.spawn_chance = 0.0;
        Self {
            config,
            seed: 42,
            food: Vec::new(),
            seeded: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_population_size(mut self, size: usize) -> Self {
        self.config.evolution.population_size = size;
        self
    }

    /// Every decay draw always yields the given amounts.
    pub fn with_fixed_decay(mut self, health: i32, energy: i32, size: i32) -> Self {
        self.config.cell.health_decay = IntRange::fixed(health);
        self.config.cell.energy_decay = IntRange::fixed(energy);
        self.config.cell.size_decay = IntRange::fixed(size);
        self
    }

    pub fn with_food(mut self, x: f64, y: f64, size: i32) -> Self {
        self.food.push(Food::new(Point::new(x, y), size));
        self
    }

    /// Runs the first tick so the initial generation exists before returning.
    pub fn seeded(mut self) -> Self {
        self.seeded = true;
        self
    }

    pub fn build(self) -> Population {
        let rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut population =
            Population::with_rng(self.config, rng).expect("Failed to create population in test builder");
        if self.seeded {
            population.tick();
        }
        population.food.extend(self.food);
        population
    }
}
