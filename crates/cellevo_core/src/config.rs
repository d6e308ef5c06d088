//! Configuration management for simulation parameters.
//!
//! Every tunable of the simulation lives here and maps onto a `config.toml`
//! file. Missing sections fall back to their `Default` values.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 400
//! height = 400
//! seed = 42
//!
//! [cell]
//! start_health = 100
//! health_decay = { min = 1, max = 5 }
//!
//! [food]
//! spawn_chance = 0.25
//!
//! [evolution]
//! population_size = 10
//! color_mutation = 10
//! ```

use crate::error::{ensure, CoreError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest polygon a cell can be drawn as.
pub const MAX_SHAPE_SIDES: u8 = 16;
/// Reproduction never samples more than this many parents.
pub const MAX_PARENT_SAMPLE: usize = 2;

/// Inclusive integer range used for every per-tick random draw.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// A range that always yields `value`.
    #[must_use]
    pub const fn fixed(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    /// Uniform draw from `[min, max]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Canvas configuration. The bounds are only used to place new food and cells.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            seed: None,
        }
    }
}

impl WorldConfig {
    /// Where fresh cells are placed.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width / 2), f64::from(self.height / 2))
    }
}

/// Starting attributes and per-tick rules of a single cell.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CellConfig {
    pub start_health: i32,
    pub start_energy: i32,
    pub start_size: i32,
    /// Size never shrinks below this value.
    pub size_floor: i32,
    pub health_decay: IntRange,
    pub energy_decay: IntRange,
    pub size_decay: IntRange,
    /// Maximum distance travelled toward food in one tick.
    pub max_speed: f64,
    /// Side count range for freshly generated shapes.
    pub shape_sides: IntRange,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            start_health: 100,
            start_energy: 100,
            start_size: 50,
            size_floor: 5,
            health_decay: IntRange::new(1, 5),
            energy_decay: IntRange::new(1, 5),
            size_decay: IntRange::new(1, 2),
            max_speed: 10.0,
            shape_sides: IntRange::new(3, i32::from(MAX_SHAPE_SIDES)),
        }
    }
}

/// Food spawning.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FoodConfig {
    /// Probability of one new food item per tick.
    pub spawn_chance: f64,
    pub size: IntRange,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            spawn_chance: 0.25,
            size: IntRange::new(5, 10),
        }
    }
}

/// Reproduction parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of cells created by every reproduction event.
    pub population_size: usize,
    /// Each color channel drifts by a uniform integer in `[-color_mutation, color_mutation]`.
    pub color_mutation: i32,
    /// How many distinct survivors are sampled as parents (at most 2).
    pub parent_sample: usize,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            color_mutation: 10,
            parent_sample: MAX_PARENT_SAMPLE,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub cell: CellConfig,
    pub food: FoodConfig,
    pub evolution: EvolutionConfig,
    pub target_fps: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            cell: CellConfig::default(),
            food: FoodConfig::default(),
            evolution: EvolutionConfig::default(),
            target_fps: 30,
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or the first validation
    /// failure.
    ///
    /// # Validation Rules
    /// - Population size must be at least 1
    /// - Parent sample must be 1 or 2
    /// - Every random range must have `min <= max`; decay ranges are non-negative
    /// - Spawn chance must be in `[0.0, 1.0]`
    /// - Shape sides must stay within `[3, 16]`
    pub fn validate(&self) -> Result<()> {
        // World validation
        ensure(self.world.width > 0, "World width must be positive")?;
        ensure(self.world.height > 0, "World height must be positive")?;

        // Cell validation
        let cell = &self.cell;
        ensure(cell.size_floor >= 0, "Size floor must be non-negative")?;
        ensure(
            cell.start_size >= cell.size_floor,
            "Start size must not be below the size floor",
        )?;
        for (range, name) in [
            (cell.health_decay, "Health decay"),
            (cell.energy_decay, "Energy decay"),
            (cell.size_decay, "Size decay"),
        ] {
            ensure(range.is_ordered(), &format!("{name} range must have min <= max"))?;
            ensure(range.min >= 0, &format!("{name} must be non-negative"))?;
        }
        ensure(
            cell.max_speed.is_finite() && cell.max_speed >= 0.0,
            "Max speed must be finite and non-negative",
        )?;
        ensure(
            cell.shape_sides.is_ordered()
                && cell.shape_sides.min >= 3
                && cell.shape_sides.max <= i32::from(MAX_SHAPE_SIDES),
            "Shape sides must be an ordered range within [3, 16]",
        )?;

        // Food validation
        ensure(
            (0.0..=1.0).contains(&self.food.spawn_chance),
            "Food spawn chance must be in [0.0, 1.0]",
        )?;
        ensure(
            self.food.size.is_ordered() && self.food.size.min >= 0,
            "Food size range must be non-negative with min <= max",
        )?;

        // Evolution validation
        ensure(
            self.evolution.population_size >= 1,
            "Population size must be at least 1",
        )?;
        ensure(
            self.evolution.color_mutation >= 0,
            "Color mutation must be non-negative",
        )?;
        ensure(
            (1..=MAX_PARENT_SAMPLE).contains(&self.evolution.parent_sample),
            "Parent sample must be 1 or 2",
        )?;

        // Target FPS validation
        ensure(self.target_fps > 0, "Target FPS must be positive")?;
        ensure(self.target_fps <= 240, "Target FPS too high (max 240)")?;

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::from(e).with_context(format!("reading {}", path.display())))?;
        Self::from_toml(&content).map_err(|e| e.with_context(format!("loading {}", path.display())))
    }

    /// Digest of every simulation-relevant tunable, for tagging runs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.cell).as_bytes());
        hasher.update(format!("{:?}", self.food).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_population_rejected() {
        let config = AppConfig {
            evolution: EvolutionConfig {
                population_size: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_parent_sample_bounded() {
        let mut config = AppConfig::default();
        config.evolution.parent_sample = 3;
        assert!(config.validate().is_err());
        config.evolution.parent_sample = 0;
        assert!(config.validate().is_err());
        config.evolution.parent_sample = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_decay_range_rejected() {
        let mut config = AppConfig::default();
        config.cell.energy_decay = IntRange::new(5, 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_spawn_chance_bounds() {
        let mut config = AppConfig::default();
        config.food.spawn_chance = 1.5;
        assert!(config.validate().is_err());
        config.food.spawn_chance = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shape_sides_bounds() {
        let mut config = AppConfig::default();
        config.cell.shape_sides = IntRange::new(2, 16);
        assert!(config.validate().is_err());
        config.cell.shape_sides = IntRange::new(3, 17);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_start_size_below_floor_rejected() {
        let mut config = AppConfig::default();
        config.cell.start_size = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_target_fps() {
        let config = AppConfig {
            target_fps: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_partial_overrides() {
        let config = AppConfig::from_toml(
            r#"
            [world]
            seed = 7

            [cell]
            health_decay = { min = 5, max = 5 }

            [evolution]
            population_size = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.world.seed, Some(7));
        assert_eq!(config.world.width, 400);
        assert_eq!(config.cell.health_decay, IntRange::fixed(5));
        assert_eq!(config.cell.energy_decay, IntRange::new(1, 5));
        assert_eq!(config.evolution.population_size, 3);
    }

    #[test]
    fn test_from_toml_validates() {
        let err = AppConfig::from_toml("[evolution]\npopulation_size = 0\n").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_from_toml_parse_error() {
        let err = AppConfig::from_toml("[world\nwidth = ").unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/nonexistent/cellevo/config.toml").unwrap_err();
        assert!(err.to_string().contains("reading"));
    }

    #[test]
    fn test_fingerprint_consistency() {
        let config1 = AppConfig::default();
        let mut config2 = AppConfig::default();
        assert_eq!(config1.fingerprint(), config2.fingerprint());
        config2.food.spawn_chance = 0.45;
        assert_ne!(config1.fingerprint(), config2.fingerprint());
    }

    #[test]
    fn test_int_range_sample_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let range = IntRange::new(-10, 10);
        for _ in 0..500 {
            let v = range.sample(&mut rng);
            assert!((-10..=10).contains(&v));
        }
        assert_eq!(IntRange::fixed(5).sample(&mut rng), 5);
    }
}
