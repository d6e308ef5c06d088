//! # cellevo Core
//!
//! The simulation engine for cellevo: cells wander a canvas, decay every
//! tick, chase the nearest food and are replaced generation by generation.
//!
//! This crate contains the deterministic simulation logic:
//! - Planar geometry helpers
//! - Food spawning
//! - Per-cell decay, movement and consumption rules
//! - The population tick and reproduction
//! - Configuration, errors, snapshots and run metrics
//!
//! ## Example
//!
//! ```
//! use cellevo_core::{AppConfig, Population};
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//! config.evolution.population_size = 5;
//!
//! let mut population = Population::new(config).unwrap();
//! let report = population.tick();
//! assert!(report.reproduction.is_some());
//! assert_eq!(population.generation_index, 1);
//! ```

/// Per-cell rules and shape selection
pub mod cell;
/// Configuration management for simulation parameters
pub mod config;
/// Error types and result alias
pub mod error;
/// Food generation
pub mod food;
/// Distance and movement helpers
pub mod geometry;
/// Cell creation and color inheritance
pub mod lifecycle;
/// Run counters and logging setup
pub mod metrics;
/// The generational simulation loop
pub mod population;
/// Read-only views for display adapters
pub mod snapshot;

pub use cell::CellLogic;
pub use config::AppConfig;
pub use error::{CoreError, Result};
pub use metrics::{init_logging, Metrics};
pub use population::{Population, Reproduction, ReproductionKind, TickReport};
pub use snapshot::{CellSnapshot, PopulationSnapshot, PopulationStats};
