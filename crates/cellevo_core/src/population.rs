//! The generational simulation loop.
//!
//! A [`Population`] owns the live cells, the food pool and the random
//! generator. [`Population::tick`] is the only mutator a driver needs:
//!
//! 1. every cell plans its move against the current food pool,
//! 2. claims are resolved so each food item feeds at most one cell,
//! 3. food may spawn, dead cells are dropped, the tick counter advances,
//! 4. reproduction runs when the population is empty or has never been seeded.

use crate::cell::CellLogic;
use crate::config::AppConfig;
use crate::error::Result;
use crate::food::maybe_spawn_food;
use crate::lifecycle::{create_cell_with_rng, create_child_with_rng};
use crate::snapshot::{CellSnapshot, PopulationSnapshot, PopulationStats};
use cellevo_data::{Cell, Food};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which branch a reproduction event took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReproductionKind {
    /// No survivors: a fresh cohort was created.
    Seeded,
    /// Children were bred from these sampled survivors.
    Bred { parents: Vec<Uuid> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reproduction {
    /// Generation index after the event.
    pub generation: u64,
    pub population: usize,
    pub kind: ReproductionKind,
}

/// What happened during one [`Population::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Tick count after the tick.
    pub tick: u64,
    pub deaths: usize,
    pub food_consumed: usize,
    pub food_spawned: bool,
    pub reproduction: Option<Reproduction>,
}

pub struct Population {
    pub cells: Vec<Cell>,
    pub food: Vec<Food>,
    pub tick_count: u64,
    pub generation_index: u64,
    pub config: AppConfig,
    rng: ChaCha8Rng,
}

impl Population {
    /// Validates `config` and seeds the generator from `world.seed`, or from
    /// entropy when no seed is set.
    pub fn new(config: AppConfig) -> Result<Self> {
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: AppConfig, rng: ChaCha8Rng) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cells: Vec::with_capacity(config.evolution.population_size),
            food: Vec::new(),
            tick_count: 0,
            generation_index: 0,
            config,
            rng,
        })
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self) -> TickReport {
        let claims = self.plan_cells();
        let food_consumed = self.resolve_consumption(&claims);

        let spawned = maybe_spawn_food(&mut self.rng, &self.config.food, &self.config.world);
        let food_spawned = spawned.is_some();
        self.food.extend(spawned);

        let generation = self.generation_index;
        let before = self.cells.len();
        self.cells.retain(|cell| {
            let alive = cell.is_alive();
            if !alive {
                tracing::debug!(id = %cell.id, generation = generation, "Cell died");
            }
            alive
        });
        let deaths = before - self.cells.len();
        self.tick_count += 1;

        let reproduction = if self.cells.is_empty() || self.generation_index == 0 {
            Some(self.reproduce())
        } else {
            None
        };

        TickReport {
            tick: self.tick_count,
            deaths,
            food_consumed,
            food_spawned,
            reproduction,
        }
    }

    /// Replaces the population with `population_size` new cells.
    ///
    /// With no survivors the cohort is created from scratch. Otherwise up to
    /// `parent_sample` distinct survivors are sampled and every child picks
    /// one of them uniformly. Always advances `generation_index` by one.
    pub fn reproduce(&mut self) -> Reproduction {
        let size = self.config.evolution.population_size;
        let config = &self.config;
        let rng = &mut self.rng;

        let (cells, kind) = if self.cells.is_empty() {
            let cells: Vec<Cell> = (0..size)
                .map(|_| create_cell_with_rng(config, rng))
                .collect();
            (cells, ReproductionKind::Seeded)
        } else {
            let parents: Vec<&Cell> = self
                .cells
                .choose_multiple(rng, config.evolution.parent_sample)
                .collect();
            let cells: Vec<Cell> = (0..size)
                .map(|_| {
                    let parent = parents[rng.gen_range(0..parents.len())];
                    create_child_with_rng(parent, config, rng)
                })
                .collect();
            let parents = parents.iter().map(|p| p.id).collect();
            (cells, ReproductionKind::Bred { parents })
        };

        self.cells = cells;
        self.generation_index += 1;

        tracing::info!(
            generation = self.generation_index,
            population = self.cells.len(),
            bred = matches!(kind, ReproductionKind::Bred { .. }),
            "Reproduction"
        );

        Reproduction {
            generation: self.generation_index,
            population: self.cells.len(),
            kind,
        }
    }

    /// Decays and moves every cell, returning each cell's food claim.
    ///
    /// Each cell gets its own generator seeded from the population generator
    /// in cell order, so the outcome does not depend on how planning is
    /// scheduled.
    fn plan_cells(&mut self) -> Vec<Option<usize>> {
        let seeds: Vec<u64> = (0..self.cells.len()).map(|_| self.rng.gen()).collect();
        let food = &self.food;
        let cfg = &self.config.cell;
        let plan = |(cell, seed): (&mut Cell, &u64)| {
            let mut rng = ChaCha8Rng::seed_from_u64(*seed);
            cell.plan_update(food, cfg, &mut rng)
        };

        #[cfg(feature = "parallel")]
        let claims: Vec<Option<usize>> = self
            .cells
            .par_iter_mut()
            .zip(seeds.par_iter())
            .map(plan)
            .collect();
        #[cfg(not(feature = "parallel"))]
        let claims: Vec<Option<usize>> = self
            .cells
            .iter_mut()
            .zip(seeds.iter())
            .map(plan)
            .collect();
        claims
    }

    /// Applies food claims; the earliest claimant of each item eats it.
    fn resolve_consumption(&mut self, claims: &[Option<usize>]) -> usize {
        let mut eaten = vec![false; self.food.len()];
        let mut consumed = 0;
        for (cell, claim) in self.cells.iter_mut().zip(claims) {
            if let Some(idx) = *claim {
                if !eaten[idx] {
                    eaten[idx] = true;
                    cell.consume(&self.food[idx]);
                    consumed += 1;
                }
            }
        }

        if consumed > 0 {
            let mut flags = eaten.into_iter();
            self.food.retain(|_| !flags.next().unwrap_or(false));
        }
        consumed
    }

    #[must_use]
    pub fn stats(&self) -> PopulationStats {
        PopulationStats::collect(
            &self.cells,
            &self.food,
            self.generation_index,
            self.tick_count,
        )
    }

    #[must_use]
    pub fn snapshot(&self) -> PopulationSnapshot {
        PopulationSnapshot {
            tick: self.tick_count,
            generation: self.generation_index,
            cells: self.cells.iter().map(CellSnapshot::from).collect(),
            food: self.food.clone(),
            stats: self.stats(),
            width: self.config.world.width,
            height: self.config.world.height,
        }
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.len()
    }
}
