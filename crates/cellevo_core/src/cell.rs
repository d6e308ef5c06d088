//! Per-cell rules: decay, food seeking, consumption and shape selection.

use crate::config::CellConfig;
use crate::geometry::{direction_step, distance, nearest};
use cellevo_data::{Cell, Food, Point, Shape};
use rand::Rng;
use std::f64::consts::TAU;

pub trait CellLogic {
    /// `health > 0 && energy > 0`.
    fn is_alive(&self) -> bool;

    /// Overlap test: `distance < (size + food.size) / 2`.
    fn is_touching(&self, food: &Food) -> bool;

    /// Random health/energy loss and size shrink, size floored at `size_floor`.
    fn decay<R: Rng + ?Sized>(&mut self, config: &CellConfig, rng: &mut R);

    /// Decays the cell and steps it toward the nearest food.
    ///
    /// The pool is left untouched; the returned index is the food the cell
    /// now touches and wants to eat.
    fn plan_update<R: Rng + ?Sized>(
        &mut self,
        food: &[Food],
        config: &CellConfig,
        rng: &mut R,
    ) -> Option<usize>;

    /// Adds the food's size to health, energy and size.
    fn consume(&mut self, food: &Food);

    /// One full tick for a lone cell: plan, then eat and remove the claimed food.
    fn update<R: Rng + ?Sized>(
        &mut self,
        food: &mut Vec<Food>,
        config: &CellConfig,
        rng: &mut R,
    ) -> Option<Food>;

    fn shape(&self) -> Shape;
}

impl CellLogic for Cell {
    fn is_alive(&self) -> bool {
        self.health > 0 && self.energy > 0
    }

    fn is_touching(&self, food: &Food) -> bool {
        distance(self.position, food.position) < f64::from(self.size + food.size) / 2.0
    }

    fn decay<R: Rng + ?Sized>(&mut self, config: &CellConfig, rng: &mut R) {
        self.health -= config.health_decay.sample(rng);
        self.energy -= config.energy_decay.sample(rng);
        self.size = (self.size - config.size_decay.sample(rng)).max(config.size_floor);
    }

    fn plan_update<R: Rng + ?Sized>(
        &mut self,
        food: &[Food],
        config: &CellConfig,
        rng: &mut R,
    ) -> Option<usize> {
        self.decay(config, rng);

        let (idx, dist) = nearest(self.position, food.iter().map(|f| f.position))?;
        let target = &food[idx];
        if dist > 0.0 {
            self.position = direction_step(self.position, target.position, config.max_speed);
        }
        self.is_touching(target).then_some(idx)
    }

    fn consume(&mut self, food: &Food) {
        self.health += food.size;
        self.energy += food.size;
        self.size += food.size;
    }

    fn update<R: Rng + ?Sized>(
        &mut self,
        food: &mut Vec<Food>,
        config: &CellConfig,
        rng: &mut R,
    ) -> Option<Food> {
        let idx = self.plan_update(food, config, rng)?;
        let eaten = food.remove(idx);
        self.consume(&eaten);
        Some(eaten)
    }

    fn shape(&self) -> Shape {
        shape_of(self.position, self.size, self.shape_sides)
    }
}

/// Shape for a cell at `center` with the given size and side count.
#[must_use]
pub fn shape_of(center: Point, size: i32, sides: u8) -> Shape {
    let size = f64::from(size);
    match sides {
        4 => Shape::Square { center, side: size },
        0..=2 => Shape::Circle {
            center,
            radius: size / 2.0,
        },
        n => {
            let radius = size / 2.0;
            let vertices = (0..n)
                .map(|i| {
                    let angle = TAU * f64::from(i) / f64::from(n);
                    Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    )
                })
                .collect();
            Shape::Polygon { vertices }
        }
    }
}
