use crate::cell::CellLogic;
use cellevo_data::{Cell, Food, Point, Rgb, Shape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CellSnapshot {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub position: Point,
    pub size: i32,
    pub color: Rgb,
    pub shape_sides: u8,
    pub shape: Shape,
    pub health: i32,
    pub energy: i32,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            id: cell.id,
            parent_id: cell.parent_id,
            position: cell.position,
            size: cell.size,
            color: cell.color,
            shape_sides: cell.shape_sides,
            shape: cell.shape(),
            health: cell.health,
            energy: cell.energy,
        }
    }
}

/// Aggregate counters shown next to the canvas.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PopulationStats {
    pub population: usize,
    pub food: usize,
    pub mean_health: f64,
    pub mean_energy: f64,
    pub mean_size: f64,
    pub generation: u64,
    pub tick: u64,
}

impl PopulationStats {
    #[must_use]
    pub fn collect(cells: &[Cell], food: &[Food], generation: u64, tick: u64) -> Self {
        let mean = |f: fn(&Cell) -> i32| {
            if cells.is_empty() {
                0.0
            } else {
                cells.iter().map(|c| f64::from(f(c))).sum::<f64>() / cells.len() as f64
            }
        };
        Self {
            population: cells.len(),
            food: food.len(),
            mean_health: mean(|c| c.health),
            mean_energy: mean(|c| c.energy),
            mean_size: mean(|c| c.size),
            generation,
            tick,
        }
    }
}

/// Read-only view handed to display adapters once per tick.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PopulationSnapshot {
    pub tick: u64,
    pub generation: u64,
    pub cells: Vec<CellSnapshot>,
    pub food: Vec<Food>,
    pub stats: PopulationStats,
    pub width: u32,
    pub height: u32,
}

impl PopulationSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
