use super::geometry::Point;
use serde::{Deserialize, Serialize};

/// A consumable resource. Eating it adds `size` to a cell's health, energy and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Canvas position.
    pub position: Point,
    /// Nutritional value and visual diameter.
    pub size: i32,
}

impl Food {
    /// Create food at position with the given size.
    #[must_use]
    pub fn new(position: Point, size: i32) -> Self {
        Self { position, size }
    }
}
