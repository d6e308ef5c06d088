use super::geometry::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// RGB color of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[must_use]
    pub const fn from_channels(channels: [u8; 3]) -> Self {
        Self {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        }
    }
}

/// The evolving entity.
///
/// `health` and `energy` are signed: decay may drive them below zero, which
/// simply means the cell is dead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub health: i32,
    pub energy: i32,
    pub size: i32,
    pub position: Point,
    pub color: Rgb,
    /// Polygon side count; 4 renders as a square, 2 or fewer as a circle.
    pub shape_sides: u8,
}
