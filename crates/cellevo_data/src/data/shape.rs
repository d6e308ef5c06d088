use super::geometry::Point;
use serde::{Deserialize, Serialize};

/// How a cell is drawn.
///
/// The variant set is closed: adapters match on it instead of inspecting
/// `shape_sides` themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Circle centered on the cell position.
    Circle { center: Point, radius: f64 },
    /// Axis-aligned square centered on the cell position.
    Square { center: Point, side: f64 },
    /// Regular polygon, vertices in drawing order.
    Polygon { vertices: Vec<Point> },
}
