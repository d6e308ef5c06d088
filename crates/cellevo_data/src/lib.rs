//! Core data structures for the cellevo simulation.
//!
//! These types carry no behavior beyond construction and trivial accessors;
//! the simulation rules live in `cellevo_core`.

pub mod data;

pub use data::cell::{Cell, Rgb};
pub use data::food::Food;
pub use data::geometry::Point;
pub use data::shape::Shape;
