pub mod cell;
pub mod food;
pub mod geometry;
pub mod shape;
