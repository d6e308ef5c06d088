pub mod status;
pub mod world;

pub use status::StatusWidget;
pub use world::WorldWidget;
