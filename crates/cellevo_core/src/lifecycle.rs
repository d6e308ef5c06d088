use crate::config::{AppConfig, MAX_SHAPE_SIDES};
use cellevo_data::{Cell, Point, Rgb};
use rand::Rng;
use uuid::Uuid;

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Uuid::from_u128(rng.gen::<u128>())
}

fn random_shape_sides<R: Rng + ?Sized>(config: &AppConfig, rng: &mut R) -> u8 {
    let sides = config
        .cell
        .shape_sides
        .sample(rng)
        .clamp(0, i32::from(MAX_SHAPE_SIDES));
    sides as u8
}

fn spawn_point(config: &AppConfig) -> Point {
    let (x, y) = config.world.center();
    Point::new(x, y)
}

/// Brand-new cell at the canvas center with starting attributes and random visuals.
pub fn create_cell_with_rng<R: Rng + ?Sized>(config: &AppConfig, rng: &mut R) -> Cell {
    let id = random_id(rng);
    let color = Rgb::new(rng.gen(), rng.gen(), rng.gen());
    let shape_sides = random_shape_sides(config, rng);
    Cell {
        id,
        parent_id: None,
        health: config.cell.start_health,
        energy: config.cell.start_energy,
        size: config.cell.start_size,
        position: spawn_point(config),
        color,
        shape_sides,
    }
}

/// Child of `parent`.
///
/// Health, energy and size are inherited exactly and the color drifts; shape
/// and position are generated as for a fresh cell.
pub fn create_child_with_rng<R: Rng + ?Sized>(
    parent: &Cell,
    config: &AppConfig,
    rng: &mut R,
) -> Cell {
    let mut child = create_cell_with_rng(config, rng);
    child.parent_id = Some(parent.id);
    child.health = parent.health;
    child.energy = parent.energy;
    child.size = parent.size;
    child.color = mutate_color(parent.color, config.evolution.color_mutation, rng);
    child
}

/// Perturbs every channel independently by a uniform integer in `[-amount, amount]`.
pub fn mutate_color<R: Rng + ?Sized>(color: Rgb, amount: i32, rng: &mut R) -> Rgb {
    let channels = color
        .channels()
        .map(|c| mutate_channel(c, rng.gen_range(-amount..=amount)));
    Rgb::from_channels(channels)
}

/// `(channel + delta) mod 256`. Wraps instead of clamping.
#[must_use]
pub fn mutate_channel(channel: u8, delta: i32) -> u8 {
    (i32::from(channel) + delta).rem_euclid(256) as u8
}
