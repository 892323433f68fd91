use rand::Rng;
use soup_data::{Cell, Position};
use std::f64::consts::TAU;

/// Moves `position` by `step` in a uniformly random direction, then clamps
/// it to `[0, window_size]`.
pub fn random_step<R: Rng>(position: Position, step: f64, window_size: f64, rng: &mut R) -> Position {
    let angle = rng.gen_range(0.0..TAU);
    Position {
        x: position.x + step * angle.cos(),
        y: position.y + step * angle.sin(),
    }
    .clamped(window_size)
}

/// One random-walk step for every cell.
pub fn move_cells<R: Rng>(cells: &mut [Cell], step: f64, window_size: f64, rng: &mut R) {
    for cell in cells.iter_mut() {
        cell.position = random_step(cell.position, step, window_size, rng);
    }
}
