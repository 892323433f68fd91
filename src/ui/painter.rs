use super::surface::{Rgb, Surface};
use soup_core::config::Ruleset;
use soup_core::Simulation;
use soup_data::{Cell, EnvParam};

pub const OUTER_RADIUS: f64 = 6.0;
pub const INNER_RADIUS: f64 = 3.0;
const TEXT_X: f64 = 10.0;

/// Nucleus colour: black in the primordial rules, otherwise a blue→red ramp
/// over the cell's temperature tolerance.
#[must_use]
pub fn nucleus_color(cell: &Cell, ruleset: Ruleset) -> Rgb {
    if !ruleset.has_environment() {
        return Rgb::BLACK;
    }
    let (lo, hi) = EnvParam::Temperature.range();
    let t = ((cell.tolerances.temperature - lo) / (hi - lo)).clamp(0.0, 1.0);
    Rgb((t * 255.0).round() as u8, 0, ((1.0 - t) * 255.0).round() as u8)
}

/// Draws one frame. Reads the simulation, never mutates it.
pub fn paint<S: Surface + ?Sized>(sim: &Simulation, surface: &mut S) {
    surface.clear(Rgb::BROTH);

    let ruleset = sim.config.simulation.ruleset;
    for cell in &sim.cells {
        let (x, y) = (cell.position.x, cell.position.y);
        surface.stroke_circle(x, y, OUTER_RADIUS, Rgb::BLACK);
        surface.fill_disc(x, y, OUTER_RADIUS, Rgb::BROTH);
        surface.fill_disc(x, y, INNER_RADIUS, nucleus_color(cell, ruleset));
    }

    let mut lines = Vec::with_capacity(6);
    if ruleset.has_environment() {
        lines.extend(sim.env.readouts());
    }
    lines.push(format!("Cells: {}", sim.population()));

    let step = surface.line_height();
    for (i, line) in lines.iter().enumerate() {
        surface.text(TEXT_X, step * (i + 1) as f64, line, Rgb::BLACK);
    }
}
