use crate::environment::Environment;
use soup_data::{Cell, PopulationStats, Scalars};

/// Recomputes the population-derived fields. Birth and death counters are
/// cumulative and left to the caller.
pub fn update_stats(stats: &mut PopulationStats, cells: &[Cell], env: &Environment) {
    stats.population = cells.len();
    stats.max_generation = cells.iter().map(|c| c.generation).max().unwrap_or(0);

    if cells.is_empty() {
        stats.mean_tolerances = None;
        stats.mean_deviation = None;
        return;
    }

    let n = cells.len() as f64;
    let mut tol_sum = Scalars::default();
    let mut dev_sum = Scalars::default();
    for cell in cells {
        let dev = env.values().deviation(&cell.tolerances);
        tol_sum = tol_sum.map(|p, v| v + cell.tolerances.get(p));
        dev_sum = dev_sum.map(|p, v| v + dev.get(p));
    }
    stats.mean_tolerances = Some(tol_sum.map(|_, v| v / n));
    stats.mean_deviation = Some(dev_sum.map(|_, v| v / n));
}
