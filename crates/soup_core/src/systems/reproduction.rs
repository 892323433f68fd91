use crate::config::AppConfig;
use crate::environment::Environment;
use crate::lifecycle::{self, OffspringParams};
use rand::seq::SliceRandom;
use rand::Rng;
use soup_data::{Cell, Scalars};

/// A cell may breed only while every deviation is within the band.
#[must_use]
pub fn is_eligible(cell: &Cell, env: &Environment, band: &Scalars) -> bool {
    let deviation = env.values().deviation(&cell.tolerances);
    deviation.all(|p, d| d <= band.get(p))
}

pub struct ReproductionContext<'a, R: Rng> {
    pub config: &'a AppConfig,
    pub env: &'a Environment,
    pub tick: u64,
    pub rng: &'a mut R,
}

#[derive(Debug, Default)]
pub struct ReproductionOutcome {
    /// Newborns, already appended to the population.
    pub births: Vec<Cell>,
    /// Successful rolls dropped because the cap was reached.
    pub discarded: usize,
}

/// Reproduction step.
///
/// Nothing happens once the population is at the cap. Otherwise every
/// eligible cell rolls once. When there are more winners than room, a random
/// subset of them divides, so the cap is never exceeded and no position in
/// the population is favoured.
pub fn reproduce<R: Rng>(cells: &mut Vec<Cell>, ctx: ReproductionContext<'_, R>) -> ReproductionOutcome {
    let sim = &ctx.config.simulation;
    let room = sim.max_cells.saturating_sub(cells.len());
    if room == 0 {
        return ReproductionOutcome::default();
    }

    let gated = sim.ruleset.gates_breeding();
    let mut parents = Vec::new();
    for (idx, cell) in cells.iter().enumerate() {
        if gated && !is_eligible(cell, ctx.env, &ctx.config.breeding) {
            continue;
        }
        if ctx.rng.gen_bool(sim.reproduction_probability) {
            parents.push(idx);
        }
    }

    let discarded = parents.len().saturating_sub(room);
    if discarded > 0 {
        parents.shuffle(&mut *ctx.rng);
        parents.truncate(room);
        parents.sort_unstable();
    }

    let params = OffspringParams {
        window_size: sim.window_size,
        scatter: sim.offspring_scatter,
        mutation: sim.ruleset.mutates().then_some(&ctx.config.mutation),
        tick: ctx.tick,
    };
    let mut births = Vec::with_capacity(parents.len());
    for idx in parents {
        let child = lifecycle::create_offspring(&cells[idx], &params, ctx.rng);
        cells[idx].offspring_count += 1;
        births.push(child);
    }
    cells.extend(births.iter().cloned());

    ReproductionOutcome { births, discarded }
}
