//! The owned simulation context.
//!
//! A [`Simulation`] holds the population, the environment and the RNG. The
//! three timer callbacks mutate it; everything else only borrows it.

use crate::config::AppConfig;
use crate::environment::Environment;
use crate::lifecycle;
use crate::metrics::Metrics;
use crate::snapshot::WorldSnapshot;
use crate::systems::reproduction::ReproductionContext;
use crate::systems::{environment as environment_system, movement, reproduction, stats, survival};
use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use soup_data::{Cell, LiveEvent, PopulationStats};

fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

pub struct Simulation {
    pub config: AppConfig,
    pub env: Environment,
    pub cells: Vec<Cell>,
    pub stats: PopulationStats,
    /// Number of move ticks so far; used as the birth clock.
    pub tick: u64,
    pub metrics: Metrics,
    seed: u64,
    rng: ChaCha8Rng,
    events: Vec<LiveEvent>,
}

impl Simulation {
    /// Validates `config` and seeds the soup with a single founder.
    ///
    /// Uses `simulation.seed` when set, otherwise a random seed.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let seed = config.simulation.seed.unwrap_or_else(rand::random);
        Self::with_seed(config, seed)
    }

    pub fn with_seed(config: AppConfig, seed: u64) -> anyhow::Result<Self> {
        let mut sim = Self::empty(config, seed)?;
        let founder = lifecycle::create_founder(
            sim.config.simulation.window_size,
            &sim.env,
            0,
            &mut sim.rng,
        );
        sim.spawn(founder);
        Ok(sim)
    }

    /// A soup with no cells. Callers add their own via [`Simulation::spawn`].
    pub fn empty(config: AppConfig, seed: u64) -> anyhow::Result<Self> {
        config.validate()?;
        let env = Environment::new(config.environment);
        tracing::debug!(seed, fingerprint = %config.fingerprint(), "Simulation created");
        Ok(Self {
            config,
            env,
            cells: Vec::new(),
            stats: PopulationStats::default(),
            tick: 0,
            metrics: Metrics::new(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            events: Vec::new(),
        })
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Adds a cell, clamping it into the window. Ignored once the cap is reached.
    pub fn spawn(&mut self, mut cell: Cell) -> bool {
        if self.cells.len() >= self.config.simulation.max_cells {
            return false;
        }
        cell.position = cell.position.clamped(self.config.simulation.window_size);
        self.cells.push(cell);
        stats::update_stats(&mut self.stats, &self.cells, &self.env);
        true
    }

    /// Adds a founder at `(x, y)` adapted to the current environment.
    pub fn spawn_founder_at(&mut self, x: f64, y: f64) -> bool {
        let cell = lifecycle::create_founder_at(x, y, &self.env, self.tick, &mut self.rng);
        self.spawn(cell)
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Move callback: random walk, then the survival filter.
    pub fn on_move_tick(&mut self) {
        self.tick += 1;
        let sim = &self.config.simulation;
        movement::move_cells(&mut self.cells, sim.step_size, sim.window_size, &mut self.rng);

        let mut died = 0;
        if sim.ruleset.has_environment() {
            let had_cells = !self.cells.is_empty();
            let dead = survival::cull(
                &mut self.cells,
                &self.env,
                &self.config.survival,
                sim.survival_rule,
            );
            died = dead.len();
            for (cell, exceeded) in dead {
                tracing::debug!(id = %cell.id(), cause = %exceeded.describe(), "Cell died");
                self.events.push(LiveEvent::Death {
                    id: cell.id(),
                    age: cell.age(self.tick),
                    offspring: cell.offspring_count,
                    tick: self.tick,
                    timestamp: timestamp(),
                    cause: exceeded.describe(),
                    x: cell.position.x,
                    y: cell.position.y,
                });
            }
            if had_cells && self.cells.is_empty() {
                tracing::warn!(tick = self.tick, "Population extinct");
                self.events.push(LiveEvent::Extinction {
                    tick: self.tick,
                    timestamp: timestamp(),
                });
            }
        }

        self.stats.deaths += died as u64;
        stats::update_stats(&mut self.stats, &self.cells, &self.env);
        self.metrics.record_move(&self.stats);
    }

    /// Reproduction callback.
    pub fn on_reproduction_tick(&mut self) {
        let outcome = reproduction::reproduce(
            &mut self.cells,
            ReproductionContext {
                config: &self.config,
                env: &self.env,
                tick: self.tick,
                rng: &mut self.rng,
            },
        );

        for child in &outcome.births {
            tracing::debug!(id = %child.id(), gen = child.generation, "Cell born");
            self.events.push(LiveEvent::Birth {
                id: child.id(),
                parent_id: child.identity.parent_id,
                gen: child.generation,
                tick: self.tick,
                timestamp: timestamp(),
                x: child.position.x,
                y: child.position.y,
            });
        }
        if outcome.discarded > 0 {
            tracing::warn!(
                population = self.cells.len(),
                discarded = outcome.discarded,
                "Population cap reached"
            );
            self.events.push(LiveEvent::CapReached {
                population: self.cells.len(),
                discarded: outcome.discarded,
                tick: self.tick,
                timestamp: timestamp(),
            });
        }

        self.stats.births += outcome.births.len() as u64;
        stats::update_stats(&mut self.stats, &self.cells, &self.env);
        self.metrics.record_reproduction();
    }

    /// Environment callback: drift, then record a snapshot event.
    pub fn on_environment_tick(&mut self) {
        if environment_system::drift(&mut self.env, &self.config, &mut self.rng) {
            stats::update_stats(&mut self.stats, &self.cells, &self.env);
            self.events.push(LiveEvent::Snapshot {
                tick: self.tick,
                environment: *self.env.values(),
                stats: self.stats.clone(),
                timestamp: timestamp(),
            });
        }
        self.metrics.record_environment();
    }

    /// Takes the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<LiveEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            ruleset: self.config.simulation.ruleset,
            window_size: self.config.simulation.window_size,
            environment: *self.env.values(),
            cells: self.cells.clone(),
            stats: self.stats.clone(),
        }
    }
}
