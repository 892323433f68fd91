use anyhow::Result;
use std::path::Path;

use super::shutdown::ShutdownManager;
use crate::model::config::AppConfig;
use crate::model::history::HistoryLogger;
use crate::model::{Scheduler, Simulation};
use crate::ui::{paint, TerminalSurface};

pub struct App {
    pub sim: Simulation,
    pub scheduler: Scheduler,
    pub history: HistoryLogger,
    pub shutdown: ShutdownManager,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let scheduler = Scheduler::from_config(&config.simulation);
        let sim = Simulation::new(config)?;
        tracing::info!(
            seed = sim.seed(),
            ruleset = ?sim.config.simulation.ruleset,
            survival_rule = ?sim.config.simulation.survival_rule,
            fingerprint = %sim.config.fingerprint(),
            "Soup initialised"
        );
        Ok(Self {
            sim,
            scheduler,
            history: HistoryLogger::new_dummy(),
            shutdown: ShutdownManager::new(),
        })
    }

    /// Starts writing events to `<dir>/live.jsonl`.
    pub fn with_history(mut self, dir: impl AsRef<Path>) -> Result<Self> {
        self.history = HistoryLogger::new_at(dir)?;
        Ok(self)
    }

    /// Moves pending simulation events into the history log.
    pub fn flush_events(&mut self) -> Result<usize> {
        let events = self.sim.drain_events();
        self.history.log_all(events.iter())?;
        Ok(events.len())
    }

    /// Current frame rendered as plain text.
    pub fn render_text(&self, cols: u16, rows: u16) -> String {
        let mut surface = TerminalSurface::new(cols, rows, self.sim.config.simulation.window_size);
        paint(&self.sim, &mut surface);
        surface.to_text()
    }

    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        self.sim.snapshot().save(path)
    }

    pub fn log_summary(&self) {
        let stats = &self.sim.stats;
        tracing::info!(
            elapsed_ms = self.scheduler.now_ms(),
            population = stats.population,
            births = stats.births,
            deaths = stats.deaths,
            max_generation = stats.max_generation,
            environment = ?self.sim.env.readouts(),
            "Run summary"
        );
    }
}
