//! Run counters and structured logging setup.

use soup_data::PopulationStats;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// How many move ticks pass between periodic summary lines.
pub const SUMMARY_EVERY: u64 = 1000;

/// Callback counters for one simulation run. Birth and death totals live in
/// [`PopulationStats`].
#[derive(Debug, Clone)]
pub struct Metrics {
    move_ticks: u64,
    reproduction_ticks: u64,
    environment_ticks: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            move_ticks: 0,
            reproduction_ticks: 0,
            environment_ticks: 0,
            start_time: Instant::now(),
        }
    }

    /// Records a completed move tick and emits a summary every
    /// [`SUMMARY_EVERY`] ticks.
    pub fn record_move(&mut self, stats: &PopulationStats) {
        self.move_ticks += 1;
        if self.move_ticks % SUMMARY_EVERY == 0 {
            tracing::info!(
                tick = self.move_ticks,
                population = stats.population,
                births = stats.births,
                deaths = stats.deaths,
                elapsed_ms = self.elapsed().as_millis() as u64,
                "Simulation tick"
            );
        }
    }

    pub fn record_reproduction(&mut self) {
        self.reproduction_ticks += 1;
    }

    pub fn record_environment(&mut self) {
        self.environment_ticks += 1;
    }

    #[must_use]
    pub fn move_ticks(&self) -> u64 {
        self.move_ticks
    }

    #[must_use]
    pub fn reproduction_ticks(&self) -> u64 {
        self.reproduction_ticks
    }

    #[must_use]
    pub fn environment_ticks(&self) -> u64 {
        self.environment_ticks
    }

    /// Wall-clock time since the counters were created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging. `RUST_LOG` overrides `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
