pub mod shutdown;
pub mod state;

pub use shutdown::ShutdownManager;
pub use state::App;

use anyhow::Result;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

impl App {
    /// Runs `duration_ms` of virtual time as fast as possible.
    ///
    /// Stops early on extinction or when shutdown is requested.
    pub fn run_headless(&mut self, duration_ms: u64) -> Result<()> {
        let slice = self.sim.config.simulation.move_interval_ms;
        while self.scheduler.now_ms() < duration_ms {
            let dt = slice.min(duration_ms - self.scheduler.now_ms());
            self.scheduler.advance(dt, &mut self.sim);
            self.flush_events()?;

            if self.sim.population() == 0 {
                tracing::warn!(elapsed_ms = self.scheduler.now_ms(), "Soup is empty, stopping");
                break;
            }
            if self.shutdown.is_shutdown_requested() {
                break;
            }
        }
        self.history.flush()?;
        self.log_summary();
        Ok(())
    }

    /// Runs against the wall clock with one tokio interval per callback.
    ///
    /// All callbacks run on this task, so they never overlap. Stops after
    /// `duration` (if any), on Ctrl-C, or on extinction.
    pub async fn run_live(&mut self, duration: Option<Duration>) -> Result<()> {
        let cfg = self.sim.config.simulation.clone();
        let start = Instant::now();
        let period = |ms: u64| Duration::from_millis(ms);

        let mut move_timer = interval_at(
            start + period(cfg.move_interval_ms),
            period(cfg.move_interval_ms),
        );
        let mut repro_timer = interval_at(
            start + period(cfg.reproduction_interval_ms),
            period(cfg.reproduction_interval_ms),
        );
        let mut env_timer = interval_at(
            start + period(cfg.environment_interval_ms),
            period(cfg.environment_interval_ms),
        );
        for timer in [&mut move_timer, &mut repro_timer, &mut env_timer] {
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let deadline = async {
            match duration {
                Some(d) => tokio::time::sleep(d).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                biased;
                _ = &mut deadline => break,
                _ = env_timer.tick() => {
                    self.sim.on_environment_tick();
                    tracing::info!(
                        population = self.sim.population(),
                        readouts = ?self.sim.env.readouts(),
                        "Environment update"
                    );
                }
                _ = move_timer.tick() => self.sim.on_move_tick(),
                _ = repro_timer.tick() => self.sim.on_reproduction_tick(),
            }
            self.flush_events()?;

            if self.sim.population() == 0 {
                tracing::warn!("Soup is empty, stopping");
                break;
            }
            if self.shutdown.is_shutdown_requested() {
                break;
            }
        }
        self.history.flush()?;
        self.log_summary();
        Ok(())
    }
}
