//! Deterministic virtual-clock timer source.
//!
//! Stands in for a UI toolkit's periodic timeouts: three independent
//! intervals, each firing its callback every `period_ms` of virtual time.

use crate::config::SimulationConfig;
use crate::simulation::Simulation;

/// Receiver of the three periodic callbacks.
pub trait TimerTarget {
    fn on_move_tick(&mut self);
    fn on_reproduction_tick(&mut self);
    fn on_environment_tick(&mut self);
}

impl TimerTarget for Simulation {
    fn on_move_tick(&mut self) {
        Simulation::on_move_tick(self);
    }

    fn on_reproduction_tick(&mut self) {
        Simulation::on_reproduction_tick(self);
    }

    fn on_environment_tick(&mut self) {
        Simulation::on_environment_tick(self);
    }
}

/// Callback kinds, declared in same-instant firing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Callback {
    Environment,
    Move,
    Reproduction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub period_ms: u64,
    pub next_due_ms: u64,
}

impl Interval {
    /// First firing one full period after start, like a toolkit timeout.
    #[must_use]
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            next_due_ms: period_ms,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    now_ms: u64,
    environment: Interval,
    movement: Interval,
    reproduction: Interval,
}

impl Scheduler {
    /// Periods must be positive; [`crate::config::AppConfig::validate`] ensures it.
    #[must_use]
    pub fn new(move_ms: u64, reproduction_ms: u64, environment_ms: u64) -> Self {
        Self {
            now_ms: 0,
            environment: Interval::new(environment_ms.max(1)),
            movement: Interval::new(move_ms.max(1)),
            reproduction: Interval::new(reproduction_ms.max(1)),
        }
    }

    #[must_use]
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.move_interval_ms,
            config.reproduction_interval_ms,
            config.environment_interval_ms,
        )
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn interval_mut(&mut self, cb: Callback) -> &mut Interval {
        match cb {
            Callback::Environment => &mut self.environment,
            Callback::Move => &mut self.movement,
            Callback::Reproduction => &mut self.reproduction,
        }
    }

    /// Earliest pending callback; ties broken by [`Callback`] order.
    #[must_use]
    pub fn next_due(&self) -> (u64, Callback) {
        [
            (self.environment.next_due_ms, Callback::Environment),
            (self.movement.next_due_ms, Callback::Move),
            (self.reproduction.next_due_ms, Callback::Reproduction),
        ]
        .into_iter()
        .min()
        .unwrap_or((u64::MAX, Callback::Move))
    }

    /// Advances virtual time by `dt_ms`, firing every callback that falls due
    /// in order. Returns the number of callbacks fired.
    pub fn advance<T: TimerTarget + ?Sized>(&mut self, dt_ms: u64, target: &mut T) -> usize {
        let until = self.now_ms.saturating_add(dt_ms);
        let mut fired = 0;
        loop {
            let (due, cb) = self.next_due();
            if due > until {
                break;
            }
            self.now_ms = due;
            match cb {
                Callback::Environment => target.on_environment_tick(),
                Callback::Move => target.on_move_tick(),
                Callback::Reproduction => target.on_reproduction_tick(),
            }
            let interval = self.interval_mut(cb);
            interval.next_due_ms += interval.period_ms;
            fired += 1;
        }
        self.now_ms = until;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<Callback>);

    impl TimerTarget for Recorder {
        fn on_move_tick(&mut self) {
            self.0.push(Callback::Move);
        }
        fn on_reproduction_tick(&mut self) {
            self.0.push(Callback::Reproduction);
        }
        fn on_environment_tick(&mut self) {
            self.0.push(Callback::Environment);
        }
    }

    fn count(r: &Recorder, cb: Callback) -> usize {
        r.0.iter().filter(|c| **c == cb).count()
    }

    #[test]
    fn test_nothing_fires_before_first_period() {
        let mut sched = Scheduler::new(50, 2000, 1000);
        let mut rec = Recorder::default();
        assert_eq!(sched.advance(49, &mut rec), 0);
        assert_eq!(sched.now_ms(), 49);
        assert_eq!(sched.advance(1, &mut rec), 1);
        assert_eq!(rec.0, vec![Callback::Move]);
    }

    #[test]
    fn test_counts_over_ten_seconds() {
        let mut sched = Scheduler::new(50, 2000, 1000);
        let mut rec = Recorder::default();
        sched.advance(10_000, &mut rec);
        assert_eq!(count(&rec, Callback::Move), 200);
        assert_eq!(count(&rec, Callback::Environment), 10);
        assert_eq!(count(&rec, Callback::Reproduction), 5);
    }

    #[test]
    fn test_tie_order_environment_move_reproduction() {
        let mut sched = Scheduler::new(100, 100, 100);
        let mut rec = Recorder::default();
        sched.advance(100, &mut rec);
        assert_eq!(
            rec.0,
            vec![Callback::Environment, Callback::Move, Callback::Reproduction]
        );
    }

    proptest::proptest! {
        #[test]
        fn test_split_advances_match_single_advance(
            periods in (1u64..200, 1u64..200, 1u64..200),
            slices in proptest::collection::vec(0u64..150, 1..40)
        ) {
            let (m, r, e) = periods;
            let mut a = Scheduler::new(m, r, e);
            let mut b = a.clone();
            let mut ra = Recorder::default();
            let mut rb = Recorder::default();
            let total: u64 = slices.iter().sum();
            a.advance(total, &mut ra);
            for dt in slices {
                b.advance(dt, &mut rb);
            }
            proptest::prop_assert_eq!(a.now_ms(), b.now_ms());
            proptest::prop_assert_eq!(ra.0, rb.0);
        }
    }
}
