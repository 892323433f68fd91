use super::environment::Scalars;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
/// Aggregated population statistics, recomputed after every callback.
pub struct PopulationStats {
    pub population: usize,
    pub births: u64,
    pub deaths: u64,
    /// Highest generation among living cells.
    pub max_generation: u32,
    /// Mean tolerance across living cells, `None` when the soup is empty.
    pub mean_tolerances: Option<Scalars>,
    /// Mean per-parameter deviation between tolerance and environment.
    pub mean_deviation: Option<Scalars>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
/// Tagged union of everything worth recording during a run.
///
/// Serialised with `#[serde(tag = "event")]` for JSONL output.
pub enum LiveEvent {
    Birth {
        id: Uuid,
        parent_id: Option<Uuid>,
        gen: u32,
        tick: u64,
        timestamp: String,
        x: f64,
        y: f64,
    },
    Death {
        id: Uuid,
        age: u64,
        offspring: u32,
        tick: u64,
        timestamp: String,
        /// Parameters whose threshold was exceeded.
        cause: String,
        x: f64,
        y: f64,
    },
    /// Reproduction was cut short because the population hit the cap.
    CapReached {
        population: usize,
        discarded: usize,
        tick: u64,
        timestamp: String,
    },
    /// Population dropped to zero.
    Extinction { tick: u64, timestamp: String },
    Snapshot {
        tick: u64,
        environment: Scalars,
        stats: PopulationStats,
        timestamp: String,
    },
}

impl LiveEvent {
    #[must_use]
    pub fn tick(&self) -> u64 {
        match self {
            LiveEvent::Birth { tick, .. }
            | LiveEvent::Death { tick, .. }
            | LiveEvent::CapReached { tick, .. }
            | LiveEvent::Extinction { tick, .. }
            | LiveEvent::Snapshot { tick, .. } => *tick,
        }
    }
}
