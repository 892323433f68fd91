use crate::config::Ruleset;
use serde::{Deserialize, Serialize};
use soup_data::{Cell, PopulationStats, Scalars};
use std::path::Path;

/// Point-in-time copy of a soup, detached from the live simulation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub ruleset: Ruleset,
    pub window_size: f64,
    pub environment: Scalars,
    pub cells: Vec<Cell>,
    pub stats: PopulationStats,
}

impl WorldSnapshot {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
