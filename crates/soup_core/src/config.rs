//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures that map onto the `config.toml` document. Every
//! key that is not an `Option` or explicitly defaulted must be present:
//! a missing or malformed key is a fatal startup error.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [simulation]
//! window_size = 1000.0
//! step_size = 10.0
//! move_interval_ms = 50
//! reproduction_interval_ms = 2000
//! environment_interval_ms = 1000
//! max_cells = 500
//! reproduction_probability = 0.3
//! offspring_scatter = 5.0
//!
//! [environment]
//! temperature = 25.0
//! ph = 7.0
//! oxygen = 21.0
//! co2 = 0.5
//! brightness = 50.0
//!
//! # [drift], [survival], [breeding] and [mutation] use the same five keys.
//! ```

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use soup_data::{EnvParam, Scalars};
use std::path::Path;

/// Which generation of the rules drives the soup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    /// Random walk and capped reproduction; nothing dies, no environment.
    Primordial,
    /// Environment drifts and kills; offspring copy tolerances exactly.
    Environmental,
    /// Mutated inheritance plus a breeding band on top of survival.
    #[default]
    Adaptive,
}

impl Ruleset {
    #[must_use]
    pub fn has_environment(self) -> bool {
        !matches!(self, Ruleset::Primordial)
    }

    #[must_use]
    pub fn mutates(self) -> bool {
        matches!(self, Ruleset::Adaptive)
    }

    #[must_use]
    pub fn gates_breeding(self) -> bool {
        matches!(self, Ruleset::Adaptive)
    }
}

/// How the five per-parameter threshold checks combine into a death verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SurvivalRule {
    /// A cell dies if any parameter exceeds its threshold.
    #[default]
    Uniform,
    /// Historical rule: temperature, pH and O2 are OR'd, but CO2 only kills
    /// together with brightness.
    Literal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Side length of the square soup.
    pub window_size: f64,
    /// Distance a cell travels per move tick.
    pub step_size: f64,
    pub move_interval_ms: u64,
    pub reproduction_interval_ms: u64,
    pub environment_interval_ms: u64,
    /// Population cap.
    pub max_cells: usize,
    /// Chance per reproduction tick that an eligible cell divides.
    pub reproduction_probability: f64,
    /// Offspring land within `±offspring_scatter` of the parent on each axis.
    pub offspring_scatter: f64,
    #[serde(default)]
    pub ruleset: Ruleset,
    #[serde(default)]
    pub survival_rule: SurvivalRule,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            window_size: 1000.0,
            step_size: 10.0,
            move_interval_ms: 50,
            reproduction_interval_ms: 2000,
            environment_interval_ms: 1000,
            max_cells: 500,
            reproduction_probability: 0.3,
            offspring_scatter: 5.0,
            ruleset: Ruleset::Adaptive,
            survival_rule: SurvivalRule::Uniform,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    /// Initial environment values.
    pub environment: Scalars,
    /// Maximum per-update perturbation of each environment scalar.
    pub drift: Scalars,
    /// Deviation beyond which a cell dies.
    pub survival: Scalars,
    /// Deviation within which a cell may reproduce.
    pub breeding: Scalars,
    /// Maximum per-parameter tolerance change between parent and offspring.
    pub mutation: Scalars,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            environment: Scalars::new(25.0, 7.0, 21.0, 0.5, 50.0),
            drift: Scalars::new(0.5, 0.05, 0.2, 0.1, 1.0),
            survival: Scalars::new(15.0, 2.0, 10.0, 5.0, 40.0),
            breeding: Scalars::new(5.0, 0.5, 3.0, 1.5, 15.0),
            mutation: Scalars::new(0.5, 0.05, 0.3, 0.1, 1.0),
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` describing the
    /// first failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        let sim = &self.simulation;
        anyhow::ensure!(
            sim.window_size.is_finite() && sim.window_size > 0.0,
            "Window size must be positive"
        );
        anyhow::ensure!(
            sim.step_size.is_finite() && sim.step_size >= 0.0,
            "Step size must be non-negative"
        );
        anyhow::ensure!(sim.move_interval_ms > 0, "Move interval must be positive");
        anyhow::ensure!(
            sim.reproduction_interval_ms > 0,
            "Reproduction interval must be positive"
        );
        anyhow::ensure!(
            sim.environment_interval_ms > 0,
            "Environment interval must be positive"
        );
        anyhow::ensure!(sim.max_cells > 0, "Population cap must be positive");
        anyhow::ensure!(
            (0.0..=1.0).contains(&sim.reproduction_probability),
            "Reproduction probability must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            sim.step_size <= sim.window_size,
            "Step size must not exceed the window size"
        );
        anyhow::ensure!(
            sim.offspring_scatter.is_finite() && sim.offspring_scatter >= 0.0,
            "Offspring scatter must be non-negative"
        );
        anyhow::ensure!(
            sim.offspring_scatter <= sim.window_size,
            "Offspring scatter must not exceed the window size"
        );

        for param in EnvParam::ALL {
            let (lo, hi) = param.range();
            let initial = self.environment.get(param);
            anyhow::ensure!(
                (lo..=hi).contains(&initial),
                "Initial {} {} outside [{}, {}]",
                param,
                initial,
                lo,
                hi
            );
        }
        for (name, table) in [
            ("drift", &self.drift),
            ("survival", &self.survival),
            ("breeding", &self.breeding),
            ("mutation", &self.mutation),
        ] {
            for (param, value) in table.iter() {
                anyhow::ensure!(
                    value.is_finite() && value >= 0.0,
                    "{}.{} must be a non-negative number",
                    name,
                    param
                );
            }
        }
        // Random perturbations are drawn from [-bound, bound]; keep them
        // within the width of the parameter's range.
        for (name, table) in [("drift", &self.drift), ("mutation", &self.mutation)] {
            for (param, value) in table.iter() {
                let (lo, hi) = param.range();
                anyhow::ensure!(
                    value <= hi - lo,
                    "{}.{} must not exceed {}",
                    name,
                    param,
                    hi - lo
                );
            }
        }

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config
            .validate()
            .map_err(|e| ConfigError::validation(e.to_string()))?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::from(e).with_context(format!("reading {}", path.display())))?;
        Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("loading {}", path.display())))
    }

    /// Serialises the configuration back to TOML, e.g. to write a template.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Stable hash of the rule parameters, logged so runs can be compared.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.simulation).as_bytes());
        hasher.update(format!("{:?}", self.environment).as_bytes());
        hasher.update(format!("{:?}", self.drift).as_bytes());
        hasher.update(format!("{:?}", self.survival).as_bytes());
        hasher.update(format!("{:?}", self.breeding).as_bytes());
        hasher.update(format!("{:?}", self.mutation).as_bytes());
        hex::encode(hasher.finalize())
    }
}
