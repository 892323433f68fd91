//! # Soup Core
//!
//! The simulation engine for the primordial soup: cells that wander, divide
//! and die according to a drifting five-parameter environment.
//!
//! This crate contains the deterministic simulation logic:
//! - Configuration loading and validation
//! - The bounded environment and its drift
//! - Founder/offspring creation with inherited, mutated tolerances
//! - Movement, survival, reproduction and stats systems
//! - An owned [`Simulation`] context and a virtual-clock [`Scheduler`]
//! - Event history, snapshots and structured logging
//!
//! ## Example
//!
//! ```
//! use soup_core::config::AppConfig;
//! use soup_core::{Scheduler, Simulation};
//!
//! let config = AppConfig::default();
//! let mut sim = Simulation::with_seed(config.clone(), 42).unwrap();
//! let mut scheduler = Scheduler::from_config(&config.simulation);
//!
//! // Ten seconds of virtual time.
//! scheduler.advance(10_000, &mut sim);
//! assert!(sim.population() <= config.simulation.max_cells);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// The bounded five-scalar environment
pub mod environment;
/// Configuration error types
pub mod error;
/// JSONL event history
pub mod history;
/// Founder and offspring creation
pub mod lifecycle;
/// Run counters and logging setup
pub mod metrics;
/// Virtual-clock timer source
pub mod scheduler;
/// Owned simulation context
pub mod simulation;
/// Serialisable world snapshots
pub mod snapshot;
/// Movement, survival, reproduction, environment and stats systems
pub mod systems;

pub use environment::Environment;
pub use metrics::{init_logging, Metrics};
pub use scheduler::{Callback, Scheduler, TimerTarget};
pub use simulation::Simulation;
pub use soup_data::{Cell, EnvParam, LiveEvent, PopulationStats, Scalars};
