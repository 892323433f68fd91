//! The periodic procedures that mutate a soup.
//!
//! Each system is a plain function over borrowed state so that the owning
//! [`Simulation`](crate::simulation::Simulation) decides when they run.

pub mod environment;
pub mod movement;
pub mod reproduction;
pub mod stats;
pub mod survival;
