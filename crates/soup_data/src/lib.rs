//! Plain data types shared by the soup simulation crates.
//!
//! Nothing in here knows about randomness or scheduling; the types are
//! serialisable so snapshots and event logs can be written as JSON.

pub mod data;

pub use data::cell::{Cell, Identity, Position};
pub use data::environment::{EnvParam, Scalars};
pub use data::events::{LiveEvent, PopulationStats};
