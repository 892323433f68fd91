//! Core data structures for the soup simulation.

pub mod cell;
pub mod environment;
pub mod events;
