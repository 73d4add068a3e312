//! Core data structures for the Flocksim simulation.

pub mod agent;
pub mod environment;
